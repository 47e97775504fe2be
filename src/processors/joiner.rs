use crate::models::{FlightTable, JoinedFlight};
use crate::processors::feature_extractor::{departure_delay, ground_time_stress, FeatureSet};
use serde::Serialize;
use tracing::{info, warn};

/// The flight table with every aggregate left-joined on.
#[derive(Debug, Clone, PartialEq)]
pub struct JoinedTable {
    /// Flight table header, in source order
    pub headers: Vec<String>,
    /// Bag type columns, sorted by name
    pub bag_types: Vec<String>,
    pub rows: Vec<JoinedFlight>,
}

/// How many flight rows found a match in each aggregate
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct JoinStats {
    pub flights: usize,
    pub pnr_matched: usize,
    pub bags_matched: usize,
    pub remarks_matched: usize,
    pub remark_keys: usize,
}

impl JoinStats {
    pub fn summary(&self) -> String {
        format!(
            "Flights: {}\nMatched PNR: {}\nMatched bags: {}\nMatched remarks: {} (of {} remark keys)\n",
            self.flights, self.pnr_matched, self.bags_matched, self.remarks_matched, self.remark_keys
        )
    }
}

pub struct Joiner;

impl Joiner {
    pub fn new() -> Self {
        Self
    }

    /// Left join on (flight number, date). Remarks are keyed by
    /// `pnr_creation_date`, which is taken to be the departure date.
    /// Unmatched aggregates contribute zeros.
    pub fn join(&self, flights: &FlightTable, features: &FeatureSet) -> (JoinedTable, JoinStats) {
        let bag_types: Vec<String> = features.bags.bag_types.iter().cloned().collect();
        let mut stats = JoinStats {
            flights: flights.len(),
            remark_keys: features.ssr_counts.len(),
            ..Default::default()
        };

        // One output row per flight, whether or not any aggregate matched
        let rows = flights
            .records
            .iter()
            .map(|flight| {
                let passengers = features.passengers.get(&flight.key);
                let bags = features.bags.per_flight.get(&flight.key);
                let ssr_count = features.ssr_counts.get(&flight.key);

                // Record coverage before zero-filling
                stats.pnr_matched += passengers.is_some() as usize;
                stats.bags_matched += bags.is_some() as usize;
                stats.remarks_matched += ssr_count.is_some() as usize;

                JoinedFlight {
                    flight: flight.clone(),
                    departure_delay: departure_delay(flight),
                    ground_time_stress: ground_time_stress(flight).unwrap_or(0.0),
                    passengers: passengers.copied().unwrap_or_default(),
                    bag_counts: bag_types
                        .iter()
                        .map(|t| bags.map_or(0, |b| b.count(t)))
                        .collect(),
                    transfer_ratio: bags.map_or(0.0, |b| b.transfer_ratio()),
                    ssr_count: ssr_count.copied().unwrap_or(0),
                }
            })
            .collect();

        info!(
            flights = stats.flights,
            pnr_matched = stats.pnr_matched,
            bags_matched = stats.bags_matched,
            remarks_matched = stats.remarks_matched,
            "Features joined onto flights"
        );

        // Remarks are keyed by creation date, so a total miss points at that assumption
        if stats.remark_keys > 0 && stats.remarks_matched == 0 {
            warn!(
                remark_keys = stats.remark_keys,
                "No flight matched any remark; pnr_creation_date may not correspond to the departure date"
            );
        }

        let table = JoinedTable {
            headers: flights.headers.clone(),
            bag_types,
            rows,
        };

        (table, stats)
    }
}

impl Default for Joiner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BagRecord, FlightKey, FlightRecord, PassengerLoad, PnrRecord, RemarkRecord};
    use crate::processors::FeatureExtractor;

    fn flight(number: &str, ground: Option<f64>) -> FlightRecord {
        FlightRecord {
            key: FlightKey::new(number, "2025-08-04"),
            scheduled_departure: None,
            actual_departure: None,
            scheduled_ground_time: ground,
            minimum_turn_time: Some(45.0),
            columns: vec![number.to_string()],
        }
    }

    fn features() -> FeatureSet {
        let extractor = FeatureExtractor::new();
        let key = FlightKey::new("1", "2025-08-04");
        FeatureSet {
            passengers: extractor.aggregate_passengers(&[PnrRecord {
                key: key.clone(),
                passengers: PassengerLoad {
                    total_pax: 120,
                    ..Default::default()
                },
            }]),
            ssr_counts: extractor.aggregate_remarks(&[RemarkRecord { key: key.clone() }]),
            bags: extractor.aggregate_bags(&[
                BagRecord {
                    key: key.clone(),
                    bag_type: "Transfer".to_string(),
                },
                BagRecord {
                    key: FlightKey::new("9", "2025-08-04"),
                    bag_type: "Checked".to_string(),
                },
            ]),
        }
    }

    #[test]
    fn test_left_join_fills_zeros() {
        let flights = FlightTable::new(
            vec!["flight_number".to_string()],
            vec![flight("1", Some(40.0)), flight("2", None)],
        );

        let (table, stats) = Joiner::new().join(&flights, &features());

        assert_eq!(table.bag_types, vec!["Checked", "Transfer"]);
        assert_eq!(table.rows.len(), 2);

        let matched = &table.rows[0];
        assert_eq!(matched.passengers.total_pax, 120);
        assert_eq!(matched.ssr_count, 1);
        assert_eq!(matched.bag_counts, vec![0, 1]);
        assert_eq!(matched.transfer_ratio, 1.0);
        assert_eq!(matched.ground_time_stress, -5.0);

        let unmatched = &table.rows[1];
        assert_eq!(unmatched.passengers, PassengerLoad::default());
        assert_eq!(unmatched.ssr_count, 0);
        assert_eq!(unmatched.bag_counts, vec![0, 0]);
        assert_eq!(unmatched.transfer_ratio, 0.0);
        assert_eq!(unmatched.ground_time_stress, 0.0);
        assert_eq!(unmatched.departure_delay, 0.0);

        assert_eq!(
            stats,
            JoinStats {
                flights: 2,
                pnr_matched: 1,
                bags_matched: 1,
                remarks_matched: 1,
                remark_keys: 1,
            }
        );
    }

    #[test]
    fn test_join_preserves_flight_order() {
        let flights = FlightTable::new(
            vec!["flight_number".to_string()],
            vec![flight("3", None), flight("1", None), flight("2", None)],
        );

        let (table, _) = Joiner::new().join(&flights, &FeatureSet::default());
        let order: Vec<_> = table
            .rows
            .iter()
            .map(|r| r.flight.key.flight_number.as_str())
            .collect();

        assert_eq!(order, vec!["3", "1", "2"]);
        assert!(table.bag_types.is_empty());
    }
}
