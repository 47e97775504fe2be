use crate::models::{BagRecord, FlightKey, FlightRecord, PassengerLoad, PnrRecord, RemarkRecord};
use crate::readers::SourceTables;
use crate::utils::constants::{BAG_TYPE_CHECKED, BAG_TYPE_TRANSFER, TRANSFER_RATIO_SMOOTHING};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use tracing::info;

/// Departure delay in minutes. Missing timestamps and early departures count as zero.
pub fn departure_delay(flight: &FlightRecord) -> f64 {
    flight.raw_delay_minutes().unwrap_or(0.0).max(0.0)
}

/// Scheduled ground time minus minimum turn time, unclamped.
///
/// Negative values mean the turn is scheduled tighter than the minimum.
pub fn ground_time_stress(flight: &FlightRecord) -> Option<f64> {
    match (flight.scheduled_ground_time, flight.minimum_turn_time) {
        (Some(ground), Some(minimum)) => Some(ground - minimum),
        _ => None,
    }
}

/// Bag counts for one flight, keyed by bag type
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BagCounts {
    counts: BTreeMap<String, u32>,
}

impl BagCounts {
    pub fn add(&mut self, bag_type: &str) {
        let count = self.counts.entry(bag_type.to_string()).or_insert(0);
        *count = count.saturating_add(1);
    }

    pub fn count(&self, bag_type: &str) -> u32 {
        self.counts.get(bag_type).copied().unwrap_or(0)
    }

    /// Transfer bags over checked bags, with one added to the denominator
    pub fn transfer_ratio(&self) -> f64 {
        self.count(BAG_TYPE_TRANSFER) as f64
            / (self.count(BAG_TYPE_CHECKED) as f64 + TRANSFER_RATIO_SMOOTHING)
    }
}

/// Pivoted bag aggregate: every bag type seen in the source becomes a column.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BagAggregate {
    pub bag_types: BTreeSet<String>,
    pub per_flight: HashMap<FlightKey, BagCounts>,
}

/// Per-flight aggregates derived from the non-flight sources
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureSet {
    pub passengers: HashMap<FlightKey, PassengerLoad>,
    pub ssr_counts: HashMap<FlightKey, u32>,
    pub bags: BagAggregate,
}

pub struct FeatureExtractor;

impl FeatureExtractor {
    pub fn new() -> Self {
        Self
    }

    pub fn extract(&self, tables: &SourceTables) -> FeatureSet {
        let features = FeatureSet {
            passengers: self.aggregate_passengers(&tables.pnr),
            ssr_counts: self.aggregate_remarks(&tables.remarks),
            bags: self.aggregate_bags(&tables.bags),
        };

        info!(
            pnr_flights = features.passengers.len(),
            remark_flights = features.ssr_counts.len(),
            bag_flights = features.bags.per_flight.len(),
            bag_types = features.bags.bag_types.len(),
            "Features extracted"
        );

        features
    }

    pub fn aggregate_passengers(&self, pnr: &[PnrRecord]) -> HashMap<FlightKey, PassengerLoad> {
        let mut grouped: HashMap<FlightKey, PassengerLoad> = HashMap::new();

        // Sum every PNR row into its flight
        for record in pnr {
            *grouped.entry(record.key.clone()).or_default() += record.passengers;
        }
        grouped
    }

    /// One remark row is one special-service request; duplicates are kept.
    pub fn aggregate_remarks(&self, remarks: &[RemarkRecord]) -> HashMap<FlightKey, u32> {
        let mut grouped: HashMap<FlightKey, u32> = HashMap::new();
        for remark in remarks {
            let count = grouped.entry(remark.key.clone()).or_insert(0);
            *count = count.saturating_add(1);
        }
        grouped
    }

    pub fn aggregate_bags(&self, bags: &[BagRecord]) -> BagAggregate {
        let mut aggregate = BagAggregate::default();

        // Collect the bag type columns and count each flight's bags per type
        for bag in bags {
            aggregate.bag_types.insert(bag.bag_type.clone());
            aggregate
                .per_flight
                .entry(bag.key.clone())
                .or_default()
                .add(&bag.bag_type);
        }
        aggregate
    }
}

impl Default for FeatureExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    fn at(hour: u32, minute: u32) -> Option<NaiveDateTime> {
        NaiveDate::from_ymd_opt(2025, 8, 4)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
    }

    fn flight(
        scheduled: Option<NaiveDateTime>,
        actual: Option<NaiveDateTime>,
        ground: Option<f64>,
        turn: Option<f64>,
    ) -> FlightRecord {
        FlightRecord {
            key: FlightKey::new("1", "2025-08-04"),
            scheduled_departure: scheduled,
            actual_departure: actual,
            scheduled_ground_time: ground,
            minimum_turn_time: turn,
            columns: vec![],
        }
    }

    fn key(number: &str) -> FlightKey {
        FlightKey::new(number, "2025-08-04")
    }

    #[test]
    fn test_departure_delay_clamps_and_defaults() {
        assert_eq!(departure_delay(&flight(at(10, 0), at(10, 45), None, None)), 45.0);
        assert_eq!(departure_delay(&flight(at(10, 0), at(9, 30), None, None)), 0.0);
        assert_eq!(departure_delay(&flight(None, at(9, 30), None, None)), 0.0);
        assert_eq!(departure_delay(&flight(at(10, 0), None, None, None)), 0.0);
    }

    #[test]
    fn test_ground_time_stress_is_signed() {
        assert_eq!(ground_time_stress(&flight(None, None, Some(40.0), Some(45.0))), Some(-5.0));
        assert_eq!(ground_time_stress(&flight(None, None, Some(90.0), Some(45.0))), Some(45.0));
        assert_eq!(ground_time_stress(&flight(None, None, None, Some(45.0))), None);
    }

    #[test]
    fn test_aggregate_passengers_sums_rows() {
        let load = |total, child| PassengerLoad {
            total_pax: total,
            is_child: child,
            ..Default::default()
        };
        let pnr = vec![
            PnrRecord { key: key("1"), passengers: load(2, 1) },
            PnrRecord { key: key("1"), passengers: load(3, 0) },
            PnrRecord { key: key("2"), passengers: load(1, 1) },
        ];

        let grouped = FeatureExtractor::new().aggregate_passengers(&pnr);

        assert_eq!(grouped[&key("1")], load(5, 1));
        assert_eq!(grouped[&key("2")], load(1, 1));
    }

    #[test]
    fn test_aggregate_remarks_counts_duplicates() {
        let remarks = vec![
            RemarkRecord { key: key("1") },
            RemarkRecord { key: key("1") },
            RemarkRecord { key: key("2") },
        ];

        let grouped = FeatureExtractor::new().aggregate_remarks(&remarks);

        assert_eq!(grouped[&key("1")], 2);
        assert_eq!(grouped[&key("2")], 1);
    }

    #[test]
    fn test_aggregate_bags_pivots_types() {
        let bag = |number: &str, bag_type: &str| BagRecord {
            key: key(number),
            bag_type: bag_type.to_string(),
        };
        let bags = vec![
            bag("1", "Transfer"),
            bag("1", "Transfer"),
            bag("1", "Checked"),
            bag("1", "Checked"),
            bag("1", "Checked"),
            bag("2", "Hot Transfer"),
        ];

        let aggregate = FeatureExtractor::new().aggregate_bags(&bags);

        assert_eq!(
            aggregate.bag_types.iter().cloned().collect::<Vec<_>>(),
            vec!["Checked", "Hot Transfer", "Transfer"]
        );
        let first = &aggregate.per_flight[&key("1")];
        assert_eq!(first.count("Transfer"), 2);
        assert_eq!(first.count("Hot Transfer"), 0);
        assert_eq!(first.transfer_ratio(), 0.5);
        assert_eq!(aggregate.per_flight[&key("2")].transfer_ratio(), 0.0);
    }

    #[test]
    fn test_transfer_ratio_without_checked_bags() {
        let mut counts = BagCounts::default();
        assert_eq!(counts.transfer_ratio(), 0.0);

        counts.add("Transfer");
        counts.add("Transfer");
        assert_eq!(counts.transfer_ratio(), 2.0);
    }
}
