use crate::models::{DifficultyClass, JoinedFlight, ScoredFlight};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, info};

/// How a departure day's flights were split into tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassificationMethod {
    /// Score terciles from linearly interpolated 1/3 and 2/3 quantiles
    Tercile,
    /// Rank-based tertiles, used when the score terciles cannot form three bins
    RankFallback,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayClassification {
    pub date: String,
    pub flights: usize,
    pub method: ClassificationMethod,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RankedFlights {
    /// Flights in their original order
    pub flights: Vec<ScoredFlight>,
    /// One entry per departure date, sorted by date
    pub days: Vec<DayClassification>,
}

/// Dense ranks by descending score: ties share a rank and ranks have no gaps.
pub fn dense_ranks(scores: &[f64]) -> Vec<u32> {
    // Distinct scores, highest first
    let mut distinct = scores.to_vec();
    distinct.sort_by(|a, b| b.total_cmp(a));
    distinct.dedup_by(|a, b| a.total_cmp(b).is_eq());

    scores
        .iter()
        .map(|score| match distinct.binary_search_by(|d| score.total_cmp(d)) {
            Ok(position) | Err(position) => position as u32 + 1,
        })
        .collect()
}

/// Linearly interpolated quantile of an ascending, non-empty slice
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let position = (sorted.len() - 1) as f64 * q;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    sorted[lower] + (sorted[upper] - sorted[lower]) * (position - lower as f64)
}

/// Split one day's flights into Easy/Medium/Difficult.
///
/// Scores at or below the 1/3 quantile are Easy, at or below the 2/3 quantile
/// Medium, the rest Difficult. With fewer than three distinct scores, or bin
/// edges that are not strictly increasing, the split falls back to ranks:
/// rank <= n/3 is Difficult, rank <= 2n/3 Medium, otherwise Easy.
pub fn classify_group(scores: &[f64], ranks: &[u32]) -> (Vec<DifficultyClass>, ClassificationMethod) {
    if scores.is_empty() {
        return (Vec::new(), ClassificationMethod::Tercile);
    }

    let mut sorted = scores.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    // Dense ranks top out at the number of distinct scores
    let distinct = ranks.iter().copied().max().unwrap_or(0);
    let edges = [
        sorted[0],
        quantile(&sorted, 1.0 / 3.0),
        quantile(&sorted, 2.0 / 3.0),
        sorted[sorted.len() - 1],
    ];
    let edges_increasing = edges.windows(2).all(|pair| pair[0] < pair[1]);

    // Degenerate bins: split by rank thirds instead
    if distinct < 3 || !edges_increasing {
        let total = scores.len() as f64;
        let classes = ranks
            .iter()
            .map(|&rank| {
                let rank = rank as f64;
                if rank <= total / 3.0 {
                    DifficultyClass::Difficult
                } else if rank <= 2.0 * total / 3.0 {
                    DifficultyClass::Medium
                } else {
                    DifficultyClass::Easy
                }
            })
            .collect();
        return (classes, ClassificationMethod::RankFallback);
    }

    // Tercile bins, upper edge inclusive
    let classes = scores
        .iter()
        .map(|&score| {
            if score <= edges[1] {
                DifficultyClass::Easy
            } else if score <= edges[2] {
                DifficultyClass::Medium
            } else {
                DifficultyClass::Difficult
            }
        })
        .collect();

    (classes, ClassificationMethod::Tercile)
}

pub struct Ranker;

impl Ranker {
    pub fn new() -> Self {
        Self
    }

    /// Rank and classify within each scheduled departure date.
    pub fn rank_and_classify(&self, scored: Vec<(JoinedFlight, f64)>) -> RankedFlights {
        // Group flight positions by departure date
        let mut groups: BTreeMap<String, Vec<usize>> = BTreeMap::new();
        for (index, (flight, _)) in scored.iter().enumerate() {
            groups
                .entry(flight.flight.key.departure_date.clone())
                .or_default()
                .push(index);
        }

        let mut ranks = vec![0u32; scored.len()];
        let mut classes = vec![DifficultyClass::Easy; scored.len()];
        let mut days = Vec::with_capacity(groups.len());

        // Rank and classify each day on its own
        for (date, indices) in groups {
            let scores: Vec<f64> = indices.iter().map(|&i| scored[i].1).collect();
            let day_ranks = dense_ranks(&scores);
            let (day_classes, method) = classify_group(&scores, &day_ranks);

            if method == ClassificationMethod::RankFallback {
                debug!(date = %date, flights = indices.len(), "Tercile bins degenerate, using rank tertiles");
            }

            // Write results back to source positions
            for (position, &index) in indices.iter().enumerate() {
                ranks[index] = day_ranks[position];
                classes[index] = day_classes[position];
            }

            days.push(DayClassification {
                date,
                flights: indices.len(),
                method,
            });
        }

        let fallback_days = days
            .iter()
            .filter(|d| d.method == ClassificationMethod::RankFallback)
            .count();
        info!(days = days.len(), fallback_days, "Flights ranked and classified");

        // Reassemble in source order
        let flights = scored
            .into_iter()
            .zip(ranks.into_iter().zip(classes))
            .map(|((joined, difficulty_score), (rank, class))| ScoredFlight {
                joined,
                difficulty_score,
                rank,
                class,
            })
            .collect();

        RankedFlights { flights, days }
    }
}

impl Default for Ranker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FlightKey, FlightRecord, PassengerLoad};
    use DifficultyClass::{Difficult, Easy, Medium};

    fn joined(number: &str, date: &str) -> JoinedFlight {
        JoinedFlight {
            flight: FlightRecord {
                key: FlightKey::new(number, date),
                scheduled_departure: None,
                actual_departure: None,
                scheduled_ground_time: None,
                minimum_turn_time: None,
                columns: vec![],
            },
            departure_delay: 0.0,
            ground_time_stress: 0.0,
            passengers: PassengerLoad::default(),
            bag_counts: vec![],
            transfer_ratio: 0.0,
            ssr_count: 0,
        }
    }

    #[test]
    fn test_dense_ranks_share_ties() {
        let scores = [80.0, 80.0, 60.0, 40.0, 20.0, 10.0];
        assert_eq!(dense_ranks(&scores), vec![1, 1, 2, 3, 4, 5]);

        let unordered = [3.0, 7.0, 3.0, 1.0];
        assert_eq!(dense_ranks(&unordered), vec![2, 1, 2, 3]);
    }

    #[test]
    fn test_tercile_split_of_reference_day() {
        let scores = [80.0, 80.0, 60.0, 40.0, 20.0, 10.0];
        let ranks = dense_ranks(&scores);
        let (classes, method) = classify_group(&scores, &ranks);

        assert_eq!(method, ClassificationMethod::Tercile);
        assert_eq!(classes, vec![Difficult, Difficult, Medium, Medium, Easy, Easy]);
    }

    #[test]
    fn test_tercile_boundary_is_inclusive() {
        // quantiles of [1..=4] are 2.0 and 3.0 exactly
        let scores = [1.0, 2.0, 3.0, 4.0];
        let ranks = dense_ranks(&scores);
        let (classes, method) = classify_group(&scores, &ranks);

        assert_eq!(method, ClassificationMethod::Tercile);
        assert_eq!(classes, vec![Easy, Easy, Medium, Difficult]);
    }

    #[test]
    fn test_single_flight_falls_back() {
        let (classes, method) = classify_group(&[12.0], &[1]);
        assert_eq!(method, ClassificationMethod::RankFallback);
        assert_eq!(classes, vec![Easy]);
    }

    #[test]
    fn test_two_distinct_scores_fall_back() {
        let scores = [10.0, 5.0];
        let (classes, method) = classify_group(&scores, &dense_ranks(&scores));
        assert_eq!(method, ClassificationMethod::RankFallback);
        assert_eq!(classes, vec![Medium, Easy]);
    }

    #[test]
    fn test_all_tied_fall_back_to_rank_one() {
        let scores = [5.0, 5.0, 5.0];
        let (classes, method) = classify_group(&scores, &dense_ranks(&scores));
        assert_eq!(method, ClassificationMethod::RankFallback);
        assert_eq!(classes, vec![Difficult, Difficult, Difficult]);
    }

    #[test]
    fn test_duplicate_edges_fall_back() {
        let scores = [1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 3.0];
        let ranks = dense_ranks(&scores);
        let (classes, method) = classify_group(&scores, &ranks);

        assert_eq!(method, ClassificationMethod::RankFallback);
        assert_eq!(classes[6], Difficult);
        assert_eq!(classes[5], Difficult);
        assert_eq!(classes[0], Medium);
    }

    #[test]
    fn test_rank_and_classify_groups_by_date() {
        let scored = vec![
            (joined("1", "2025-08-04"), 80.0),
            (joined("2", "2025-08-05"), 3.0),
            (joined("3", "2025-08-04"), 80.0),
            (joined("4", "2025-08-04"), 60.0),
            (joined("5", "2025-08-04"), 40.0),
            (joined("6", "2025-08-04"), 20.0),
            (joined("7", "2025-08-04"), 10.0),
        ];

        let ranked = Ranker::new().rank_and_classify(scored);

        let numbers: Vec<_> = ranked.flights.iter().map(|f| f.flight_number()).collect();
        assert_eq!(numbers, vec!["1", "2", "3", "4", "5", "6", "7"]);

        let ranks: Vec<_> = ranked.flights.iter().map(|f| f.rank).collect();
        assert_eq!(ranks, vec![1, 1, 1, 2, 3, 4, 5]);

        let classes: Vec<_> = ranked.flights.iter().map(|f| f.class).collect();
        assert_eq!(
            classes,
            vec![Difficult, Easy, Difficult, Medium, Medium, Easy, Easy]
        );

        assert_eq!(
            ranked.days,
            vec![
                DayClassification {
                    date: "2025-08-04".to_string(),
                    flights: 6,
                    method: ClassificationMethod::Tercile,
                },
                DayClassification {
                    date: "2025-08-05".to_string(),
                    flights: 1,
                    method: ClassificationMethod::RankFallback,
                },
            ]
        );
    }
}
