use crate::models::JoinedFlight;
use crate::utils::constants::{
    DELAY_DIVISOR, NEGATIVE_STRESS_PENALTY, PASSENGER_DIVISOR, SSR_WEIGHT, TRANSFER_RATIO_WEIGHT,
};

/// Weighted difficulty score.
///
/// ```
/// use flight_difficulty::processors::scorer::difficulty_score;
///
/// let score = difficulty_score(45.0, -5.0, 250, 3, 0.5);
/// assert!((score - 23.0).abs() < 1e-9);
/// ```
pub fn difficulty_score(
    departure_delay: f64,
    ground_time_stress: f64,
    total_pax: u32,
    ssr_count: u32,
    transfer_ratio: f64,
) -> f64 {
    let stress_penalty = if ground_time_stress < 0.0 {
        NEGATIVE_STRESS_PENALTY
    } else {
        0.0
    };

    departure_delay.max(0.0) / DELAY_DIVISOR
        + stress_penalty
        + total_pax as f64 / PASSENGER_DIVISOR
        + ssr_count as f64 * SSR_WEIGHT
        + transfer_ratio * TRANSFER_RATIO_WEIGHT
}

pub struct Scorer;

impl Scorer {
    pub fn new() -> Self {
        Self
    }

    pub fn score(&self, flight: &JoinedFlight) -> f64 {
        difficulty_score(
            flight.departure_delay,
            flight.ground_time_stress,
            flight.passengers.total_pax,
            flight.ssr_count,
            flight.transfer_ratio,
        )
    }

    pub fn score_all(&self, flights: Vec<JoinedFlight>) -> Vec<(JoinedFlight, f64)> {
        flights
            .into_iter()
            .map(|flight| {
                let score = self.score(&flight);
                (flight, score)
            })
            .collect()
    }
}

impl Default for Scorer {
    fn default() -> Self {
        Self::new()
    }
}
