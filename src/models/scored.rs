use super::{FlightRecord, PassengerLoad};

/// Difficulty tier, ordered from least to most difficult
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DifficultyClass {
    Easy,
    Medium,
    Difficult,
}

impl DifficultyClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            DifficultyClass::Easy => "Easy",
            DifficultyClass::Medium => "Medium",
            DifficultyClass::Difficult => "Difficult",
        }
    }
}

impl std::fmt::Display for DifficultyClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A flight row with every feature joined on and zero-filled.
#[derive(Debug, Clone, PartialEq)]
pub struct JoinedFlight {
    pub flight: FlightRecord,
    pub departure_delay: f64,
    pub ground_time_stress: f64,
    pub passengers: PassengerLoad,
    /// Counts aligned with the joined table's bag type columns
    pub bag_counts: Vec<u32>,
    pub transfer_ratio: f64,
    pub ssr_count: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoredFlight {
    pub joined: JoinedFlight,
    pub difficulty_score: f64,
    pub rank: u32,
    pub class: DifficultyClass,
}

impl ScoredFlight {
    pub fn flight_number(&self) -> &str {
        &self.joined.flight.key.flight_number
    }

    pub fn departure_date(&self) -> &str {
        &self.joined.flight.key.departure_date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_ordering_and_labels() {
        assert!(DifficultyClass::Easy < DifficultyClass::Medium);
        assert!(DifficultyClass::Medium < DifficultyClass::Difficult);
        assert_eq!(DifficultyClass::Difficult.to_string(), "Difficult");
        assert_eq!(DifficultyClass::Easy.as_str(), "Easy");
    }
}
