use chrono::NaiveDateTime;

/// Composite join key shared by every source table.
///
/// `departure_date` is normalised to `YYYY-MM-DD` when it parses, so keys from
/// differently formatted sources still compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FlightKey {
    pub flight_number: String,
    pub departure_date: String,
}

impl FlightKey {
    pub fn new(flight_number: impl Into<String>, departure_date: impl Into<String>) -> Self {
        Self {
            flight_number: flight_number.into().trim().to_string(),
            departure_date: departure_date.into(),
        }
    }
}

impl std::fmt::Display for FlightKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} on {}", self.flight_number, self.departure_date)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FlightRecord {
    pub key: FlightKey,
    pub scheduled_departure: Option<NaiveDateTime>,
    pub actual_departure: Option<NaiveDateTime>,
    pub scheduled_ground_time: Option<f64>,
    pub minimum_turn_time: Option<f64>,
    /// Raw cell values, aligned with [`FlightTable::headers`]
    pub columns: Vec<String>,
}

impl FlightRecord {
    /// Minutes between scheduled and actual departure, if both are known
    pub fn raw_delay_minutes(&self) -> Option<f64> {
        match (self.scheduled_departure, self.actual_departure) {
            (Some(scheduled), Some(actual)) => {
                Some((actual - scheduled).num_milliseconds() as f64 / 60_000.0)
            }
            _ => None,
        }
    }

    pub fn has_departure_times(&self) -> bool {
        self.scheduled_departure.is_some() && self.actual_departure.is_some()
    }
}

/// The flight table keeps its source header so every column can be passed
/// through to the output untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlightTable {
    pub headers: Vec<String>,
    pub records: Vec<FlightRecord>,
}

impl FlightTable {
    pub fn new(headers: Vec<String>, records: Vec<FlightRecord>) -> Self {
        Self { headers, records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn unparsed_timestamp_count(&self) -> usize {
        self.records
            .iter()
            .filter(|r| !r.has_departure_times())
            .count()
    }
}
