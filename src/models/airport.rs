/// Airport reference row. Loaded with the other sources but not scored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AirportRecord {
    pub iata_code: String,
    pub country_code: Option<String>,
}
