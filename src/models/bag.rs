use super::FlightKey;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BagRecord {
    pub key: FlightKey,
    pub bag_type: String,
}
