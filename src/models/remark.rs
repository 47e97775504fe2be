use super::FlightKey;

/// One special-service remark. The key date comes from `pnr_creation_date`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemarkRecord {
    pub key: FlightKey,
}
