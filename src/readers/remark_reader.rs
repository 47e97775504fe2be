use crate::error::Result;
use crate::models::{FlightKey, RemarkRecord};
use crate::readers::raw_table::cell;
use crate::readers::{RawTable, SourceReader};
use crate::utils::constants::{COL_FLIGHT_NUMBER, COL_PNR_CREATION_DATE, REMARKS_TABLE};
use crate::utils::normalize_date;

/// Reads special-service remarks, one record per row.
///
/// Remarks carry `pnr_creation_date` instead of the scheduled departure date.
/// The two are assumed to name the same day; see the joiner's match statistics.
#[derive(Debug, Default)]
pub struct RemarkReader;

impl RemarkReader {
    pub fn new() -> Self {
        Self
    }
}

impl SourceReader for RemarkReader {
    type Output = Vec<RemarkRecord>;
    const TABLE: &'static str = REMARKS_TABLE;

    fn from_raw(&self, raw: &RawTable) -> Result<Vec<RemarkRecord>> {
        let flight_number = raw.column_index(COL_FLIGHT_NUMBER)?;
        let creation_date = raw.column_index(COL_PNR_CREATION_DATE)?;

        Ok(raw
            .rows
            .iter()
            .map(|row| RemarkRecord {
                key: FlightKey::new(
                    cell(row, flight_number),
                    normalize_date(cell(row, creation_date)),
                ),
            })
            .collect())
    }
}
