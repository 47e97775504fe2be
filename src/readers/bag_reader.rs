use crate::error::Result;
use crate::models::{BagRecord, FlightKey};
use crate::readers::raw_table::cell;
use crate::readers::{RawTable, SourceReader};
use crate::utils::constants::{BAGS_TABLE, COL_BAG_TYPE, COL_DEPARTURE_DATE, COL_FLIGHT_NUMBER};
use crate::utils::normalize_date;

#[derive(Debug, Default)]
pub struct BagReader;

impl BagReader {
    pub fn new() -> Self {
        Self
    }
}

impl SourceReader for BagReader {
    type Output = Vec<BagRecord>;
    const TABLE: &'static str = BAGS_TABLE;

    fn from_raw(&self, raw: &RawTable) -> Result<Vec<BagRecord>> {
        let flight_number = raw.column_index(COL_FLIGHT_NUMBER)?;
        let departure_date = raw.column_index(COL_DEPARTURE_DATE)?;
        let bag_type = raw.column_index(COL_BAG_TYPE)?;

        Ok(raw
            .rows
            .iter()
            .map(|row| BagRecord {
                key: FlightKey::new(
                    cell(row, flight_number),
                    normalize_date(cell(row, departure_date)),
                ),
                bag_type: cell(row, bag_type).trim().to_string(),
            })
            .collect())
    }
}
