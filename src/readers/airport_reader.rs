use crate::error::Result;
use crate::models::AirportRecord;
use crate::readers::raw_table::cell;
use crate::readers::{RawTable, SourceReader};
use crate::utils::constants::{AIRPORTS_TABLE, COL_AIRPORT_IATA, COL_COUNTRY_CODE};

#[derive(Debug, Default)]
pub struct AirportReader;

impl AirportReader {
    pub fn new() -> Self {
        Self
    }
}

impl SourceReader for AirportReader {
    type Output = Vec<AirportRecord>;
    const TABLE: &'static str = AIRPORTS_TABLE;

    fn from_raw(&self, raw: &RawTable) -> Result<Vec<AirportRecord>> {
        let iata = raw.column_index(COL_AIRPORT_IATA)?;
        let country = raw.optional_column_index(COL_COUNTRY_CODE);

        Ok(raw
            .rows
            .iter()
            .map(|row| AirportRecord {
                iata_code: cell(row, iata).trim().to_string(),
                country_code: country
                    .map(|i| cell(row, i).trim().to_string())
                    .filter(|c| !c.is_empty()),
            })
            .collect())
    }
}
