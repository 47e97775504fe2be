use crate::error::Result;
use crate::models::{FlightKey, PassengerLoad, PnrRecord};
use crate::readers::raw_table::cell;
use crate::readers::{RawTable, SourceReader};
use crate::utils::constants::{
    COL_BASIC_ECONOMY, COL_DEPARTURE_DATE, COL_FLIGHT_NUMBER, COL_IS_CHILD, COL_LAP_CHILD,
    COL_STROLLER, COL_TOTAL_PAX, PNR_TABLE,
};
use crate::utils::{normalize_date, parse_count};
use tracing::debug;

#[derive(Debug, Default)]
pub struct PnrReader;

impl PnrReader {
    pub fn new() -> Self {
        Self
    }
}

impl SourceReader for PnrReader {
    type Output = Vec<PnrRecord>;
    const TABLE: &'static str = PNR_TABLE;

    fn from_raw(&self, raw: &RawTable) -> Result<Vec<PnrRecord>> {
        let flight_number = raw.column_index(COL_FLIGHT_NUMBER)?;
        let departure_date = raw.column_index(COL_DEPARTURE_DATE)?;
        let total_pax = raw.column_index(COL_TOTAL_PAX)?;
        let lap_child = raw.column_index(COL_LAP_CHILD)?;
        let is_child = raw.column_index(COL_IS_CHILD)?;
        let basic_economy = raw.column_index(COL_BASIC_ECONOMY)?;
        let stroller = raw.column_index(COL_STROLLER)?;

        let mut unparsed = 0usize;
        let mut count = |value: &str| {
            parse_count(value).unwrap_or_else(|| {
                if !value.trim().is_empty() {
                    unparsed += 1;
                }
                0
            })
        };

        let records = raw
            .rows
            .iter()
            .map(|row| PnrRecord {
                key: FlightKey::new(
                    cell(row, flight_number),
                    normalize_date(cell(row, departure_date)),
                ),
                passengers: PassengerLoad {
                    total_pax: count(cell(row, total_pax)),
                    lap_child_count: count(cell(row, lap_child)),
                    is_child: count(cell(row, is_child)),
                    basic_economy_pax: count(cell(row, basic_economy)),
                    is_stroller_user: count(cell(row, stroller)),
                },
            })
            .collect();

        if unparsed > 0 {
            debug!(unparsed, "PNR count cells could not be parsed and count as zero");
        }

        Ok(records)
    }
}
