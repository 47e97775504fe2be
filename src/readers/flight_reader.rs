use crate::error::Result;
use crate::models::{FlightKey, FlightRecord, FlightTable};
use crate::readers::raw_table::cell;
use crate::readers::{RawTable, SourceReader};
use crate::utils::constants::{
    COL_ACTUAL_DEPARTURE, COL_DEPARTURE_DATE, COL_FLIGHT_NUMBER, COL_MINIMUM_TURN,
    COL_SCHEDULED_DEPARTURE, COL_SCHEDULED_GROUND_TIME, FLIGHTS_TABLE,
};
use crate::utils::{normalize_date, parse_minutes, parse_timestamp};
use tracing::{debug, warn};

/// Reads the flight table, keeping every column for passthrough.
///
/// Timestamps that fail to parse become `None`; they never fail the load.
#[derive(Debug, Default)]
pub struct FlightReader;

impl FlightReader {
    pub fn new() -> Self {
        Self
    }
}

impl SourceReader for FlightReader {
    type Output = FlightTable;
    const TABLE: &'static str = FLIGHTS_TABLE;

    fn from_raw(&self, raw: &RawTable) -> Result<FlightTable> {
        let flight_number = raw.column_index(COL_FLIGHT_NUMBER)?;
        let departure_date = raw.column_index(COL_DEPARTURE_DATE)?;
        let scheduled = raw.column_index(COL_SCHEDULED_DEPARTURE)?;
        let actual = raw.column_index(COL_ACTUAL_DEPARTURE)?;
        let ground_time = raw.column_index(COL_SCHEDULED_GROUND_TIME)?;
        let minimum_turn = raw.column_index(COL_MINIMUM_TURN)?;

        let width = raw.headers.len();
        let mut coerced = 0usize;
        let mut records = Vec::with_capacity(raw.len());

        for (line, row) in raw.rows.iter().enumerate() {
            let scheduled_departure = parse_timestamp(cell(row, scheduled));
            let actual_departure = parse_timestamp(cell(row, actual));

            for (value, parsed) in [
                (cell(row, scheduled), scheduled_departure.is_some()),
                (cell(row, actual), actual_departure.is_some()),
            ] {
                if !parsed && !value.trim().is_empty() {
                    coerced += 1;
                    debug!(line = line + 2, value, "Unparseable timestamp coerced to null");
                }
            }

            let columns = (0..width).map(|i| cell(row, i).to_string()).collect();

            records.push(FlightRecord {
                key: FlightKey::new(
                    cell(row, flight_number),
                    normalize_date(cell(row, departure_date)),
                ),
                scheduled_departure,
                actual_departure,
                scheduled_ground_time: parse_minutes(cell(row, ground_time)),
                minimum_turn_time: parse_minutes(cell(row, minimum_turn)),
                columns,
            });
        }

        if coerced > 0 {
            warn!(
                coerced,
                "Flight timestamps could not be parsed and were treated as missing"
            );
        }

        Ok(FlightTable::new(raw.headers.clone(), records))
    }
}
