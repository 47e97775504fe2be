pub mod airport_reader;
pub mod bag_reader;
pub mod flight_reader;
pub mod pnr_reader;
pub mod raw_table;
pub mod remark_reader;
pub mod table_loader;

pub use airport_reader::AirportReader;
pub use bag_reader::BagReader;
pub use flight_reader::FlightReader;
pub use pnr_reader::PnrReader;
pub use raw_table::RawTable;
pub use remark_reader::RemarkReader;
pub use table_loader::{SourcePaths, SourceTables, TableLoader};

use crate::error::Result;
use std::path::Path;

/// Typed view over one source table
pub trait SourceReader {
    type Output;

    /// Table name used in diagnostics
    const TABLE: &'static str;

    fn from_raw(&self, raw: &RawTable) -> Result<Self::Output>;

    fn read(&self, path: &Path) -> Result<Self::Output> {
        let raw = RawTable::read(Self::TABLE, path)?;
        self.from_raw(&raw)
    }
}
