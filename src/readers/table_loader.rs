use crate::error::Result;
use crate::models::{AirportRecord, BagRecord, FlightTable, PnrRecord, RemarkRecord};
use crate::readers::{
    AirportReader, BagReader, FlightReader, PnrReader, RemarkReader, SourceReader,
};
use crate::utils::constants::{AIRPORTS_FILE, BAGS_FILE, FLIGHTS_FILE, PNR_FILE, REMARKS_FILE};
use std::path::{Path, PathBuf};
use tracing::info;

/// Locations of the five source tables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcePaths {
    pub flights: PathBuf,
    pub pnr: PathBuf,
    pub remarks: PathBuf,
    pub bags: PathBuf,
    pub airports: PathBuf,
}

impl SourcePaths {
    /// Default file names inside `dir`
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            flights: dir.join(FLIGHTS_FILE),
            pnr: dir.join(PNR_FILE),
            remarks: dir.join(REMARKS_FILE),
            bags: dir.join(BAGS_FILE),
            airports: dir.join(AIRPORTS_FILE),
        }
    }
}

/// Everything one run reads, passed by value between pipeline stages.
#[derive(Debug, Clone, Default)]
pub struct SourceTables {
    pub flights: FlightTable,
    pub pnr: Vec<PnrRecord>,
    pub remarks: Vec<RemarkRecord>,
    pub bags: Vec<BagRecord>,
    pub airports: Vec<AirportRecord>,
}

impl SourceTables {
    pub fn summary(&self) -> String {
        format!(
            "flights={} pnr={} remarks={} bags={} airports={}",
            self.flights.len(),
            self.pnr.len(),
            self.remarks.len(),
            self.bags.len(),
            self.airports.len()
        )
    }
}

pub struct TableLoader {
    paths: SourcePaths,
}

impl TableLoader {
    pub fn new(paths: SourcePaths) -> Self {
        Self { paths }
    }

    /// Load all five tables. Any unreadable source or missing column aborts the load.
    pub fn load(&self) -> Result<SourceTables> {
        let flights = FlightReader::new().read(&self.paths.flights)?;
        let pnr = PnrReader::new().read(&self.paths.pnr)?;
        let remarks = RemarkReader::new().read(&self.paths.remarks)?;
        let bags = BagReader::new().read(&self.paths.bags)?;
        let airports = AirportReader::new().read(&self.paths.airports)?;

        let tables = SourceTables {
            flights,
            pnr,
            remarks,
            bags,
            airports,
        };

        info!(
            flights = tables.flights.len(),
            pnr = tables.pnr.len(),
            remarks = tables.remarks.len(),
            bags = tables.bags.len(),
            airports = tables.airports.len(),
            "Source tables loaded"
        );

        Ok(tables)
    }
}
