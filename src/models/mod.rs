pub mod airport;
pub mod bag;
pub mod flight;
pub mod pnr;
pub mod remark;
pub mod scored;

pub use airport::AirportRecord;
pub use bag::BagRecord;
pub use flight::{FlightKey, FlightRecord, FlightTable};
pub use pnr::{PassengerLoad, PnrRecord};
pub use remark::RemarkRecord;
pub use scored::{DifficultyClass, JoinedFlight, ScoredFlight};
