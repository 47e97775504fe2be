pub mod constants;
pub mod filename;
pub mod progress;
pub mod values;

pub use constants::*;
pub use filename::default_output_path;
pub use progress::ProgressReporter;
pub use values::{normalize_date, parse_count, parse_minutes, parse_timestamp};
