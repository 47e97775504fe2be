use crate::utils::constants::{DEFAULT_OUTPUT_DIR, DEFAULT_OUTPUT_STEM};
use crate::writers::OutputFormat;
use std::path::PathBuf;

/// Default output path: output/flight_difficulty_scores.{csv|parquet}
pub fn default_output_path(format: OutputFormat) -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR).join(format!("{}.{}", DEFAULT_OUTPUT_STEM, format.extension()))
}
