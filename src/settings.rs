use crate::error::Result;
use crate::readers::SourcePaths;
use crate::utils::constants::{
    AIRPORTS_FILE, BAGS_FILE, COMPRESSION_SNAPPY, DEFAULT_DATA_DIR, ENV_PREFIX, FLIGHTS_FILE,
    PNR_FILE, REMARKS_FILE,
};
use crate::utils::default_output_path;
use crate::writers::OutputFormat;
use config::{Config, Environment, File, Map};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use validator::Validate;

/// Run settings, layered as defaults < settings file < environment < CLI flags.
#[derive(Debug, Clone, PartialEq, Deserialize, Validate)]
#[serde(default)]
pub struct Settings {
    pub data_dir: PathBuf,

    #[validate(length(min = 1))]
    pub flights_file: String,

    #[validate(length(min = 1))]
    pub pnr_file: String,

    #[validate(length(min = 1))]
    pub remarks_file: String,

    #[validate(length(min = 1))]
    pub bags_file: String,

    #[validate(length(min = 1))]
    pub airports_file: String,

    pub output: Option<PathBuf>,
    pub format: Option<OutputFormat>,

    #[validate(length(min = 1))]
    pub compression: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            flights_file: FLIGHTS_FILE.to_string(),
            pnr_file: PNR_FILE.to_string(),
            remarks_file: REMARKS_FILE.to_string(),
            bags_file: BAGS_FILE.to_string(),
            airports_file: AIRPORTS_FILE.to_string(),
            output: None,
            format: None,
            compression: COMPRESSION_SNAPPY.to_string(),
        }
    }
}

impl Settings {
    /// Load from an optional settings file and `FLIGHT_DIFFICULTY_*` variables
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        Self::load_with_env(config_file, None)
    }

    /// Like [`Settings::load`], reading variables from `env` instead of the
    /// process environment when given.
    pub fn load_with_env(config_file: Option<&Path>, env: Option<Map<String, String>>) -> Result<Self> {
        let mut builder = Config::builder();
        if let Some(path) = config_file {
            builder = builder.add_source(File::from(path).required(true));
        }
        // environment overrides the file
        builder = builder.add_source(Environment::with_prefix(ENV_PREFIX).source(env));

        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn source_paths(&self) -> SourcePaths {
        SourcePaths {
            flights: self.data_dir.join(&self.flights_file),
            pnr: self.data_dir.join(&self.pnr_file),
            remarks: self.data_dir.join(&self.remarks_file),
            bags: self.data_dir.join(&self.bags_file),
            airports: self.data_dir.join(&self.airports_file),
        }
    }

    /// Explicit format wins; otherwise it follows the output extension
    pub fn output_format(&self) -> OutputFormat {
        match (self.format, &self.output) {
            (Some(format), _) => format,
            (None, Some(path)) => OutputFormat::from_path(path),
            (None, None) => OutputFormat::Csv,
        }
    }

    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| default_output_path(self.output_format()))
    }
}
