pub mod csv_writer;
pub mod output_table;
pub mod parquet_writer;

pub use csv_writer::CsvWriter;
pub use output_table::{ColumnValues, OutputColumn, OutputTable};
pub use parquet_writer::{ParquetFileInfo, ParquetWriter};

use crate::error::Result;
use crate::processors::ScoredTable;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Csv,
    Parquet,
}

impl OutputFormat {
    /// Infer the format from a file extension, defaulting to CSV
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("parquet") => OutputFormat::Parquet,
            _ => OutputFormat::Csv,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Parquet => "parquet",
        }
    }
}

/// Write the scored table in the requested format.
///
/// Nothing is left at `path` unless the whole table was written.
pub fn write_scored_table(
    table: &ScoredTable,
    path: &Path,
    format: OutputFormat,
    compression: &str,
) -> Result<()> {
    let output = OutputTable::from_scored(table);

    match format {
        OutputFormat::Csv => CsvWriter::new().write(&output, path)?,
        OutputFormat::Parquet => ParquetWriter::new()
            .with_compression(compression)?
            .write(&output, path)?,
    }

    info!(
        path = %path.display(),
        rows = output.row_count(),
        columns = output.columns.len(),
        format = format.extension(),
        "Scored table written"
    );

    Ok(())
}

/// Temporary file next to `path`, so the final rename stays on one filesystem
pub(crate) fn staging_file(path: &Path) -> Result<NamedTempFile> {
    let parent = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;
    Ok(NamedTempFile::new_in(parent)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_format_from_path() {
        assert_eq!(OutputFormat::from_path(&PathBuf::from("out.parquet")), OutputFormat::Parquet);
        assert_eq!(OutputFormat::from_path(&PathBuf::from("out.PARQUET")), OutputFormat::Parquet);
        assert_eq!(OutputFormat::from_path(&PathBuf::from("out.csv")), OutputFormat::Csv);
        assert_eq!(OutputFormat::from_path(&PathBuf::from("out")), OutputFormat::Csv);
    }
}
