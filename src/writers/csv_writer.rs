use crate::error::Result;
use crate::writers::{staging_file, OutputTable};
use csv::WriterBuilder;
use std::path::Path;

pub struct CsvWriter {
    delimiter: u8,
}

impl CsvWriter {
    pub fn new() -> Self {
        Self { delimiter: b',' }
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Write the table with a header row, replacing `path` atomically
    pub fn write(&self, table: &OutputTable, path: &Path) -> Result<()> {
        let mut staging = staging_file(path)?;

        {
            let mut writer = WriterBuilder::new()
                .delimiter(self.delimiter)
                .from_writer(staging.as_file_mut());

            writer.write_record(table.headers())?;
            for row in 0..table.row_count() {
                writer.write_record(table.columns.iter().map(|c| c.values.format_cell(row)))?;
            }
            writer.flush()?;
        }

        staging.persist(path)?;
        Ok(())
    }
}

impl Default for CsvWriter {
    fn default() -> Self {
        Self::new()
    }
}
