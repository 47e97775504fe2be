use crate::error::{ProcessingError, Result};
use crate::utils::constants::{
    COMPRESSION_GZIP, COMPRESSION_LZ4, COMPRESSION_NONE, COMPRESSION_SNAPPY, COMPRESSION_ZSTD,
};
use crate::writers::{staging_file, ColumnValues, OutputTable};
use arrow::array::{ArrayRef, Float64Array, StringArray, UInt32Array};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use parquet::basic::{Compression, GzipLevel, ZstdLevel};
use parquet::file::properties::WriterProperties;
use std::fs::File;
use std::path::Path;
use std::sync::Arc;

const DEFAULT_ROW_GROUP_SIZE: usize = 10_000;

pub struct ParquetWriter {
    compression: Compression,
    row_group_size: usize,
}

impl ParquetWriter {
    pub fn new() -> Self {
        Self {
            compression: Compression::SNAPPY,
            row_group_size: DEFAULT_ROW_GROUP_SIZE,
        }
    }

    pub fn with_compression(mut self, compression: &str) -> Result<Self> {
        self.compression = match compression.to_lowercase().as_str() {
            COMPRESSION_SNAPPY => Compression::SNAPPY,
            COMPRESSION_GZIP => Compression::GZIP(GzipLevel::default()),
            COMPRESSION_LZ4 => Compression::LZ4,
            COMPRESSION_ZSTD => Compression::ZSTD(ZstdLevel::default()),
            COMPRESSION_NONE => Compression::UNCOMPRESSED,
            _ => {
                return Err(ProcessingError::Config(format!(
                    "Unsupported compression: {}",
                    compression
                )))
            }
        };
        Ok(self)
    }

    pub fn with_row_group_size(mut self, size: usize) -> Self {
        self.row_group_size = size;
        self
    }

    /// Write the table as a single record batch, replacing `path` atomically
    pub fn write(&self, table: &OutputTable, path: &Path) -> Result<()> {
        let schema = self.create_schema(table);
        let batch = self.table_to_batch(table, schema.clone())?;

        let staging = staging_file(path)?;
        let props = WriterProperties::builder()
            .set_compression(self.compression)
            .set_max_row_group_size(self.row_group_size)
            .build();

        let mut writer = ArrowWriter::try_new(staging.as_file().try_clone()?, schema, Some(props))?;
        writer.write(&batch)?;
        writer.close()?;

        staging.persist(path)?;
        Ok(())
    }

    /// Arrow schema derived from the column kinds: text as Utf8, floats as
    /// Float64, counts as UInt32. Nothing is nullable after the zero-fill.
    fn create_schema(&self, table: &OutputTable) -> Arc<Schema> {
        let fields: Vec<Field> = table
            .columns
            .iter()
            .map(|column| {
                let data_type = match column.values {
                    ColumnValues::Text(_) => DataType::Utf8,
                    ColumnValues::Float(_) => DataType::Float64,
                    ColumnValues::Count(_) => DataType::UInt32,
                };
                Field::new(column.name.as_str(), data_type, false)
            })
            .collect();

        Arc::new(Schema::new(fields))
    }

    fn table_to_batch(&self, table: &OutputTable, schema: Arc<Schema>) -> Result<RecordBatch> {
        let arrays: Vec<ArrayRef> = table
            .columns
            .iter()
            .map(|column| -> ArrayRef {
                match &column.values {
                    ColumnValues::Text(values) => Arc::new(StringArray::from(values.clone())),
                    ColumnValues::Float(values) => Arc::new(Float64Array::from(values.clone())),
                    ColumnValues::Count(values) => Arc::new(UInt32Array::from(values.clone())),
                }
            })
            .collect();

        Ok(RecordBatch::try_new(schema, arrays)?)
    }

    pub fn get_file_info(&self, path: &Path) -> Result<ParquetFileInfo> {
        use parquet::file::reader::{FileReader, SerializedFileReader};

        let file = File::open(path)?;
        let reader = SerializedFileReader::new(file)?;
        let metadata = reader.metadata();

        let file_metadata = metadata.file_metadata();
        let row_groups = metadata.num_row_groups();
        let total_rows = file_metadata.num_rows();
        let total_columns = file_metadata.schema_descr().num_columns();
        let file_size = std::fs::metadata(path)?.len();

        Ok(ParquetFileInfo {
            total_rows,
            total_columns,
            row_groups: row_groups as i32,
            file_size,
            compression: self.compression,
        })
    }
}

impl Default for ParquetWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone)]
pub struct ParquetFileInfo {
    pub total_rows: i64,
    pub total_columns: usize,
    pub row_groups: i32,
    pub file_size: u64,
    pub compression: Compression,
}

impl ParquetFileInfo {
    pub fn summary(&self) -> String {
        format!(
            "Parquet File Summary:\n\
            - Total rows: {}\n\
            - Columns: {}\n\
            - Row groups: {}\n\
            - File size: {:.2} KB\n\
            - Compression: {:?}",
            self.total_rows,
            self.total_columns,
            self.row_groups,
            self.file_size as f64 / 1024.0,
            self.compression,
        )
    }
}
