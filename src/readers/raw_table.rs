use crate::error::{ProcessingError, Result};
use csv::{ReaderBuilder, StringRecord};
use encoding_rs::WINDOWS_1252;
use std::borrow::Cow;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// A delimited source held as header plus untyped rows.
///
/// Typed readers look columns up by name through [`RawTable::column_index`],
/// which turns an absent column into a fatal diagnostic.
#[derive(Debug, Clone)]
pub struct RawTable {
    pub table: &'static str,
    pub headers: Vec<String>,
    pub rows: Vec<StringRecord>,
}

impl RawTable {
    /// Read a table from disk. Unreadable files are reported with their table name.
    pub fn read(table: &'static str, path: &Path) -> Result<Self> {
        let bytes = fs::read(path).map_err(|source| ProcessingError::SourceUnreadable {
            table,
            path: path.to_path_buf(),
            source,
        })?;

        let content = decode(table, &bytes);
        let raw = Self::parse(table, &content)?;

        debug!(
            table,
            path = %path.display(),
            rows = raw.rows.len(),
            columns = raw.headers.len(),
            "Loaded source table"
        );

        Ok(raw)
    }

    /// Parse CSV text with a header row
    pub fn parse(table: &'static str, content: &str) -> Result<Self> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(content.as_bytes());

        let headers = reader
            .headers()?
            .iter()
            .map(|h| h.trim_start_matches('\u{feff}').trim().to_string())
            .collect();

        let rows = reader
            .records()
            .collect::<std::result::Result<Vec<_>, csv::Error>>()?;

        Ok(Self {
            table,
            headers,
            rows,
        })
    }

    pub fn column_index(&self, column: &str) -> Result<usize> {
        self.headers
            .iter()
            .position(|h| h == column)
            .ok_or_else(|| ProcessingError::MissingColumn {
                table: self.table,
                column: column.to_string(),
            })
    }

    pub fn optional_column_index(&self, column: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == column)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Cell accessor that treats cells missing from short rows as empty
pub fn cell(row: &StringRecord, index: usize) -> &str {
    row.get(index).unwrap_or("")
}

fn decode<'a>(table: &'static str, bytes: &'a [u8]) -> Cow<'a, str> {
    match std::str::from_utf8(bytes) {
        Ok(text) => Cow::Borrowed(text),
        Err(_) => {
            warn!(table, "Source is not valid UTF-8, decoding as Windows-1252");
            let (text, _, _) = WINDOWS_1252.decode(bytes);
            text
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_headers_and_short_rows() {
        let raw = RawTable::parse("flights", "\u{feff}a, b ,c\n1,2,3\n4,5\n").unwrap();

        assert_eq!(raw.headers, vec!["a", "b", "c"]);
        assert_eq!(raw.len(), 2);
        assert_eq!(cell(&raw.rows[1], 1), "5");
        assert_eq!(cell(&raw.rows[1], 2), "");
    }

    #[test]
    fn test_missing_column_names_table() {
        let raw = RawTable::parse("bags", "flight_number\n1\n").unwrap();
        let err = raw.column_index("bag_type").unwrap_err();

        assert!(matches!(err, ProcessingError::MissingColumn { table: "bags", .. }));
        assert_eq!(err.to_string(), "bags table is missing required column 'bag_type'");
        assert!(raw.optional_column_index("bag_type").is_none());
    }

    #[test]
    fn test_unreadable_source() {
        let err = RawTable::read("pnr", Path::new("/definitely/not/here.csv")).unwrap_err();
        assert!(matches!(err, ProcessingError::SourceUnreadable { table: "pnr", .. }));
    }

    #[test]
    fn test_windows_1252_fallback() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        // "Zürich" with a Latin-1 encoded u-umlaut
        file.write_all(b"airport_iata_code,city\nZRH,Z\xfcrich\n")?;

        let raw = RawTable::read("airports", file.path())?;
        assert_eq!(cell(&raw.rows[0], 1), "Zürich");

        Ok(())
    }
}
