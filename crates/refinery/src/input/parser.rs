//! CSV parser producing typed tables.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use sha2::{Digest, Sha256};
use tracing::{debug, info};

use super::source::SourceMetadata;
use crate::error::{RefineryError, Result};
use crate::table::{parse_number, Cell, Column, ColumnKind, Table};

/// Parser configuration.
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Field delimiter.
    pub delimiter: u8,
    /// Whether the file has a header row.
    pub has_header: bool,
    /// Maximum rows to read (None = all).
    pub max_rows: Option<usize>,
    /// Quote character.
    pub quote: u8,
    /// Cell values (after trimming) read as missing.
    ///
    /// Only the empty string by default, so literal markers such as `NA`
    /// stay text until an action normalizes them.
    pub missing_values: Vec<String>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            has_header: true,
            max_rows: None,
            quote: b'"',
            missing_values: vec![String::new()],
        }
    }
}

impl ParserConfig {
    /// Set the delimiter.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Limit the number of rows read.
    pub fn with_max_rows(mut self, max_rows: usize) -> Self {
        self.max_rows = Some(max_rows);
        self
    }

    /// Replace the set of values read as missing.
    pub fn with_missing_values<S: Into<String>>(
        mut self,
        values: impl IntoIterator<Item = S>,
    ) -> Self {
        self.missing_values = values.into_iter().map(Into::into).collect();
        self
    }

    fn is_missing(&self, value: &str) -> bool {
        let trimmed = value.trim();
        self.missing_values.iter().any(|m| m == trimmed)
    }
}

/// Parses CSV files into [`Table`]s.
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    /// Create a new parser with default configuration.
    pub fn new() -> Self {
        Self {
            config: ParserConfig::default(),
        }
    }

    /// Create a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Parse a file and return the table and its metadata.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<(Table, SourceMetadata)> {
        let path = path.as_ref();

        let mut file = File::open(path).map_err(|e| RefineryError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut contents = Vec::new();
        file.read_to_end(&mut contents)
            .map_err(|e| RefineryError::Io {
                path: path.to_path_buf(),
                source: e,
            })?;

        let mut hasher = Sha256::new();
        hasher.update(&contents);
        let hash = format!("sha256:{:x}", hasher.finalize());

        let table = self.parse_bytes(&contents)?;

        let metadata = SourceMetadata::new(
            path.to_path_buf(),
            hash,
            contents.len() as u64,
            table.row_count(),
            table.column_count(),
        );

        info!(
            file = %metadata.file,
            rows = metadata.row_count,
            columns = metadata.column_count,
            "loaded table"
        );

        Ok((table, metadata))
    }

    /// Parse CSV text held in memory.
    pub fn parse_str(&self, text: &str) -> Result<Table> {
        self.parse_bytes(text.as_bytes())
    }

    /// Parse bytes directly.
    fn parse_bytes(&self, bytes: &[u8]) -> Result<Table> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.config.delimiter)
            .has_headers(self.config.has_header)
            .quote(self.config.quote)
            .flexible(true)
            .from_reader(bytes);

        let mut rows: Vec<Vec<String>> = Vec::new();
        for (row_idx, result) in reader.records().enumerate() {
            if let Some(max) = self.config.max_rows {
                if row_idx >= max {
                    break;
                }
            }
            let record = result?;
            rows.push(record.iter().map(|s| s.to_string()).collect());
        }

        let headers: Vec<String> = if self.config.has_header {
            reader.headers()?.iter().map(|s| s.to_string()).collect()
        } else {
            let width = rows.first().map(Vec::len).unwrap_or(0);
            (0..width).map(|i| format!("column_{}", i + 1)).collect()
        };

        if headers.is_empty() || headers.iter().all(|h| h.is_empty()) {
            return Err(RefineryError::EmptyData("No columns found".to_string()));
        }
        if rows.is_empty() {
            return Err(RefineryError::EmptyData("No data rows found".to_string()));
        }

        let columns = headers
            .iter()
            .enumerate()
            .map(|(idx, name)| {
                let raw = rows.iter().map(|row| row.get(idx).map(String::as_str));
                self.build_column(name, raw)
            })
            .collect();

        Table::new(columns)
    }

    /// Build a typed column from raw field values.
    ///
    /// Short rows contribute missing cells; extra fields are ignored.
    fn build_column<'a>(
        &self,
        name: &str,
        raw: impl Iterator<Item = Option<&'a str>>,
    ) -> Column {
        let values: Vec<Option<&str>> = raw
            .map(|v| v.filter(|s| !self.config.is_missing(s)))
            .collect();

        let numeric = values.iter().flatten().all(|v| parse_number(v).is_some());

        let (kind, cells) = if numeric {
            let cells = values
                .iter()
                .map(|v| v.and_then(parse_number).map(Cell::Number).unwrap_or(Cell::Missing))
                .collect();
            (ColumnKind::Numeric, cells)
        } else {
            let cells = values
                .iter()
                .map(|v| v.map(Cell::text).unwrap_or(Cell::Missing))
                .collect();
            (ColumnKind::Text, cells)
        };

        debug!(column = name, kind = %kind, "inferred column kind");
        Column::new(name, kind, cells)
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}
