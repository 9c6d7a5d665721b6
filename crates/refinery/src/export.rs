//! CSV export of transformed tables.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::error::{RefineryError, Result};
use crate::table::Table;

/// File name used when exporting without an explicit output path.
pub const DEFAULT_EXPORT_FILE_NAME: &str = "processed_features.csv";

/// Write a table as CSV: a header row, then one record per row.
///
/// Missing cells become empty fields. No index column is written. A table
/// without columns produces empty output.
pub fn write_csv<W: Write>(table: &Table, writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    if table.column_count() == 0 {
        csv_writer.flush().map_err(csv::Error::from)?;
        return Ok(());
    }

    csv_writer.write_record(table.column_names())?;
    for row in 0..table.row_count() {
        let record = table
            .columns()
            .iter()
            .map(|column| column.cells[row].to_string());
        csv_writer.write_record(record)?;
    }

    csv_writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Write a table to a CSV file, creating or truncating it.
pub fn export_csv(table: &Table, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();

    let file = File::create(path).map_err(|e| RefineryError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    write_csv(table, BufWriter::new(file))?;

    info!(
        path = %path.display(),
        rows = table.row_count(),
        columns = table.column_count(),
        "exported table"
    );
    Ok(())
}

impl Table {
    /// Render the table as CSV text.
    pub fn to_csv_string(&self) -> Result<String> {
        let mut buffer = Vec::new();
        write_csv(self, &mut buffer)?;
        String::from_utf8(buffer)
            .map_err(|e| RefineryError::Persistence(format!("Export produced invalid UTF-8: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Column;

    #[test]
    fn test_write_csv() {
        let table = Table::new(vec![
            Column::numeric("age", [Some(25.0), None, Some(32.5)]),
            Column::text("name", [Some("Ann"), Some("Bo, Jr."), None]),
        ])
        .unwrap();

        let csv = table.to_csv_string().unwrap();
        assert_eq!(csv, "age,name\n25,Ann\n,\"Bo, Jr.\"\n32.5,\n");
    }

    #[test]
    fn test_export_csv_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_EXPORT_FILE_NAME);
        let table = Table::new(vec![Column::numeric("x", [Some(1.0)])]).unwrap();

        export_csv(&table, &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "x\n1\n");
    }

    #[test]
    fn test_write_csv_without_columns_is_empty() {
        use crate::action::Action;
        use crate::choice::ChoiceStore;
        use crate::transform::TransformEngine;

        let table = Table::new(vec![Column::numeric("x", [Some(1.0), Some(2.0)])]).unwrap();
        let choices = ChoiceStore::new().with("x", vec![Action::DeleteColumn]);
        let outcome = TransformEngine::new().apply(&table, &choices);

        assert_eq!(outcome.table.column_count(), 0);
        assert_eq!(outcome.table.to_csv_string().unwrap(), "");
    }
}
