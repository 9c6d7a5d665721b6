//! Table definition.

use std::collections::HashSet;

use serde::Serialize;

use crate::error::{RefineryError, Result};

use super::column::Column;
use super::types::Cell;

/// An ordered set of uniquely named columns of equal length.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    columns: Vec<Column>,
}

impl Table {
    /// Create a table, checking that names are unique, lengths agree and
    /// every cell fits its column's kind.
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        let mut seen = HashSet::new();
        for column in &columns {
            if !seen.insert(column.name.as_str()) {
                return Err(RefineryError::DuplicateColumn(column.name.clone()));
            }
            if let Some(row) = column.first_kind_mismatch() {
                return Err(RefineryError::CellKind {
                    column: column.name.clone(),
                    kind: column.kind,
                    row,
                });
            }
        }

        if let Some(first) = columns.first() {
            let expected = first.len();
            if let Some(bad) = columns.iter().find(|c| c.len() != expected) {
                return Err(RefineryError::ColumnLength {
                    column: bad.name.clone(),
                    expected,
                    found: bad.len(),
                });
            }
        }

        Ok(Self { columns })
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.columns.first().map(Column::len).unwrap_or(0)
    }

    /// All columns in position order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// All column names in position order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Get a column's position by name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    /// Get a column by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Get a specific cell.
    pub fn get(&self, row: usize, column: &str) -> Option<&Cell> {
        self.column(column).and_then(|c| c.cells.get(row))
    }

    /// Get all cells of one row, in column order.
    pub fn row(&self, row: usize) -> Option<Vec<&Cell>> {
        if row >= self.row_count() {
            return None;
        }
        Some(self.columns.iter().map(|c| &c.cells[row]).collect())
    }

    /// Build a single-column table holding a copy of the named column.
    pub fn select(&self, name: &str) -> Option<Table> {
        self.column(name).map(|c| Table {
            columns: vec![c.clone()],
        })
    }

    /// Mutable access to a column. Callers must not change its length.
    pub(crate) fn column_mut(&mut self, index: usize) -> &mut Column {
        &mut self.columns[index]
    }

    /// Remove a column by name, returning it.
    pub(crate) fn remove_column(&mut self, name: &str) -> Option<Column> {
        let index = self.column_index(name)?;
        Some(self.columns.remove(index))
    }

    /// Keep only rows whose flag is true, across every column.
    pub(crate) fn retain_rows(&mut self, keep: &[bool]) {
        for column in &mut self.columns {
            let mut flags = keep.iter();
            column.cells.retain(|_| *flags.next().unwrap_or(&true));
        }
    }
}
