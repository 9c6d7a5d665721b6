//! Column definition.

use serde::{Deserialize, Serialize};

use super::statistics::NumericStatistics;
use super::types::{parse_number, Cell, ColumnKind};

/// A named column of cells with a declared kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    /// Column name, unique within a table.
    pub name: String,
    /// Declared kind.
    pub kind: ColumnKind,
    /// Cell values in row order.
    pub cells: Vec<Cell>,
}

impl Column {
    /// Create a column from raw parts.
    ///
    /// Cells are not checked here; [`Table::new`](super::Table::new) rejects
    /// columns whose cells do not fit their kind.
    pub fn new(name: impl Into<String>, kind: ColumnKind, cells: Vec<Cell>) -> Self {
        Self {
            name: name.into(),
            kind,
            cells,
        }
    }

    /// Position of the first cell that does not fit the declared kind.
    ///
    /// Numeric columns hold numbers or missing cells; text columns hold text
    /// or missing cells.
    pub fn first_kind_mismatch(&self) -> Option<usize> {
        self.cells.iter().position(|cell| match (self.kind, cell) {
            (_, Cell::Missing) => false,
            (ColumnKind::Numeric, Cell::Number(_)) => false,
            (ColumnKind::Text, Cell::Text(_)) => false,
            _ => true,
        })
    }

    /// Create a numeric column; `None` entries become missing.
    pub fn numeric(name: impl Into<String>, values: impl IntoIterator<Item = Option<f64>>) -> Self {
        let cells = values.into_iter().map(Cell::from).collect();
        Self::new(name, ColumnKind::Numeric, cells)
    }

    /// Create a text column; `None` entries become missing.
    pub fn text<S: Into<String>>(
        name: impl Into<String>,
        values: impl IntoIterator<Item = Option<S>>,
    ) -> Self {
        let cells = values
            .into_iter()
            .map(|v| v.map(|s| Cell::Text(s.into())).unwrap_or(Cell::Missing))
            .collect();
        Self::new(name, ColumnKind::Text, cells)
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if the column has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of missing cells.
    pub fn missing_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_missing()).count()
    }

    /// Number of present cells that do not parse as a number.
    pub fn unparseable_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|c| match c {
                Cell::Text(s) => parse_number(s).is_none(),
                _ => false,
            })
            .count()
    }

    /// Present numeric values in row order.
    pub fn present_numbers(&self) -> Vec<f64> {
        self.cells.iter().filter_map(Cell::as_number).collect()
    }

    /// Summary statistics over the present numeric values.
    pub fn numeric_statistics(&self) -> Option<NumericStatistics> {
        NumericStatistics::from_values(&self.present_numbers())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts() {
        let col = Column::text("code", [Some("12"), None, Some("x3"), Some("45")]);
        assert_eq!(col.len(), 4);
        assert_eq!(col.missing_count(), 1);
        assert_eq!(col.unparseable_count(), 1);
    }

    #[test]
    fn test_numeric_column() {
        let col = Column::numeric("age", [Some(25.0), None, Some(40.0)]);
        assert_eq!(col.kind, ColumnKind::Numeric);
        assert_eq!(col.present_numbers(), vec![25.0, 40.0]);
        assert_eq!(col.unparseable_count(), 0);
    }

    #[test]
    fn test_first_kind_mismatch() {
        assert_eq!(Column::numeric("n", [Some(1.0), None]).first_kind_mismatch(), None);

        let mixed = Column::new(
            "n",
            ColumnKind::Numeric,
            vec![Cell::Number(1.0), Cell::text("x")],
        );
        assert_eq!(mixed.first_kind_mismatch(), Some(1));

        let text = Column::new("t", ColumnKind::Text, vec![Cell::Missing, Cell::Number(2.0)]);
        assert_eq!(text.first_kind_mismatch(), Some(1));
    }
}
