//! Core cell and column kind definitions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Declared kind of a column.
///
/// The kind belongs to the column, not to individual cells: a `Text` column
/// may still hold values that happen to look numeric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    /// Floating-point values.
    Numeric,
    /// Free text values.
    Text,
}

impl ColumnKind {
    /// Get a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            ColumnKind::Numeric => "Numeric",
            ColumnKind::Text => "Text",
        }
    }

    /// Returns true if this kind is numeric.
    pub fn is_numeric(&self) -> bool {
        matches!(self, ColumnKind::Numeric)
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single value in a column.
///
/// Serializes as `null`, a JSON number or a JSON string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    /// The canonical absence marker.
    Missing,
    /// A numeric value.
    Number(f64),
    /// A text value.
    Text(String),
}

impl Cell {
    /// Create a text cell.
    pub fn text(value: impl Into<String>) -> Self {
        Cell::Text(value.into())
    }

    /// Check if this cell is the canonical missing value.
    pub fn is_missing(&self) -> bool {
        matches!(self, Cell::Missing)
    }

    /// Get the numeric value, if this is a number cell.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get the text value, if this is a text cell.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Convert this cell to a number cell.
    ///
    /// Text that does not parse becomes missing. Numbers pass through.
    pub fn to_numeric(&self) -> Cell {
        match self {
            Cell::Missing => Cell::Missing,
            Cell::Number(n) => Cell::Number(*n),
            Cell::Text(s) => parse_number(s).map(Cell::Number).unwrap_or(Cell::Missing),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Missing => Ok(()),
            Cell::Number(n) => write!(f, "{}", n),
            Cell::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Number(value)
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Text(value)
    }
}

impl<T: Into<Cell>> From<Option<T>> for Cell {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Cell::Missing)
    }
}

/// Parse a text value as a finite number.
///
/// Surrounding whitespace is ignored. `NaN` and infinities are not numbers
/// for cleaning purposes.
pub fn parse_number(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
}

/// Check if a text value is a textual spelling of a missing value.
pub fn is_missing_marker(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.is_empty()
        || trimmed.eq_ignore_ascii_case("na")
        || trimmed.eq_ignore_ascii_case("n/a")
        || trimmed.eq_ignore_ascii_case("nan")
        || trimmed.eq_ignore_ascii_case("null")
        || trimmed.eq_ignore_ascii_case("none")
        || trimmed.eq_ignore_ascii_case("nil")
        || trimmed == "."
        || trimmed == "-"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("12"), Some(12.0));
        assert_eq!(parse_number(" 4.5 "), Some(4.5));
        assert_eq!(parse_number("1e3"), Some(1000.0));
        assert_eq!(parse_number("-7"), Some(-7.0));
        assert_eq!(parse_number("x3"), None);
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("inf"), None);
    }

    #[test]
    fn test_is_missing_marker() {
        assert!(is_missing_marker(""));
        assert!(is_missing_marker("NA"));
        assert!(is_missing_marker("n/a"));
        assert!(is_missing_marker("NaN"));
        assert!(is_missing_marker(" null "));
        assert!(is_missing_marker("."));
        assert!(!is_missing_marker("value"));
        assert!(!is_missing_marker("0"));
    }

    #[test]
    fn test_cell_display() {
        assert_eq!(Cell::Number(32.5).to_string(), "32.5");
        assert_eq!(Cell::Number(25.0).to_string(), "25");
        assert_eq!(Cell::Missing.to_string(), "");
        assert_eq!(Cell::text("abc").to_string(), "abc");
    }

    #[test]
    fn test_cell_serde() {
        let cells = vec![Cell::Missing, Cell::Number(1.5), Cell::text("a")];
        let json = serde_json::to_string(&cells).unwrap();
        assert_eq!(json, r#"[null,1.5,"a"]"#);

        let back: Vec<Cell> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cells);
    }

    #[test]
    fn test_to_numeric() {
        assert_eq!(Cell::text("12").to_numeric(), Cell::Number(12.0));
        assert_eq!(Cell::text("x3").to_numeric(), Cell::Missing);
        assert_eq!(Cell::Missing.to_numeric(), Cell::Missing);
    }
}
