//! Per-column summaries and the suggestion rules derived from them.

use serde::{Deserialize, Serialize};

use crate::table::{Column, ColumnKind};

/// Suggestion for text columns.
pub const LOWERCASE_SUGGESTION: &str = "convert strings to lowercase";

/// Suggestion for text columns holding values that are not numbers.
pub const MIXED_VALUES_SUGGESTION: &str =
    "mixed values detected; suggest removing noisy values or converting to numeric";

/// Suggestion for columns with missing cells.
pub fn missing_values_suggestion(count: usize) -> String {
    format!("{} missing values; choose: impute, substitute, or delete", count)
}

/// Counts a suggestion is derived from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSummary {
    /// Column name.
    pub name: String,
    /// Declared kind.
    pub kind: ColumnKind,
    /// Total number of cells.
    pub row_count: usize,
    /// Number of missing cells.
    pub missing_count: usize,
    /// Number of present cells that do not parse as numbers.
    pub unparseable_count: usize,
}

impl ColumnSummary {
    /// Summarize a column.
    pub fn from_column(column: &Column) -> Self {
        Self {
            name: column.name.clone(),
            kind: column.kind,
            row_count: column.len(),
            missing_count: column.missing_count(),
            unparseable_count: column.unparseable_count(),
        }
    }

    /// Check if the column is text with at least one non-numeric value.
    pub fn is_mixed(&self) -> bool {
        self.kind == ColumnKind::Text && self.unparseable_count > 0
    }

    /// The suggestion for this column, if any rule matches.
    ///
    /// Rules run in a fixed order and each match replaces the previous
    /// message: lowercase, then mixed values, then missing values.
    pub fn suggestion(&self) -> Option<String> {
        let mut suggestion = None;

        if self.kind == ColumnKind::Text {
            suggestion = Some(LOWERCASE_SUGGESTION.to_string());
        }

        if self.is_mixed() {
            suggestion = Some(MIXED_VALUES_SUGGESTION.to_string());
        }

        if self.missing_count > 0 {
            suggestion = Some(missing_values_suggestion(self.missing_count));
        }

        suggestion
    }
}
