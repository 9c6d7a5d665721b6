//! Column profiler producing one suggestion per column.
//!
//! The profiler never mutates the table. Suggestions are a pure function of
//! the table they are computed from.

use indexmap::IndexMap;
use tracing::debug;

use crate::table::Table;

use super::ColumnSummary;

/// Suggestions keyed by column name, in table column order.
pub type Suggestions = IndexMap<String, String>;

/// Derives cleaning suggestions from column kinds and contents.
pub struct ColumnProfiler;

impl ColumnProfiler {
    /// Summarize every column in table order.
    pub fn summarize(table: &Table) -> Vec<ColumnSummary> {
        table.columns().iter().map(ColumnSummary::from_column).collect()
    }

    /// Generate the suggestion for each column that matches a rule.
    ///
    /// Columns with no matching rule are absent from the result.
    pub fn profile(table: &Table) -> Suggestions {
        let suggestions: Suggestions = Self::summarize(table)
            .into_iter()
            .filter_map(|summary| {
                let suggestion = summary.suggestion()?;
                Some((summary.name, suggestion))
            })
            .collect();

        debug!(
            columns = table.column_count(),
            suggestions = suggestions.len(),
            "profiled table"
        );

        suggestions
    }
}
