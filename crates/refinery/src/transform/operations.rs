//! Results of applying actions to a table.

use serde::Serialize;

use crate::action::Action;
use crate::table::{Column, Table};

use super::diagnostic::Diagnostic;

/// A single applied action.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransformChange {
    /// Column affected.
    pub column: String,
    /// Action applied.
    pub action: Action,
    /// Description of the change.
    pub description: String,
    /// Number of cells given a different value.
    ///
    /// Type conversions that keep the value (`"12"` to `12`) are not counted.
    pub values_changed: usize,
    /// Number of rows removed from the table.
    pub rows_removed: usize,
    /// Whether the column was removed.
    pub column_removed: bool,
}

impl TransformChange {
    /// Create a change that modified cell values.
    pub fn values(
        column: impl Into<String>,
        action: Action,
        values_changed: usize,
        description: impl Into<String>,
    ) -> Self {
        Self {
            column: column.into(),
            action,
            description: description.into(),
            values_changed,
            rows_removed: 0,
            column_removed: false,
        }
    }

    /// Create a change that removed rows.
    pub fn rows(
        column: impl Into<String>,
        action: Action,
        rows_removed: usize,
        description: impl Into<String>,
    ) -> Self {
        Self {
            rows_removed,
            ..Self::values(column, action, 0, description)
        }
    }

    /// Create a change that removed the column.
    pub fn removed(column: impl Into<String>, action: Action) -> Self {
        let column = column.into();
        let description = format!("Deleted column '{}'", column);
        Self {
            column_removed: true,
            ..Self::values(column, action, 0, description)
        }
    }
}

/// Result of running the engine: a new table plus what happened on the way.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransformOutcome {
    /// The transformed copy.
    pub table: Table,
    /// Actions that were skipped, in execution order.
    pub diagnostics: Vec<Diagnostic>,
    /// Actions that were applied, in execution order.
    pub changes: Vec<TransformChange>,
}

impl TransformOutcome {
    /// Start from a copy of the input table.
    pub fn new(table: Table) -> Self {
        Self {
            table,
            diagnostics: Vec::new(),
            changes: Vec::new(),
        }
    }

    /// Record an applied action.
    pub fn add_change(&mut self, change: TransformChange) {
        self.changes.push(change);
    }

    /// Record a skipped action.
    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Check if any action was skipped.
    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Total cells changed across all actions.
    pub fn values_changed(&self) -> usize {
        self.changes.iter().map(|c| c.values_changed).sum()
    }

    /// Total rows removed across all actions.
    pub fn rows_removed(&self) -> usize {
        self.changes.iter().map(|c| c.rows_removed).sum()
    }
}

/// Before and after views of one column for a live preview.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnPreview {
    /// Column name.
    pub column: String,
    /// The column in the original table, if it exists there.
    pub before: Option<Column>,
    /// The column after its actions ran; `None` once deleted.
    pub after: Option<Column>,
    /// Actions skipped while building the preview.
    pub diagnostics: Vec<Diagnostic>,
}

impl ColumnPreview {
    /// Check if the actions removed the column.
    pub fn is_deleted(&self) -> bool {
        self.before.is_some() && self.after.is_none()
    }
}
