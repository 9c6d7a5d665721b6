//! Non-fatal diagnostics produced while applying actions.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::action::Action;
use crate::table::ColumnKind;

/// Category of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// The action does not accept the column's kind.
    TypeMismatch,
    /// The statistic the action needs is undefined for this column.
    DegenerateStatistic,
}

impl DiagnosticKind {
    /// Get a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            DiagnosticKind::TypeMismatch => "Type Mismatch",
            DiagnosticKind::DegenerateStatistic => "Degenerate Statistic",
        }
    }
}

/// A skipped action and the reason it was skipped.
///
/// The column is left exactly as it was before the action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Category.
    pub kind: DiagnosticKind,
    /// Column the action targeted.
    pub column: String,
    /// The skipped action.
    pub action: Action,
    /// Human-readable explanation.
    pub message: String,
}

impl Diagnostic {
    /// An action applied to a column of the wrong kind.
    pub fn type_mismatch(column: impl Into<String>, action: Action, found: ColumnKind) -> Self {
        let column = column.into();
        let message = format!(
            "Cannot apply '{}' to column '{}': it requires a {} column, found {}",
            action,
            column,
            action.applicability().label(),
            found.label().to_lowercase()
        );
        Self {
            kind: DiagnosticKind::TypeMismatch,
            column,
            action,
            message,
        }
    }

    /// A statistic needed by the action is undefined (no values, zero spread).
    pub fn degenerate(column: impl Into<String>, action: Action, reason: impl fmt::Display) -> Self {
        let column = column.into();
        let message = format!(
            "Cannot apply '{}' to column '{}': {}",
            action, column, reason
        );
        Self {
            kind: DiagnosticKind::DegenerateStatistic,
            column,
            action,
            message,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_mismatch_message() {
        let diag = Diagnostic::type_mismatch("name", Action::ImputeMean, ColumnKind::Text);
        assert_eq!(diag.kind, DiagnosticKind::TypeMismatch);
        assert_eq!(
            diag.to_string(),
            "Cannot apply 'impute-mean' to column 'name': it requires a numeric column, found text"
        );
    }

    #[test]
    fn test_degenerate_message() {
        let diag = Diagnostic::degenerate("x", Action::Normalize, "max equals min (3)");
        assert_eq!(diag.kind, DiagnosticKind::DegenerateStatistic);
        assert!(diag.message.ends_with("max equals min (3)"));
    }
}
