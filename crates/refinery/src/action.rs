//! Catalog of named column actions.
//!
//! The catalog is fixed. Each action declares which column kinds it accepts;
//! the transformation engine checks that before running the effect.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RefineryError;
use crate::table::ColumnKind;

/// A named transformation applicable to one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Action {
    /// Lowercase every text value.
    Lowercase,
    /// Turn values that are not numbers into missing; the column becomes numeric.
    RemoveNoisy,
    /// Parse every value as a number; failures become missing.
    ToNumeric,
    /// Fill missing values with the column mean.
    ImputeMean,
    /// Fill missing values with the column median.
    ImputeMedian,
    /// Replace textual missing markers with real missing values.
    MarkMissing,
    /// Remove the column from the result.
    DeleteColumn,
    /// Min-max scale into `[0, 1]`.
    Normalize,
    /// Z-score scaling.
    Standardize,
    /// Replace literal `NaN`/`NA` text with `Unknown`.
    ReplaceValues,
    /// Drop rows repeating an earlier row's value in this column.
    DropDuplicateRows,
}

/// Which column kinds an action accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Applicability {
    Any,
    Numeric,
    Text,
}

impl Applicability {
    /// Check whether a column of the given kind is accepted.
    pub fn accepts(&self, kind: ColumnKind) -> bool {
        match self {
            Applicability::Any => true,
            Applicability::Numeric => kind == ColumnKind::Numeric,
            Applicability::Text => kind == ColumnKind::Text,
        }
    }

    /// Get a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Applicability::Any => "any",
            Applicability::Numeric => "numeric",
            Applicability::Text => "text",
        }
    }
}

impl Action {
    /// Every action in catalog order.
    pub const ALL: [Action; 11] = [
        Action::Lowercase,
        Action::RemoveNoisy,
        Action::ToNumeric,
        Action::ImputeMean,
        Action::ImputeMedian,
        Action::MarkMissing,
        Action::DeleteColumn,
        Action::Normalize,
        Action::Standardize,
        Action::ReplaceValues,
        Action::DropDuplicateRows,
    ];

    /// The canonical name, as used in choice files and on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Action::Lowercase => "lowercase",
            Action::RemoveNoisy => "remove-noisy",
            Action::ToNumeric => "to-numeric",
            Action::ImputeMean => "impute-mean",
            Action::ImputeMedian => "impute-median",
            Action::MarkMissing => "mark-missing",
            Action::DeleteColumn => "delete-column",
            Action::Normalize => "normalize",
            Action::Standardize => "standardize",
            Action::ReplaceValues => "replace-values",
            Action::DropDuplicateRows => "drop-duplicate-rows",
        }
    }

    /// Short description for display.
    pub fn description(&self) -> &'static str {
        match self {
            Action::Lowercase => "Convert strings to lowercase",
            Action::RemoveNoisy => "Remove noisy values (non-numbers become missing)",
            Action::ToNumeric => "Convert to numeric",
            Action::ImputeMean => "Impute missing values with the mean",
            Action::ImputeMedian => "Impute missing values with the median",
            Action::MarkMissing => "Mark textual missing markers as missing",
            Action::DeleteColumn => "Delete column",
            Action::Normalize => "Normalize (min-max)",
            Action::Standardize => "Standardize (z-score)",
            Action::ReplaceValues => "Replace NaN/NA text with 'Unknown'",
            Action::DropDuplicateRows => "Drop rows with duplicate values",
        }
    }

    /// Column kinds this action accepts.
    pub fn applicability(&self) -> Applicability {
        match self {
            Action::Lowercase | Action::RemoveNoisy | Action::ReplaceValues => Applicability::Text,
            Action::ImputeMean
            | Action::ImputeMedian
            | Action::Normalize
            | Action::Standardize => Applicability::Numeric,
            Action::ToNumeric
            | Action::MarkMissing
            | Action::DeleteColumn
            | Action::DropDuplicateRows => Applicability::Any,
        }
    }

    /// Check whether this action accepts a column of the given kind.
    pub fn applies_to(&self, kind: ColumnKind) -> bool {
        self.applicability().accepts(kind)
    }

    /// Parse a comma-separated list of action names.
    pub fn parse_list(list: &str) -> Result<Vec<Action>, RefineryError> {
        list.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| s.parse::<Action>())
            .collect()
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Action {
    type Err = RefineryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Action::ALL
            .iter()
            .copied()
            .find(|a| a.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| RefineryError::UnknownAction(trimmed.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for action in Action::ALL {
            assert_eq!(action.name().parse::<Action>().unwrap(), action);
        }
    }

    #[test]
    fn test_serde_matches_name() {
        for action in Action::ALL {
            let json = serde_json::to_string(&action).unwrap();
            assert_eq!(json, format!("\"{}\"", action.name()));
        }
    }

    #[test]
    fn test_unknown_action() {
        let err = "delete-rows".parse::<Action>().unwrap_err();
        assert!(matches!(err, RefineryError::UnknownAction(name) if name == "delete-rows"));
    }

    #[test]
    fn test_applicability() {
        assert!(Action::Lowercase.applies_to(ColumnKind::Text));
        assert!(!Action::Lowercase.applies_to(ColumnKind::Numeric));
        assert!(Action::ImputeMean.applies_to(ColumnKind::Numeric));
        assert!(!Action::Normalize.applies_to(ColumnKind::Text));
        assert!(Action::DeleteColumn.applies_to(ColumnKind::Text));
        assert!(Action::ToNumeric.applies_to(ColumnKind::Numeric));
    }

    #[test]
    fn test_parse_list() {
        let actions = Action::parse_list("lowercase, replace-values,,").unwrap();
        assert_eq!(actions, vec![Action::Lowercase, Action::ReplaceValues]);
        assert!(Action::parse_list("lowercase,bogus").is_err());
    }
}
