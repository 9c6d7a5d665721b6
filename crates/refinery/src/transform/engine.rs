//! Transformation engine that applies selected actions to a table copy.

use std::collections::HashSet;

use tracing::{debug, info, warn};

use crate::action::Action;
use crate::choice::ChoiceStore;
use crate::table::{is_missing_marker, Cell, Column, ColumnKind, NumericStatistics, Table};

use super::diagnostic::Diagnostic;
use super::operations::{ColumnPreview, TransformChange, TransformOutcome};

/// Text values replaced by `replace-values`.
const REPLACED_MARKERS: &[&str] = &["NaN", "NA"];

/// Replacement written by `replace-values`.
const REPLACEMENT_VALUE: &str = "Unknown";

type Step = std::result::Result<TransformChange, Diagnostic>;

/// Engine for applying per-column action lists.
///
/// The input table is never modified; every run works on its own copy.
pub struct TransformEngine;

impl TransformEngine {
    /// Create a new transform engine.
    pub fn new() -> Self {
        Self
    }

    /// Apply every column's actions, in choice order, to a copy of `table`.
    pub fn apply(&self, table: &Table, choices: &ChoiceStore) -> TransformOutcome {
        let mut outcome = TransformOutcome::new(table.clone());

        for (column, actions) in choices.iter() {
            self.run_column(&mut outcome, column, actions);
        }

        info!(
            columns = choices.len(),
            applied = outcome.changes.len(),
            skipped = outcome.diagnostics.len(),
            "applied choices"
        );
        outcome
    }

    /// Apply one column's actions to a copy of `table`.
    pub fn apply_column(&self, table: &Table, column: &str, actions: &[Action]) -> TransformOutcome {
        let mut outcome = TransformOutcome::new(table.clone());
        self.run_column(&mut outcome, column, actions);
        outcome
    }

    /// Before and after views of one column under the given actions.
    pub fn preview(&self, table: &Table, column: &str, actions: &[Action]) -> ColumnPreview {
        let outcome = self.apply_column(table, column, actions);
        ColumnPreview {
            column: column.to_string(),
            before: table.column(column).cloned(),
            after: outcome.table.column(column).cloned(),
            diagnostics: outcome.diagnostics,
        }
    }

    /// Run a column's actions in order against the working copy.
    fn run_column(&self, outcome: &mut TransformOutcome, column: &str, actions: &[Action]) {
        for &action in actions {
            let Some(index) = outcome.table.column_index(column) else {
                debug!(column, action = %action, "column not present, skipping");
                continue;
            };

            match self.apply_action(action, index, &mut outcome.table) {
                Ok(change) => {
                    debug!(
                        column,
                        action = %action,
                        values_changed = change.values_changed,
                        rows_removed = change.rows_removed,
                        "applied action"
                    );
                    outcome.add_change(change);
                }
                Err(diagnostic) => {
                    warn!(column, action = %action, "{}", diagnostic);
                    outcome.add_diagnostic(diagnostic);
                }
            }
        }
    }

    /// Apply a single action to the column at `index`.
    fn apply_action(&self, action: Action, index: usize, table: &mut Table) -> Step {
        let column = &table.columns()[index];
        if !action.applies_to(column.kind) {
            return Err(Diagnostic::type_mismatch(&column.name, action, column.kind));
        }

        match action {
            Action::Lowercase => Ok(self.apply_lowercase(table.column_mut(index))),
            Action::RemoveNoisy | Action::ToNumeric => {
                Ok(self.apply_to_numeric(action, table.column_mut(index)))
            }
            Action::ImputeMean => self.apply_impute(action, table.column_mut(index), |s| s.mean),
            Action::ImputeMedian => {
                self.apply_impute(action, table.column_mut(index), |s| s.median)
            }
            Action::MarkMissing => Ok(self.apply_mark_missing(table.column_mut(index))),
            Action::DeleteColumn => Ok(self.apply_delete(action, index, table)),
            Action::Normalize => self.apply_normalize(table.column_mut(index)),
            Action::Standardize => self.apply_standardize(table.column_mut(index)),
            Action::ReplaceValues => Ok(self.apply_replace_values(table.column_mut(index))),
            Action::DropDuplicateRows => Ok(self.apply_drop_duplicates(index, table)),
        }
    }

    /// Lowercase every text value.
    fn apply_lowercase(&self, column: &mut Column) -> TransformChange {
        let mut changed = 0;
        for cell in &mut column.cells {
            if let Cell::Text(value) = cell {
                let lower = value.to_lowercase();
                if lower != *value {
                    *value = lower;
                    changed += 1;
                }
            }
        }

        TransformChange::values(
            &column.name,
            Action::Lowercase,
            changed,
            format!("Lowercased {} value(s) in '{}'", changed, column.name),
        )
    }

    /// Parse every value as a number; failures become missing.
    fn apply_to_numeric(&self, action: Action, column: &mut Column) -> TransformChange {
        if column.kind == ColumnKind::Numeric {
            return TransformChange::values(
                &column.name,
                action,
                0,
                format!("Column '{}' is already numeric", column.name),
            );
        }

        let mut failed = 0;
        for cell in &mut column.cells {
            let converted = cell.to_numeric();
            if converted.is_missing() && !cell.is_missing() {
                failed += 1;
            }
            *cell = converted;
        }
        column.kind = ColumnKind::Numeric;

        TransformChange::values(
            &column.name,
            action,
            failed,
            format!(
                "Converted '{}' to numeric; {} unparseable value(s) set to missing",
                column.name, failed
            ),
        )
    }

    /// Fill missing values with a statistic of the present values.
    fn apply_impute(
        &self,
        action: Action,
        column: &mut Column,
        statistic: impl Fn(&NumericStatistics) -> f64,
    ) -> Step {
        let stats = column
            .numeric_statistics()
            .ok_or_else(|| Diagnostic::degenerate(&column.name, action, "column has no values"))?;
        let fill = statistic(&stats);
        if !fill.is_finite() {
            return Err(Diagnostic::degenerate(
                &column.name,
                action,
                "statistic is not a finite number",
            ));
        }

        let mut filled = 0;
        for cell in &mut column.cells {
            if cell.is_missing() {
                *cell = Cell::Number(fill);
                filled += 1;
            }
        }

        Ok(TransformChange::values(
            &column.name,
            action,
            filled,
            format!(
                "Filled {} missing value(s) in '{}' with {}",
                filled, column.name, fill
            ),
        ))
    }

    /// Replace textual missing markers with real missing values.
    fn apply_mark_missing(&self, column: &mut Column) -> TransformChange {
        let mut marked = 0;
        for cell in &mut column.cells {
            if cell.as_text().is_some_and(is_missing_marker) {
                *cell = Cell::Missing;
                marked += 1;
            }
        }

        TransformChange::values(
            &column.name,
            Action::MarkMissing,
            marked,
            format!("Marked {} value(s) in '{}' as missing", marked, column.name),
        )
    }

    /// Remove the column from the table.
    fn apply_delete(&self, action: Action, index: usize, table: &mut Table) -> TransformChange {
        let name = table.columns()[index].name.clone();
        table.remove_column(&name);
        TransformChange::removed(name, action)
    }

    /// Min-max scale present values into `[0, 1]`.
    fn apply_normalize(&self, column: &mut Column) -> Step {
        let action = Action::Normalize;
        let stats = column
            .numeric_statistics()
            .ok_or_else(|| Diagnostic::degenerate(&column.name, action, "column has no values"))?;
        if stats.range() == 0.0 {
            return Err(Diagnostic::degenerate(
                &column.name,
                action,
                format!("max equals min ({})", stats.min),
            ));
        }
        if !stats.has_usable_range() {
            return Err(Diagnostic::degenerate(
                &column.name,
                action,
                format!("range from {} to {} overflows", stats.min, stats.max),
            ));
        }

        let changed = scale_cells(column, |x| stats.min_max(x)).ok_or_else(|| {
            Diagnostic::degenerate(&column.name, action, "scaled values overflow")
        })?;
        Ok(TransformChange::values(
            &column.name,
            action,
            changed,
            format!(
                "Normalized '{}' from [{}, {}] to [0, 1]",
                column.name, stats.min, stats.max
            ),
        ))
    }

    /// Z-score present values.
    fn apply_standardize(&self, column: &mut Column) -> Step {
        let action = Action::Standardize;
        let stats = column
            .numeric_statistics()
            .ok_or_else(|| Diagnostic::degenerate(&column.name, action, "column has no values"))?;
        if stats.std == 0.0 {
            return Err(Diagnostic::degenerate(
                &column.name,
                action,
                "standard deviation is zero",
            ));
        }
        if !stats.has_usable_std() {
            return Err(Diagnostic::degenerate(
                &column.name,
                action,
                "standard deviation overflows",
            ));
        }

        let changed = scale_cells(column, |x| stats.z_score(x)).ok_or_else(|| {
            Diagnostic::degenerate(&column.name, action, "scaled values overflow")
        })?;
        Ok(TransformChange::values(
            &column.name,
            action,
            changed,
            format!(
                "Standardized '{}' (mean {}, std {})",
                column.name, stats.mean, stats.std
            ),
        ))
    }

    /// Replace literal `NaN`/`NA` text with `Unknown`.
    fn apply_replace_values(&self, column: &mut Column) -> TransformChange {
        let mut replaced = 0;
        for cell in &mut column.cells {
            if cell.as_text().is_some_and(|v| REPLACED_MARKERS.contains(&v)) {
                *cell = Cell::text(REPLACEMENT_VALUE);
                replaced += 1;
            }
        }

        TransformChange::values(
            &column.name,
            Action::ReplaceValues,
            replaced,
            format!(
                "Replaced {} value(s) in '{}' with '{}'",
                replaced, column.name, REPLACEMENT_VALUE
            ),
        )
    }

    /// Drop rows whose value repeats an earlier row's value in this column.
    fn apply_drop_duplicates(&self, index: usize, table: &mut Table) -> TransformChange {
        let (name, keep) = {
            let column = &table.columns()[index];
            let mut seen = HashSet::new();
            let keep: Vec<bool> = column
                .cells
                .iter()
                .map(|cell| seen.insert(CellKey::from(cell)))
                .collect();
            (column.name.clone(), keep)
        };
        let removed = keep.iter().filter(|k| !**k).count();

        table.retain_rows(&keep);

        TransformChange::rows(
            &name,
            Action::DropDuplicateRows,
            removed,
            format!("Dropped {} duplicate row(s) by '{}'", removed, name),
        )
    }
}

impl Default for TransformEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Apply `scale` to every present number, returning how many changed.
///
/// Leaves the column untouched and returns `None` if any value cannot be
/// scaled.
fn scale_cells(column: &mut Column, scale: impl Fn(f64) -> Option<f64>) -> Option<usize> {
    let scaled: Vec<Option<f64>> = column
        .cells
        .iter()
        .map(|cell| match cell {
            Cell::Number(value) => scale(*value).map(Some),
            _ => Some(None),
        })
        .collect::<Option<_>>()?;

    let mut changed = 0;
    for (cell, scaled) in column.cells.iter_mut().zip(scaled) {
        if let (Cell::Number(value), Some(scaled)) = (cell, scaled) {
            if scaled != *value {
                changed += 1;
            }
            *value = scaled;
        }
    }
    Some(changed)
}

/// Hashable identity of a cell for duplicate detection.
#[derive(Debug, PartialEq, Eq, Hash)]
enum CellKey<'a> {
    Missing,
    Number(u64),
    Text(&'a str),
}

impl<'a> From<&'a Cell> for CellKey<'a> {
    fn from(cell: &'a Cell) -> Self {
        match cell {
            Cell::Missing => CellKey::Missing,
            // Adding zero folds -0.0 into 0.0.
            Cell::Number(n) => CellKey::Number((n + 0.0).to_bits()),
            Cell::Text(s) => CellKey::Text(s),
        }
    }
}
