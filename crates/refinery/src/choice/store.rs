//! Per-column action selections for one session.

use indexmap::IndexMap;
use serde::Serialize;

use crate::action::Action;

/// Ordered mapping from column name to the actions selected for it.
///
/// Column insertion order is execution order. Re-selecting a column replaces
/// its list without moving it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ChoiceStore {
    choices: IndexMap<String, Vec<Action>>,
}

impl ChoiceStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Actions selected for a column; empty when nothing was selected.
    pub fn get(&self, column: &str) -> &[Action] {
        self.choices.get(column).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Replace the actions for a column.
    ///
    /// An empty list removes the column's entry.
    pub fn set(&mut self, column: impl Into<String>, actions: Vec<Action>) {
        let column = column.into();
        if actions.is_empty() {
            self.choices.shift_remove(&column);
        } else {
            self.choices.insert(column, actions);
        }
    }

    /// Builder-style [`set`](Self::set).
    pub fn with(mut self, column: impl Into<String>, actions: Vec<Action>) -> Self {
        self.set(column, actions);
        self
    }

    /// Remove a column's entry, returning its actions.
    pub fn remove(&mut self, column: &str) -> Option<Vec<Action>> {
        self.choices.shift_remove(column)
    }

    /// Check if a column has an entry.
    pub fn contains(&self, column: &str) -> bool {
        self.choices.contains_key(column)
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.choices.clear();
    }

    /// Number of columns with selections.
    pub fn len(&self) -> usize {
        self.choices.len()
    }

    /// Check if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }

    /// Entries in execution order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Action])> {
        self.choices
            .iter()
            .map(|(column, actions)| (column.as_str(), actions.as_slice()))
    }

    /// Total number of selected actions across all columns.
    pub fn action_count(&self) -> usize {
        self.choices.values().map(Vec::len).sum()
    }
}

impl<S: Into<String>> FromIterator<(S, Vec<Action>)> for ChoiceStore {
    fn from_iter<I: IntoIterator<Item = (S, Vec<Action>)>>(iter: I) -> Self {
        let mut store = ChoiceStore::new();
        for (column, actions) in iter {
            store.set(column, actions);
        }
        store
    }
}
