//! Session-scoped choice store.
//!
//! The store records, per column, the ordered actions a user selected. It
//! lives as long as the session that owns it and is handed to the
//! transformation engine by reference.
//!
//! # Usage
//!
//! ```no_run
//! use refinery::Action;
//! use refinery::choice::{choices_path, ChoiceStore};
//!
//! let path = choices_path("features.csv");
//! let mut choices = ChoiceStore::load_or_default(&path).unwrap();
//!
//! choices.set("status", vec![Action::Lowercase, Action::ReplaceValues]);
//! choices.save(&path).unwrap();
//! ```

mod persistence;
mod store;

pub use persistence::{choices_path, CHOICES_FORMAT_VERSION};
pub use store::ChoiceStore;
