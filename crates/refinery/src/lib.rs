//! Refinery: column suggestion and transformation engine for tabular data.
//!
//! Refinery profiles each column of a table, suggests a cleaning step, and
//! applies the ordered actions a user picked per column to produce a new
//! table.
//!
//! # Core Principles
//!
//! - **Non-destructive**: The original table is never modified
//! - **Ordered**: Columns run in selection order, actions in list order
//! - **Recoverable**: Actions that cannot run become diagnostics, not errors
//!
//! # Example
//!
//! ```no_run
//! use refinery::{Action, RefineryConfig, Session};
//!
//! let mut session = Session::open("features.csv", RefineryConfig::default()).unwrap();
//!
//! for (column, suggestion) in session.suggestions() {
//!     println!("{}: {}", column, suggestion);
//! }
//!
//! session.select("status", vec![Action::Lowercase, Action::ReplaceValues]);
//! let outcome = session.apply_all();
//!
//! for diagnostic in &outcome.diagnostics {
//!     eprintln!("warning: {}", diagnostic);
//! }
//! println!("{}", outcome.table.to_csv_string().unwrap());
//! ```

pub mod action;
pub mod choice;
pub mod error;
pub mod export;
pub mod input;
pub mod suggestion;
pub mod table;
pub mod transform;

mod session;

pub use action::{Action, Applicability};
pub use choice::ChoiceStore;
pub use error::{RefineryError, Result};
pub use export::{export_csv, write_csv, DEFAULT_EXPORT_FILE_NAME};
pub use input::{Parser, ParserConfig, SourceMetadata};
pub use session::{RefineryConfig, Session};
pub use suggestion::{ColumnProfiler, ColumnSummary, Suggestions};
pub use table::{Cell, Column, ColumnKind, Table};
pub use transform::{
    ColumnPreview, Diagnostic, DiagnosticKind, TransformChange, TransformEngine, TransformOutcome,
};
