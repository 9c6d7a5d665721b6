//! Tabular data model: tables, tagged columns and cells.

mod column;
mod statistics;
#[allow(clippy::module_inception)]
mod table;
mod types;

pub use column::Column;
pub use statistics::NumericStatistics;
pub use table::Table;
pub use types::{is_missing_marker, parse_number, Cell, ColumnKind};
