//! Column profiling and cleaning suggestions.
//!
//! Each column gets at most one suggestion. When several rules match, the
//! last one evaluated wins; messages are never concatenated.

mod profiler;
#[allow(clippy::module_inception)]
mod suggestion;

pub use profiler::{ColumnProfiler, Suggestions};
pub use suggestion::{
    missing_values_suggestion, ColumnSummary, LOWERCASE_SUGGESTION, MIXED_VALUES_SUGGESTION,
};
