//! Transformation engine applying per-column action lists.

mod diagnostic;
mod engine;
mod operations;

pub use diagnostic::{Diagnostic, DiagnosticKind};
pub use engine::TransformEngine;
pub use operations::{ColumnPreview, TransformChange, TransformOutcome};
