//! CLI command implementations.

pub mod actions;
pub mod apply;
pub mod profile;
pub mod select;

use std::path::{Path, PathBuf};

use refinery::choice::choices_path;

/// Resolve the choices file for a data file.
pub(crate) fn resolve_choices(file: &Path, choices: Option<PathBuf>) -> PathBuf {
    choices.unwrap_or_else(|| choices_path(file))
}

/// Fail early with a readable message when the data file is absent.
pub(crate) fn ensure_exists(file: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }
    Ok(())
}
