//! Session object and public configuration.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::action::Action;
use crate::choice::ChoiceStore;
use crate::error::{RefineryError, Result};
use crate::export::{export_csv, DEFAULT_EXPORT_FILE_NAME};
use crate::input::{Parser, ParserConfig, SourceMetadata};
use crate::suggestion::{ColumnProfiler, ColumnSummary, Suggestions};
use crate::table::Table;
use crate::transform::{ColumnPreview, TransformEngine, TransformOutcome};

/// Configuration for a Refinery session.
#[derive(Debug, Clone)]
pub struct RefineryConfig {
    /// Parser configuration.
    pub parser: ParserConfig,
    /// File name used when exporting into a directory.
    pub export_file_name: String,
}

impl Default for RefineryConfig {
    fn default() -> Self {
        Self {
            parser: ParserConfig::default(),
            export_file_name: DEFAULT_EXPORT_FILE_NAME.to_string(),
        }
    }
}

impl RefineryConfig {
    /// Set the parser configuration.
    pub fn with_parser(mut self, parser: ParserConfig) -> Self {
        self.parser = parser;
        self
    }

    /// Set the export file name.
    pub fn with_export_file_name(mut self, name: impl Into<String>) -> Self {
        self.export_file_name = name.into();
        self
    }

    /// Check the configuration for values that cannot work.
    pub fn validate(&self) -> Result<()> {
        let name = self.export_file_name.trim();
        if name.is_empty() {
            return Err(RefineryError::Config(
                "export file name must not be empty".to_string(),
            ));
        }
        if name.contains('/') || name.contains('\\') {
            return Err(RefineryError::Config(format!(
                "export file name '{}' must not contain a path separator",
                name
            )));
        }
        Ok(())
    }
}

/// One user's cleaning session over a single table.
///
/// The session owns the original table, which is never modified, and the
/// choice store, which persists across interaction rounds until the session
/// is dropped.
pub struct Session {
    config: RefineryConfig,
    source: Option<SourceMetadata>,
    table: Table,
    choices: ChoiceStore,
    engine: TransformEngine,
}

impl Session {
    /// Load a CSV file and start a session with no choices.
    pub fn open(path: impl AsRef<Path>, config: RefineryConfig) -> Result<Self> {
        config.validate()?;
        let parser = Parser::with_config(config.parser.clone());
        let (table, source) = parser.parse_file(path)?;

        Ok(Self {
            config,
            source: Some(source),
            table,
            choices: ChoiceStore::new(),
            engine: TransformEngine::new(),
        })
    }

    /// Start a session over an in-memory table.
    pub fn from_table(table: Table) -> Self {
        Self {
            config: RefineryConfig::default(),
            source: None,
            table,
            choices: ChoiceStore::new(),
            engine: TransformEngine::new(),
        }
    }

    /// Resume with previously saved choices.
    pub fn with_choices(mut self, choices: ChoiceStore) -> Self {
        self.choices = choices;
        self
    }

    /// The original table.
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Metadata of the loaded file, if the session was opened from one.
    pub fn source(&self) -> Option<&SourceMetadata> {
        self.source.as_ref()
    }

    /// Active configuration.
    pub fn config(&self) -> &RefineryConfig {
        &self.config
    }

    /// Suggestions for the original table.
    pub fn suggestions(&self) -> Suggestions {
        ColumnProfiler::profile(&self.table)
    }

    /// Per-column counts behind the suggestions.
    pub fn summaries(&self) -> Vec<ColumnSummary> {
        ColumnProfiler::summarize(&self.table)
    }

    /// Current selections.
    pub fn choices(&self) -> &ChoiceStore {
        &self.choices
    }

    /// Mutable access to the selections.
    pub fn choices_mut(&mut self) -> &mut ChoiceStore {
        &mut self.choices
    }

    /// End the session, keeping its selections.
    pub fn into_choices(self) -> ChoiceStore {
        self.choices
    }

    /// Replace a column's selection and return its live preview.
    pub fn select(&mut self, column: &str, actions: Vec<Action>) -> ColumnPreview {
        self.choices.set(column, actions);
        self.preview(column)
    }

    /// Before/after view of one column under its current selection.
    pub fn preview(&self, column: &str) -> ColumnPreview {
        self.engine
            .preview(&self.table, column, self.choices.get(column))
    }

    /// Apply every selection to a copy of the original table.
    pub fn apply_all(&self) -> TransformOutcome {
        self.engine.apply(&self.table, &self.choices)
    }

    /// Where [`export`](Self::export) writes when given a directory.
    pub fn export_path_in(&self, dir: impl AsRef<Path>) -> PathBuf {
        dir.as_ref().join(&self.config.export_file_name)
    }

    /// Default export location: next to the source file, or the current
    /// directory for in-memory sessions.
    pub fn default_export_path(&self) -> PathBuf {
        let dir = self
            .source
            .as_ref()
            .and_then(|s| s.path.parent())
            .unwrap_or(Path::new("."));
        self.export_path_in(dir)
    }

    /// Apply every selection and write the result as CSV.
    ///
    /// A directory target receives the configured export file name.
    pub fn export(&self, target: impl AsRef<Path>) -> Result<(TransformOutcome, PathBuf)> {
        let target = target.as_ref();
        let path = if target.is_dir() {
            self.export_path_in(target)
        } else {
            target.to_path_buf()
        };

        let outcome = self.apply_all();
        export_csv(&outcome.table, &path)?;

        info!(
            path = %path.display(),
            changes = outcome.changes.len(),
            skipped = outcome.diagnostics.len(),
            "exported session"
        );
        Ok((outcome, path))
    }
}
