//! Persistence for choice stores - save/load JSON files.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::action::Action;
use crate::error::{RefineryError, Result};

use super::store::ChoiceStore;

/// Current version of the choices file format.
pub const CHOICES_FORMAT_VERSION: &str = "1.0.0";

/// On-disk representation of a choice store.
#[derive(Debug, Serialize)]
struct ChoiceDocument<'a> {
    version: &'static str,
    updated_at: DateTime<Utc>,
    choices: &'a ChoiceStore,
}

/// A choices file as read back, before action names are checked.
#[derive(Debug, Deserialize)]
struct StoredChoices {
    #[serde(default)]
    version: String,
    choices: IndexMap<String, Vec<String>>,
}

impl StoredChoices {
    /// Resolve action names; empty lists are dropped like [`ChoiceStore::set`].
    fn into_store(self) -> Result<ChoiceStore> {
        self.choices
            .into_iter()
            .map(|(column, names)| -> Result<(String, Vec<Action>)> {
                let actions = names
                    .iter()
                    .map(|name| name.parse::<Action>())
                    .collect::<Result<Vec<_>>>()?;
                Ok((column, actions))
            })
            .collect::<Result<Vec<_>>>()
            .map(ChoiceStore::from_iter)
    }
}

impl ChoiceStore {
    /// Save the store to a JSON file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| {
                    RefineryError::Persistence(format!(
                        "Failed to create directory '{}': {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        let file = File::create(path).map_err(|e| {
            RefineryError::Persistence(format!(
                "Failed to create file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let document = ChoiceDocument {
            version: CHOICES_FORMAT_VERSION,
            updated_at: Utc::now(),
            choices: self,
        };

        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, &document).map_err(|e| {
            RefineryError::Persistence(format!("Failed to serialize choices: {}", e))
        })?;

        debug!(path = %path.display(), columns = self.len(), "saved choices");
        Ok(())
    }

    /// Load a store from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let file = File::open(path).map_err(|e| {
            RefineryError::Persistence(format!(
                "Failed to open file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let reader = BufReader::new(file);
        let document: StoredChoices = serde_json::from_reader(reader).map_err(|e| {
            RefineryError::Persistence(format!(
                "Failed to parse choices '{}': {}",
                path.display(),
                e
            ))
        })?;

        let version = document.version.clone();
        let store = document.into_store()?;

        debug!(
            path = %path.display(),
            version = %version,
            columns = store.len(),
            "loaded choices"
        );
        Ok(store)
    }

    /// Load a store, or start an empty one if the file does not exist yet.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::new())
        }
    }
}

/// Generate a choices file path for a data file.
///
/// # Example
///
/// ```
/// use refinery::choice::choices_path;
///
/// let path = choices_path("data/features.csv");
/// assert_eq!(path.to_string_lossy(), "data/features.choices.json");
/// ```
pub fn choices_path(data_path: impl AsRef<Path>) -> PathBuf {
    let data_path = data_path.as_ref();
    let stem = data_path.file_stem().unwrap_or_default().to_string_lossy();
    let parent = data_path.parent().unwrap_or(Path::new("."));

    parent.join(format!("{}.choices.json", stem))
}
