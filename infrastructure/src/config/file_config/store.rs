//! Store configuration from TOML (`[store]` section)

use super::expand_home;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw store configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileStoreConfig {
    /// Path of the JSON quiz file (defaults to the platform data dir)
    pub path: Option<String>,
    /// Seed a new store with the default quizzes
    pub seed: bool,
}

impl Default for FileStoreConfig {
    fn default() -> Self {
        Self {
            path: None,
            seed: true,
        }
    }
}

impl FileStoreConfig {
    /// Configured path (`~` expanded), or `<data_dir>/quizzer/quizzes.json`
    /// when unset or blank
    pub fn resolved_path(&self) -> Option<PathBuf> {
        match self.path.as_deref().map(str::trim).filter(|p| !p.is_empty()) {
            Some(path) => Some(expand_home(path)),
            None => dirs::data_dir().map(|d| d.join("quizzer").join("quizzes.json")),
        }
    }
}
