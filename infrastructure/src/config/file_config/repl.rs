//! REPL configuration from TOML (`[repl]` section)

use super::expand_home;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw REPL configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReplConfig {
    /// Prompt shown while waiting for a command
    pub prompt: String,
    /// Path to history file
    pub history_file: Option<String>,
}

impl Default for FileReplConfig {
    fn default() -> Self {
        Self {
            prompt: "quiz > ".to_string(),
            history_file: None,
        }
    }
}

impl FileReplConfig {
    /// Configured history path (`~` expanded), or
    /// `<data_dir>/quizzer/history.txt`
    pub fn resolved_history_file(&self) -> Option<PathBuf> {
        match &self.history_file {
            Some(path) => Some(expand_home(path)),
            None => dirs::data_dir().map(|d| d.join("quizzer").join("history.txt")),
        }
    }
}
