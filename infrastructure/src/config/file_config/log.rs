//! Logging configuration from TOML (`[log]` section)

use super::expand_home;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw logging configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLogConfig {
    /// Write logs to this file instead of stderr
    pub file: Option<String>,
}

impl FileLogConfig {
    /// Configured log file with `~` expanded; blank means stderr
    pub fn resolved_file(&self) -> Option<PathBuf> {
        self.file
            .as_deref()
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .map(expand_home)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_or_blank_means_stderr() {
        assert_eq!(FileLogConfig::default().resolved_file(), None);
        let blank = FileLogConfig {
            file: Some(" ".to_string()),
        };
        assert_eq!(blank.resolved_file(), None);
    }

    #[test]
    fn test_absolute_file_kept() {
        let config = FileLogConfig {
            file: Some("/tmp/quizzer.log".to_string()),
        };
        assert_eq!(config.resolved_file(), Some(PathBuf::from("/tmp/quizzer.log")));
    }
}
