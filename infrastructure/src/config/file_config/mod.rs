//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.

mod log;
mod output;
mod repl;
mod store;

pub use log::FileLogConfig;
pub use output::FileOutputConfig;
pub use repl::FileReplConfig;
pub use store::FileStoreConfig;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Turn a configured path into a `PathBuf`, expanding a leading `~` to the
/// home directory. Left as written when there is no home directory.
pub(crate) fn expand_home(path: &str) -> PathBuf {
    let rest = match path.strip_prefix('~') {
        Some("") => "",
        Some(rest) if rest.starts_with('/') || rest.starts_with('\\') => &rest[1..],
        _ => return PathBuf::from(path),
    };
    match dirs::home_dir() {
        Some(home) if rest.is_empty() => home,
        Some(home) => home.join(rest),
        None => PathBuf::from(path),
    }
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Quiz store settings
    pub store: FileStoreConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// REPL settings
    pub repl: FileReplConfig,
    /// Logging settings
    pub log: FileLogConfig,
}

/// A configuration value that is accepted but probably not intended
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub field: &'static str,
    pub message: String,
}

impl FileConfig {
    /// Check the configuration, returning every suspicious value.
    pub fn validate(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();

        if self.store.path.as_deref().is_some_and(|p| p.trim().is_empty()) {
            warnings.push(ConfigWarning {
                field: "store.path",
                message: "store.path is empty; the default location will be used".to_string(),
            });
        }

        if self.repl.prompt.trim().is_empty() {
            warnings.push(ConfigWarning {
                field: "repl.prompt",
                message: "repl.prompt is empty; commands will be read without a prompt"
                    .to_string(),
            });
        }

        warnings
    }
}
