//! Configuration file loading for quizzer
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `QUIZZER_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./quizzer.toml` or `./.quizzer.toml`
//! 4. Global: `$XDG_CONFIG_HOME/quizzer/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigWarning, FileConfig, FileLogConfig, FileOutputConfig, FileReplConfig, FileStoreConfig,
};
pub use loader::ConfigLoader;
