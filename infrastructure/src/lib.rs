//! Infrastructure layer for quizzer
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, plus configuration file loading.

pub mod config;
pub mod store;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigWarning, FileConfig, FileLogConfig, FileOutputConfig, FileReplConfig,
    FileStoreConfig,
};
pub use store::{InMemoryQuizStore, JsonFileQuizStore, default_quizzes};
