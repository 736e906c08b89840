//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure and presentation adapters
//! must implement.

pub mod play_progress;
pub mod presenter;
pub mod prompt;
pub mod quiz_store;
