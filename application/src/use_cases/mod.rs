//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod command;
pub mod error;
pub mod play_quiz;
pub mod quiz_commands;

#[cfg(test)]
pub(crate) mod test_support;
