//! Presentation layer for quizzer
//!
//! This crate contains CLI definitions, the line parser, the terminal
//! prompt, console output and the interactive REPL.

pub mod cli;
pub mod output;
pub mod repl;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use output::console::ConsolePresenter;
pub use output::formatter::QuizFormatter;
pub use repl::parser::{ParsedLine, parse_line};
pub use repl::prompt::TerminalPrompt;
pub use repl::quiz_repl::{DEFAULT_PROMPT, QuizRepl};
