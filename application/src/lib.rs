//! Application layer for quizzer
//!
//! This crate contains the command engine, the play use case and the port
//! definitions. It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    play_progress::{NoPlayProgress, PlayProgressNotifier},
    presenter::QuizPresenter,
    prompt::{PromptError, PromptPort},
    quiz_store::{QuizStore, StoreError},
};
pub use use_cases::command::{COMMAND_HELP, Command, CommandFlow, CommandHelp};
pub use use_cases::error::CommandError;
pub use use_cases::play_quiz::{PlayQuizUseCase, question_prompt};
pub use use_cases::quiz_commands::QuizCommands;
