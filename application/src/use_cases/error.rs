//! Errors surfaced by command handlers

use crate::ports::prompt::PromptError;
use crate::ports::quiz_store::StoreError;
use quizzer_domain::{IdError, QuizId, ValidationError};
use thiserror::Error;

/// Every way a command can fail. Handlers never let one of these escape
/// the engine: each is reported once through the presenter.
#[derive(Error, Debug, Clone)]
pub enum CommandError {
    #[error("Falta el parámetro <id>.")]
    MissingParameter,

    #[error("El valor del parámetro <id> no es un número.")]
    NotANumber,

    #[error("No existe un quiz asociado al id={0}.")]
    NotFound(QuizId),

    #[error(transparent)]
    Validation(ValidationError),

    #[error("{0}")]
    Store(String),

    #[error(transparent)]
    Prompt(#[from] PromptError),
}

impl From<IdError> for CommandError {
    fn from(error: IdError) -> Self {
        match error {
            IdError::Missing => CommandError::MissingParameter,
            IdError::NotANumber => CommandError::NotANumber,
        }
    }
}

impl From<StoreError> for CommandError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::Validation(e) => CommandError::Validation(e),
            StoreError::NotFound(id) => CommandError::NotFound(id),
            other => CommandError::Store(other.to_string()),
        }
    }
}

impl CommandError {
    /// Lines to show the user: one per violation for validation errors,
    /// a single line otherwise.
    pub fn messages(&self) -> Vec<String> {
        match self {
            CommandError::Validation(e) => e.messages().map(str::to_string).collect(),
            other => vec![other.to_string()],
        }
    }
}
