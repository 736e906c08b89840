//! Quiz store port
//!
//! Persistence boundary for quizzes. Adapters live in the infrastructure
//! layer (`InMemoryQuizStore`, `JsonFileQuizStore`).

use async_trait::async_trait;
use quizzer_domain::{Quiz, QuizDraft, QuizId, ValidationError};
use thiserror::Error;

/// Errors raised by a [`QuizStore`]
#[derive(Error, Debug, Clone)]
pub enum StoreError {
    /// The payload breaks a field constraint; nothing was written
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// `update` targeted an id the store does not hold
    #[error("No existe un quiz asociado al id={0}.")]
    NotFound(QuizId),

    /// Any other persistence failure (I/O, corrupt data, ...)
    #[error("Error del almacén de quizzes: {0}")]
    Backend(String),
}

/// Port for quiz persistence.
///
/// Implementations validate drafts and updated quizzes before writing and
/// allocate ids on `create`.
#[async_trait]
pub trait QuizStore: Send + Sync {
    /// All quizzes in the store's natural order
    async fn find_all(&self) -> Result<Vec<Quiz>, StoreError>;

    /// A detached copy of every quiz, used by play sessions.
    ///
    /// Defaults to [`QuizStore::find_all`]; stores handing out live views
    /// should override it.
    async fn snapshot(&self) -> Result<Vec<Quiz>, StoreError> {
        self.find_all().await
    }

    async fn find_by_id(&self, id: QuizId) -> Result<Option<Quiz>, StoreError>;

    /// Validate and persist a new quiz, assigning its id
    async fn create(&self, draft: QuizDraft) -> Result<Quiz, StoreError>;

    /// Validate and overwrite an existing quiz
    async fn update(&self, quiz: Quiz) -> Result<Quiz, StoreError>;

    /// Remove a quiz. Removing an unknown id is a no-op.
    async fn destroy(&self, id: QuizId) -> Result<(), StoreError>;
}
