//! Volatile quiz store

use super::seed::default_quizzes;
use super::table::QuizTable;
use async_trait::async_trait;
use quizzer_application::{QuizStore, StoreError};
use quizzer_domain::{Quiz, QuizDraft, QuizId};
use tokio::sync::RwLock;
use tracing::debug;

/// Quiz store kept entirely in memory; contents are lost on exit.
#[derive(Debug, Default)]
pub struct InMemoryQuizStore {
    table: RwLock<QuizTable>,
}

impl InMemoryQuizStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with the given drafts, ids assigned from 1
    pub fn with_drafts(drafts: impl IntoIterator<Item = QuizDraft>) -> Result<Self, StoreError> {
        Ok(Self {
            table: RwLock::new(QuizTable::from_drafts(drafts)?),
        })
    }

    /// Store pre-populated with the default quizzes
    pub fn seeded() -> Result<Self, StoreError> {
        Self::with_drafts(default_quizzes())
    }
}

#[async_trait]
impl QuizStore for InMemoryQuizStore {
    async fn find_all(&self) -> Result<Vec<Quiz>, StoreError> {
        Ok(self.table.read().await.quizzes().to_vec())
    }

    async fn find_by_id(&self, id: QuizId) -> Result<Option<Quiz>, StoreError> {
        Ok(self.table.read().await.get(id).cloned())
    }

    async fn create(&self, draft: QuizDraft) -> Result<Quiz, StoreError> {
        self.table.write().await.insert(draft)
    }

    async fn update(&self, quiz: Quiz) -> Result<Quiz, StoreError> {
        self.table.write().await.replace(quiz)
    }

    async fn destroy(&self, id: QuizId) -> Result<(), StoreError> {
        let removed = self.table.write().await.remove(id);
        debug!("destroy {}: removed={}", id, removed);
        Ok(())
    }
}
