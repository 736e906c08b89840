//! In-memory quiz table shared by the store adapters

use chrono::Utc;
use quizzer_application::StoreError;
use quizzer_domain::{Quiz, QuizDraft, QuizId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Ordered quizzes plus the highest id ever handed out.
///
/// Ids are never reused, even after the highest quiz is destroyed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizTable {
    last_id: Option<QuizId>,
    quizzes: Vec<Quiz>,
}

impl QuizTable {
    pub fn from_drafts(drafts: impl IntoIterator<Item = QuizDraft>) -> Result<Self, StoreError> {
        let mut table = Self::default();
        for draft in drafts {
            table.insert(draft)?;
        }
        Ok(table)
    }

    /// Check a table read from outside: ids must be unique and every row
    /// must pass the field rules.
    pub fn check(&self) -> Result<(), StoreError> {
        let mut seen = HashSet::new();
        for quiz in &self.quizzes {
            if !seen.insert(quiz.id) {
                return Err(StoreError::Backend(format!("duplicate quiz id {}", quiz.id)));
            }
            quiz.validate().map_err(|e| {
                StoreError::Backend(format!("quiz {} is invalid: {}", quiz.id, e))
            })?;
        }
        Ok(())
    }

    pub fn quizzes(&self) -> &[Quiz] {
        &self.quizzes
    }

    pub fn len(&self) -> usize {
        self.quizzes.len()
    }

    pub fn get(&self, id: QuizId) -> Option<&Quiz> {
        self.quizzes.iter().find(|q| q.id == id)
    }

    pub fn insert(&mut self, draft: QuizDraft) -> Result<Quiz, StoreError> {
        draft.validate()?;
        let id = self.allocate_id()?;
        let quiz = Quiz::from_draft(id, draft, Utc::now());
        self.quizzes.push(quiz.clone());
        Ok(quiz)
    }

    pub fn replace(&mut self, mut quiz: Quiz) -> Result<Quiz, StoreError> {
        quiz.validate()?;
        let slot = self
            .quizzes
            .iter_mut()
            .find(|q| q.id == quiz.id)
            .ok_or(StoreError::NotFound(quiz.id))?;

        // `created_at` belongs to the store, not to the caller
        quiz.created_at = slot.created_at;
        quiz.touch(Utc::now());
        *slot = quiz.clone();
        Ok(quiz)
    }

    /// Returns whether a quiz was removed
    pub fn remove(&mut self, id: QuizId) -> bool {
        let before = self.quizzes.len();
        self.quizzes.retain(|q| q.id != id);
        self.quizzes.len() != before
    }

    fn allocate_id(&mut self) -> Result<QuizId, StoreError> {
        let highest = self.quizzes.iter().map(|q| q.id).max();
        let id = match self.last_id.max(highest) {
            Some(last) => last
                .next()
                .ok_or_else(|| StoreError::Backend("quiz ids exhausted".to_string()))?,
            None => QuizId::new(1),
        };
        self.last_id = Some(id);
        Ok(id)
    }
}
