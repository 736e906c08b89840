//! Quiz entity and its identifier

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::validation::{ValidationError, validate_fields};

/// Store-assigned quiz identifier (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuizId(i64);

impl QuizId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }

    /// The id following this one (used by stores to allocate ids), or
    /// `None` past `i64::MAX`
    pub fn next(&self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl std::fmt::Display for QuizId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for QuizId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// A question/answer pair not yet persisted.
///
/// Built by the add flow from two prompts; the store validates it and
/// assigns an id on creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizDraft {
    pub question: String,
    pub answer: String,
}

impl QuizDraft {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }

    /// Check the field invariants, collecting every violation.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_fields(&self.question, &self.answer)
    }
}

/// A stored quiz (Entity)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quiz {
    pub id: QuizId,
    pub question: String,
    pub answer: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Quiz {
    /// Materialize a draft under the given id, stamping both timestamps.
    pub fn from_draft(id: QuizId, draft: QuizDraft, now: DateTime<Utc>) -> Self {
        Self {
            id,
            question: draft.question,
            answer: draft.answer,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace both text fields. `id` and `created_at` are left untouched.
    pub fn rewrite(&mut self, question: impl Into<String>, answer: impl Into<String>) {
        self.question = question.into();
        self.answer = answer.into();
    }

    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_fields(&self.question, &self.answer)
    }

    /// Whether `given` answers this quiz (see [`super::answer::answers_match`])
    pub fn is_answered_by(&self, given: &str) -> bool {
        super::answer::answers_match(given, &self.answer)
    }
}
