//! Field validation for quizzes
//!
//! Stores run these checks before every create/update so that an invalid
//! payload never reaches persistence.

use thiserror::Error;

/// Which quiz field a violation refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizField {
    Question,
    Answer,
}

impl QuizField {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuizField::Question => "question",
            QuizField::Answer => "answer",
        }
    }
}

/// A single broken field constraint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: QuizField,
    pub message: String,
}

impl FieldViolation {
    fn empty(field: QuizField) -> Self {
        let message = match field {
            QuizField::Question => "La pregunta no puede estar vacía.",
            QuizField::Answer => "La respuesta no puede estar vacía.",
        };
        Self {
            field,
            message: message.to_string(),
        }
    }
}

impl std::fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// One or more field violations, reported together
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("El quiz es erróneo: {}", join_messages(.violations))]
pub struct ValidationError {
    violations: Vec<FieldViolation>,
}

impl ValidationError {
    pub fn new(violations: Vec<FieldViolation>) -> Self {
        Self { violations }
    }

    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.violations.iter().map(|v| v.message.as_str())
    }
}

fn join_messages(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|v| v.message.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Check `question` and `answer` are non-empty after trimming.
pub fn validate_fields(question: &str, answer: &str) -> Result<(), ValidationError> {
    let mut violations = Vec::new();

    if question.trim().is_empty() {
        violations.push(FieldViolation::empty(QuizField::Question));
    }
    if answer.trim().is_empty() {
        violations.push(FieldViolation::empty(QuizField::Answer));
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::new(violations))
    }
}
