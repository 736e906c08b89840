//! Domain layer for quizzer
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Quiz**: a question/answer pair with a store-assigned integer id
//! - **Play session**: one randomized pass over every quiz, asking each at
//!   most once and stopping at the first wrong answer

pub mod quiz;
pub mod session;

// Re-export commonly used types
pub use quiz::{
    answer::answers_match,
    entities::{Quiz, QuizDraft, QuizId},
    id::{IdError, parse_id},
    validation::{FieldViolation, QuizField, ValidationError, validate_fields},
};
pub use session::play::{PlayEnd, PlayOutcome, PlayPhase, PlaySession};
