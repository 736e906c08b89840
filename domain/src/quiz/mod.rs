//! Quiz domain.
//!
//! - [`entities::Quiz`]: a stored question/answer pair
//! - [`entities::QuizDraft`]: a pair awaiting creation
//! - [`id::parse_id`]: lenient parsing of user-supplied ids
//! - [`validation`]: field constraints checked by every store
//! - [`answer::answers_match`]: trimmed, case-insensitive comparison

pub mod answer;
pub mod entities;
pub mod id;
pub mod validation;
