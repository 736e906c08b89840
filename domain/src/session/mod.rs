//! Play session domain.
//!
//! - [`play::PlaySession`]: the randomized, no-repeat question loop state
//! - [`play::PlayOutcome`]: final score and why the session ended

pub mod play;
