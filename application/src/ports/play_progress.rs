//! Play progress notification port

use quizzer_domain::Quiz;

/// Callback for per-question feedback during a play session
pub trait PlayProgressNotifier: Send + Sync {
    /// Called once the snapshot is loaded, before the first question
    fn on_session_start(&self, _total: usize) {}

    /// Called after each answer with the running score
    fn on_answer(&self, quiz: &Quiz, correct: bool, score: usize);
}

/// No-op notifier for when per-question feedback is not needed
pub struct NoPlayProgress;

impl PlayProgressNotifier for NoPlayProgress {
    fn on_answer(&self, _quiz: &Quiz, _correct: bool, _score: usize) {}
}
