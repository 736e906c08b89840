//! Play Quiz use case
//!
//! Asks every stored quiz once, in random order, until the user gives a
//! wrong answer or the quizzes run out.

use crate::ports::play_progress::{NoPlayProgress, PlayProgressNotifier};
use crate::ports::prompt::{PromptError, PromptPort};
use crate::ports::quiz_store::QuizStore;
use crate::use_cases::error::CommandError;
use quizzer_domain::{PlayOutcome, PlaySession, Quiz};
use rand::Rng;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Prompt text used when asking a quiz
pub fn question_prompt(quiz: &Quiz) -> String {
    format!("{}: ", quiz.question)
}

/// Use case for running one play session
pub struct PlayQuizUseCase<S: QuizStore + 'static, P: PromptPort + 'static> {
    store: Arc<S>,
    prompt: Arc<P>,
}

impl<S: QuizStore + 'static, P: PromptPort + 'static> PlayQuizUseCase<S, P> {
    pub fn new(store: Arc<S>, prompt: Arc<P>) -> Self {
        Self { store, prompt }
    }

    /// Execute the session without per-question feedback
    pub async fn execute(&self) -> Result<PlayOutcome, CommandError> {
        self.execute_with_progress(&NoPlayProgress).await
    }

    /// Execute the session, reporting each answer to `progress`.
    ///
    /// Fails if the snapshot cannot be loaded or the terminal breaks. A
    /// prompt closed by the user (Ctrl+C / Ctrl+D) abandons the session and
    /// still yields its outcome. The store is only read, never written.
    pub async fn execute_with_progress(
        &self,
        progress: &dyn PlayProgressNotifier,
    ) -> Result<PlayOutcome, CommandError> {
        let snapshot = self.store.snapshot().await.map_err(|e| {
            warn!("Could not load quizzes for play: {}", e);
            CommandError::from(e)
        })?;

        info!("Starting play session with {} quizzes", snapshot.len());
        progress.on_session_start(snapshot.len());

        let mut session = PlaySession::new(snapshot);

        // One suspension point per question; the draw is fresh every time so
        // selection stays uniform over what is left.
        while let Some(quiz) = session.draw_with(|len| rand::rng().random_range(0..len)) {
            debug!("Asking quiz {} ({} left)", quiz.id, session.remaining());

            let answer = match self.prompt.ask(&question_prompt(&quiz)).await {
                Ok(answer) => answer,
                Err(PromptError::Interrupted | PromptError::Eof) => {
                    info!("Play session abandoned at quiz {}", quiz.id);
                    session.abandon();
                    break;
                }
                Err(e) => return Err(e.into()),
            };
            let correct = session.record_answer(&quiz, &answer);
            progress.on_answer(&quiz, correct, session.score());
        }

        let outcome = session.finish();

        info!(
            "Play session finished: {}/{} ({:?})",
            outcome.score, outcome.total, outcome.end
        );
        Ok(outcome)
    }
}
