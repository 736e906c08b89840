//! Presenter port
//!
//! Output channel of the command engine. Every command reports through
//! exactly one of these callbacks (plus per-question play feedback through
//! the [`PlayProgressNotifier`] supertrait). The console adapter lives in
//! the presentation layer.

use super::play_progress::PlayProgressNotifier;
use crate::use_cases::command::CommandHelp;
use crate::use_cases::error::CommandError;
use quizzer_domain::{PlayOutcome, Quiz, QuizId};

pub trait QuizPresenter: PlayProgressNotifier {
    /// `list` succeeded (possibly with no quizzes)
    fn on_quizzes_listed(&self, quizzes: &[Quiz]);

    fn on_quiz_shown(&self, quiz: &Quiz);

    fn on_quiz_added(&self, quiz: &Quiz);

    fn on_quiz_updated(&self, quiz: &Quiz);

    fn on_quiz_deleted(&self, id: QuizId);

    /// `test` compared the user's answer against `quiz`
    fn on_answer_checked(&self, quiz: &Quiz, correct: bool);

    fn on_play_finished(&self, outcome: &PlayOutcome);

    fn on_help(&self, entries: &[CommandHelp]);

    fn on_credits(&self, authors: &[String]);

    /// Any command failed
    fn on_error(&self, error: &CommandError);

    /// The REPL could not map a line to a command
    fn on_unknown_command(&self, name: &str);
}
