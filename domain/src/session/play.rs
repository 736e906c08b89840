//! Play session state machine
//!
//! A session starts from a snapshot of every stored quiz. Each draw removes
//! one quiz from the remaining set, so no quiz is asked twice. The session
//! ends when the remaining set is exhausted or at the first wrong answer.
//!
//! ```text
//! new(snapshot) ──▶ Asking ──draw/record──▶ Asking
//!                     │                       │
//!                     │ remaining empty       │ wrong answer
//!                     ▼                       ▼
//!               Done(Exhausted)        Done(WrongAnswer)
//! ```
//!
//! A session can also be abandoned while asking (the user closed the
//! prompt), which ends it with `Done(Abandoned)`.
//!
//! The state is pure: randomness is supplied by the caller through
//! [`PlaySession::draw_with`], which keeps the session deterministic under
//! test.

use crate::quiz::entities::Quiz;

/// Why a play session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayEnd {
    /// Every quiz was answered correctly (or there was nothing to ask)
    Exhausted,
    /// The last answer given was wrong
    WrongAnswer,
    /// The user left before answering the current question
    Abandoned,
}

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayPhase {
    Asking,
    Done(PlayEnd),
}

/// Final result of a play session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayOutcome {
    /// Quizzes answered correctly
    pub score: usize,
    /// Quizzes asked, including a final wrong one
    pub asked: usize,
    /// Quizzes in the snapshot the session started from
    pub total: usize,
    pub end: PlayEnd,
}

impl PlayOutcome {
    /// All quizzes asked and answered correctly
    pub fn is_perfect(&self) -> bool {
        self.end == PlayEnd::Exhausted && self.score == self.total
    }
}

/// Ephemeral state of one play run
#[derive(Debug, Clone)]
pub struct PlaySession {
    remaining: Vec<Quiz>,
    total: usize,
    score: usize,
    asked: usize,
    phase: PlayPhase,
}

impl PlaySession {
    pub fn new(snapshot: Vec<Quiz>) -> Self {
        Self {
            total: snapshot.len(),
            remaining: snapshot,
            score: 0,
            asked: 0,
            phase: PlayPhase::Asking,
        }
    }

    pub fn phase(&self) -> PlayPhase {
        self.phase
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn asked(&self) -> usize {
        self.asked
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn remaining(&self) -> usize {
        self.remaining.len()
    }

    /// Take the next quiz to ask.
    ///
    /// `pick` receives the size of the remaining set (always > 0) and must
    /// return an index below it; larger values are clamped to the last
    /// position. Returns `None` once the session is done; an empty remaining
    /// set moves the session to `Done(Exhausted)`.
    pub fn draw_with(&mut self, pick: impl FnOnce(usize) -> usize) -> Option<Quiz> {
        if self.phase != PlayPhase::Asking {
            return None;
        }
        if self.remaining.is_empty() {
            self.phase = PlayPhase::Done(PlayEnd::Exhausted);
            return None;
        }

        let len = self.remaining.len();
        let index = pick(len).min(len - 1);
        self.asked += 1;
        Some(self.remaining.swap_remove(index))
    }

    /// Record the answer given for a drawn quiz. Returns whether it was
    /// correct; a wrong answer ends the session. Ignored (and `false`) once
    /// the session is done.
    pub fn record_answer(&mut self, quiz: &Quiz, given: &str) -> bool {
        if self.phase != PlayPhase::Asking {
            return false;
        }
        let correct = quiz.is_answered_by(given);
        if correct {
            self.score += 1;
        } else {
            self.phase = PlayPhase::Done(PlayEnd::WrongAnswer);
        }
        correct
    }

    /// Stop asking. The question in flight is counted as asked but not
    /// scored.
    pub fn abandon(&mut self) {
        if self.phase == PlayPhase::Asking {
            self.phase = PlayPhase::Done(PlayEnd::Abandoned);
        }
    }

    /// Consume the session into its outcome; a session still asking is
    /// treated as abandoned.
    pub fn finish(mut self) -> PlayOutcome {
        self.abandon();
        PlayOutcome {
            score: self.score,
            asked: self.asked,
            total: self.total,
            end: match self.phase {
                PlayPhase::Done(end) => end,
                PlayPhase::Asking => PlayEnd::Abandoned,
            },
        }
    }

    /// The outcome, once the session is done
    pub fn outcome(&self) -> Option<PlayOutcome> {
        match self.phase {
            PlayPhase::Asking => None,
            PlayPhase::Done(end) => Some(PlayOutcome {
                score: self.score,
                asked: self.asked,
                total: self.total,
                end,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::entities::{QuizDraft, QuizId};
    use chrono::Utc;
    use std::collections::HashSet;

    fn quizzes(n: i64) -> Vec<Quiz> {
        (1..=n)
            .map(|i| {
                Quiz::from_draft(
                    QuizId::new(i),
                    QuizDraft::new(format!("q{i}"), format!("a{i}")),
                    Utc::now(),
                )
            })
            .collect()
    }

    #[test]
    fn test_empty_snapshot_finishes_immediately() {
        let mut session = PlaySession::new(vec![]);
        assert!(session.draw_with(|_| 0).is_none());
        let outcome = session.outcome().unwrap();
        assert_eq!(outcome.score, 0);
        assert_eq!(outcome.asked, 0);
        assert_eq!(outcome.end, PlayEnd::Exhausted);
        assert!(outcome.is_perfect());
    }

    #[test]
    fn test_all_correct_asks_every_quiz_once() {
        let mut session = PlaySession::new(quizzes(5));
        let mut seen = HashSet::new();
        // Alternate between first and last positions
        let mut toggle = false;
        while let Some(quiz) = session.draw_with(|len| {
            toggle = !toggle;
            if toggle { 0 } else { len - 1 }
        }) {
            assert!(seen.insert(quiz.id), "quiz {} asked twice", quiz.id);
            let answer = quiz.answer.clone();
            assert!(session.record_answer(&quiz, &answer));
        }
        let outcome = session.outcome().unwrap();
        assert_eq!(seen.len(), 5);
        assert_eq!(outcome.score, 5);
        assert_eq!(outcome.asked, 5);
        assert_eq!(outcome.end, PlayEnd::Exhausted);
    }

    #[test]
    fn test_wrong_answer_ends_session() {
        let mut session = PlaySession::new(quizzes(3));
        let quiz = session.draw_with(|_| 1).unwrap();
        assert!(!session.record_answer(&quiz, "nope"));
        assert_eq!(session.phase(), PlayPhase::Done(PlayEnd::WrongAnswer));
        assert!(session.draw_with(|_| 0).is_none());

        let outcome = session.outcome().unwrap();
        assert_eq!(outcome.score, 0);
        assert_eq!(outcome.asked, 1);
        assert_eq!(outcome.total, 3);
        assert!(!outcome.is_perfect());
    }

    #[test]
    fn test_score_counts_answers_before_wrong_one() {
        let mut session = PlaySession::new(quizzes(4));
        for _ in 0..2 {
            let quiz = session.draw_with(|_| 0).unwrap();
            let answer = format!("  {}  ", quiz.answer.to_uppercase());
            assert!(session.record_answer(&quiz, &answer));
        }
        let quiz = session.draw_with(|_| 0).unwrap();
        session.record_answer(&quiz, "wrong");

        let outcome = session.outcome().unwrap();
        assert_eq!(outcome.score, 2);
        assert_eq!(outcome.asked, 3);
        assert_eq!(session.remaining(), 1);
    }

    #[test]
    fn test_answers_after_session_end_are_ignored() {
        let mut session = PlaySession::new(quizzes(3));
        let quiz = session.draw_with(|_| 0).unwrap();
        assert!(!session.record_answer(&quiz, "wrong"));

        assert!(!session.record_answer(&quiz, &quiz.answer.clone()));
        assert_eq!(session.score(), 0);
        assert_eq!(session.phase(), PlayPhase::Done(PlayEnd::WrongAnswer));

        let mut abandoned = PlaySession::new(quizzes(2));
        let quiz = abandoned.draw_with(|_| 0).unwrap();
        abandoned.abandon();
        assert!(!abandoned.record_answer(&quiz, &quiz.answer.clone()));
        assert_eq!(abandoned.outcome().unwrap().score, 0);
    }

    #[test]
    fn test_out_of_range_pick_is_clamped() {
        let mut session = PlaySession::new(quizzes(2));
        assert!(session.draw_with(|len| len + 10).is_some());
        assert_eq!(session.remaining(), 1);
    }

    #[test]
    fn test_abandon_keeps_score_so_far() {
        let mut session = PlaySession::new(quizzes(3));
        let quiz = session.draw_with(|_| 0).unwrap();
        let answer = quiz.answer.clone();
        session.record_answer(&quiz, &answer);
        session.draw_with(|_| 0).unwrap();
        session.abandon();

        let outcome = session.finish();
        assert_eq!(outcome.end, PlayEnd::Abandoned);
        assert_eq!(outcome.score, 1);
        assert_eq!(outcome.asked, 2);
    }

    #[test]
    fn test_finish_keeps_terminal_reason() {
        let mut session = PlaySession::new(vec![]);
        session.draw_with(|_| 0);
        assert_eq!(session.finish().end, PlayEnd::Exhausted);
    }

    #[test]
    fn test_outcome_is_none_while_asking() {
        let session = PlaySession::new(quizzes(1));
        assert_eq!(session.phase(), PlayPhase::Asking);
        assert!(session.outcome().is_none());
    }
}
