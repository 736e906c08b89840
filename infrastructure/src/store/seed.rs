//! Quizzes a fresh store starts with

use quizzer_domain::QuizDraft;

pub fn default_quizzes() -> Vec<QuizDraft> {
    [
        ("Capital de Italia", "Roma"),
        ("Capital de Francia", "París"),
        ("Capital de España", "Madrid"),
        ("Capital de Portugal", "Lisboa"),
    ]
    .into_iter()
    .map(|(question, answer)| QuizDraft::new(question, answer))
    .collect()
}
