//! Fakes shared by the use case tests

use crate::ports::play_progress::PlayProgressNotifier;
use crate::ports::presenter::QuizPresenter;
use crate::ports::prompt::{PromptError, PromptPort};
use crate::ports::quiz_store::{QuizStore, StoreError};
use crate::use_cases::command::CommandHelp;
use crate::use_cases::error::CommandError;
use async_trait::async_trait;
use chrono::Utc;
use quizzer_domain::{PlayOutcome, Quiz, QuizDraft, QuizId};
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

/// Vec-backed store with failure injection and a write counter
pub struct FakeStore {
    quizzes: Mutex<Vec<Quiz>>,
    writes: Mutex<usize>,
    fail_reads: bool,
}

impl FakeStore {
    pub fn with(pairs: &[(&str, &str)]) -> Self {
        let quizzes = pairs
            .iter()
            .enumerate()
            .map(|(i, (q, a))| {
                Quiz::from_draft(QuizId::new(i as i64 + 1), QuizDraft::new(*q, *a), Utc::now())
            })
            .collect();
        Self {
            quizzes: Mutex::new(quizzes),
            writes: Mutex::new(0),
            fail_reads: false,
        }
    }

    /// The two-quiz store used throughout the scenarios
    pub fn scenario() -> Self {
        Self::with(&[("2+2?", "4"), ("Capital of Spain?", "Madrid")])
    }

    pub fn failing() -> Self {
        Self {
            fail_reads: true,
            ..Self::with(&[])
        }
    }

    pub fn quizzes(&self) -> Vec<Quiz> {
        self.quizzes.lock().unwrap().clone()
    }

    pub fn writes(&self) -> usize {
        *self.writes.lock().unwrap()
    }

    fn check_reads(&self) -> Result<(), StoreError> {
        if self.fail_reads {
            Err(StoreError::Backend("connection refused".into()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl QuizStore for FakeStore {
    async fn find_all(&self) -> Result<Vec<Quiz>, StoreError> {
        self.check_reads()?;
        Ok(self.quizzes())
    }

    async fn find_by_id(&self, id: QuizId) -> Result<Option<Quiz>, StoreError> {
        self.check_reads()?;
        Ok(self.quizzes().into_iter().find(|q| q.id == id))
    }

    async fn create(&self, draft: QuizDraft) -> Result<Quiz, StoreError> {
        draft.validate()?;
        let mut quizzes = self.quizzes.lock().unwrap();
        let id = quizzes
            .iter()
            .map(|q| q.id)
            .max()
            .map_or(Some(QuizId::new(1)), |id| id.next())
            .ok_or_else(|| StoreError::Backend("quiz ids exhausted".to_string()))?;
        let quiz = Quiz::from_draft(id, draft, Utc::now());
        quizzes.push(quiz.clone());
        *self.writes.lock().unwrap() += 1;
        Ok(quiz)
    }

    async fn update(&self, quiz: Quiz) -> Result<Quiz, StoreError> {
        quiz.validate()?;
        let mut quizzes = self.quizzes.lock().unwrap();
        let slot = quizzes
            .iter_mut()
            .find(|q| q.id == quiz.id)
            .ok_or(StoreError::NotFound(quiz.id))?;
        *slot = quiz.clone();
        *self.writes.lock().unwrap() += 1;
        Ok(quiz)
    }

    async fn destroy(&self, id: QuizId) -> Result<(), StoreError> {
        let mut quizzes = self.quizzes.lock().unwrap();
        let before = quizzes.len();
        quizzes.retain(|q| q.id != id);
        if quizzes.len() != before {
            *self.writes.lock().unwrap() += 1;
        }
        Ok(())
    }
}

/// Prompt that replays queued answers and records what it was asked
#[derive(Default)]
pub struct ScriptedPrompt {
    answers: Mutex<VecDeque<Result<String, PromptError>>>,
    asked: Mutex<Vec<(String, Option<String>)>>,
}

impl ScriptedPrompt {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: Mutex::new(answers.iter().map(|a| Ok(a.to_string())).collect()),
            asked: Mutex::new(Vec::new()),
        }
    }

    pub fn then_fail(self, error: PromptError) -> Self {
        self.answers.lock().unwrap().push_back(Err(error));
        self
    }

    /// Prompt texts shown, in order
    pub fn prompts(&self) -> Vec<String> {
        self.asked.lock().unwrap().iter().map(|(p, _)| p.clone()).collect()
    }

    /// Pre-filled values, in order (`None` for plain asks)
    pub fn initials(&self) -> Vec<Option<String>> {
        self.asked.lock().unwrap().iter().map(|(_, i)| i.clone()).collect()
    }

    fn next(&self, prompt: &str, initial: Option<&str>) -> Result<String, PromptError> {
        self.asked
            .lock()
            .unwrap()
            .push((prompt.to_string(), initial.map(str::to_string)));
        self.answers
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(PromptError::Eof))
            .map(|a| a.trim().to_string())
    }
}

#[async_trait]
impl PromptPort for ScriptedPrompt {
    async fn ask(&self, prompt: &str) -> Result<String, PromptError> {
        self.next(prompt, None)
    }

    async fn ask_with_initial(&self, prompt: &str, initial: &str) -> Result<String, PromptError> {
        self.next(prompt, Some(initial))
    }
}

/// Prompt answering by looking the question up, for randomly ordered
/// play sessions. Questions listed in `wrong` get a wrong answer.
pub struct OraclePrompt {
    answers: HashMap<String, String>,
    wrong: Vec<String>,
    asked: Mutex<Vec<String>>,
}

impl OraclePrompt {
    pub fn knowing(pairs: &[(&str, &str)]) -> Self {
        Self {
            answers: pairs
                .iter()
                .map(|(q, a)| (q.to_string(), a.to_string()))
                .collect(),
            wrong: Vec::new(),
            asked: Mutex::new(Vec::new()),
        }
    }

    pub fn always_wrong() -> Self {
        Self::knowing(&[])
    }

    pub fn wrong_on(mut self, question: &str) -> Self {
        self.wrong.push(question.to_string());
        self
    }

    pub fn asked(&self) -> Vec<String> {
        self.asked.lock().unwrap().clone()
    }
}

#[async_trait]
impl PromptPort for OraclePrompt {
    async fn ask(&self, prompt: &str) -> Result<String, PromptError> {
        let question = prompt.trim_end().trim_end_matches(':').to_string();
        self.asked.lock().unwrap().push(question.clone());
        if self.wrong.contains(&question) {
            return Ok("definitely wrong".to_string());
        }
        Ok(self
            .answers
            .get(&question)
            .cloned()
            .unwrap_or_else(|| "no idea".to_string()))
    }
}

/// Everything a presenter was told, in order
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Listed(Vec<QuizId>),
    Shown(Quiz),
    Added(Quiz),
    Updated(Quiz),
    Deleted(QuizId),
    Checked(QuizId, bool),
    SessionStarted(usize),
    Answered(QuizId, bool, usize),
    Finished(PlayOutcome),
    Help(usize),
    Credits(Vec<String>),
    Error(Vec<String>),
    Unknown(String),
}

#[derive(Default)]
pub struct RecordingPresenter {
    events: Mutex<Vec<Event>>,
}

impl RecordingPresenter {
    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    /// Events excluding per-question play feedback
    pub fn reports(&self) -> Vec<Event> {
        self.events()
            .into_iter()
            .filter(|e| !matches!(e, Event::SessionStarted(_) | Event::Answered(..)))
            .collect()
    }

    fn push(&self, event: Event) {
        self.events.lock().unwrap().push(event);
    }
}

impl PlayProgressNotifier for RecordingPresenter {
    fn on_session_start(&self, total: usize) {
        self.push(Event::SessionStarted(total));
    }

    fn on_answer(&self, quiz: &Quiz, correct: bool, score: usize) {
        self.push(Event::Answered(quiz.id, correct, score));
    }
}

impl QuizPresenter for RecordingPresenter {
    fn on_quizzes_listed(&self, quizzes: &[Quiz]) {
        self.push(Event::Listed(quizzes.iter().map(|q| q.id).collect()));
    }

    fn on_quiz_shown(&self, quiz: &Quiz) {
        self.push(Event::Shown(quiz.clone()));
    }

    fn on_quiz_added(&self, quiz: &Quiz) {
        self.push(Event::Added(quiz.clone()));
    }

    fn on_quiz_updated(&self, quiz: &Quiz) {
        self.push(Event::Updated(quiz.clone()));
    }

    fn on_quiz_deleted(&self, id: QuizId) {
        self.push(Event::Deleted(id));
    }

    fn on_answer_checked(&self, quiz: &Quiz, correct: bool) {
        self.push(Event::Checked(quiz.id, correct));
    }

    fn on_play_finished(&self, outcome: &PlayOutcome) {
        self.push(Event::Finished(*outcome));
    }

    fn on_help(&self, entries: &[CommandHelp]) {
        self.push(Event::Help(entries.len()));
    }

    fn on_credits(&self, authors: &[String]) {
        self.push(Event::Credits(authors.to_vec()));
    }

    fn on_error(&self, error: &CommandError) {
        self.push(Event::Error(error.messages()));
    }

    fn on_unknown_command(&self, name: &str) {
        self.push(Event::Unknown(name.to_string()));
    }
}
