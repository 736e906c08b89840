//! Quiz command engine
//!
//! One handler per command. Every handler runs the same pipeline
//! (validate the id, fetch the quiz, act, report) and reports exactly once
//! through the presenter: a success callback on the happy path, `on_error`
//! otherwise. Errors never escape [`QuizCommands::execute`].

use crate::ports::presenter::QuizPresenter;
use crate::ports::prompt::PromptPort;
use crate::ports::quiz_store::QuizStore;
use crate::use_cases::command::{COMMAND_HELP, Command, CommandFlow};
use crate::use_cases::error::CommandError;
use crate::use_cases::play_quiz::{PlayQuizUseCase, question_prompt};
use quizzer_domain::{Quiz, QuizDraft, parse_id};
use std::future::Future;
use std::sync::Arc;
use tracing::{debug, info, warn};

const ASK_NEW_QUESTION: &str = "Introduzca una pregunta: ";
const ASK_NEW_ANSWER: &str = "Introduzca una respuesta: ";
const ASK_EDITED_QUESTION: &str = "Introduzca la pregunta: ";
const ASK_EDITED_ANSWER: &str = "Introduzca la respuesta: ";

/// Command engine wired to a store, a prompt and a presenter
pub struct QuizCommands<S, P, O>
where
    S: QuizStore + 'static,
    P: PromptPort + 'static,
    O: QuizPresenter + 'static,
{
    store: Arc<S>,
    prompt: Arc<P>,
    presenter: Arc<O>,
    play: PlayQuizUseCase<S, P>,
    credits: Vec<String>,
}

impl<S, P, O> QuizCommands<S, P, O>
where
    S: QuizStore + 'static,
    P: PromptPort + 'static,
    O: QuizPresenter + 'static,
{
    pub fn new(store: Arc<S>, prompt: Arc<P>, presenter: Arc<O>) -> Self {
        Self {
            play: PlayQuizUseCase::new(store.clone(), prompt.clone()),
            store,
            prompt,
            presenter,
            credits: default_credits(),
        }
    }

    /// Replace the author lines shown by `credits`
    pub fn with_credits(mut self, authors: Vec<String>) -> Self {
        self.credits = authors;
        self
    }

    /// Run one command to completion and report its result.
    pub async fn execute(&self, command: Command) -> CommandFlow {
        debug!("Dispatching command: {:?}", command);

        let result = match command {
            Command::Quit => return CommandFlow::Quit,
            Command::Help => {
                self.presenter.on_help(COMMAND_HELP);
                Ok(())
            }
            Command::Credits => {
                self.presenter.on_credits(&self.credits);
                Ok(())
            }
            Command::List => self.list().await,
            Command::Show(raw) => self.show(raw.as_deref()).await,
            Command::Add => self.add().await,
            Command::Delete(raw) => self.delete(raw.as_deref()).await,
            Command::Edit(raw) => self.edit(raw.as_deref()).await,
            Command::Test(raw) => self.test(raw.as_deref()).await,
            Command::Play => self.play().await,
        };

        self.report(result);
        CommandFlow::Continue
    }

    /// Report the unknown command name and keep going
    pub fn unknown(&self, name: &str) -> CommandFlow {
        self.presenter.on_unknown_command(name);
        CommandFlow::Continue
    }

    /// List every quiz in store order
    pub async fn list(&self) -> Result<(), CommandError> {
        let quizzes = self.store.find_all().await?;
        self.presenter.on_quizzes_listed(&quizzes);
        Ok(())
    }

    pub async fn show(&self, raw_id: Option<&str>) -> Result<(), CommandError> {
        self.with_quiz(raw_id, |quiz| async move {
            self.presenter.on_quiz_shown(&quiz);
            Ok(())
        })
        .await
    }

    /// Ask for a question, then for its answer, and store the new quiz
    pub async fn add(&self) -> Result<(), CommandError> {
        let question = self.prompt.ask(ASK_NEW_QUESTION).await?;
        let answer = self.prompt.ask(ASK_NEW_ANSWER).await?;

        let quiz = self.store.create(QuizDraft::new(question, answer)).await?;
        info!("Created quiz {}", quiz.id);
        self.presenter.on_quiz_added(&quiz);
        Ok(())
    }

    pub async fn delete(&self, raw_id: Option<&str>) -> Result<(), CommandError> {
        self.with_quiz(raw_id, |quiz| async move {
            self.store.destroy(quiz.id).await?;
            info!("Deleted quiz {}", quiz.id);
            self.presenter.on_quiz_deleted(quiz.id);
            Ok(())
        })
        .await
    }

    /// Re-ask both fields, pre-filled with their current values
    pub async fn edit(&self, raw_id: Option<&str>) -> Result<(), CommandError> {
        self.with_quiz(raw_id, |mut quiz| async move {
            let question = self
                .prompt
                .ask_with_initial(ASK_EDITED_QUESTION, &quiz.question)
                .await?;
            let answer = self
                .prompt
                .ask_with_initial(ASK_EDITED_ANSWER, &quiz.answer)
                .await?;

            quiz.rewrite(question, answer);
            let updated = self.store.update(quiz).await?;
            info!("Updated quiz {}", updated.id);
            self.presenter.on_quiz_updated(&updated);
            Ok(())
        })
        .await
    }

    /// Ask a single quiz once
    pub async fn test(&self, raw_id: Option<&str>) -> Result<(), CommandError> {
        self.with_quiz(raw_id, |quiz| async move {
            let answer = self.prompt.ask(&question_prompt(&quiz)).await?;
            let correct = quiz.is_answered_by(&answer);
            debug!("Quiz {} answered, correct={}", quiz.id, correct);
            self.presenter.on_answer_checked(&quiz, correct);
            Ok(())
        })
        .await
    }

    pub async fn play(&self) -> Result<(), CommandError> {
        let outcome = self
            .play
            .execute_with_progress(self.presenter.as_ref())
            .await?;
        self.presenter.on_play_finished(&outcome);
        Ok(())
    }

    /// Shared pipeline for id-taking commands: parse the raw id, look the
    /// quiz up, then hand it to `step`.
    async fn with_quiz<F, Fut>(&self, raw_id: Option<&str>, step: F) -> Result<(), CommandError>
    where
        F: FnOnce(Quiz) -> Fut,
        Fut: Future<Output = Result<(), CommandError>>,
    {
        let id = parse_id(raw_id)?;
        let quiz = self
            .store
            .find_by_id(id)
            .await?
            .ok_or(CommandError::NotFound(id))?;
        step(quiz).await
    }

    fn report(&self, result: Result<(), CommandError>) {
        if let Err(error) = result {
            warn!("Command failed: {}", error);
            self.presenter.on_error(&error);
        }
    }
}

fn default_credits() -> Vec<String> {
    env!("CARGO_PKG_AUTHORS")
        .split(':')
        .map(str::trim)
        .filter(|a| !a.is_empty())
        .map(str::to_string)
        .collect()
}
