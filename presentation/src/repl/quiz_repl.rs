//! REPL (Read-Eval-Print Loop) for the quiz trainer

use crate::repl::parser::{ParsedLine, parse_line};
use quizzer_application::{
    CommandFlow, PromptError, PromptPort, QuizCommands, QuizPresenter, QuizStore,
};
use std::sync::Arc;
use tracing::{debug, info};

pub const DEFAULT_PROMPT: &str = "quiz > ";

/// Interactive command loop on top of [`QuizCommands`]
pub struct QuizRepl<S, P, O>
where
    S: QuizStore + 'static,
    P: PromptPort + 'static,
    O: QuizPresenter + 'static,
{
    commands: QuizCommands<S, P, O>,
    prompt: Arc<P>,
    prompt_text: String,
}

impl<S, P, O> QuizRepl<S, P, O>
where
    S: QuizStore + 'static,
    P: PromptPort + 'static,
    O: QuizPresenter + 'static,
{
    /// `prompt` must be the same adapter the commands were built with
    pub fn new(commands: QuizCommands<S, P, O>, prompt: Arc<P>) -> Self {
        Self {
            commands,
            prompt,
            prompt_text: DEFAULT_PROMPT.to_string(),
        }
    }

    /// Set the top-level prompt text
    pub fn with_prompt(mut self, prompt_text: impl Into<String>) -> Self {
        self.prompt_text = prompt_text.into();
        self
    }

    /// Read and execute commands until `quit` or end of input.
    ///
    /// Ctrl+C at the top level only discards the current line.
    pub async fn run(&self) -> Result<(), PromptError> {
        loop {
            let line = match self.prompt.ask(&self.prompt_text).await {
                Ok(line) => line,
                Err(PromptError::Interrupted) => continue,
                Err(PromptError::Eof) => {
                    info!("Input closed, leaving");
                    break;
                }
                Err(e) => return Err(e),
            };

            let flow = match parse_line(&line) {
                ParsedLine::Empty => continue,
                ParsedLine::Command(command) => {
                    self.prompt.record_history(&line);
                    self.commands.execute(command).await
                }
                ParsedLine::Unknown(name) => {
                    self.prompt.record_history(&line);
                    self.commands.unknown(&name)
                }
            };

            if flow == CommandFlow::Quit {
                debug!("Quit requested");
                break;
            }
        }
        Ok(())
    }
}
