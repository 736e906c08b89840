//! Prompt port
//!
//! Line-based question/answer primitive used by every interactive command.
//! The terminal adapter (`TerminalPrompt`) lives in the presentation layer.

use async_trait::async_trait;
use thiserror::Error;

/// Failures while waiting for the user
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PromptError {
    /// The user pressed Ctrl+C
    #[error("Operación cancelada.")]
    Interrupted,

    /// Input stream closed (Ctrl+D or end of piped input)
    #[error("Entrada cerrada.")]
    Eof,

    #[error("Error de entrada/salida: {0}")]
    Io(String),
}

/// Port for asking the user a single line of text.
#[async_trait]
pub trait PromptPort: Send + Sync {
    /// Show `prompt` and resolve with the trimmed line typed by the user.
    async fn ask(&self, prompt: &str) -> Result<String, PromptError>;

    /// Like [`PromptPort::ask`], with `initial` pre-filled as an editable
    /// default.
    ///
    /// Defaults to a plain `ask` for adapters that cannot pre-fill.
    async fn ask_with_initial(&self, prompt: &str, _initial: &str) -> Result<String, PromptError> {
        self.ask(prompt).await
    }

    /// Remember a top-level command line for later recall. No-op unless the
    /// adapter keeps a history.
    fn record_history(&self, _line: &str) {}
}
