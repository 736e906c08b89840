//! rustyline-backed [`PromptPort`]

use async_trait::async_trait;
use colored::Colorize;
use quizzer_application::{PromptError, PromptPort};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, warn};

/// Reads lines from the terminal with editing and optional persistent
/// history.
///
/// Each read runs on the blocking thread pool so the runtime keeps going
/// while the user types.
pub struct TerminalPrompt {
    editor: Arc<Mutex<DefaultEditor>>,
    history_path: Option<PathBuf>,
}

impl TerminalPrompt {
    pub fn new() -> Result<Self, PromptError> {
        let editor = DefaultEditor::new().map_err(map_readline_error)?;
        Ok(Self {
            editor: Arc::new(Mutex::new(editor)),
            history_path: None,
        })
    }

    /// Load history from `path` (if it exists) and save back to it on
    /// [`TerminalPrompt::save_history`].
    pub fn with_history(mut self, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        if path.exists()
            && let Ok(mut editor) = self.lock()
            && let Err(e) = editor.load_history(&path)
        {
            warn!("Could not load history from {}: {}", path.display(), e);
        }
        self.history_path = Some(path);
        self
    }

    pub fn history_path(&self) -> Option<&Path> {
        self.history_path.as_deref()
    }

    /// Persist the line history. No-op without a history path.
    pub fn save_history(&self) -> Result<(), PromptError> {
        let Some(path) = &self.history_path else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| PromptError::Io(e.to_string()))?;
        }
        let mut editor = self.lock()?;
        editor.save_history(path).map_err(map_readline_error)?;
        debug!("Saved history to {}", path.display());
        Ok(())
    }

    fn lock(&self) -> Result<MutexGuard<'_, DefaultEditor>, PromptError> {
        lock_editor(&self.editor)
    }

    async fn read(&self, prompt: &str, initial: Option<&str>) -> Result<String, PromptError> {
        let editor = self.editor.clone();
        let styled = prompt.red().to_string();
        let initial = initial.map(str::to_string);

        tokio::task::spawn_blocking(move || -> Result<String, PromptError> {
            let mut editor = lock_editor(&editor)?;
            let line = match initial.as_deref() {
                Some(initial) => editor.readline_with_initial(&styled, (initial, "")),
                None => editor.readline(&styled),
            }
            .map_err(map_readline_error)?;
            Ok(line.trim().to_string())
        })
        .await
        .map_err(map_join_error)?
    }
}

fn lock_editor(
    editor: &Mutex<DefaultEditor>,
) -> Result<MutexGuard<'_, DefaultEditor>, PromptError> {
    editor
        .lock()
        .map_err(|_| PromptError::Io("line editor lock poisoned".to_string()))
}

#[async_trait]
impl PromptPort for TerminalPrompt {
    async fn ask(&self, prompt: &str) -> Result<String, PromptError> {
        self.read(prompt, None).await
    }

    async fn ask_with_initial(&self, prompt: &str, initial: &str) -> Result<String, PromptError> {
        self.read(prompt, Some(initial)).await
    }

    fn record_history(&self, line: &str) {
        if let Ok(mut editor) = self.lock() {
            let _ = editor.add_history_entry(line);
        }
    }
}

fn map_join_error(error: tokio::task::JoinError) -> PromptError {
    PromptError::Io(format!("terminal read task failed: {}", error))
}

fn map_readline_error(error: ReadlineError) -> PromptError {
    match error {
        ReadlineError::Interrupted => PromptError::Interrupted,
        ReadlineError::Eof => PromptError::Eof,
        other => PromptError::Io(other.to_string()),
    }
}
