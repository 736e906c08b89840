//! JSON file backed quiz store
//!
//! The whole table lives in memory and is rewritten to disk after every
//! mutation. Writes go to a sibling temp file which is then renamed over
//! the target, so a crash never leaves a half-written store behind.

use super::seed::default_quizzes;
use super::table::QuizTable;
use async_trait::async_trait;
use quizzer_application::{QuizStore, StoreError};
use quizzer_domain::{Quiz, QuizDraft, QuizId};
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use tracing::{debug, info};

/// Quiz store persisted as a single JSON document
#[derive(Debug)]
pub struct JsonFileQuizStore {
    path: PathBuf,
    table: Mutex<QuizTable>,
}

impl JsonFileQuizStore {
    /// Open the store at `path`.
    ///
    /// A missing file starts a new store, seeded with the default quizzes
    /// when `seed` is set, and is written out immediately.
    pub async fn open(path: impl Into<PathBuf>, seed: bool) -> Result<Self, StoreError> {
        let path = path.into();

        let table = match tokio::fs::read_to_string(&path).await {
            Ok(content) => {
                let table: QuizTable = serde_json::from_str(&content).map_err(|e| {
                    StoreError::Backend(format!("{}: {}", path.display(), e))
                })?;
                table.check().map_err(|e| {
                    StoreError::Backend(format!("{}: {}", path.display(), e))
                })?;
                info!("Loaded {} quizzes from {}", table.len(), path.display());
                table
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let table = if seed {
                    QuizTable::from_drafts(default_quizzes())?
                } else {
                    QuizTable::default()
                };
                info!(
                    "Creating quiz store at {} with {} quizzes",
                    path.display(),
                    table.len()
                );
                write_table(&path, &table).await?;
                table
            }
            Err(e) => return Err(io_error(&path, e)),
        };

        Ok(Self {
            path,
            table: Mutex::new(table),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Apply `change` to a copy of the table, persist it, then commit.
    /// The in-memory table only changes once the file is written.
    async fn mutate<T>(
        &self,
        change: impl FnOnce(&mut QuizTable) -> Result<T, StoreError>,
    ) -> Result<T, StoreError> {
        let mut table = self.table.lock().await;
        let mut next = table.clone();
        let result = change(&mut next)?;
        write_table(&self.path, &next).await?;
        *table = next;
        Ok(result)
    }
}

#[async_trait]
impl QuizStore for JsonFileQuizStore {
    async fn find_all(&self) -> Result<Vec<Quiz>, StoreError> {
        Ok(self.table.lock().await.quizzes().to_vec())
    }

    async fn find_by_id(&self, id: QuizId) -> Result<Option<Quiz>, StoreError> {
        Ok(self.table.lock().await.get(id).cloned())
    }

    async fn create(&self, draft: QuizDraft) -> Result<Quiz, StoreError> {
        self.mutate(|table| table.insert(draft)).await
    }

    async fn update(&self, quiz: Quiz) -> Result<Quiz, StoreError> {
        self.mutate(|table| table.replace(quiz)).await
    }

    async fn destroy(&self, id: QuizId) -> Result<(), StoreError> {
        // Nothing to persist when the id is unknown
        let mut table = self.table.lock().await;
        if table.get(id).is_none() {
            debug!("destroy {}: no such quiz", id);
            return Ok(());
        }
        let mut next = table.clone();
        next.remove(id);
        write_table(&self.path, &next).await?;
        *table = next;
        Ok(())
    }
}

async fn write_table(path: &Path, table: &QuizTable) -> Result<(), StoreError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| io_error(parent, e))?;
    }

    let json = serde_json::to_string_pretty(table)
        .map_err(|e| StoreError::Backend(format!("serialize quizzes: {}", e)))?;

    let tmp = path.with_extension("json.tmp");
    tokio::fs::write(&tmp, json)
        .await
        .map_err(|e| io_error(&tmp, e))?;
    tokio::fs::rename(&tmp, path)
        .await
        .map_err(|e| io_error(path, e))?;

    debug!("Wrote {} quizzes to {}", table.len(), path.display());
    Ok(())
}

fn io_error(path: &Path, error: std::io::Error) -> StoreError {
    StoreError::Backend(format!("{}: {}", path.display(), error))
}
