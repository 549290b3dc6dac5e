//! Transcript persistence
//!
//! The transcript is mirrored in full after every change, so a store only
//! needs two operations: load the whole sequence, overwrite the whole
//! sequence.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::types::Message;

/// Errors from history storage
#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("failed to access history at {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to encode history: {source}")]
    Encode {
        #[source]
        source: serde_json::Error,
    },
}

/// Storage adapter for the transcript
pub trait HistoryStore: Send {
    /// Load the persisted sequence. Absent or unreadable-as-JSON history
    /// yields an empty sequence, never an error.
    fn load(&self) -> Result<Vec<Message>, HistoryError>;

    /// Overwrite the persisted sequence with `messages`.
    fn save(&self, messages: &[Message]) -> Result<(), HistoryError>;
}

/// File-backed store: one JSON array of messages
pub struct JsonHistory {
    path: PathBuf,
}

impl JsonHistory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HistoryStore for JsonHistory {
    fn load(&self) -> Result<Vec<Message>, HistoryError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(source) if source.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No history file yet, starting empty");
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(HistoryError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        match serde_json::from_str(&content) {
            Ok(messages) => Ok(messages),
            Err(err) => {
                warn!(
                    path = %self.path.display(),
                    error = %err,
                    "History file is not valid JSON, starting empty"
                );
                Ok(Vec::new())
            }
        }
    }

    fn save(&self, messages: &[Message]) -> Result<(), HistoryError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| HistoryError::Io {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        let encoded =
            serde_json::to_vec(messages).map_err(|source| HistoryError::Encode { source })?;

        // Write-then-rename keeps the overwrite atomic for a single key.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, encoded).map_err(|source| HistoryError::Io {
            path: tmp.clone(),
            source,
        })?;
        fs::rename(&tmp, &self.path).map_err(|source| HistoryError::Io {
            path: self.path.clone(),
            source,
        })?;

        debug!(
            path = %self.path.display(),
            count = messages.len(),
            "Persisted transcript"
        );
        Ok(())
    }
}

/// In-memory store for ephemeral runs and tests
#[derive(Clone, Default)]
pub struct MemoryHistory {
    inner: Arc<Mutex<Vec<Message>>>,
}

impl MemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current stored snapshot
    pub fn snapshot(&self) -> Vec<Message> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl HistoryStore for MemoryHistory {
    fn load(&self) -> Result<Vec<Message>, HistoryError> {
        Ok(self.snapshot())
    }

    fn save(&self, messages: &[Message]) -> Result<(), HistoryError> {
        *self.inner.lock().unwrap_or_else(|e| e.into_inner()) = messages.to_vec();
        Ok(())
    }
}
