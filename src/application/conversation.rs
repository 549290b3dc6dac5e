//! Conversation state machine
//!
//! Owns the ordered transcript, the pending flag, and the id counter, and
//! mirrors the transcript through the injected [`HistoryStore`] after every
//! append. The sequence is append-only: nothing here reorders, edits, or
//! clears it.

use tracing::{debug, error, info, warn};

use crate::constants::FALLBACK_REPLY;
use crate::domain::types::Message;
use crate::infrastructure::backend::{BackendError, RoomBackend};
use crate::infrastructure::history::{HistoryStore, MemoryHistory};

pub struct Conversation {
    store: Box<dyn HistoryStore>,
    messages: Vec<Message>,
    pending: bool,
    next_id: u64,
}

impl Conversation {
    /// Load the transcript from `store` and seed the id counter past the
    /// highest persisted `msg<N>` suffix, so ids stay unique across reloads.
    pub fn hydrate(store: Box<dyn HistoryStore>) -> Self {
        let messages = match store.load() {
            Ok(messages) => messages,
            Err(err) => {
                error!(error = %err, "Failed to load chat history, starting empty");
                Vec::new()
            }
        };
        let next_id = highest_id_suffix(&messages) + 1;
        debug!(count = messages.len(), next_id, "Hydrated conversation");
        Self {
            store,
            messages,
            pending: false,
            next_id,
        }
    }

    /// Conversation with no durable history
    pub fn ephemeral() -> Self {
        Self::hydrate(Box::new(MemoryHistory::new()))
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn pending(&self) -> bool {
        self.pending
    }

    /// Gate a submission.
    ///
    /// Returns the trimmed content to dispatch after appending the user
    /// message, persisting, and raising `pending`. Returns `None` without any
    /// state change when an exchange is already in flight or the input is
    /// empty after trimming.
    pub fn begin_submit(&mut self, raw: &str) -> Option<String> {
        if self.pending {
            debug!("Submission rejected, exchange already in flight");
            return None;
        }
        let content = raw.trim();
        if content.is_empty() {
            return None;
        }

        let content = content.to_string();
        let id = self.claim_id();
        self.append(Message::mine(id, content.clone()));
        self.pending = true;
        Some(content)
    }

    /// Settle the in-flight exchange.
    ///
    /// On success the reply is appended as a remote message; on failure the
    /// fixed fallback text is appended instead and the error detail only goes
    /// to the log. Either way `pending` clears and the transcript persists.
    pub fn complete_exchange(&mut self, outcome: Result<String, BackendError>) -> &Message {
        let content = match outcome {
            Ok(reply) => reply,
            Err(err) => {
                error!(error = %err, "Chat room exchange failed");
                FALLBACK_REPLY.to_string()
            }
        };
        let id = self.claim_id();
        self.pending = false;
        self.append(Message::remote(id, content))
    }

    /// Run one full submission cycle against `backend`.
    ///
    /// Used by the single-shot CLI mode; the TUI drives `begin_submit` and
    /// `complete_exchange` separately around its event loop.
    pub async fn exchange(&mut self, backend: &dyn RoomBackend, raw: &str) -> Option<&Message> {
        let content = self.begin_submit(raw)?;
        info!(chars = content.len(), "Dispatching exchange");
        let outcome = backend.send(&content).await;
        Some(self.complete_exchange(outcome))
    }

    fn claim_id(&mut self) -> String {
        let id = format!("msg{}", self.next_id);
        self.next_id += 1;
        id
    }

    fn append(&mut self, message: Message) -> &Message {
        self.messages.push(message);
        if let Err(err) = self.store.save(&self.messages) {
            // Loss of persistence must not block the conversation.
            error!(error = %err, "Failed to persist chat history");
        }
        &self.messages[self.messages.len() - 1]
    }
}

fn highest_id_suffix(messages: &[Message]) -> u64 {
    let max = messages
        .iter()
        .filter_map(|m| m.id.strip_prefix("msg").and_then(|s| s.parse::<u64>().ok()))
        .max()
        .unwrap_or(0);
    if max == 0 && !messages.is_empty() {
        warn!(
            count = messages.len(),
            "Hydrated history has no numeric message ids"
        );
    }
    max
}
