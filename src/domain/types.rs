use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One transcript entry.
///
/// Serialized field names match the history file layout (`id`, `content`,
/// `createdAt`, `isMyMessage`), with `createdAt` as an ISO-8601 timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub is_my_message: bool,
}

impl Message {
    pub fn new(id: impl Into<String>, content: impl Into<String>, is_my_message: bool) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            created_at: Utc::now(),
            is_my_message,
        }
    }

    /// Message authored locally by the user.
    pub fn mine(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(id, content, true)
    }

    /// Message authored by the remote service.
    pub fn remote(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(id, content, false)
    }
}
