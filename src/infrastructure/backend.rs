//! Remote chat room backend
//!
//! One outbound call per submission: POST the message content, read the
//! reply text. Anything else (status, transport, payload shape) is a
//! [`BackendError`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::constants::CHAT_ROOM_PATH;

/// Errors from the exchange boundary
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("network error calling chat room: {source}")]
    Network {
        #[source]
        source: reqwest::Error,
    },

    #[error("chat room returned invalid response: {reason}")]
    InvalidResponse { reason: String },
}

impl BackendError {
    pub fn network(source: reqwest::Error) -> Self {
        Self::Network { source }
    }

    pub fn invalid_response(reason: impl Into<String>) -> Self {
        Self::InvalidResponse {
            reason: reason.into(),
        }
    }
}

/// Trait for the remote exchange implementation
#[async_trait]
pub trait RoomBackend: Send + Sync {
    /// Send one message to the room and await the reply text
    async fn send(&self, content: &str) -> Result<String, BackendError>;
}

/// HTTP client for the AI chat room API
#[derive(Clone)]
pub struct RoomApiClient {
    endpoint: String,
    http: Client,
}

impl RoomApiClient {
    /// Creates a client against `endpoint` with an explicit request timeout.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, BackendError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(BackendError::network)?;
        Ok(Self {
            endpoint: endpoint.into(),
            http,
        })
    }

    /// Build URL from endpoint and path
    fn build_url(&self, path: &str) -> String {
        let base = self.endpoint.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }
}

#[async_trait]
impl RoomBackend for RoomApiClient {
    async fn send(&self, content: &str) -> Result<String, BackendError> {
        let url = self.build_url(CHAT_ROOM_PATH);

        info!(
            endpoint = self.endpoint.as_str(),
            chars = content.len(),
            "Sending message to chat room"
        );

        let response: RoomResponse = self
            .http
            .post(&url)
            .json(&RoomRequest { content })
            .send()
            .await
            .map_err(BackendError::network)?
            .error_for_status()
            .map_err(BackendError::network)?
            .json()
            .await
            .map_err(BackendError::network)?;

        let reply = response
            .response
            .ok_or_else(|| BackendError::invalid_response("missing response field"))?;
        debug!(chars = reply.len(), "Received reply from chat room");

        Ok(reply)
    }
}

#[derive(Serialize)]
struct RoomRequest<'a> {
    content: &'a str,
}

#[derive(Deserialize)]
struct RoomResponse {
    response: Option<String>,
}
