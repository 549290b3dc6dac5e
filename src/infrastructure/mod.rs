//! Infrastructure module
//!
//! Adapters to the outside world:
//! - `backend` - HTTP client for the remote chat room service
//! - `history` - persistent transcript storage

pub mod backend;
pub mod history;

pub use backend::{BackendError, RoomApiClient, RoomBackend};
pub use history::{HistoryStore, JsonHistory, MemoryHistory};
