//! Application constants
//!
//! Single source of truth for paths and other constants.

/// Default configuration file path
pub const CONFIG_PATH: &str = "config/airoom.toml";

/// Default environment file path
pub const ENV_PATH: &str = "config/.env";

/// Default chat room service base URL
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8070";

/// API path of the AI chat room on the service
pub const CHAT_ROOM_PATH: &str = "/api/v1/chat/rooms/ai";

/// Default history file path (expanded with `~` support)
pub const DEFAULT_HISTORY_PATH: &str = "~/.local/share/airoom/messages.json";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Fixed reply shown in the transcript when an exchange fails.
/// The underlying error is logged, never rendered.
pub const FALLBACK_REPLY: &str = "Communication with the AI failed. Please try again.";

/// Environment variable overriding the service endpoint
pub const ENDPOINT_ENV: &str = "AIROOM_ENDPOINT";
