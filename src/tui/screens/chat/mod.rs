//! TUI chat screen
//!
//! Ratatui-based interactive chat view:
//! - state.rs: chat screen state over the conversation
//! - ui.rs: rendering
//! - input.rs: input handling
//! - runner.rs: event loop coordinating the components

mod input;
mod runner;
mod state;
mod ui;

// Re-exports
pub use input::{CommandResult, InputAction, handle_input, parse_command};
pub use runner::{ChatResult, run_chat};
pub use state::ChatState;
