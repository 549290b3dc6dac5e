//! TUI unit tests module

pub mod chat;
