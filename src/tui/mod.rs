//! TUI module for the terminal user interface using Ratatui

pub mod screens;
mod terminal;

pub use terminal::{Tui, init_terminal, restore_terminal};
