//! Chat input handling

use super::state::ChatState;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Input action result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    /// No action needed
    None,
    /// Submit the current input
    Submit,
    /// Exit the chat
    Exit,
    /// Execute a command
    Command(String),
    /// Scroll up
    ScrollUp,
    /// Scroll down
    ScrollDown,
    /// Scroll to bottom
    ScrollBottom,
}

/// Handle keyboard input and update state
pub fn handle_input(state: &mut ChatState, event: Event) -> InputAction {
    if state.pending() {
        // Input is disabled while an exchange is in flight; only exit
        // and scrolling remain available.
        if let Event::Key(key) = event {
            if key.kind != KeyEventKind::Press {
                return InputAction::None;
            }
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('q') {
                return InputAction::Exit;
            }
            match key.code {
                KeyCode::Up | KeyCode::PageUp => return InputAction::ScrollUp,
                KeyCode::Down | KeyCode::PageDown => return InputAction::ScrollDown,
                _ => {}
            }
        }
        return InputAction::None;
    }

    match event {
        Event::Key(key) => handle_key(state, key),
        _ => InputAction::None,
    }
}

fn handle_key(state: &mut ChatState, key: KeyEvent) -> InputAction {
    if key.kind != KeyEventKind::Press {
        return InputAction::None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('q') {
        return InputAction::Exit;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.input.clear();
        state.cursor_pos = 0;
        return InputAction::None;
    }

    match key.code {
        KeyCode::Enter => {
            if state.input.trim().is_empty() {
                // Whitespace-only input never submits.
                return InputAction::None;
            }

            if state.is_command() {
                let cmd = state.take_input();
                return InputAction::Command(cmd);
            }

            InputAction::Submit
        }
        KeyCode::Esc => {
            if !state.input.is_empty() {
                state.input.clear();
                state.cursor_pos = 0;
            }
            InputAction::None
        }
        KeyCode::Backspace => {
            state.delete_char();
            InputAction::None
        }
        KeyCode::Delete => {
            state.delete_char_forward();
            InputAction::None
        }
        KeyCode::Left => {
            state.move_cursor_left();
            InputAction::None
        }
        KeyCode::Right => {
            state.move_cursor_right();
            InputAction::None
        }
        KeyCode::Home => {
            state.move_cursor_home();
            InputAction::None
        }
        KeyCode::End => {
            state.move_cursor_end();
            InputAction::None
        }
        KeyCode::Up | KeyCode::PageUp => InputAction::ScrollUp,
        KeyCode::Down | KeyCode::PageDown => InputAction::ScrollDown,
        KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            InputAction::ScrollBottom
        }
        KeyCode::Char(c) => {
            state.insert_char(c);
            InputAction::None
        }
        _ => InputAction::None,
    }
}

/// Parse a slash command
pub fn parse_command(input: &str) -> CommandResult {
    let cmd = input.trim_start_matches('/');
    let name = cmd.split_whitespace().next().unwrap_or("").to_ascii_lowercase();

    match name.as_str() {
        "" => CommandResult::None,
        "help" | "?" => CommandResult::ShowHelp,
        "exit" | "quit" | "bye" => CommandResult::Exit,
        _ => CommandResult::Unknown(name),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    None,
    ShowHelp,
    Exit,
    Unknown(String),
}
