//! Input handling tests

use airoom::tui::screens::chat::{ChatState, InputAction, handle_input};
use airoom::Conversation;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

fn new_state() -> ChatState {
    ChatState::new(Conversation::ephemeral())
}

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn ctrl(c: char) -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
}

#[test]
fn test_insert_char() {
    let mut state = new_state();

    state.insert_char('H');
    state.insert_char('i');

    assert_eq!(state.input, "Hi");
    assert_eq!(state.cursor_pos, 2);
}

#[test]
fn test_delete_char() {
    let mut state = new_state();
    state.input = "Hello".to_string();
    state.cursor_pos = 5;

    state.delete_char();

    assert_eq!(state.input, "Hell");
    assert_eq!(state.cursor_pos, 4);
}

#[test]
fn test_delete_char_at_start() {
    let mut state = new_state();
    state.input = "Hello".to_string();
    state.cursor_pos = 0;

    state.delete_char();

    assert_eq!(state.input, "Hello");
    assert_eq!(state.cursor_pos, 0);
}

#[test]
fn test_delete_char_forward() {
    let mut state = new_state();
    state.input = "Hello".to_string();
    state.cursor_pos = 0;

    state.delete_char_forward();

    assert_eq!(state.input, "ello");
    assert_eq!(state.cursor_pos, 0);
}

#[test]
fn test_move_cursor_bounds() {
    let mut state = new_state();
    state.input = "Hi".to_string();
    state.cursor_pos = 0;

    state.move_cursor_left();
    assert_eq!(state.cursor_pos, 0);

    state.move_cursor_right();
    state.move_cursor_right();
    state.move_cursor_right();
    assert_eq!(state.cursor_pos, 2);

    state.move_cursor_home();
    assert_eq!(state.cursor_pos, 0);

    state.move_cursor_end();
    assert_eq!(state.cursor_pos, 2);
}

#[test]
fn test_typing_updates_input() {
    let mut state = new_state();

    assert_eq!(handle_input(&mut state, key(KeyCode::Char('h'))), InputAction::None);
    assert_eq!(handle_input(&mut state, key(KeyCode::Char('i'))), InputAction::None);

    assert_eq!(state.input, "hi");
}

#[test]
fn test_enter_on_empty_input_is_noop() {
    let mut state = new_state();

    let action = handle_input(&mut state, key(KeyCode::Enter));

    assert_eq!(action, InputAction::None);
    assert!(state.messages().is_empty());
}

#[test]
fn test_enter_on_whitespace_input_is_noop() {
    let mut state = new_state();
    state.input = "   ".to_string();

    let action = handle_input(&mut state, key(KeyCode::Enter));

    assert_eq!(action, InputAction::None);
}

#[test]
fn test_enter_submits_message() {
    let mut state = new_state();
    state.input = "Hello".to_string();

    let action = handle_input(&mut state, key(KeyCode::Enter));

    assert_eq!(action, InputAction::Submit);
}

#[test]
fn test_enter_routes_commands() {
    let mut state = new_state();
    state.input = "/help".to_string();

    let action = handle_input(&mut state, key(KeyCode::Enter));

    assert_eq!(action, InputAction::Command("/help".to_string()));
    assert!(state.input.is_empty());
}

#[test]
fn test_pending_blocks_typing_and_submission() {
    let mut state = new_state();
    state.begin_submit("first");

    assert_eq!(handle_input(&mut state, key(KeyCode::Char('x'))), InputAction::None);
    assert!(state.input.is_empty());

    assert_eq!(handle_input(&mut state, key(KeyCode::Enter)), InputAction::None);
    assert_eq!(state.messages().len(), 1);
}

#[test]
fn test_pending_still_allows_exit_and_scroll() {
    let mut state = new_state();
    state.begin_submit("first");

    assert_eq!(handle_input(&mut state, ctrl('q')), InputAction::Exit);
    assert_eq!(handle_input(&mut state, key(KeyCode::PageUp)), InputAction::ScrollUp);
    assert_eq!(handle_input(&mut state, key(KeyCode::PageDown)), InputAction::ScrollDown);
}

#[test]
fn test_ctrl_q_exits() {
    let mut state = new_state();

    assert_eq!(handle_input(&mut state, ctrl('q')), InputAction::Exit);
}

#[test]
fn test_ctrl_c_clears_input() {
    let mut state = new_state();
    state.input = "draft".to_string();
    state.cursor_pos = 5;

    assert_eq!(handle_input(&mut state, ctrl('c')), InputAction::None);
    assert!(state.input.is_empty());
    assert_eq!(state.cursor_pos, 0);
}

#[test]
fn test_esc_clears_input() {
    let mut state = new_state();
    state.input = "draft".to_string();
    state.cursor_pos = 3;

    assert_eq!(handle_input(&mut state, key(KeyCode::Esc)), InputAction::None);
    assert!(state.input.is_empty());
}
