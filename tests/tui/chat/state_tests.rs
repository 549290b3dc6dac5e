//! ChatState tests

use airoom::backend::BackendError;
use airoom::tui::screens::chat::ChatState;
use airoom::Conversation;

fn new_state() -> ChatState {
    ChatState::new(Conversation::ephemeral())
}

#[test]
fn test_chat_state_new() {
    let state = new_state();

    assert!(state.messages().is_empty());
    assert!(state.input.is_empty());
    assert_eq!(state.cursor_pos, 0);
    assert_eq!(state.scroll_offset, 0);
    assert!(!state.pending());
    assert!(state.status_message.is_none());
}

#[test]
fn test_begin_submit_appends_and_raises_pending() {
    let mut state = new_state();

    let content = state.begin_submit("Hello");

    assert_eq!(content, Some("Hello".to_string()));
    assert_eq!(state.messages().len(), 1);
    assert!(state.messages()[0].is_my_message);
    assert!(state.pending());
}

#[test]
fn test_complete_exchange_appends_reply_and_clears_pending() {
    let mut state = new_state();
    state.begin_submit("Hello");

    state.complete_exchange(Ok("Hi there".to_string()));

    assert_eq!(state.messages().len(), 2);
    assert!(!state.messages()[1].is_my_message);
    assert_eq!(state.messages()[1].content, "Hi there");
    assert!(!state.pending());
}

#[test]
fn test_failed_exchange_still_clears_pending() {
    let mut state = new_state();
    state.begin_submit("Hello");

    state.complete_exchange(Err(BackendError::invalid_response("stub")));

    assert_eq!(state.messages().len(), 2);
    assert!(!state.pending());
}

#[test]
fn test_begin_submit_rejected_while_pending() {
    let mut state = new_state();
    state.begin_submit("first");

    assert_eq!(state.begin_submit("second"), None);
    assert_eq!(state.messages().len(), 1);
}

#[test]
fn test_begin_submit_rejects_whitespace() {
    let mut state = new_state();

    assert_eq!(state.begin_submit("   "), None);
    assert!(state.messages().is_empty());
    assert!(!state.pending());
}

#[test]
fn test_take_input() {
    let mut state = new_state();
    state.input = "Test message".to_string();
    state.cursor_pos = 5;

    let input = state.take_input();

    assert_eq!(input, "Test message");
    assert!(state.input.is_empty());
    assert_eq!(state.cursor_pos, 0);
}

#[test]
fn test_loading_tick() {
    let mut state = new_state();
    state.begin_submit("Hello");
    state.loading_frame = 0;

    state.tick_loading();
    assert_eq!(state.loading_frame, 1);

    state.loading_frame = 3;
    state.tick_loading();
    assert_eq!(state.loading_frame, 0);
}

#[test]
fn test_loading_tick_idle_is_noop() {
    let mut state = new_state();
    state.loading_frame = 2;

    state.tick_loading();
    assert_eq!(state.loading_frame, 2);
}

#[test]
fn test_is_command() {
    let mut state = new_state();
    assert!(!state.is_command());

    state.input = "/help".to_string();
    assert!(state.is_command());

    state.input = "hello".to_string();
    assert!(!state.is_command());
}
