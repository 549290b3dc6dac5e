//! Scroll tests
//!
//! `scroll_offset` counts lines up from the bottom; 0 means anchored to the
//! newest entry.

use airoom::tui::screens::chat::ChatState;
use airoom::Conversation;

fn new_state() -> ChatState {
    ChatState::new(Conversation::ephemeral())
}

#[test]
fn test_scroll_up_moves_back() {
    let mut state = new_state();

    state.scroll_up();
    assert_eq!(state.scroll_offset, 1);

    state.scroll_up();
    assert_eq!(state.scroll_offset, 2);
}

#[test]
fn test_scroll_down_moves_towards_newest() {
    let mut state = new_state();
    state.scroll_offset = 5;

    state.scroll_down();
    assert_eq!(state.scroll_offset, 4);
}

#[test]
fn test_scroll_down_at_bottom_stays() {
    let mut state = new_state();

    state.scroll_down();
    assert_eq!(state.scroll_offset, 0);
}

#[test]
fn test_scroll_to_bottom() {
    let mut state = new_state();
    state.scroll_offset = 10;

    state.scroll_to_bottom();
    assert_eq!(state.scroll_offset, 0);
}

#[test]
fn test_submit_scrolls_to_bottom() {
    let mut state = new_state();
    state.scroll_offset = 7;

    state.begin_submit("Hello");
    assert_eq!(state.scroll_offset, 0);
}

#[test]
fn test_reply_scrolls_to_bottom() {
    let mut state = new_state();
    state.begin_submit("Hello");
    state.scroll_offset = 3;

    state.complete_exchange(Ok("Hi there".to_string()));
    assert_eq!(state.scroll_offset, 0);
}
