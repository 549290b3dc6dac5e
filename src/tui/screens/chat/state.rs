//! Chat screen state management

use crate::application::conversation::Conversation;
use crate::domain::types::Message;
use crate::infrastructure::backend::BackendError;

/// Chat screen state
pub struct ChatState {
    /// The transcript and its persistence
    pub conversation: Conversation,
    /// Current input buffer
    pub input: String,
    /// Cursor position in input
    pub cursor_pos: usize,
    /// Scroll position measured in lines up from the bottom (0 = newest)
    pub scroll_offset: u16,
    /// Loading animation frame
    pub loading_frame: usize,
    /// Status message shown in the status bar
    pub status_message: Option<String>,
}

impl ChatState {
    pub fn new(conversation: Conversation) -> Self {
        Self {
            conversation,
            input: String::new(),
            cursor_pos: 0,
            scroll_offset: 0,
            loading_frame: 0,
            status_message: None,
        }
    }

    pub fn messages(&self) -> &[Message] {
        self.conversation.messages()
    }

    /// Whether an exchange is in flight
    pub fn pending(&self) -> bool {
        self.conversation.pending()
    }

    /// Gate a submission through the conversation; appends, persists, and
    /// scrolls to the newest entry when accepted.
    pub fn begin_submit(&mut self, raw: &str) -> Option<String> {
        let content = self.conversation.begin_submit(raw)?;
        self.status_message = None;
        self.scroll_to_bottom();
        Some(content)
    }

    /// Settle the in-flight exchange and scroll to the appended entry.
    pub fn complete_exchange(&mut self, outcome: Result<String, BackendError>) {
        self.conversation.complete_exchange(outcome);
        self.scroll_to_bottom();
    }

    /// Get the current input and clear it
    pub fn take_input(&mut self) -> String {
        self.cursor_pos = 0;
        std::mem::take(&mut self.input)
    }

    /// Insert character at cursor position
    pub fn insert_char(&mut self, c: char) {
        if self.cursor_pos >= self.input.len() {
            self.input.push(c);
        } else {
            self.input.insert(self.cursor_pos, c);
        }
        self.cursor_pos += 1;
    }

    /// Delete character before cursor (backspace)
    pub fn delete_char(&mut self) {
        if self.cursor_pos > 0 && !self.input.is_empty() {
            self.input.remove(self.cursor_pos - 1);
            self.cursor_pos -= 1;
        }
    }

    /// Delete character at cursor (delete key)
    pub fn delete_char_forward(&mut self) {
        if self.cursor_pos < self.input.len() {
            self.input.remove(self.cursor_pos);
        }
    }

    /// Move cursor left
    pub fn move_cursor_left(&mut self) {
        self.cursor_pos = self.cursor_pos.saturating_sub(1);
    }

    /// Move cursor right
    pub fn move_cursor_right(&mut self) {
        if self.cursor_pos < self.input.len() {
            self.cursor_pos += 1;
        }
    }

    /// Move cursor to start
    pub fn move_cursor_home(&mut self) {
        self.cursor_pos = 0;
    }

    /// Move cursor to end
    pub fn move_cursor_end(&mut self) {
        self.cursor_pos = self.input.len();
    }

    /// Scroll messages up (further back in history)
    pub fn scroll_up(&mut self) {
        // Clamped against the content height during render.
        self.scroll_offset = self.scroll_offset.saturating_add(1);
    }

    /// Scroll messages down (towards the newest entry)
    pub fn scroll_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Scroll to bottom of messages
    pub fn scroll_to_bottom(&mut self) {
        self.scroll_offset = 0;
    }

    /// Update loading animation frame
    pub fn tick_loading(&mut self) {
        if self.pending() {
            self.loading_frame = (self.loading_frame + 1) % 4;
        }
    }

    /// Check if input is a command
    pub fn is_command(&self) -> bool {
        self.input.starts_with('/')
    }
}
