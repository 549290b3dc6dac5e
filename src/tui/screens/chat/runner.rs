//! Chat runner - main event loop coordinator

use super::input::{CommandResult, InputAction, handle_input, parse_command};
use super::state::ChatState;
use super::ui::ChatUI;
use crate::application::conversation::Conversation;
use crate::infrastructure::backend::{BackendError, RoomBackend};
use crate::tui::terminal::{Tui, init_terminal, restore_terminal};
use crossterm::event;
use std::error::Error;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

const HELP_TEXT: &str = "Enter sends, /exit quits, PageUp/PageDown scroll";

/// Result of a chat session
pub enum ChatResult {
    Exit,
}

/// Events from the in-flight exchange
enum ResponseEvent {
    Reply(String),
    Failed(BackendError),
}

/// Run the TUI chat interface
pub async fn run_chat(
    backend: Arc<dyn RoomBackend>,
    conversation: Conversation,
    endpoint: &str,
) -> Result<ChatResult, Box<dyn Error>> {
    let mut terminal = init_terminal()?;
    let mut state = ChatState::new(conversation);

    let result = run_chat_loop(&mut terminal, &mut state, backend, endpoint).await;

    restore_terminal()?;
    result
}

/// Internal chat loop
async fn run_chat_loop(
    terminal: &mut Tui,
    state: &mut ChatState,
    backend: Arc<dyn RoomBackend>,
    endpoint: &str,
) -> Result<ChatResult, Box<dyn Error>> {
    let (response_tx, mut response_rx) = mpsc::channel::<ResponseEvent>(10);

    loop {
        terminal.draw(|frame| {
            ChatUI::render(frame, state, endpoint);
        })?;

        while let Ok(event) = response_rx.try_recv() {
            match event {
                ResponseEvent::Reply(content) => {
                    state.complete_exchange(Ok(content));
                }
                ResponseEvent::Failed(err) => {
                    state.complete_exchange(Err(err));
                }
            }
        }

        let timeout = if state.pending() {
            Duration::from_millis(100)
        } else {
            Duration::from_millis(50)
        };

        if event::poll(timeout)? {
            let event = event::read()?;
            let action = handle_input(state, event);

            match action {
                InputAction::Exit => {
                    return Ok(ChatResult::Exit);
                }

                InputAction::Submit => {
                    let input = state.take_input();
                    if let Some(content) = state.begin_submit(&input) {
                        let backend = backend.clone();
                        let tx = response_tx.clone();

                        tokio::spawn(async move {
                            match backend.send(&content).await {
                                Ok(reply) => {
                                    let _ = tx.send(ResponseEvent::Reply(reply)).await;
                                }
                                Err(err) => {
                                    let _ = tx.send(ResponseEvent::Failed(err)).await;
                                }
                            }
                        });
                    }
                }

                InputAction::Command(cmd) => match parse_command(&cmd) {
                    CommandResult::Exit => {
                        return Ok(ChatResult::Exit);
                    }
                    result => handle_command(state, result),
                },

                InputAction::ScrollUp => {
                    state.scroll_up();
                }

                InputAction::ScrollDown => {
                    state.scroll_down();
                }

                InputAction::ScrollBottom => {
                    state.scroll_to_bottom();
                }

                InputAction::None => {}
            }
        } else if state.pending() {
            state.tick_loading();
        }
    }
}

/// Handle command execution
///
/// Command output goes to the status line; the transcript only ever holds
/// user submissions and remote replies.
fn handle_command(state: &mut ChatState, result: CommandResult) {
    match result {
        CommandResult::None | CommandResult::Exit => {}

        CommandResult::ShowHelp => {
            state.status_message = Some(HELP_TEXT.to_string());
        }

        CommandResult::Unknown(cmd) => {
            state.status_message = Some(format!("Unknown command: /{cmd} (/help for commands)"));
        }
    }
}
