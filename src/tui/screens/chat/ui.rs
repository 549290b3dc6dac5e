//! Chat UI rendering components

use super::state::ChatState;
use chrono::Local;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

const SPINNER_FRAMES: [&str; 4] = ["⠋", "⠙", "⠹", "⠸"];

/// Main chat UI renderer
pub struct ChatUI;

impl ChatUI {
    /// Render the complete chat interface
    pub fn render(frame: &mut Frame, state: &ChatState, endpoint: &str) {
        let area = frame.area();

        // Layout: Status bar, Messages, Input, Help bar
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Status bar
                Constraint::Min(5),    // Messages area
                Constraint::Length(3), // Input area
                Constraint::Length(1), // Help bar
            ])
            .split(area);

        Self::render_status_bar(frame, chunks[0], state, endpoint);
        Self::render_messages(frame, chunks[1], state);
        Self::render_input(frame, chunks[2], state);
        Self::render_help_bar(frame, chunks[3], state);
    }

    /// Render status bar with room info
    fn render_status_bar(frame: &mut Frame, area: Rect, state: &ChatState, endpoint: &str) {
        let loading_indicator = if state.pending() {
            Span::styled(
                format!(" {} ", SPINNER_FRAMES[state.loading_frame]),
                Style::default().fg(Color::Yellow),
            )
        } else {
            Span::raw("")
        };

        let status_msg = state
            .status_message
            .as_ref()
            .map(|s| Span::styled(format!(" │ {} ", s), Style::default().fg(Color::DarkGray)))
            .unwrap_or_else(|| Span::raw(""));

        let status_line = Line::from(vec![
            Span::styled(" 💬 AI room ", Style::default().fg(Color::Cyan)),
            Span::styled("│ ", Style::default().fg(Color::DarkGray)),
            Span::styled(endpoint.to_string(), Style::default().fg(Color::Magenta)),
            Span::styled(" │ ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{} messages", state.messages().len()),
                Style::default().fg(Color::White),
            ),
            loading_indicator,
            status_msg,
        ]);

        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray));

        let para = Paragraph::new(status_line).block(block);
        frame.render_widget(para, area);
    }

    /// Render messages area
    fn render_messages(frame: &mut Frame, area: Rect, state: &ChatState) {
        let inner_height = area.height as usize;

        // Build message lines
        let mut lines: Vec<Line> = Vec::new();

        for msg in state.messages() {
            let stamp = msg.created_at.with_timezone(&Local).format("%H:%M");
            let (prefix, style) = if msg.is_my_message {
                (
                    format!("You {stamp}: "),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                (format!("AI {stamp}: "), Style::default().fg(Color::Green))
            };

            // First line with prefix
            let content_lines: Vec<&str> = msg.content.lines().collect();
            if let Some(first_line) = content_lines.first() {
                lines.push(Line::from(vec![
                    Span::styled(prefix.clone(), style),
                    Span::raw((*first_line).to_string()),
                ]));
            }

            // Continuation lines with indent
            for line in content_lines.iter().skip(1) {
                let indent = " ".repeat(prefix.len());
                lines.push(Line::from(format!("{indent}{line}")));
            }

            // Empty line between messages
            lines.push(Line::from(""));
        }

        // Show loading indicator while waiting
        if state.pending() {
            lines.push(Line::from(Span::styled(
                format!("AI: {} Thinking...", SPINNER_FRAMES[state.loading_frame]),
                Style::default().fg(Color::Yellow),
            )));
        }

        // Anchor to the bottom, minus the scroll-back offset
        let total_lines = lines.len();
        let max_scroll = total_lines.saturating_sub(inner_height) as u16;
        let scroll = max_scroll.saturating_sub(state.scroll_offset.min(max_scroll));

        let block = Block::default()
            .borders(Borders::LEFT | Borders::RIGHT)
            .border_style(Style::default().fg(Color::DarkGray));

        let para = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0));

        frame.render_widget(para, area);
    }

    /// Render input area
    fn render_input(frame: &mut Frame, area: Rect, state: &ChatState) {
        let input_style = if state.pending() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::White)
        };

        // Build input display with cursor
        let display_input = if state.pending() {
            "Waiting for reply...".to_string()
        } else if state.input.is_empty() {
            "Type your message...".to_string()
        } else {
            let mut chars: Vec<char> = state.input.chars().collect();
            if state.cursor_pos >= chars.len() {
                chars.push('_');
            } else {
                chars.insert(state.cursor_pos, '|');
            }
            chars.into_iter().collect()
        };

        let input_line = Line::from(vec![
            Span::styled(
                "> ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(display_input, input_style),
        ]);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(if state.pending() {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default().fg(Color::Cyan)
            })
            .title(if state.is_command() {
                " Command "
            } else {
                " Message "
            });

        let para = Paragraph::new(input_line).block(block);
        frame.render_widget(para, area);
    }

    /// Render help bar
    fn render_help_bar(frame: &mut Frame, area: Rect, state: &ChatState) {
        let help_text = if state.pending() {
            Line::from(Span::styled(
                " Waiting for the AI... ",
                Style::default().fg(Color::Yellow),
            ))
        } else {
            Line::from(vec![
                Span::styled(" Enter", Style::default().fg(Color::Green)),
                Span::raw(": Send │ "),
                Span::styled("/help", Style::default().fg(Color::Green)),
                Span::raw(": Commands │ "),
                Span::styled("PageUp/Down", Style::default().fg(Color::Green)),
                Span::raw(": Scroll │ "),
                Span::styled("Ctrl+Q", Style::default().fg(Color::Red)),
                Span::raw(": Exit "),
            ])
        };

        let para = Paragraph::new(help_text);
        frame.render_widget(para, area);
    }
}
