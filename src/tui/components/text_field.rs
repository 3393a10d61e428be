//! # TextField Component
//!
//! Single-line text input for the location fields.
//!
//! ## Responsibilities
//!
//! - Capture text input
//! - Handle editing (backspace, delete, cursor movement, paste)
//! - Show a placeholder while empty
//! - Scroll horizontally so the cursor stays visible in narrow terminals
//!
//! ## State Management
//!
//! The buffer and cursor are internal state. Focus is a prop from the parent:
//! the event loop only routes events here while the field has focus, and the
//! render dims the border when it doesn't.
//!
//! Edits are reported as `FieldEvent::Changed` carrying the full buffer, so
//! the parent can forward the new value into the search-state holder without
//! reaching into this component.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// High-level events emitted by a TextField
#[derive(Debug, Clone, PartialEq)]
pub enum FieldEvent {
    /// Text content changed; carries the full new value
    Changed(String),
    /// Enter pressed (parent decides what "submit" means for this field)
    Submit,
}

/// Single-line text input with placeholder and horizontal scrolling.
pub struct TextField {
    /// Block title, e.g. "Pickup Location"
    pub title: &'static str,
    /// Dim hint shown while the buffer is empty
    pub placeholder: &'static str,
    /// Text buffer (internal state)
    pub buffer: String,
    /// Whether this field currently has focus (prop)
    pub focused: bool,
    /// Cursor position as byte offset in buffer (0..=buffer.len())
    cursor: usize,
    /// First visible display column (horizontal scroll)
    scroll_col: u16,
}

impl TextField {
    pub fn new(title: &'static str, placeholder: &'static str) -> Self {
        Self {
            title,
            placeholder,
            buffer: String::new(),
            focused: false,
            cursor: 0,
            scroll_col: 0,
        }
    }

    /// Display column of the cursor within the full (unscrolled) line.
    fn cursor_col(&self) -> u16 {
        self.buffer[..self.cursor].width() as u16
    }

    /// Keep the cursor inside the visible window.
    fn update_scroll(&mut self, inner_width: u16) {
        if inner_width == 0 {
            return;
        }
        let col = self.cursor_col();
        if col < self.scroll_col {
            self.scroll_col = col;
        } else if col >= self.scroll_col + inner_width {
            self.scroll_col = col - inner_width + 1;
        }
    }

    fn changed(&self) -> Option<FieldEvent> {
        Some(FieldEvent::Changed(self.buffer.clone()))
    }
}

/// Previous char boundary before `pos` (assumes `pos` is itself a boundary).
fn prev_char_boundary(s: &str, pos: usize) -> usize {
    s[..pos].char_indices().next_back().map(|(i, _)| i).unwrap_or(0)
}

/// Next char boundary after `pos`.
fn next_char_boundary(s: &str, pos: usize) -> usize {
    s[pos..]
        .chars()
        .next()
        .map(|c| pos + c.len_utf8())
        .unwrap_or(s.len())
}

impl Component for TextField {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let inner_width = area.width.saturating_sub(2);
        self.update_scroll(inner_width);

        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let block = Block::bordered()
            .border_type(ratatui::widgets::BorderType::Rounded)
            .border_style(border_style)
            .title(self.title);

        let paragraph = if self.buffer.is_empty() {
            Paragraph::new(self.placeholder).style(Style::default().fg(Color::DarkGray))
        } else {
            Paragraph::new(self.buffer.as_str())
                .scroll((0, self.scroll_col))
                .style(Style::default().fg(Color::White))
        };

        frame.render_widget(paragraph.block(block), area);

        if self.focused {
            let cursor_x = area.x + 1 + self.cursor_col().saturating_sub(self.scroll_col);
            frame.set_cursor_position((cursor_x.min(area.x + area.width.saturating_sub(2)), area.y + 1));
        }
    }
}

impl EventHandler for TextField {
    type Event = FieldEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                // Single-line field, control chars have no place here
                if c.is_control() {
                    return None;
                }
                self.buffer.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                self.changed()
            }
            TuiEvent::Paste(text) => {
                // Flatten pasted newlines into spaces, this is a one-line field
                let flat: String = text.replace(['\n', '\r'], " ");
                self.buffer.insert_str(self.cursor, &flat);
                self.cursor += flat.len();
                self.changed()
            }
            TuiEvent::Backspace => {
                if self.cursor > 0 {
                    let prev = prev_char_boundary(&self.buffer, self.cursor);
                    self.buffer.drain(prev..self.cursor);
                    self.cursor = prev;
                    self.changed()
                } else {
                    None
                }
            }
            TuiEvent::Delete => {
                if self.cursor < self.buffer.len() {
                    let next = next_char_boundary(&self.buffer, self.cursor);
                    self.buffer.drain(self.cursor..next);
                    self.changed()
                } else {
                    None
                }
            }
            TuiEvent::CursorLeft => {
                if self.cursor > 0 {
                    self.cursor = prev_char_boundary(&self.buffer, self.cursor);
                }
                None
            }
            TuiEvent::CursorRight => {
                if self.cursor < self.buffer.len() {
                    self.cursor = next_char_boundary(&self.buffer, self.cursor);
                }
                None
            }
            TuiEvent::CursorHome => {
                self.cursor = 0;
                self.scroll_col = 0;
                None
            }
            TuiEvent::CursorEnd => {
                self.cursor = self.buffer.len();
                None
            }
            TuiEvent::Submit => Some(FieldEvent::Submit),
            _ => None,
        }
    }
}
