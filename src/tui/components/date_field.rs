//! # DateField Component
//!
//! Read-only display for a stored calendar-date string. Editing happens in
//! the date picker overlay, which the parent opens when this field receives
//! Enter; the field itself just shows the current value or a hint.
//!
//! Stateless: all fields are props from the parent.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Paragraph};

use crate::tui::component::Component;

pub struct DateField {
    /// Block title, e.g. "Pickup Date"
    pub title: &'static str,
    /// Stored calendar-date string, empty when unset
    pub value: String,
    /// Whether this field currently has focus
    pub focused: bool,
}

impl DateField {
    pub fn new(title: &'static str, value: String, focused: bool) -> Self {
        Self { title, value, focused }
    }
}

impl Component for DateField {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let block = Block::bordered()
            .border_type(ratatui::widgets::BorderType::Rounded)
            .border_style(border_style)
            .title(self.title);

        let paragraph = if self.value.is_empty() {
            Paragraph::new("Select date").style(Style::default().fg(Color::DarkGray))
        } else {
            Paragraph::new(self.value.as_str()).style(Style::default().fg(Color::White))
        };

        frame.render_widget(paragraph.block(block), area);
    }
}
