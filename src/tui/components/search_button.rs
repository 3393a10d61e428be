//! # SearchButton Component
//!
//! The single action on the screen. `enabled` mirrors the readiness flag
//! from the search-state holder; while false the button renders dimmed and
//! the event loop refuses to dispatch the search.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Paragraph};

use crate::tui::component::Component;

pub struct SearchButton {
    /// Readiness flag from the search-state holder (prop)
    pub enabled: bool,
    /// Whether the button currently has focus (prop)
    pub focused: bool,
}

impl SearchButton {
    pub fn new(enabled: bool, focused: bool) -> Self {
        Self { enabled, focused }
    }
}

impl Component for SearchButton {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let label_style = if !self.enabled {
            Style::default().fg(Color::DarkGray)
        } else if self.focused {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        };

        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let button = Paragraph::new("Search")
            .style(label_style)
            .alignment(Alignment::Center)
            .block(
                Block::bordered()
                    .border_type(ratatui::widgets::BorderType::Rounded)
                    .border_style(border_style),
            );

        frame.render_widget(button, area);
    }
}
