//! # Toast Component
//!
//! Bottom-centered overlay for the one user-facing error: "couldn't open the
//! search URL". Non-blocking; the event loop dismisses it when its display
//! time runs out, and the screen underneath keeps its state.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::tui::component::Component;

pub struct ToastView {
    /// Failure description from the platform opener (prop)
    pub message: String,
}

impl ToastView {
    pub fn new(message: String) -> Self {
        Self { message }
    }
}

impl Component for ToastView {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let width = (self.message.chars().count() as u16 + 4)
            .min(area.width.saturating_sub(2))
            .max(20);
        let overlay = Rect {
            x: area.x + (area.width.saturating_sub(width)) / 2,
            y: (area.y + area.height).saturating_sub(4),
            width,
            height: 3,
        };

        frame.render_widget(Clear, overlay);
        let toast = Paragraph::new(self.message.as_str())
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::White))
            .block(
                Block::bordered()
                    .border_style(Style::default().fg(Color::Red))
                    .title(" Error "),
            );
        frame.render_widget(toast, overlay);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_toast_shows_message() {
        let backend = TestBackend::new(60, 12);
        let mut terminal = Terminal::new(backend).unwrap();

        let mut toast = ToastView::new("no handler available".to_string());
        terminal.draw(|f| toast.render(f, f.area())).unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer.content().iter().map(|c| c.symbol()).collect::<String>();
        assert!(text.contains("no handler available"));
        assert!(text.contains("Error"));
    }
}
