//! # Date Picker Component
//!
//! Modal calendar overlay for choosing the pickup or drop-off date.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `DatePickerState` lives in `TuiState` while the overlay is open
//! - `DatePicker` is created each frame with borrowed state
//!
//! Opening pre-seeds the calendar with the currently stored date if one
//! exists (parsed back with the same formatter that produced it), otherwise
//! with today. Confirming formats the selection as a calendar-date string;
//! dismissing leaves the stored value untouched.

use chrono::{Datelike, Local, Months, NaiveDate};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph};

use crate::tui::event::TuiEvent;

/// Fixed calendar-date format: year-month-day, no time-of-day, no timezone.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Which stored date the open picker writes back to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatePickerTarget {
    Pickup,
    DropOff,
}

impl DatePickerTarget {
    fn title(self) -> &'static str {
        match self {
            DatePickerTarget::Pickup => " Pickup Date ",
            DatePickerTarget::DropOff => " Drop-off Date ",
        }
    }
}

/// Events emitted by the date picker overlay.
#[derive(Debug, Clone, PartialEq)]
pub enum DatePickerEvent {
    /// Selection confirmed; carries the formatted calendar-date string.
    Confirm(String),
    Dismiss,
}

/// Persistent state for the date picker overlay.
pub struct DatePickerState {
    pub target: DatePickerTarget,
    pub selected: NaiveDate,
}

impl DatePickerState {
    /// Open a picker seeded from the stored date string, or today when the
    /// string is empty. Stored values were produced by `DATE_FORMAT`, so the
    /// parse only falls back to today if something else wrote the field.
    pub fn open(target: DatePickerTarget, stored: &str) -> Self {
        let selected = NaiveDate::parse_from_str(stored, DATE_FORMAT)
            .unwrap_or_else(|_| Local::now().date_naive());
        Self { target, selected }
    }

    /// Handle a key event, returning a DatePickerEvent if the overlay should act.
    pub fn handle_event(&mut self, event: &TuiEvent) -> Option<DatePickerEvent> {
        match event {
            TuiEvent::Escape => Some(DatePickerEvent::Dismiss),
            TuiEvent::Submit => {
                Some(DatePickerEvent::Confirm(self.selected.format(DATE_FORMAT).to_string()))
            }
            TuiEvent::CursorLeft => {
                self.shift_days(-1);
                None
            }
            TuiEvent::CursorRight => {
                self.shift_days(1);
                None
            }
            TuiEvent::CursorUp => {
                self.shift_days(-7);
                None
            }
            TuiEvent::CursorDown => {
                self.shift_days(7);
                None
            }
            TuiEvent::PageUp => {
                // chrono clamps the day to the target month's length
                if let Some(date) = self.selected.checked_sub_months(Months::new(1)) {
                    self.selected = date;
                }
                None
            }
            TuiEvent::PageDown => {
                if let Some(date) = self.selected.checked_add_months(Months::new(1)) {
                    self.selected = date;
                }
                None
            }
            TuiEvent::CursorHome => {
                self.selected = Local::now().date_naive();
                None
            }
            _ => None,
        }
    }

    fn shift_days(&mut self, days: i64) {
        if let Some(date) = self.selected.checked_add_signed(chrono::Duration::days(days)) {
            self.selected = date;
        }
    }
}

/// Transient render wrapper for the date picker overlay.
pub struct DatePicker<'a> {
    state: &'a DatePickerState,
}

impl<'a> DatePicker<'a> {
    pub fn new(state: &'a DatePickerState) -> Self {
        Self { state }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(30, 13, area);

        // Clear underlying content
        frame.render_widget(Clear, overlay);

        let help_text = " Enter OK  Esc Cancel ";

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(self.state.target.title())
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(help_text).centered())
            .padding(Padding::horizontal(1));

        let mut lines = Vec::with_capacity(9);

        // Month header, e.g. "June 2025"
        lines.push(
            Line::from(self.state.selected.format("%B %Y").to_string())
                .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
                .centered(),
        );
        lines.push(
            Line::from("Mo Tu We Th Fr Sa Su")
                .style(Style::default().fg(Color::DarkGray))
                .centered(),
        );

        for week in month_grid(self.state.selected) {
            let mut spans = Vec::with_capacity(14);
            for (i, day) in week.iter().enumerate() {
                if i > 0 {
                    spans.push(Span::raw(" "));
                }
                match day {
                    Some(d) => {
                        let style = if *d == self.state.selected.day() {
                            Style::default()
                                .fg(Color::White)
                                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                        } else {
                            Style::default().fg(Color::Gray)
                        };
                        spans.push(Span::styled(format!("{d:>2}"), style));
                    }
                    None => spans.push(Span::raw("  ")),
                }
            }
            lines.push(Line::from(spans).centered());
        }

        let calendar = Paragraph::new(lines).block(block);
        frame.render_widget(calendar, overlay);
    }
}

/// Lay the selected date's month out as Monday-first weeks.
/// `None` cells pad the leading and trailing partial weeks.
fn month_grid(date: NaiveDate) -> Vec<[Option<u32>; 7]> {
    let first = date.with_day(1).unwrap_or(date);
    let leading = first.weekday().num_days_from_monday() as usize;
    let days = days_in_month(first);

    let mut weeks = Vec::with_capacity(6);
    let mut week: [Option<u32>; 7] = [None; 7];
    let mut slot = leading;

    for day in 1..=days {
        week[slot] = Some(day);
        slot += 1;
        if slot == 7 {
            weeks.push(week);
            week = [None; 7];
            slot = 0;
        }
    }
    if slot > 0 {
        weeks.push(week);
    }
    weeks
}

fn days_in_month(first: NaiveDate) -> u32 {
    first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .map(|last| last.day())
        .unwrap_or(31)
}

/// Compute a centered rect of fixed size within the outer rect.
fn centered_rect(width: u16, height: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height.min(outer.height)),
        Constraint::Fill(1),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(width.min(outer.width)),
        Constraint::Fill(1),
    ])
    .areas(center_v);
    center
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_open_with_stored_date_seeds_that_date() {
        let state = DatePickerState::open(DatePickerTarget::Pickup, "2025-06-15");
        assert_eq!(state.selected, NaiveDate::from_ymd_opt(2025, 6, 15).unwrap());
    }

    #[test]
    fn test_open_without_stored_date_seeds_today() {
        let state = DatePickerState::open(DatePickerTarget::Pickup, "");
        assert_eq!(state.selected, Local::now().date_naive());
    }

    #[test]
    fn test_format_parse_round_trip() {
        let state = DatePickerState::open(DatePickerTarget::DropOff, "2025-06-15");
        let formatted = state.selected.format(DATE_FORMAT).to_string();
        assert_eq!(formatted, "2025-06-15");
        assert_eq!(
            NaiveDate::parse_from_str(&formatted, DATE_FORMAT).unwrap(),
            state.selected
        );
    }

    #[test]
    fn test_confirm_emits_formatted_date() {
        let mut state = DatePickerState::open(DatePickerTarget::Pickup, "2025-02-27");
        let event = state.handle_event(&TuiEvent::Submit);
        assert_eq!(event, Some(DatePickerEvent::Confirm("2025-02-27".to_string())));
    }

    #[test]
    fn test_escape_dismisses() {
        let mut state = DatePickerState::open(DatePickerTarget::Pickup, "2025-02-27");
        let event = state.handle_event(&TuiEvent::Escape);
        assert_eq!(event, Some(DatePickerEvent::Dismiss));
        // Selection is untouched; the caller simply drops the state
        assert_eq!(state.selected.day(), 27);
    }

    #[test]
    fn test_day_and_week_navigation() {
        let mut state = DatePickerState::open(DatePickerTarget::Pickup, "2025-06-15");

        state.handle_event(&TuiEvent::CursorRight);
        assert_eq!(state.selected.day(), 16);

        state.handle_event(&TuiEvent::CursorUp);
        assert_eq!(state.selected.day(), 9);

        // Crossing a month boundary backwards
        state.handle_event(&TuiEvent::CursorUp);
        state.handle_event(&TuiEvent::CursorUp);
        assert_eq!((state.selected.month(), state.selected.day()), (5, 26));
    }

    #[test]
    fn test_month_navigation_clamps_day() {
        // Jan 31 → Feb: chrono clamps to the end of February
        let mut state = DatePickerState::open(DatePickerTarget::Pickup, "2025-01-31");
        state.handle_event(&TuiEvent::PageDown);
        assert_eq!((state.selected.month(), state.selected.day()), (2, 28));
    }

    #[test]
    fn test_month_grid_june_2025() {
        // June 2025 starts on a Sunday: six leading blanks
        let grid = month_grid(NaiveDate::from_ymd_opt(2025, 6, 15).unwrap());
        assert_eq!(grid[0], [None, None, None, None, None, None, Some(1)]);
        assert_eq!(grid.last().unwrap()[0], Some(30));
    }

    #[test]
    fn test_render_shows_month_and_selection() {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();

        let state = DatePickerState::open(DatePickerTarget::Pickup, "2025-06-15");
        terminal
            .draw(|f| DatePicker::new(&state).render(f, f.area()))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer.content().iter().map(|c| c.symbol()).collect::<String>();
        assert!(text.contains("June 2025"));
        assert!(text.contains("Pickup Date"));
        assert!(text.contains("Mo Tu We"));
    }
}
