use crate::core::state::App;
use crate::tui::components::{DateField, DatePicker, SearchButton, ToastView};
use crate::tui::{Focus, TuiState};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::tui::component::Component;

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([
        Length(1), // title bar
        Length(1),
        Length(3), // pickup location
        Length(3), // drop-off location
        Length(3), // date row
        Length(3), // search button
        Min(0),
    ]);
    let [title_area, _, pickup_area, drop_off_area, date_area, button_area, _] =
        layout.areas(frame.area());

    // Title bar
    let title = Line::from(vec![
        Span::styled("RideFinder", Style::default().fg(Color::Green)),
        Span::raw("  |  Tab Next field   Enter Pick date / Search   Esc Quit"),
    ]);
    frame.render_widget(title, title_area);

    // Location fields (sync focus props before rendering)
    tui.pickup_location.focused = tui.focus == Focus::PickupLocation;
    tui.drop_off_location.focused = tui.focus == Focus::DropOffLocation;
    tui.pickup_location.render(frame, pickup_area);
    tui.drop_off_location.render(frame, drop_off_area);

    // Date fields, side by side
    let [pickup_date_area, drop_off_date_area] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .areas(date_area);
    DateField::new(
        "Pickup Date",
        tui.pickup_date.clone(),
        tui.focus == Focus::PickupDate,
    )
    .render(frame, pickup_date_area);
    DateField::new(
        "Drop-off Date",
        tui.drop_off_date.clone(),
        tui.focus == Focus::DropOffDate,
    )
    .render(frame, drop_off_date_area);

    // Search button, enabled by the readiness watch
    let can_search = tui.readiness.get();
    SearchButton::new(can_search, tui.focus == Focus::Search).render(frame, button_area);

    // Overlays last, on top of everything
    if let Some(picker) = &tui.date_picker {
        DatePicker::new(picker).render(frame, frame.area());
    }
    if let Some(toast) = &app.toast {
        ToastView::new(toast.message.clone()).render(frame, frame.area());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::core::state::Toast;
    use crate::test_support::test_app;
    use crate::tui::components::{DatePickerState, DatePickerTarget};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_text(app: &App, tui: &mut TuiState) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, app, tui)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_draw_ui_shows_form() {
        let app = test_app();
        let mut tui = TuiState::new(app.search.subscribe());

        let text = render_to_text(&app, &mut tui);
        assert!(text.contains("RideFinder"));
        assert!(text.contains("Pickup Location"));
        assert!(text.contains("Drop-off Location (Optional)"));
        assert!(text.contains("Pickup Date"));
        assert!(text.contains("Drop-off Date"));
        assert!(text.contains("Search"));
    }

    #[test]
    fn test_draw_ui_with_picker_overlay() {
        let app = test_app();
        let mut tui = TuiState::new(app.search.subscribe());
        tui.date_picker = Some(DatePickerState::open(DatePickerTarget::Pickup, "2025-06-15"));

        let text = render_to_text(&app, &mut tui);
        assert!(text.contains("June 2025"));
    }

    #[test]
    fn test_draw_ui_with_toast() {
        let mut app = test_app();
        app.toast = Some(Toast::new("could not open browser".to_string()));
        let mut tui = TuiState::new(app.search.subscribe());

        let text = render_to_text(&app, &mut tui);
        assert!(text.contains("could not open browser"));
    }

    #[test]
    fn test_readiness_reaches_the_button() {
        let mut app = test_app();
        let mut tui = TuiState::new(app.search.subscribe());

        update(&mut app, Action::PickupLocationChanged("NYC".to_string()));
        update(&mut app, Action::PickupDateChanged("2025-03-01".to_string()));

        // Rendering reads the watch; no stale value once the update propagated
        render_to_text(&app, &mut tui);
        assert!(tui.readiness.get());
    }
}
