use std::time::Duration;

use ridefinder::core::action::{Action, Effect, update};
use ridefinder::core::search::SearchState;
use ridefinder::core::state::App;
use ridefinder::core::url::build_search_url;
use ridefinder::tui::components::{DatePickerState, DatePickerTarget, DATE_FORMAT};

use chrono::{Local, NaiveDate};

// ============================================================================
// Helper Functions
// ============================================================================

const BASE: &str = "https://cars.example.com/";

fn ready_app() -> App {
    let mut app = App::new(BASE.to_string());
    update(&mut app, Action::PickupLocationChanged("NYC".to_string()));
    update(&mut app, Action::PickupDateChanged("2025-03-01".to_string()));
    app
}

// ============================================================================
// Readiness Properties
// ============================================================================

#[test]
fn test_readiness_ignores_drop_off_fields() {
    // Drop-off values never touch the holder, so there is nothing to vary:
    // readiness depends on exactly the two required fields.
    let app = ready_app();
    assert!(app.search.can_search());

    let empty = App::new(BASE.to_string());
    assert!(!empty.search.can_search());
}

#[test]
fn test_clearing_either_required_field_flips_readiness() {
    let mut app = ready_app();

    update(&mut app, Action::PickupLocationChanged(String::new()));
    assert!(!app.search.can_search());

    update(&mut app, Action::PickupLocationChanged("NYC".to_string()));
    update(&mut app, Action::PickupDateChanged(String::new()));
    assert!(!app.search.can_search());
}

#[test]
fn test_watch_is_consistent_after_each_change() {
    let app = App::new(BASE.to_string());
    let mut watch = app.search.subscribe();

    let steps: [(&str, &str, bool); 4] = [
        ("NYC", "", false),
        ("NYC", "2025-03-01", true),
        ("", "2025-03-01", false),
        ("LAX", "2025-03-01", true),
    ];
    for (location, date, expected) in steps {
        app.search.set_pickup_location(location);
        app.search.set_pickup_date(date);
        assert_eq!(watch.get(), expected, "location={location:?} date={date:?}");
    }
}

#[test]
fn test_projection_grace_period() {
    let state = SearchState::with_grace(Duration::from_millis(50));
    drop(state.subscribe());

    // Still within the grace: cache stays warm
    state.set_pickup_location("NYC");
    assert!(state.projection_active());

    std::thread::sleep(Duration::from_millis(60));
    state.set_pickup_location("LAX");
    assert!(!state.projection_active());
}

// ============================================================================
// URL Properties
// ============================================================================

#[test]
fn test_url_required_segments_only() {
    assert_eq!(
        build_search_url(BASE, "NYC", "", "2025-03-01", ""),
        format!("{BASE}NYC/2025-03-01/")
    );
}

#[test]
fn test_url_all_segments_in_fixed_order() {
    assert_eq!(
        build_search_url(BASE, "NYC", "LAX", "2025-03-01", "2025-03-10"),
        format!("{BASE}NYC/LAX/2025-03-01/2025-03-10")
    );
}

// ============================================================================
// End-to-End Reducer Flow
// ============================================================================

#[test]
fn test_search_flow_without_drop_off() {
    let mut app = ready_app();

    let effect = update(
        &mut app,
        Action::Search {
            drop_off_location: String::new(),
            drop_off_date: String::new(),
        },
    );
    assert_eq!(
        effect,
        Effect::OpenUrl("https://cars.example.com/NYC/2025-03-01/".to_string())
    );
}

#[test]
fn test_search_flow_reads_drop_off_from_presentation_values() {
    // Drop-off values come straight from the UI at dispatch time; a drop-off
    // location without a drop-off date must still compose a clean path.
    let mut app = ready_app();

    let effect = update(
        &mut app,
        Action::Search {
            drop_off_location: "LAX".to_string(),
            drop_off_date: String::new(),
        },
    );
    assert_eq!(
        effect,
        Effect::OpenUrl("https://cars.example.com/NYC/LAX/2025-03-01/".to_string())
    );
}

#[test]
fn test_search_refused_until_ready() {
    let mut app = App::new(BASE.to_string());
    let effect = update(
        &mut app,
        Action::Search {
            drop_off_location: "LAX".to_string(),
            drop_off_date: "2025-03-10".to_string(),
        },
    );
    assert_eq!(effect, Effect::None);
}

#[test]
fn test_launch_failure_surfaces_and_dismisses() {
    let mut app = ready_app();

    update(&mut app, Action::LaunchFailed("exec format error".to_string()));
    assert_eq!(
        app.toast.as_ref().map(|t| t.message.as_str()),
        Some("exec format error")
    );

    // The screen keeps its prior state for a retry
    assert!(app.search.can_search());
    assert_eq!(app.search.pickup_location(), "NYC");

    update(&mut app, Action::DismissToast);
    assert!(app.toast.is_none());
}

#[test]
fn test_repeated_sets_are_idempotent() {
    let mut app = ready_app();
    let mut watch = app.search.subscribe();
    assert!(watch.get());

    for _ in 0..10 {
        update(&mut app, Action::PickupLocationChanged("NYC".to_string()));
        update(&mut app, Action::PickupDateChanged("2025-03-01".to_string()));
    }
    assert!(watch.get());
    assert!(app.search.can_search());
}

// ============================================================================
// Date Picker Seeding
// ============================================================================

#[test]
fn test_picker_seeds_today_without_stored_value() {
    let picker = DatePickerState::open(DatePickerTarget::Pickup, "");
    assert_eq!(picker.selected, Local::now().date_naive());
}

#[test]
fn test_picker_round_trips_stored_value() {
    let picker = DatePickerState::open(DatePickerTarget::DropOff, "2025-06-15");
    assert_eq!(picker.selected, NaiveDate::from_ymd_opt(2025, 6, 15).unwrap());
    assert_eq!(picker.selected.format(DATE_FORMAT).to_string(), "2025-06-15");
}
