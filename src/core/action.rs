//! # Actions
//!
//! Everything that can happen in RideFinder becomes an `Action`.
//! User edits the pickup field? That's `Action::PickupLocationChanged`.
//! Browser launch fails? That's `Action::LaunchFailed(description)`.
//!
//! The `update()` function takes the current state and an action, then
//! mutates the state and returns an `Effect`. No side effects here. I/O
//! (opening the URL) happens in the TUI layer.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! This makes everything testable: feed actions, assert on state and effect.

use log::{info, warn};

use crate::core::state::{App, Toast};
use crate::core::url::build_search_url;

/// Every state transition in the app.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Pickup location field edited (forwarded into the search-state holder).
    PickupLocationChanged(String),
    /// Pickup date confirmed in the picker.
    PickupDateChanged(String),
    /// Search activated. Drop-off values are owned by the presentation layer
    /// and handed over at dispatch time; they never pass through the holder.
    Search {
        drop_off_location: String,
        drop_off_date: String,
    },
    /// The platform URL opener reported a failure.
    LaunchFailed(String),
    /// The current toast ran out its display time.
    DismissToast,
    Quit,
}

/// Side effects the TUI layer must perform after an update.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Hand this URL to the platform opener.
    OpenUrl(String),
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::PickupLocationChanged(value) => {
            app.search.set_pickup_location(value);
            Effect::None
        }
        Action::PickupDateChanged(value) => {
            app.search.set_pickup_date(value);
            Effect::None
        }
        Action::Search {
            drop_off_location,
            drop_off_date,
        } => {
            // The button is disabled while not ready, but the trigger
            // condition is re-checked here so the reducer stands alone.
            if !app.search.can_search() {
                return Effect::None;
            }
            let url = build_search_url(
                &app.base_url,
                &app.search.pickup_location(),
                &drop_off_location,
                &app.search.pickup_date(),
                &drop_off_date,
            );
            info!("Search dispatched: {url}");
            Effect::OpenUrl(url)
        }
        Action::LaunchFailed(message) => {
            warn!("URL launch failed: {message}");
            app.toast = Some(Toast::new(message));
            Effect::None
        }
        Action::DismissToast => {
            app.toast = None;
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    fn search_action() -> Action {
        Action::Search {
            drop_off_location: String::new(),
            drop_off_date: String::new(),
        }
    }

    #[test]
    fn test_field_changes_drive_readiness() {
        let mut app = test_app();

        update(&mut app, Action::PickupLocationChanged("NYC".to_string()));
        assert!(!app.search.can_search());

        update(&mut app, Action::PickupDateChanged("2025-03-01".to_string()));
        assert!(app.search.can_search());
    }

    #[test]
    fn test_search_blocked_while_not_ready() {
        let mut app = test_app();
        update(&mut app, Action::PickupLocationChanged("NYC".to_string()));

        assert_eq!(update(&mut app, search_action()), Effect::None);
    }

    #[test]
    fn test_search_emits_open_url() {
        let mut app = test_app();
        update(&mut app, Action::PickupLocationChanged("NYC".to_string()));
        update(&mut app, Action::PickupDateChanged("2025-03-01".to_string()));

        let effect = update(&mut app, search_action());
        assert_eq!(
            effect,
            Effect::OpenUrl("https://cars.example.com/NYC/2025-03-01/".to_string())
        );
    }

    #[test]
    fn test_search_includes_drop_off_values() {
        let mut app = test_app();
        update(&mut app, Action::PickupLocationChanged("NYC".to_string()));
        update(&mut app, Action::PickupDateChanged("2025-03-01".to_string()));

        let effect = update(
            &mut app,
            Action::Search {
                drop_off_location: "LAX".to_string(),
                drop_off_date: "2025-03-10".to_string(),
            },
        );
        assert_eq!(
            effect,
            Effect::OpenUrl("https://cars.example.com/NYC/LAX/2025-03-01/2025-03-10".to_string())
        );
    }

    #[test]
    fn test_launch_failure_raises_toast() {
        let mut app = test_app();
        update(&mut app, Action::LaunchFailed("no browser found".to_string()));
        assert_eq!(app.toast.as_ref().map(|t| t.message.as_str()), Some("no browser found"));

        update(&mut app, Action::DismissToast);
        assert!(app.toast.is_none());
    }

    #[test]
    fn test_quit() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
