//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the single
//! search screen, and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Loop
//!
//! One synchronous loop: draw, poll with a timeout, route the event.
//! Routing order matters:
//!
//! 1. Ctrl+C quits from anywhere.
//! 2. An open date-picker overlay captures everything else.
//! 3. Tab/Shift-Tab (and ↑/↓) move focus between form elements.
//! 4. Everything else goes to the focused element.
//!
//! The poll timeout doubles as the toast clock: while a toast is visible the
//! loop wakes often enough to dismiss it on time.

pub mod component;
pub mod components;
pub mod event;
mod ui;

use log::{info, warn};
use std::io::stdout;
use std::time::Duration;

use crossterm::cursor::{SetCursorStyle, Show};
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::search::ReadinessWatch;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{
    DatePickerEvent, DatePickerState, DatePickerTarget, FieldEvent, TextField,
};
use crate::tui::event::{TuiEvent, poll_event_timeout};

/// Which form element receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    PickupLocation,
    DropOffLocation,
    PickupDate,
    DropOffDate,
    Search,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::PickupLocation => Focus::DropOffLocation,
            Focus::DropOffLocation => Focus::PickupDate,
            Focus::PickupDate => Focus::DropOffDate,
            Focus::DropOffDate => Focus::Search,
            Focus::Search => Focus::PickupLocation,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::PickupLocation => Focus::Search,
            Focus::DropOffLocation => Focus::PickupLocation,
            Focus::PickupDate => Focus::DropOffLocation,
            Focus::DropOffDate => Focus::PickupDate,
            Focus::Search => Focus::DropOffDate,
        }
    }
}

/// TUI-specific presentation state (not part of core business logic).
///
/// The drop-off location and drop-off date live here and only here; they are
/// read at search time and never pass through the search-state holder.
pub struct TuiState {
    pub pickup_location: TextField,
    pub drop_off_location: TextField,
    /// Stored pickup date string (mirrors the holder's copy for display)
    pub pickup_date: String,
    /// Stored drop-off date string (presentation-local, the only copy)
    pub drop_off_date: String,
    pub focus: Focus,
    /// Date picker overlay (None = hidden)
    pub date_picker: Option<DatePickerState>,
    /// Live subscription to the readiness projection
    pub readiness: ReadinessWatch,
}

impl TuiState {
    pub fn new(readiness: ReadinessWatch) -> Self {
        Self {
            pickup_location: TextField::new(
                "Pickup Location",
                "Enter city, airport, or address",
            ),
            drop_off_location: TextField::new(
                "Drop-off Location (Optional)",
                "Enter city, airport, or address",
            ),
            pickup_date: String::new(),
            drop_off_date: String::new(),
            focus: Focus::PickupLocation,
            date_picker: None,
            readiness,
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableBracketedPaste,
            Show,                        // Cursor visible for the text fields
            SetCursorStyle::SteadyBlock, // Non-blinking: redraws reset the blink timer
        )?;
        info!("Terminal modes enabled (bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste);
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::from_config(&config);
    let mut tui = TuiState::new(app.search.subscribe());

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new()?;

    loop {
        terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;

        // The toast dismisses itself once its display time runs out
        if app.toast.as_ref().is_some_and(|t| t.is_expired()) {
            update(&mut app, Action::DismissToast);
        }

        // Wake often while a toast is counting down, rarely otherwise
        let timeout = if app.toast.is_some() {
            Duration::from_millis(100)
        } else {
            Duration::from_millis(250)
        };
        let Some(event) = poll_event_timeout(timeout) else {
            continue;
        };

        // Ctrl+C always quits regardless of what is open
        if event == TuiEvent::ForceQuit {
            if update(&mut app, Action::Quit) == Effect::Quit {
                break;
            }
            continue;
        }

        if event == TuiEvent::Resize {
            continue;
        }

        // When the date picker is open, it captures all remaining events
        if let Some(picker) = &mut tui.date_picker {
            if let Some(picker_event) = picker.handle_event(&event) {
                match picker_event {
                    DatePickerEvent::Confirm(date) => {
                        match picker.target {
                            DatePickerTarget::Pickup => {
                                tui.pickup_date = date.clone();
                                update(&mut app, Action::PickupDateChanged(date));
                            }
                            // Drop-off date stays presentation-local; the
                            // holder never sees it and readiness ignores it.
                            DatePickerTarget::DropOff => tui.drop_off_date = date,
                        }
                        tui.date_picker = None;
                    }
                    DatePickerEvent::Dismiss => tui.date_picker = None,
                }
            }
            continue;
        }

        match event {
            TuiEvent::Escape => {
                if update(&mut app, Action::Quit) == Effect::Quit {
                    break;
                }
            }
            TuiEvent::FocusNext | TuiEvent::CursorDown => tui.focus = tui.focus.next(),
            TuiEvent::FocusPrev | TuiEvent::CursorUp => tui.focus = tui.focus.prev(),
            _ => route_to_focused(&mut app, &mut tui, &event),
        }
    }

    ratatui::restore();
    Ok(())
}

/// Forward an event to whichever form element has focus.
fn route_to_focused(app: &mut App, tui: &mut TuiState, event: &TuiEvent) {
    match tui.focus {
        Focus::PickupLocation => {
            if let Some(field_event) = tui.pickup_location.handle_event(event) {
                match field_event {
                    FieldEvent::Changed(value) => {
                        update(app, Action::PickupLocationChanged(value));
                    }
                    FieldEvent::Submit => tui.focus = tui.focus.next(),
                }
            }
        }
        Focus::DropOffLocation => {
            if let Some(field_event) = tui.drop_off_location.handle_event(event) {
                match field_event {
                    // Presentation-local; read at search time
                    FieldEvent::Changed(_) => {}
                    FieldEvent::Submit => tui.focus = tui.focus.next(),
                }
            }
        }
        Focus::PickupDate => {
            if *event == TuiEvent::Submit {
                tui.date_picker =
                    Some(DatePickerState::open(DatePickerTarget::Pickup, &tui.pickup_date));
            }
        }
        Focus::DropOffDate => {
            if *event == TuiEvent::Submit {
                tui.date_picker =
                    Some(DatePickerState::open(DatePickerTarget::DropOff, &tui.drop_off_date));
            }
        }
        Focus::Search => {
            if *event == TuiEvent::Submit {
                dispatch_search(app, tui);
            }
        }
    }
}

/// Build the URL through the reducer and hand it to the platform opener.
/// The one failure the app handles is caught right here and becomes a toast.
fn dispatch_search(app: &mut App, tui: &mut TuiState) {
    let effect = update(
        app,
        Action::Search {
            drop_off_location: tui.drop_off_location.buffer.clone(),
            drop_off_date: tui.drop_off_date.clone(),
        },
    );
    if let Effect::OpenUrl(url) = effect {
        match open::that(&url) {
            Ok(()) => info!("Opened {url} in the default browser"),
            Err(e) => {
                warn!("Opening {url} failed: {e}");
                update(app, Action::LaunchFailed(e.to_string()));
            }
        }
    }
}
