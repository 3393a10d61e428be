//! # Application State
//!
//! Core business state for RideFinder. This module contains domain logic
//! only - no TUI-specific types. Presentation state (field buffers, focus,
//! the drop-off values) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── search: SearchState       // pickup location + pickup date + readiness
//! ├── base_url: String          // search site base, from config
//! └── toast: Option<Toast>      // transient error notification
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use std::time::{Duration, Instant};

use crate::core::config::ResolvedConfig;
use crate::core::search::SearchState;

/// How long a toast stays on screen before the event loop dismisses it.
pub const TOAST_DURATION: Duration = Duration::from_secs(2);

pub struct App {
    pub search: SearchState,
    pub base_url: String,
    pub toast: Option<Toast>,
}

impl App {
    pub fn new(base_url: String) -> Self {
        Self {
            search: SearchState::new(),
            base_url,
            toast: None,
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self::new(config.base_url.clone())
    }
}

/// A short, auto-dismissing, non-blocking notification.
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    shown_at: Instant,
}

impl Toast {
    pub fn new(message: String) -> Self {
        Self {
            message,
            shown_at: Instant::now(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.shown_at.elapsed() >= TOAST_DURATION
    }
}
