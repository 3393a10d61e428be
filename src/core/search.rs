//! # Search-State Holder
//!
//! Single source of truth for the two required search fields (pickup
//! location, pickup date) and the derived readiness flag that gates the
//! search action.
//!
//! ```text
//! SearchState
//! ├── pickup_location: Option<String>   // unset and "" both mean "not provided"
//! ├── pickup_date: Option<String>       // calendar-date string, %Y-%m-%d
//! └── readiness projection              // pickup_location && pickup_date non-empty
//!         │
//!         ├── ReadinessWatch  (UI: enables/disables the search button)
//!         └── ReadinessWatch  (any number of independent watches)
//! ```
//!
//! The projection is shared across watches and lazy: it stays cached while at
//! least one watch is attached, and for a short grace period after the last
//! one detaches (re-subscription during a UI rebuild must not pay a cold
//! start). Teardown is checked on the next mutation or subscription — no
//! timer thread, the whole app runs on one event loop.
//!
//! Notification is change-driven: setting a field to the value it already
//! holds recomputes the projection but does not broadcast.
//!
//! Drop-off fields are deliberately absent. They never affect readiness and
//! live in the presentation layer, which reads them at search time.

use std::sync::mpsc::{Receiver, Sender, channel};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// How long the cached projection survives after the last watch detaches.
pub const RESUBSCRIBE_GRACE: Duration = Duration::from_secs(5);

/// `true` iff the value is provided: non-unset and non-empty.
fn provided(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.is_empty())
}

struct Shared {
    pickup_location: Option<String>,
    pickup_date: Option<String>,
    /// Cached readiness. `None` = torn down (no recent watches).
    projection: Option<bool>,
    /// Set when the last watch detaches; cleared on subscribe.
    idle_since: Option<Instant>,
    subscribers: Vec<(u64, Sender<bool>)>,
    next_watch_id: u64,
    grace: Duration,
}

impl Shared {
    fn compute(&self) -> bool {
        provided(&self.pickup_location) && provided(&self.pickup_date)
    }

    /// Recompute after a mutation: tear down if the grace has lapsed with no
    /// watches, otherwise refresh the cache and broadcast on change.
    fn refresh(&mut self) {
        if self.subscribers.is_empty() {
            let lapsed = self
                .idle_since
                .is_none_or(|since| since.elapsed() >= self.grace);
            if lapsed {
                self.projection = None;
                self.idle_since = None;
                return;
            }
        }

        let current = self.compute();
        if self.projection != Some(current) {
            self.projection = Some(current);
            // Watches that disappeared without a proper detach just drop out.
            self.subscribers.retain(|(_, tx)| tx.send(current).is_ok());
        }
    }
}

/// Owner of the required search fields. Cheap to share with the UI layer;
/// all access goes through the inner lock.
pub struct SearchState {
    shared: Arc<Mutex<Shared>>,
}

impl SearchState {
    pub fn new() -> Self {
        Self::with_grace(RESUBSCRIBE_GRACE)
    }

    /// Grace-period override for tests.
    pub fn with_grace(grace: Duration) -> Self {
        Self {
            shared: Arc::new(Mutex::new(Shared {
                pickup_location: None,
                pickup_date: None,
                projection: None,
                idle_since: None,
                subscribers: Vec::new(),
                next_watch_id: 0,
                grace,
            })),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Shared> {
        // Single-threaded event loop; a poisoned lock means a prior panic
        // already unwound the app.
        self.shared.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Replace the pickup location unconditionally (no validation, no
    /// trimming). Readiness is recomputed as a side effect.
    pub fn set_pickup_location(&self, value: impl Into<String>) {
        let mut shared = self.lock();
        shared.pickup_location = Some(value.into());
        shared.refresh();
    }

    /// Replace the pickup date string unconditionally.
    pub fn set_pickup_date(&self, value: impl Into<String>) {
        let mut shared = self.lock();
        shared.pickup_date = Some(value.into());
        shared.refresh();
    }

    /// Current pickup location, empty string if not provided.
    pub fn pickup_location(&self) -> String {
        self.lock().pickup_location.clone().unwrap_or_default()
    }

    /// Current pickup date, empty string if not provided.
    pub fn pickup_date(&self) -> String {
        self.lock().pickup_date.clone().unwrap_or_default()
    }

    /// Synchronous readiness read, independent of any watch.
    pub fn can_search(&self) -> bool {
        self.lock().compute()
    }

    /// Whether the shared projection is currently cached (observable effect
    /// of the lazy teardown; exposed so tests can pin the grace behavior).
    pub fn projection_active(&self) -> bool {
        self.lock().projection.is_some()
    }

    /// Attach a watch. The current readiness value is delivered immediately;
    /// every subsequent change is pushed to all attached watches.
    pub fn subscribe(&self) -> ReadinessWatch {
        let mut shared = self.lock();
        shared.idle_since = None;

        let current = match shared.projection {
            Some(value) => value,
            None => {
                let value = shared.compute();
                shared.projection = Some(value);
                value
            }
        };

        let id = shared.next_watch_id;
        shared.next_watch_id += 1;

        let (tx, rx) = channel();
        shared.subscribers.push((id, tx));

        ReadinessWatch {
            shared: Arc::clone(&self.shared),
            id,
            rx,
            last: current,
        }
    }
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new()
    }
}

/// A live subscription to the readiness projection.
///
/// `get` drains pending notifications and returns the latest value, so a
/// per-frame read is always consistent with the newest mutation. Dropping
/// the watch detaches it; when the last one goes, the grace countdown starts.
pub struct ReadinessWatch {
    shared: Arc<Mutex<Shared>>,
    id: u64,
    rx: Receiver<bool>,
    last: bool,
}

impl ReadinessWatch {
    /// Latest readiness value.
    pub fn get(&mut self) -> bool {
        while let Ok(value) = self.rx.try_recv() {
            self.last = value;
        }
        self.last
    }
}

impl Drop for ReadinessWatch {
    fn drop(&mut self) {
        let mut shared = match self.shared.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        shared.subscribers.retain(|(id, _)| *id != self.id);
        if shared.subscribers.is_empty() {
            shared.idle_since = Some(Instant::now());
        }
    }
}
