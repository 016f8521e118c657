//! Debounced refresh scheduling.
//!
//! Cursor movement arrives in bursts. The coordinator turns a burst into a
//! single refresh of the final position:
//!
//! ```text
//! selection change
//!       │
//!       ▼
//! same position as last time? ──yes──► ignore
//!       │ no
//!       ▼
//! record position, abort pending timer
//!       │
//!       └─► spawn timer task (generation N)
//!               │
//!               ├─► wait debounce duration (100ms default)
//!               │
//!               └─► spawn refresh; write only if N is still the newest generation
//! ```
//!
//! Aborting only reaches a timer that has not fired yet. Once the refresh
//! is spawned its hover query runs to completion, and a stale result is
//! dropped by the generation check instead.
//!
//! Every refresh, whether it comes from a timer or from an explicit open,
//! takes a generation number when it is scheduled. A refresh only writes to
//! the panel if no newer one was scheduled meanwhile, so the last scheduled
//! refresh wins even if an older query completes after it.

use docview_core::CursorPosition;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::task::AbortHandle;

/// Default quiet period after the last cursor move.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(100);

#[derive(Default)]
struct CoordinatorState {
    last_position: Option<CursorPosition>,
    /// Timer task of the pending refresh. Finishes as soon as the refresh is spawned.
    pending: Option<AbortHandle>,
}

/// Tracks the last seen position, the pending timer, and refresh generations.
pub struct UpdateCoordinator {
    state: Mutex<CoordinatorState>,
    generation: AtomicU64,
    debounce: Duration,
}

impl Default for UpdateCoordinator {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

impl UpdateCoordinator {
    pub fn new(debounce: Duration) -> Self {
        Self {
            state: Mutex::new(CoordinatorState::default()),
            generation: AtomicU64::new(0),
            debounce,
        }
    }

    fn lock(&self) -> MutexGuard<'_, CoordinatorState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Records `position`. Returns `false` if it equals the last recorded one.
    pub fn record_position(&self, position: CursorPosition) -> bool {
        let mut state = self.lock();
        if state.last_position == Some(position) {
            return false;
        }
        state.last_position = Some(position);
        true
    }

    pub fn last_position(&self) -> Option<CursorPosition> {
        self.lock().last_position
    }

    /// Starts a new generation and returns it.
    pub fn next_generation(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Whether no refresh was scheduled after `generation`.
    pub fn is_current(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == generation
    }

    /// Replaces any pending refresh with `refresh`, run after the debounce
    /// duration.
    ///
    /// `refresh` receives the generation the timer was scheduled with.
    pub fn schedule<F, Fut>(&self, refresh: F)
    where
        F: FnOnce(u64) -> Fut,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let mut state = self.lock();

        if let Some(previous) = state.pending.take() {
            previous.abort();
            tracing::trace!("cancelled pending documentation refresh");
        }

        let generation = self.next_generation();
        let task = refresh(generation);
        let delay = self.debounce;

        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            tracing::debug!(generation, "debounce timer expired, refreshing documentation");
            tokio::spawn(task);
        });

        state.pending = Some(handle.abort_handle());
    }

    /// Aborts the pending timer, if any. A refresh that already started keeps running.
    pub fn cancel(&self) {
        if let Some(pending) = self.lock().pending.take() {
            pending.abort();
            tracing::trace!("cancelled pending documentation refresh");
        }
    }

    /// Whether a timer is waiting to fire.
    pub fn has_pending(&self) -> bool {
        self.lock()
            .pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}
