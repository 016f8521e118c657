//! Singleton panel lifecycle.
//!
//! ```text
//!            open()                      open()
//!   Closed ─────────► Open ◄──────────────┐ (reveal only)
//!     ▲                │  └───────────────┘
//!     └────────────────┘
//!      user closes panel (host calls the dispose hook)
//! ```

use docview_core::{DisposeHook, Panel, PanelHost, PanelOptions, ViewColumn};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

/// The panel currently on screen.
struct LivePanel {
    /// Distinguishes successive panels, so a late dispose hook of an old
    /// panel cannot clear a newer one.
    serial: u64,
    panel: Arc<dyn Panel>,
}

#[derive(Default)]
struct PanelSlot {
    current: Option<LivePanel>,
    next_serial: u64,
}

/// Whether [`PanelManager::open_or_reveal`] created a panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenOutcome {
    Created,
    Revealed,
}

/// Owns the single documentation panel.
pub struct PanelManager {
    host: Arc<dyn PanelHost>,
    title: String,
    slot: Arc<Mutex<PanelSlot>>,
}

impl PanelManager {
    pub fn new(host: Arc<dyn PanelHost>, title: impl Into<String>) -> Self {
        Self {
            host,
            title: title.into(),
            slot: Arc::new(Mutex::new(PanelSlot::default())),
        }
    }

    fn lock(&self) -> MutexGuard<'_, PanelSlot> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Reveals the existing panel beside the editor, or creates it.
    ///
    /// The panel is created while the slot is locked, so hosts must not call
    /// the dispose hook from inside `create_panel`.
    pub fn open_or_reveal(&self) -> OpenOutcome {
        let mut slot = self.lock();

        if let Some(live) = &slot.current {
            let panel = Arc::clone(&live.panel);
            drop(slot);
            panel.reveal(ViewColumn::Beside);
            tracing::debug!("revealed existing documentation panel");
            return OpenOutcome::Revealed;
        }

        let serial = slot.next_serial;
        slot.next_serial += 1;

        let options = PanelOptions {
            title: self.title.clone(),
            column: ViewColumn::Beside,
            enable_scripts: true,
            retain_context_when_hidden: true,
        };
        let panel = self
            .host
            .create_panel(options, dispose_hook(Arc::downgrade(&self.slot), serial));

        slot.current = Some(LivePanel { serial, panel });
        tracing::info!(serial, "created documentation panel");
        OpenOutcome::Created
    }

    /// The live panel, if any.
    pub fn current(&self) -> Option<Arc<dyn Panel>> {
        self.lock()
            .current
            .as_ref()
            .map(|live| Arc::clone(&live.panel))
    }

    pub fn is_open(&self) -> bool {
        self.lock().current.is_some()
    }

    /// Drops the reference to the live panel without waiting for the host.
    pub fn release(&self) {
        if self.lock().current.take().is_some() {
            tracing::debug!("released documentation panel");
        }
    }
}

fn dispose_hook(slot: Weak<Mutex<PanelSlot>>, serial: u64) -> DisposeHook {
    Box::new(move || {
        let Some(slot) = slot.upgrade() else {
            return;
        };
        let mut slot = slot.lock().unwrap_or_else(PoisonError::into_inner);
        if slot.current.as_ref().is_some_and(|live| live.serial == serial) {
            slot.current = None;
            tracing::info!(serial, "documentation panel disposed");
        } else {
            tracing::trace!(serial, "ignoring dispose of a panel that is no longer current");
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_helpers::MockPanelHost;

    fn manager() -> (Arc<MockPanelHost>, PanelManager) {
        let host = Arc::new(MockPanelHost::default());
        let manager = PanelManager::new(Arc::clone(&host) as Arc<dyn PanelHost>, "Docs");
        (host, manager)
    }

    #[test]
    fn test_starts_closed() {
        let (_host, manager) = manager();
        assert!(!manager.is_open());
        assert!(manager.current().is_none());
    }

    #[test]
    fn test_first_open_creates_with_options() {
        let (host, manager) = manager();

        assert_eq!(manager.open_or_reveal(), OpenOutcome::Created);
        assert!(manager.is_open());
        assert_eq!(host.created_count(), 1);

        let options = host.options(0);
        assert_eq!(options.title, "Docs");
        assert_eq!(options.column, ViewColumn::Beside);
        assert!(options.enable_scripts);
        assert!(options.retain_context_when_hidden);
    }

    #[test]
    fn test_second_open_reveals() {
        let (host, manager) = manager();
        manager.open_or_reveal();

        assert_eq!(manager.open_or_reveal(), OpenOutcome::Revealed);
        assert_eq!(host.created_count(), 1);
        assert_eq!(host.panel(0).reveals(), vec![ViewColumn::Beside]);
    }

    #[test]
    fn test_dispose_clears_slot() {
        let (host, manager) = manager();
        manager.open_or_reveal();

        host.dispose(0);
        assert!(!manager.is_open());
    }

    #[test]
    fn test_reopen_after_dispose_creates_new_panel() {
        let (host, manager) = manager();
        manager.open_or_reveal();
        let first = manager.current().unwrap();

        host.dispose(0);
        assert_eq!(manager.open_or_reveal(), OpenOutcome::Created);

        let second = manager.current().unwrap();
        assert_eq!(host.created_count(), 2);
        assert!(!Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_stale_dispose_does_not_clear_new_panel() {
        let (host, manager) = manager();
        manager.open_or_reveal();
        manager.release();
        manager.open_or_reveal();

        // The first panel's hook fires after a newer panel took its place.
        host.dispose(0);
        assert!(manager.is_open());

        host.dispose(1);
        assert!(!manager.is_open());
    }

    #[test]
    fn test_dispose_after_manager_dropped() {
        let (host, manager) = manager();
        manager.open_or_reveal();
        drop(manager);

        host.dispose(0);
    }
}
