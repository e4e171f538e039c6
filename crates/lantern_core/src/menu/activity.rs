//! "Is a menu open" broadcast.
//!
//! The overlay publishes its open state here and scroll handling elsewhere in
//! the application subscribes to it, so the view behind an open menu does not
//! scroll. One overlay per view publishes; the last write wins.

use std::sync::Arc;

use tokio::sync::watch;

/// Scroll inputs that are blocked while a menu is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollInput {
    Wheel,
    TouchMove,
}

/// Publisher side of the open-state signal.
#[derive(Clone)]
pub struct MenuActivity {
    tx: Arc<watch::Sender<bool>>,
}

impl MenuActivity {
    /// Create a publisher with no menu open.
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(false);
        Self { tx: Arc::new(tx) }
    }

    /// Publish the open state.
    pub fn set_active(&self, active: bool) {
        let previous = self.tx.send_replace(active);
        if previous != active {
            tracing::trace!(active, "Context menu activity changed");
        }
    }

    /// Check whether a menu is currently open.
    pub fn is_active(&self) -> bool {
        *self.tx.borrow()
    }

    /// Subscribe to the open state.
    pub fn subscribe(&self) -> ScrollSuppressor {
        ScrollSuppressor { rx: self.tx.subscribe() }
    }
}

impl Default for MenuActivity {
    fn default() -> Self {
        Self::new()
    }
}

/// Subscriber that decides whether a scroll input must be swallowed.
#[derive(Clone)]
pub struct ScrollSuppressor {
    rx: watch::Receiver<bool>,
}

impl ScrollSuppressor {
    /// Check whether a menu is open right now.
    pub fn is_menu_open(&self) -> bool {
        *self.rx.borrow()
    }

    /// Whether the default behavior of `input` should be prevented.
    pub fn should_suppress(&self, input: ScrollInput) -> bool {
        match input {
            ScrollInput::Wheel | ScrollInput::TouchMove => self.is_menu_open(),
        }
    }

    /// Wait for the next change and return the new open state.
    ///
    /// Returns `None` once the publisher is gone.
    pub async fn changed(&mut self) -> Option<bool> {
        self.rx.changed().await.ok()?;
        Some(*self.rx.borrow_and_update())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suppression_follows_activity() {
        let activity = MenuActivity::new();
        let suppressor = activity.subscribe();
        assert!(!suppressor.should_suppress(ScrollInput::Wheel));

        activity.set_active(true);
        assert!(activity.is_active());
        assert!(suppressor.should_suppress(ScrollInput::Wheel));
        assert!(suppressor.should_suppress(ScrollInput::TouchMove));

        activity.set_active(false);
        assert!(!suppressor.should_suppress(ScrollInput::TouchMove));
    }

    #[test]
    fn test_clones_share_state() {
        let activity = MenuActivity::new();
        let other = activity.clone();
        other.set_active(true);
        assert!(activity.is_active());
    }

    #[tokio::test]
    async fn test_changed_reports_new_state() {
        let activity = MenuActivity::new();
        let mut suppressor = activity.subscribe();
        activity.set_active(true);
        assert_eq!(suppressor.changed().await, Some(true));
        drop(activity);
        assert_eq!(suppressor.changed().await, None);
    }
}
