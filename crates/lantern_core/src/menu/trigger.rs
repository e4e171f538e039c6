//! Call-site helpers for opening menus from gestures.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::error::LanternError;
use crate::menu::layer::{ContextMenuHandle, MenuSession, ShowRequest};
use crate::models::{CursorPosition, MenuEntry};

/// Where a trigger gets its items from.
#[derive(Clone)]
pub enum ItemsSource {
    /// A fixed list.
    Static(Vec<MenuEntry>),
    /// Built fresh each time the menu opens.
    Factory(Arc<dyn Fn() -> Vec<MenuEntry> + Send + Sync>),
}

impl ItemsSource {
    /// Produce the items for one opening.
    pub fn items(&self) -> Vec<MenuEntry> {
        match self {
            Self::Static(items) => items.clone(),
            Self::Factory(build) => build(),
        }
    }
}

impl From<Vec<MenuEntry>> for ItemsSource {
    fn from(items: Vec<MenuEntry>) -> Self {
        Self::Static(items)
    }
}

/// Opens a menu for one call site and remembers whether it is showing.
///
/// Rows use [`ContextMenuTrigger::is_active`] to keep a highlighted look while
/// their menu is up.
#[derive(Clone)]
pub struct ContextMenuTrigger {
    source: ItemsSource,
    handle: ContextMenuHandle,
    aria_label: Option<String>,
    /// Generation of the showing menu, 0 when none.
    active: Arc<AtomicU64>,
    generations: Arc<AtomicU64>,
}

impl ContextMenuTrigger {
    /// Create a trigger over `source`.
    pub fn new(source: impl Into<ItemsSource>, handle: ContextMenuHandle) -> Self {
        Self {
            source: source.into(),
            handle,
            aria_label: None,
            active: Arc::new(AtomicU64::new(0)),
            generations: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Create a trigger whose items are built when the menu opens.
    pub fn factory(
        build: impl Fn() -> Vec<MenuEntry> + Send + Sync + 'static,
        handle: ContextMenuHandle,
    ) -> Self {
        Self::new(ItemsSource::Factory(Arc::new(build)), handle)
    }

    /// Builder: set the accessible name of the menu.
    pub fn aria_label(mut self, label: impl Into<String>) -> Self {
        self.aria_label = Some(label.into());
        self
    }

    /// Open the menu at `cursor`.
    pub fn open(&self, cursor: CursorPosition) -> Result<MenuSession, LanternError> {
        // A replaced menu closes after its successor opened; only the
        // generation that is still current may clear the flag.
        let generation = self.generations.fetch_add(1, Ordering::SeqCst) + 1;
        self.active.store(generation, Ordering::SeqCst);

        let active = self.active.clone();
        let mut request = ShowRequest::new(cursor, self.source.items()).on_close(move || {
            let _ = active.compare_exchange(generation, 0, Ordering::SeqCst, Ordering::SeqCst);
        });
        request.aria_label = self.aria_label.clone();

        self.handle.show(request).inspect_err(|e| {
            tracing::warn!(error = %e, "Failed to open context menu");
            let _ =
                self.active.compare_exchange(generation, 0, Ordering::SeqCst, Ordering::SeqCst);
        })
    }

    /// Check if this trigger's menu is showing.
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst) != 0
    }
}
