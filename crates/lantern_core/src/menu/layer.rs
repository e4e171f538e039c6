//! The overlay that owns the open menu.
//!
//! A single `ContextMenuLayer` exists per view. Call sites never touch it
//! directly; they hold a [`ContextMenuHandle`] and call
//! [`ContextMenuHandle::show`] from a gesture handler. The layer filters the
//! items, measures them against the theme's layout properties, places the
//! menu, publishes the open state and routes input to the controller.

use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use tokio::sync::oneshot;
use uuid::Uuid;

use crate::error::LanternError;
use crate::menu::activity::MenuActivity;
use crate::menu::controller::{ContextMenu, MenuKey, MenuResponse, PointerTarget};
use crate::menu::overflow::{estimate_overflow_lines, DEFAULT_OVERFLOW_THRESHOLD};
use crate::menu::position::{compute_layout, item_top, place_submenu};
use crate::models::{
    filter_entries, ComputedLayout, CursorPosition, LayoutConstants, MenuEntry, MenuItem,
    StyleSource, Viewport,
};

type CloseHook = Box<dyn FnOnce() + Send + 'static>;

// ============================================================================
// ShowRequest / MenuSession
// ============================================================================

/// Arguments of a `show` call.
pub struct ShowRequest {
    /// Where the gesture happened.
    pub cursor: CursorPosition,
    /// Items, possibly containing placeholders.
    pub items: Vec<MenuEntry>,
    /// Accessible name of the menu.
    pub aria_label: Option<String>,
    on_close: Option<CloseHook>,
}

impl ShowRequest {
    /// Create a request for a menu at `cursor`.
    pub fn new(cursor: CursorPosition, items: Vec<MenuEntry>) -> Self {
        Self { cursor, items, aria_label: None, on_close: None }
    }

    /// Create a request for a menu at `(x, y)`.
    pub fn at(x: f32, y: f32, items: Vec<MenuEntry>) -> Self {
        Self::new(CursorPosition::new(x, y), items)
    }

    /// Builder: set the accessible name.
    pub fn aria_label(mut self, label: impl Into<String>) -> Self {
        self.aria_label = Some(label.into());
        self
    }

    /// Builder: run `hook` once the menu closes, whatever closed it.
    pub fn on_close(mut self, hook: impl FnOnce() + Send + 'static) -> Self {
        self.on_close = Some(Box::new(hook));
        self
    }
}

/// Handle to one shown menu, completed when that menu closes.
pub struct MenuSession {
    id: Uuid,
    closed: oneshot::Receiver<()>,
}

impl MenuSession {
    fn completed() -> Self {
        let (tx, rx) = oneshot::channel();
        let _ = tx.send(());
        Self { id: Uuid::new_v4(), closed: rx }
    }

    /// Identifier used in logs.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Check whether the menu has closed.
    pub fn is_closed(&mut self) -> bool {
        !matches!(self.closed.try_recv(), Err(oneshot::error::TryRecvError::Empty))
    }

    /// Wait until the menu closes.
    pub async fn closed(self) {
        let _ = self.closed.await;
    }
}

// ============================================================================
// Snapshot
// ============================================================================

/// Kind of a rendered item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Action,
    Submenu,
    Separator,
}

/// Render model of one item.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemSnapshot {
    pub kind: ItemKind,
    pub label: Option<String>,
    pub icon: Option<String>,
    pub test_id: Option<String>,
    /// Holds keyboard focus.
    pub focused: bool,
    /// Its submenu is open.
    pub expanded: bool,
}

/// Render model of one menu level.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelSnapshot {
    pub layout: ComputedLayout,
    pub items: Vec<ItemSnapshot>,
}

/// Everything needed to draw the open menu.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuSnapshot {
    pub session_id: Uuid,
    pub aria_label: Option<String>,
    pub constants: LayoutConstants,
    pub levels: Vec<LevelSnapshot>,
}

// ============================================================================
// ContextMenuLayer
// ============================================================================

struct OpenMenu {
    session_id: Uuid,
    controller: ContextMenu,
    layout: ComputedLayout,
    constants: LayoutConstants,
    aria_label: Option<String>,
    done: oneshot::Sender<()>,
    on_close: Option<CloseHook>,
}

impl OpenMenu {
    /// Resolve the session and run the close hook. Call without the layer lock.
    fn complete(self) {
        tracing::debug!(session = %self.session_id, "Context menu closed");
        let _ = self.done.send(());
        if let Some(hook) = self.on_close {
            hook();
        }
    }
}

struct LayerState {
    mounted: bool,
    viewport: Viewport,
    overflow_threshold: usize,
    style: Arc<dyn StyleSource>,
    open: Option<OpenMenu>,
}

struct LayerInner {
    state: Mutex<LayerState>,
    activity: MenuActivity,
}

impl LayerInner {
    #[tracing::instrument(level = "debug", skip_all, name = "context_menu_show")]
    fn show(&self, request: ShowRequest) -> Result<MenuSession, LanternError> {
        let ShowRequest { cursor, items, aria_label, on_close } = request;

        let mut state = self.state.lock();
        if !state.mounted {
            tracing::error!("Context menu requested while the layer is unmounted");
            return Err(LanternError::LayerMissing);
        }

        let items = filter_entries(items);
        if items.is_empty() {
            drop(state);
            tracing::debug!("Context menu has no items, nothing to show");
            if let Some(hook) = on_close {
                hook();
            }
            return Ok(MenuSession::completed());
        }

        let constants = LayoutConstants::from_style(state.style.as_ref())?;
        let overflow = estimate_overflow_lines(&items, state.overflow_threshold);
        let layout = compute_layout(cursor, state.viewport, &constants, items.len(), overflow);

        let session_id = Uuid::new_v4();
        let (done, closed) = oneshot::channel();
        tracing::debug!(
            session = %session_id,
            items = items.len(),
            overflow,
            top = layout.top,
            left = layout.left,
            "Context menu shown"
        );

        let previous = state.open.replace(OpenMenu {
            session_id,
            controller: ContextMenu::new(items),
            layout,
            constants,
            aria_label,
            done,
            on_close,
        });
        self.activity.set_active(true);
        drop(state);

        if let Some(previous) = previous {
            previous.complete();
        }
        Ok(MenuSession { id: session_id, closed })
    }

    #[tracing::instrument(level = "debug", skip_all, name = "context_menu_cancel")]
    fn cancel(&self) -> bool {
        let closed = {
            let mut state = self.state.lock();
            let closed = state.open.take();
            if closed.is_some() {
                self.activity.set_active(false);
            }
            closed
        };
        match closed {
            Some(menu) => {
                menu.complete();
                true
            }
            None => false,
        }
    }

    fn is_open(&self) -> bool {
        self.state.lock().open.is_some()
    }

    /// Run a controller transition, closing the menu and firing an action
    /// if the controller asks for it. Actions run after the menu is gone and
    /// without the lock held.
    fn apply(&self, f: impl FnOnce(&mut ContextMenu) -> MenuResponse) -> MenuResponse {
        let (response, closed) = {
            let mut state = self.state.lock();
            let Some(open) = state.open.as_mut() else {
                return MenuResponse::Ignored;
            };
            let response = f(&mut open.controller);
            let closed = if response.closes() {
                self.activity.set_active(false);
                state.open.take()
            } else {
                None
            };
            (response, closed)
        };

        if let Some(menu) = closed {
            menu.complete();
        }
        match response {
            MenuResponse::Activate(handler) => {
                handler();
                MenuResponse::Close
            }
            other => other,
        }
    }
}

/// Overlay owning the open menu and its render state.
///
/// The layer is cheap to clone; clones share state.
#[derive(Clone)]
pub struct ContextMenuLayer {
    inner: Arc<LayerInner>,
}

impl ContextMenuLayer {
    /// Create an unmounted layer that reads geometry from `style`.
    pub fn new(style: Arc<dyn StyleSource>, activity: MenuActivity) -> Self {
        Self {
            inner: Arc::new(LayerInner {
                state: Mutex::new(LayerState {
                    mounted: false,
                    viewport: Viewport::default(),
                    overflow_threshold: DEFAULT_OVERFLOW_THRESHOLD,
                    style,
                    open: None,
                }),
                activity,
            }),
        }
    }

    /// Builder: set the label length above which wrapping is assumed.
    pub fn with_overflow_threshold(self, threshold: usize) -> Self {
        self.inner.state.lock().overflow_threshold = threshold;
        self
    }

    /// Mount the layer over a viewport and return the handle call sites use
    /// to open menus.
    pub fn mount(&self, viewport: Viewport) -> ContextMenuHandle {
        {
            let mut state = self.inner.state.lock();
            state.mounted = true;
            state.viewport = viewport;
        }
        tracing::debug!(
            width = viewport.width,
            height = viewport.height,
            "Context menu layer mounted"
        );
        self.handle()
    }

    /// Unmount the layer, closing any open menu.
    pub fn unmount(&self) {
        self.inner.cancel();
        self.inner.state.lock().mounted = false;
    }

    /// Check whether the layer is mounted.
    pub fn is_mounted(&self) -> bool {
        self.inner.state.lock().mounted
    }

    /// Handle for opening menus from call sites.
    pub fn handle(&self) -> ContextMenuHandle {
        ContextMenuHandle { inner: Arc::downgrade(&self.inner) }
    }

    /// Publisher of the open state.
    pub fn activity(&self) -> &MenuActivity {
        &self.inner.activity
    }

    /// Replace the style the next `show` reads its geometry from.
    pub fn set_style(&self, style: Arc<dyn StyleSource>) {
        self.inner.state.lock().style = style;
    }

    /// Check if a menu is open.
    pub fn is_open(&self) -> bool {
        self.inner.is_open()
    }

    /// Close the open menu, if any. Returns whether a menu was closed.
    pub fn cancel(&self) -> bool {
        self.inner.cancel()
    }

    /// Current viewport.
    pub fn viewport(&self) -> Viewport {
        self.inner.state.lock().viewport
    }

    /// Update the viewport. Any size change closes an open menu.
    pub fn set_viewport(&self, viewport: Viewport) -> MenuResponse {
        {
            let mut state = self.inner.state.lock();
            if state.viewport == viewport {
                return MenuResponse::Ignored;
            }
            state.viewport = viewport;
        }
        tracing::trace!(width = viewport.width, height = viewport.height, "Viewport resized");
        self.inner.apply(|menu| menu.handle_resize())
    }

    /// Route a key press to the open menu.
    pub fn handle_key(&self, key: MenuKey) -> MenuResponse {
        self.inner.apply(|menu| menu.handle_key(key))
    }

    /// Route a pointer or touch press to the open menu.
    pub fn handle_pointer_down(&self, target: PointerTarget) -> MenuResponse {
        self.inner.apply(|menu| menu.handle_pointer_down(target))
    }

    /// Route a click on an item to the open menu.
    pub fn click_item(&self, level: usize, index: usize) -> MenuResponse {
        self.inner.apply(|menu| menu.click_item(level, index))
    }

    /// Route pointer hover over an item to the open menu.
    pub fn hover_item(&self, level: usize, index: usize) -> MenuResponse {
        self.inner.apply(|menu| menu.hover_item(level, index))
    }

    /// Render model of the open menu.
    pub fn snapshot(&self) -> Option<MenuSnapshot> {
        let state = self.inner.state.lock();
        let open = state.open.as_ref()?;
        let controller = &open.controller;
        let depth = controller.depth();
        let open_levels = controller.open_levels();

        let mut layout = open.layout;
        let mut levels = Vec::with_capacity(controller.levels().len());
        for (level, items) in controller.levels().iter().enumerate() {
            if level > 0 {
                let parent_items = &controller.levels()[level - 1];
                let anchor = item_top(
                    layout,
                    parent_items,
                    open_levels[level - 1],
                    &open.constants,
                    state.overflow_threshold,
                );
                layout = place_submenu(layout, anchor, &open.constants, state.viewport.width);
            }
            let items = items
                .iter()
                .enumerate()
                .map(|(index, item)| {
                    item_snapshot(
                        item,
                        level == depth && controller.focus() == Some(index),
                        open_levels.get(level) == Some(&index),
                    )
                })
                .collect();
            levels.push(LevelSnapshot { layout, items });
        }

        Some(MenuSnapshot {
            session_id: open.session_id,
            aria_label: open.aria_label.clone(),
            constants: open.constants,
            levels,
        })
    }
}

fn item_snapshot(item: &MenuItem, focused: bool, expanded: bool) -> ItemSnapshot {
    let (kind, test_id) = match item {
        MenuItem::Action { test_id, .. } => (ItemKind::Action, test_id.clone()),
        MenuItem::Submenu { .. } => (ItemKind::Submenu, None),
        MenuItem::Separator => (ItemKind::Separator, None),
    };
    ItemSnapshot {
        kind,
        label: item.label().map(String::from),
        icon: item.icon_name().map(String::from),
        test_id,
        focused,
        expanded,
    }
}

// ============================================================================
// ContextMenuHandle
// ============================================================================

/// Shared entry point for opening menus.
///
/// Handles stay valid across clones; once the layer is dropped or unmounted,
/// `show` fails with [`LanternError::LayerMissing`].
#[derive(Clone)]
pub struct ContextMenuHandle {
    inner: Weak<LayerInner>,
}

impl ContextMenuHandle {
    /// Show a menu, replacing any menu already open.
    ///
    /// A request whose items are all placeholders shows nothing and returns an
    /// already completed session.
    pub fn show(&self, request: ShowRequest) -> Result<MenuSession, LanternError> {
        let Some(inner) = self.inner.upgrade() else {
            tracing::error!("Context menu requested after the layer was dropped");
            return Err(LanternError::LayerMissing);
        };
        inner.show(request)
    }

    /// Check if a menu is open.
    pub fn is_open(&self) -> bool {
        self.inner.upgrade().is_some_and(|inner| inner.is_open())
    }

    /// Close the open menu, if any.
    pub fn cancel(&self) -> bool {
        self.inner.upgrade().is_some_and(|inner| inner.cancel())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::style::{
        BORDER_MARGIN_PROPERTY, ITEM_LINE_HEIGHT_PROPERTY, ITEM_PADDING_PROPERTY,
        MENU_WIDTH_PROPERTY,
    };
    use crate::models::StyleProperties;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    fn style() -> StyleProperties {
        StyleProperties::new()
            .with(MENU_WIDTH_PROPERTY, "200px")
            .with(ITEM_LINE_HEIGHT_PROPERTY, "20px")
            .with(ITEM_PADDING_PROPERTY, "5px")
            .with(BORDER_MARGIN_PROPERTY, "10px")
    }

    fn mounted_layer() -> (ContextMenuLayer, ContextMenuHandle) {
        let layer = ContextMenuLayer::new(Arc::new(style()), MenuActivity::new());
        let handle = layer.mount(Viewport::new(800.0, 600.0));
        (layer, handle)
    }

    fn noop(label: &str) -> MenuEntry {
        Some(MenuItem::action(label, || {}))
    }

    #[test]
    fn test_show_filters_placeholders_before_measuring() {
        let (layer, handle) = mounted_layer();
        // One item near the bottom: 30px fits, three would not
        handle.show(ShowRequest::at(10.0, 550.0, vec![None, noop("A"), None])).unwrap();

        let snapshot = layer.snapshot().unwrap();
        assert_eq!(snapshot.levels.len(), 1);
        assert_eq!(snapshot.levels[0].items.len(), 1);
        assert_eq!(snapshot.levels[0].items[0].label.as_deref(), Some("A"));
        assert_eq!(snapshot.levels[0].layout, ComputedLayout { top: 550.0, left: 10.0 });
    }

    #[test]
    fn test_show_places_menu_with_flips() {
        let (layer, handle) = mounted_layer();
        handle.show(ShowRequest::at(790.0, 10.0, vec![noop("A")])).unwrap();
        assert_eq!(layer.snapshot().unwrap().levels[0].layout.left, 590.0);
    }

    #[test]
    fn test_show_with_only_placeholders_is_a_no_op() {
        let (layer, handle) = mounted_layer();
        let hook_ran = Arc::new(AtomicBool::new(false));
        let flag = hook_ran.clone();
        let mut session = handle
            .show(ShowRequest::at(0.0, 0.0, vec![None, None]).on_close(move || {
                flag.store(true, Ordering::SeqCst);
            }))
            .unwrap();
        assert!(session.is_closed());
        assert!(!layer.is_open());
        assert!(!layer.activity().is_active());
        assert!(hook_ran.load(Ordering::SeqCst));
    }

    #[test]
    fn test_show_on_unmounted_layer_fails_loudly() {
        let layer = ContextMenuLayer::new(Arc::new(style()), MenuActivity::new());
        let handle = layer.handle();
        let result = handle.show(ShowRequest::at(0.0, 0.0, vec![noop("A")]));
        assert!(matches!(result, Err(LanternError::LayerMissing)));

        let handle = layer.mount(Viewport::new(100.0, 100.0));
        layer.unmount();
        assert!(matches!(
            handle.show(ShowRequest::at(0.0, 0.0, vec![noop("A")])),
            Err(LanternError::LayerMissing)
        ));
    }

    #[test]
    fn test_show_after_layer_dropped_fails() {
        let (layer, handle) = mounted_layer();
        drop(layer);
        assert!(matches!(
            handle.show(ShowRequest::at(0.0, 0.0, vec![noop("A")])),
            Err(LanternError::LayerMissing)
        ));
        assert!(!handle.is_open());
    }

    #[test]
    fn test_missing_style_property_is_surfaced() {
        let layer = ContextMenuLayer::new(
            Arc::new(StyleProperties::new().with(MENU_WIDTH_PROPERTY, "200px")),
            MenuActivity::new(),
        );
        let handle = layer.mount(Viewport::new(800.0, 600.0));
        let err = handle.show(ShowRequest::at(0.0, 0.0, vec![noop("A")])).err().unwrap();
        assert!(err.is_style_error());
        assert!(!layer.is_open());
        assert!(!layer.activity().is_active());
    }

    #[test]
    fn test_escape_closes_and_clears_activity() {
        let (layer, handle) = mounted_layer();
        let suppressor = layer.activity().subscribe();
        let mut session = handle.show(ShowRequest::at(0.0, 0.0, vec![noop("A")])).unwrap();
        assert!(suppressor.is_menu_open());
        assert!(!session.is_closed());

        assert!(matches!(layer.handle_key(MenuKey::Escape), MenuResponse::Close));
        assert!(!layer.is_open());
        assert!(!suppressor.is_menu_open());
        assert!(session.is_closed());
    }

    #[test]
    fn test_click_closes_before_action_runs() {
        let (layer, handle) = mounted_layer();
        let calls = Arc::new(AtomicUsize::new(0));
        let open_during_action = Arc::new(AtomicBool::new(true));

        let (calls_in, open_in) = (calls.clone(), open_during_action.clone());
        let handle_in = handle.clone();
        let activity = layer.activity().clone();
        let item = MenuItem::action("Delete", move || {
            calls_in.fetch_add(1, Ordering::SeqCst);
            open_in.store(handle_in.is_open() || activity.is_active(), Ordering::SeqCst);
        });
        handle.show(ShowRequest::at(0.0, 0.0, vec![noop("Keep"), Some(item)])).unwrap();

        assert!(matches!(layer.click_item(0, 1), MenuResponse::Close));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(!open_during_action.load(Ordering::SeqCst));

        // A second click after close does nothing
        assert!(matches!(layer.click_item(0, 1), MenuResponse::Ignored));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_action_may_open_another_menu() {
        let (layer, handle) = mounted_layer();
        let reopen = handle.clone();
        let item = MenuItem::action("More", move || {
            reopen.show(ShowRequest::at(5.0, 5.0, vec![noop("Nested")])).unwrap();
        });
        handle.show(ShowRequest::at(0.0, 0.0, vec![Some(item)])).unwrap();
        layer.handle_key(MenuKey::ArrowDown);
        layer.handle_key(MenuKey::Enter);

        let snapshot = layer.snapshot().unwrap();
        assert_eq!(snapshot.levels[0].items[0].label.as_deref(), Some("Nested"));
        assert!(layer.activity().is_active());
    }

    #[test]
    fn test_resize_closes_even_when_menu_still_fits() {
        let (layer, handle) = mounted_layer();
        handle.show(ShowRequest::at(0.0, 0.0, vec![noop("A")])).unwrap();

        assert!(matches!(layer.set_viewport(Viewport::new(800.0, 600.0)), MenuResponse::Ignored));
        assert!(layer.is_open());

        assert!(matches!(layer.set_viewport(Viewport::new(1600.0, 1200.0)), MenuResponse::Close));
        assert!(!layer.is_open());
        assert!(!layer.activity().is_active());
        assert_eq!(layer.viewport(), Viewport::new(1600.0, 1200.0));
    }

    #[test]
    fn test_outside_pointer_closes() {
        let (layer, handle) = mounted_layer();
        handle.show(ShowRequest::at(0.0, 0.0, vec![noop("A")])).unwrap();
        assert!(matches!(
            layer.handle_pointer_down(PointerTarget::Item { level: 0, index: 0 }),
            MenuResponse::Ignored
        ));
        assert!(layer.handle_pointer_down(PointerTarget::Outside).closes());
        assert!(!layer.is_open());
    }

    #[test]
    fn test_new_show_replaces_and_completes_previous() {
        let (layer, handle) = mounted_layer();
        let mut first = handle.show(ShowRequest::at(0.0, 0.0, vec![noop("A")])).unwrap();
        let mut second = handle.show(ShowRequest::at(0.0, 0.0, vec![noop("B")])).unwrap();
        assert!(first.is_closed());
        assert!(!second.is_closed());
        assert_ne!(first.id(), second.id());
        assert!(layer.activity().is_active());
        assert_eq!(
            layer.snapshot().unwrap().levels[0].items[0].label.as_deref(),
            Some("B")
        );
    }

    #[test]
    fn test_snapshot_tracks_focus_and_submenus() {
        let (layer, handle) = mounted_layer();
        let items = vec![
            noop("Pin"),
            Some(MenuItem::submenu("Mute", vec![noop("1 hour"), noop("Forever")])),
            Some(MenuItem::separator()),
            noop("Delete"),
        ];
        handle
            .show(ShowRequest::at(100.0, 40.0, items).aria_label("Chat actions"))
            .unwrap();

        layer.handle_key(MenuKey::ArrowDown);
        layer.handle_key(MenuKey::ArrowDown);
        layer.handle_key(MenuKey::ArrowRight);

        let snapshot = layer.snapshot().unwrap();
        assert_eq!(snapshot.aria_label.as_deref(), Some("Chat actions"));
        assert_eq!(snapshot.levels.len(), 2);

        let root = &snapshot.levels[0];
        assert!(root.items[1].expanded);
        assert_eq!(root.items[1].kind, ItemKind::Submenu);
        assert_eq!(root.items[2].kind, ItemKind::Separator);
        assert!(!root.items.iter().any(|i| i.focused));

        let sub = &snapshot.levels[1];
        assert_eq!(sub.layout, ComputedLayout { top: 70.0, left: 300.0 });
        assert!(sub.items[0].focused);
    }

    #[test]
    fn test_submenu_lines_up_below_wrapped_label() {
        let (layer, handle) = mounted_layer();
        let items = vec![
            noop("Delete chat for everyone"),
            Some(MenuItem::submenu("Mute", vec![noop("1 hour")])),
        ];
        handle.show(ShowRequest::at(100.0, 0.0, items)).unwrap();
        layer.hover_item(0, 1);

        let snapshot = layer.snapshot().unwrap();
        // one 30px row plus one extra 20px line for the wrapped label
        assert_eq!(snapshot.levels[1].layout, ComputedLayout { top: 50.0, left: 300.0 });
    }

    #[test]
    fn test_cancel_runs_close_hook_once() {
        let (layer, handle) = mounted_layer();
        let closes = Arc::new(AtomicUsize::new(0));
        let counter = closes.clone();
        handle
            .show(ShowRequest::at(0.0, 0.0, vec![noop("A")]).on_close(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            }))
            .unwrap();
        assert!(handle.cancel());
        assert!(!layer.cancel());
        assert_eq!(closes.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_session_resolves_on_close() {
        let (layer, handle) = mounted_layer();
        let session = handle.show(ShowRequest::at(0.0, 0.0, vec![noop("A")])).unwrap();
        layer.handle_pointer_down(PointerTarget::Outside);
        session.closed().await;
    }

    #[test]
    fn test_long_labels_push_menu_upward() {
        let layer = ContextMenuLayer::new(Arc::new(style()), MenuActivity::new())
            .with_overflow_threshold(19);
        let handle = layer.mount(Viewport::new(800.0, 600.0));
        // 30px item + 20px overflow line = 50px; 550 + 50 + 10 > 600
        handle
            .show(ShowRequest::at(10.0, 550.0, vec![noop("Delete chat for everyone")]))
            .unwrap();
        assert_eq!(layer.snapshot().unwrap().levels[0].layout.top, 500.0);
    }
}
