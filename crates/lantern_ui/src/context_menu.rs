//! Context menu overlay for GPUI windows.
//!
//! `MenuOverlay` is the window's single context menu layer. It owns the
//! headless [`ContextMenuLayer`] and draws its snapshot above everything
//! else in the window:
//! - a transparent backdrop that dismisses the menu on any press
//! - one bordered column per open level, placed by the core layout
//! - the items, with hover and click routed back to the layer

use std::sync::Arc;

use gpui::{
    div, prelude::*, px, AnyElement, App, ElementId, FocusHandle, Global, MouseButton,
    SharedString, Window,
};
use lantern_core::menu::{ItemKind, ItemSnapshot, LevelSnapshot};
use lantern_core::{
    ContextMenuHandle, ContextMenuLayer, LanternError, LayoutConstants, MenuActivity, MenuConfig,
    MenuKey, MenuResponse, MenuSession, PointerTarget, ScrollSuppressor, ShowRequest, Viewport,
};

use crate::key_bindings::context_menu::{
    BlockScroll, CloseSubmenu, ConfirmItem, DismissMenu, OpenSubmenu, SelectNextItem,
    SelectPreviousItem,
};
use crate::theme::ThemeColors;
use crate::LanternTheme;

/// Horizontal inset of item content.
const ITEM_INSET: f32 = 8.0;
/// Width of the icon slot in front of a label.
const ICON_SLOT: f32 = 16.0;

/// Buttons whose press on the backdrop dismisses the menu.
pub const DISMISS_BUTTONS: [MouseButton; 3] =
    [MouseButton::Left, MouseButton::Right, MouseButton::Middle];

/// Global overlay that renders the open context menu.
pub struct MenuOverlay {
    layer: ContextMenuLayer,
    focus_handle: FocusHandle,
}

impl Global for MenuOverlay {}

impl MenuOverlay {
    /// Create an overlay using the theme's menu geometry with the
    /// configuration's overrides applied.
    pub fn new(theme: &LanternTheme, config: &MenuConfig, cx: &mut App) -> Self {
        let style = config.style(&theme.menu_style);
        let layer = ContextMenuLayer::new(Arc::new(style), MenuActivity::new())
            .with_overflow_threshold(config.overflow_threshold);
        Self { layer, focus_handle: cx.focus_handle() }
    }

    /// Build the overlay from the theme and config globals and install it.
    pub fn init(cx: &mut App) {
        let theme = cx.try_global::<LanternTheme>().cloned().unwrap_or_default();
        let config = cx.try_global::<MenuConfig>().cloned().unwrap_or_default();
        let overlay = Self::new(&theme, &config, cx);
        cx.set_global(overlay);
    }

    /// Switch to `theme`, re-reading menu geometry from its style.
    ///
    /// An open menu keeps its layout; the next one uses the new geometry.
    pub fn apply_theme(theme: LanternTheme, cx: &mut App) {
        let config = cx.try_global::<MenuConfig>().cloned().unwrap_or_default();
        if let Some(overlay) = cx.try_global::<Self>() {
            overlay.layer.set_style(Arc::new(config.style(&theme.menu_style)));
        }
        tracing::debug!(theme = %theme.name, "Theme applied");
        cx.set_global(theme);
        cx.refresh_windows();
    }

    /// Mount the overlay over `window`.
    ///
    /// Returns the handle call sites open menus through, or `None` when the
    /// overlay global was never installed.
    pub fn mount(window: &Window, cx: &App) -> Option<ContextMenuHandle> {
        let overlay = cx.try_global::<Self>()?;
        Some(overlay.layer.mount(viewport_of(window)))
    }

    /// Subscribe to the open state, for views that scroll.
    pub fn scroll_suppressor(&self) -> ScrollSuppressor {
        self.layer.activity().subscribe()
    }

    /// Show a menu and move keyboard focus onto it.
    pub fn show(
        request: ShowRequest,
        window: &mut Window,
        cx: &mut App,
    ) -> Result<MenuSession, LanternError> {
        let handle = cx
            .try_global::<Self>()
            .map(|overlay| overlay.layer.handle())
            .ok_or(LanternError::LayerMissing)?;
        let session = handle.show(request)?;
        Self::focus(window, cx);
        Ok(session)
    }

    /// Give keyboard focus to the open menu.
    ///
    /// Call after opening a menu through a [`ContextMenuHandle`].
    pub fn focus(window: &mut Window, cx: &mut App) {
        let Some(overlay) = cx.try_global::<Self>() else {
            return;
        };
        if overlay.layer.is_open() {
            let focus_handle = overlay.focus_handle.clone();
            window.focus(&focus_handle, cx);
        }
        cx.refresh_windows();
    }

    /// Feed the current window size to the layer. A changed size dismisses
    /// the open menu.
    pub fn sync_viewport(window: &Window, cx: &mut App) {
        let Some(layer) = cx.try_global::<Self>().map(|overlay| overlay.layer.clone()) else {
            return;
        };
        if layer.set_viewport(viewport_of(window)).closes() {
            cx.refresh_windows();
        }
    }

    /// Route an input to the layer and redraw if it changed anything.
    ///
    /// The global is not borrowed while the layer runs, so an action may open
    /// another menu.
    fn dispatch(cx: &mut App, route: impl FnOnce(&ContextMenuLayer) -> MenuResponse) {
        let Some(layer) = cx.try_global::<Self>().map(|overlay| overlay.layer.clone()) else {
            return;
        };
        let response = route(&layer);
        tracing::trace!(?response, "Context menu input");
        if !matches!(response, MenuResponse::Ignored) {
            cx.refresh_windows();
        }
    }

    fn key(key: MenuKey, cx: &mut App) {
        Self::dispatch(cx, |layer| layer.handle_key(key));
    }

    fn dismiss_from_outside(cx: &mut App) {
        Self::dispatch(cx, |layer| layer.handle_pointer_down(PointerTarget::Outside));
    }

    /// Render the overlay.
    ///
    /// Returns a backdrop with the menu levels if a menu is open. Presses on
    /// the backdrop close the menu and still reach the view beneath, so a
    /// right-click elsewhere opens the next menu right away.
    pub fn render(&self, theme: &LanternTheme) -> Option<AnyElement> {
        let snapshot = self.layer.snapshot()?;
        let constants = snapshot.constants;
        let colors = &theme.colors;

        let backdrop = div()
            .id("context-menu-backdrop")
            .key_context("ContextMenu")
            .track_focus(&self.focus_handle)
            .absolute()
            .inset_0()
            .size_full();
        let backdrop = DISMISS_BUTTONS.iter().fold(backdrop, |d, &button| {
            d.on_mouse_down(button, |_, _, cx| Self::dismiss_from_outside(cx))
        });

        Some(
            backdrop
                .on_scroll_wheel(|_, _, cx| cx.stop_propagation())
                .on_action(|_: &SelectNextItem, _, cx| Self::key(MenuKey::ArrowDown, cx))
                .on_action(|_: &SelectPreviousItem, _, cx| Self::key(MenuKey::ArrowUp, cx))
                .on_action(|_: &ConfirmItem, _, cx| Self::key(MenuKey::Enter, cx))
                .on_action(|_: &DismissMenu, _, cx| Self::key(MenuKey::Escape, cx))
                .on_action(|_: &OpenSubmenu, _, cx| Self::key(MenuKey::ArrowRight, cx))
                .on_action(|_: &CloseSubmenu, _, cx| Self::key(MenuKey::ArrowLeft, cx))
                .on_action(|_: &BlockScroll, _, cx| cx.stop_propagation())
                .children(
                    snapshot
                        .levels
                        .iter()
                        .enumerate()
                        .map(|(level, items)| render_level(level, items, &constants, colors)),
                )
                .into_any_element(),
        )
    }
}

fn viewport_of(window: &Window) -> Viewport {
    let size = window.viewport_size();
    Viewport::new(f32::from(size.width), f32::from(size.height))
}

fn render_level(
    level: usize,
    snapshot: &LevelSnapshot,
    constants: &LayoutConstants,
    colors: &ThemeColors,
) -> AnyElement {
    div()
        .id(("context-menu-level", level))
        .absolute()
        .left(px(snapshot.layout.left))
        .top(px(snapshot.layout.top))
        .w(px(constants.menu_width))
        .flex()
        .flex_col()
        .bg(colors.elevated_surface)
        .border_1()
        .border_color(colors.border)
        .rounded(px(6.0))
        .shadow_lg()
        // Presses inside the menu must not reach the backdrop
        .on_mouse_down(MouseButton::Left, move |_, _, cx| {
            MenuOverlay::dispatch(cx, |layer| {
                layer.handle_pointer_down(PointerTarget::Container { level })
            });
            cx.stop_propagation();
        })
        .on_mouse_down(MouseButton::Right, |_, _, cx| cx.stop_propagation())
        .on_mouse_down(MouseButton::Middle, |_, _, cx| cx.stop_propagation())
        .children(
            snapshot
                .items
                .iter()
                .enumerate()
                .map(|(index, item)| render_item(level, index, item, constants, colors)),
        )
        .into_any_element()
}

fn render_item(
    level: usize,
    index: usize,
    item: &ItemSnapshot,
    constants: &LayoutConstants,
    colors: &ThemeColors,
) -> AnyElement {
    if item.kind == ItemKind::Separator {
        return div()
            .h(px(constants.item_height()))
            .flex()
            .items_center()
            .px(px(ITEM_INSET))
            .child(div().h(px(1.0)).w_full().bg(colors.border))
            .into_any_element();
    }

    let highlighted = item.focused || item.expanded;
    let label = SharedString::from(item.label.clone().unwrap_or_default());
    let glyph = item.icon.as_deref().map(icon_glyph);

    div()
        .id(item_id(index, item))
        .min_h(px(constants.item_height()))
        .py(px(constants.item_vertical_padding))
        .px(px(ITEM_INSET))
        .flex()
        .items_center()
        .gap(px(ITEM_INSET))
        .text_sm()
        .line_height(px(constants.item_line_height))
        .text_color(colors.text)
        .cursor_pointer()
        .when(highlighted, |d| d.bg(colors.list_active_selection_background))
        .when(!highlighted, |d| d.hover(|s| s.bg(colors.list_hover_background)))
        .on_mouse_move(move |_, _, cx| {
            MenuOverlay::dispatch(cx, |layer| layer.hover_item(level, index));
        })
        .on_click(move |_, _, cx| {
            MenuOverlay::dispatch(cx, |layer| layer.click_item(level, index));
        })
        .child(
            div()
                .w(px(ICON_SLOT))
                .flex_none()
                .text_color(colors.text_muted)
                .when_some(glyph, |d, glyph| d.child(glyph)),
        )
        .child(div().flex_1().child(label))
        .when(item.kind == ItemKind::Submenu, |d| {
            d.child(div().text_color(colors.text_muted).child("›"))
        })
        .into_any_element()
}

/// Element id of an item; the caller's test id when it set one.
fn item_id(index: usize, item: &ItemSnapshot) -> ElementId {
    match &item.test_id {
        Some(test_id) => ElementId::Name(SharedString::from(test_id.clone())),
        None => ("context-menu-item", index).into(),
    }
}

/// Glyph drawn in the icon slot for an icon name.
pub fn icon_glyph(name: &str) -> &'static str {
    match name {
        "reply" => "↩",
        "forward" => "↪",
        "copy" => "⧉",
        "edit" => "✎",
        "delete" | "trash" => "✕",
        "pin" => "⚲",
        "archive" => "▤",
        "mute" | "bell-off" => "◌",
        "info" => "ⓘ",
        "star" => "☆",
        _ => "•",
    }
}
