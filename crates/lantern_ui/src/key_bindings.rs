//! Keyboard shortcuts and action definitions for Lantern.

use gpui::{actions, App, KeyBinding};

actions!(lantern, [Quit, CloseWindow, Minimize]);

// ============================================================================
// Context Menu Actions
// ============================================================================

pub mod context_menu {
    use gpui::actions;
    actions!(
        context_menu,
        [
            SelectNextItem,
            SelectPreviousItem,
            ConfirmItem,
            DismissMenu,
            OpenSubmenu,
            CloseSubmenu,
            BlockScroll,
        ]
    );
}

/// Keys that would scroll the view behind an open menu.
pub const SCROLL_KEYS: [&str; 5] = ["space", "pageup", "pagedown", "end", "home"];

/// Register all global key bindings.
///
/// This should be called once during application initialization.
pub fn register_key_bindings(cx: &mut App) {
    cx.bind_keys([
        KeyBinding::new("cmd-q", Quit, None),
        KeyBinding::new("ctrl-q", Quit, None),
        KeyBinding::new("cmd-w", CloseWindow, None),
        KeyBinding::new("cmd-m", Minimize, None),
    ]);

    cx.bind_keys([
        KeyBinding::new("down", context_menu::SelectNextItem, Some("ContextMenu")),
        KeyBinding::new("up", context_menu::SelectPreviousItem, Some("ContextMenu")),
        KeyBinding::new("enter", context_menu::ConfirmItem, Some("ContextMenu")),
        KeyBinding::new("escape", context_menu::DismissMenu, Some("ContextMenu")),
        KeyBinding::new("right", context_menu::OpenSubmenu, Some("ContextMenu")),
        KeyBinding::new("left", context_menu::CloseSubmenu, Some("ContextMenu")),
    ]);

    cx.bind_keys(
        SCROLL_KEYS
            .into_iter()
            .map(|key| KeyBinding::new(key, context_menu::BlockScroll, Some("ContextMenu"))),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use lantern_core::MenuKey;

    #[test]
    fn test_scroll_keys_are_blocked_by_the_menu() {
        for key in SCROLL_KEYS {
            assert!(MenuKey::from_code(key).is_scroll_key(), "{key}");
        }
    }
}
