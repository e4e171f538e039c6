//! Keyboard, pointer and dismissal handling for an open menu.
//!
//! Focus is explicit state: an index into the deepest open level. Nothing
//! here depends on a rendering tree, so every transition is testable in
//! isolation. The controller never runs actions itself; it hands the handler
//! back to its owner after it has already closed.

use crate::models::{filter_entries, ActionHandler, MenuItem};

/// Keys the menu reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuKey {
    ArrowDown,
    ArrowUp,
    ArrowLeft,
    ArrowRight,
    Enter,
    Escape,
    Space,
    PageUp,
    PageDown,
    End,
    Home,
    Other,
}

impl MenuKey {
    /// Map a key code name (`"ArrowDown"`, `"PageUp"`, ...) to a menu key.
    pub fn from_code(code: &str) -> Self {
        match code {
            "ArrowDown" | "down" => Self::ArrowDown,
            "ArrowUp" | "up" => Self::ArrowUp,
            "ArrowLeft" | "left" => Self::ArrowLeft,
            "ArrowRight" | "right" => Self::ArrowRight,
            "Enter" | "enter" => Self::Enter,
            "Escape" | "escape" => Self::Escape,
            "Space" | "space" => Self::Space,
            "PageUp" | "pageup" => Self::PageUp,
            "PageDown" | "pagedown" => Self::PageDown,
            "End" | "end" => Self::End,
            "Home" | "home" => Self::Home,
            _ => Self::Other,
        }
    }

    /// Keys whose default behavior scrolls the view behind the menu.
    pub fn is_scroll_key(self) -> bool {
        matches!(self, Self::Space | Self::PageUp | Self::PageDown | Self::End | Self::Home)
    }
}

/// Where a pointer or touch press landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// The container of a menu level.
    Container { level: usize },
    /// An item of a menu level.
    Item { level: usize, index: usize },
    /// Anywhere else.
    Outside,
}

/// What the owner of the controller should do after an input.
#[derive(Clone)]
pub enum MenuResponse {
    /// The input does not concern the menu.
    Ignored,
    /// Menu state changed; re-render.
    Handled,
    /// Swallow the input so the background does not scroll.
    SuppressDefault,
    /// The menu closed.
    Close,
    /// The menu closed because an action was chosen; run it now.
    Activate(ActionHandler),
}

impl MenuResponse {
    /// Check whether this response ends the menu.
    pub fn closes(&self) -> bool {
        matches!(self, Self::Close | Self::Activate(_))
    }
}

impl std::fmt::Debug for MenuResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ignored => f.write_str("Ignored"),
            Self::Handled => f.write_str("Handled"),
            Self::SuppressDefault => f.write_str("SuppressDefault"),
            Self::Close => f.write_str("Close"),
            Self::Activate(_) => f.write_str("Activate(..)"),
        }
    }
}

/// Interaction state of one displayed menu and its open submenus.
pub struct ContextMenu {
    /// Items of every open level; index 0 is the root menu.
    levels: Vec<Vec<MenuItem>>,
    /// For each level except the deepest, the index of its expanded submenu.
    open_levels: Vec<usize>,
    /// Focused item in the deepest level.
    focus: Option<usize>,
    open: bool,
}

impl ContextMenu {
    /// Open a menu over already filtered items.
    ///
    /// The menu container holds focus initially; the first arrow key moves it
    /// onto an item.
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self { levels: vec![items], open_levels: Vec::new(), focus: None, open: true }
    }

    /// Check if the menu is still open.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Items of every open level, root first.
    pub fn levels(&self) -> &[Vec<MenuItem>] {
        &self.levels
    }

    /// Indices of the expanded submenu items, one per non-deepest level.
    pub fn open_levels(&self) -> &[usize] {
        &self.open_levels
    }

    /// Index of the deepest open level.
    pub fn depth(&self) -> usize {
        self.open_levels.len()
    }

    /// Focused item in the deepest level.
    pub fn focus(&self) -> Option<usize> {
        self.focus
    }

    /// Handle a key press.
    pub fn handle_key(&mut self, key: MenuKey) -> MenuResponse {
        if !self.open {
            return MenuResponse::Ignored;
        }
        tracing::trace!(?key, depth = self.depth(), focus = ?self.focus, "Menu key");

        match key {
            MenuKey::ArrowDown => self.move_focus(true),
            MenuKey::ArrowUp => self.move_focus(false),
            MenuKey::ArrowLeft => self.collapse_deepest(),
            MenuKey::ArrowRight => match self.focus {
                Some(index) if self.item(self.depth(), index).is_some_and(MenuItem::is_submenu) => {
                    self.expand(self.depth(), index);
                    self.focus = self.first_selectable();
                    MenuResponse::Handled
                }
                _ => MenuResponse::Ignored,
            },
            MenuKey::Enter => match self.focus {
                Some(index) => self.activate(self.depth(), index),
                None => MenuResponse::Ignored,
            },
            MenuKey::Escape => self.close(),
            key if key.is_scroll_key() => MenuResponse::SuppressDefault,
            _ => MenuResponse::Ignored,
        }
    }

    /// Handle a pointer or touch press anywhere in the window.
    pub fn handle_pointer_down(&mut self, target: PointerTarget) -> MenuResponse {
        if !self.open {
            return MenuResponse::Ignored;
        }
        match target {
            PointerTarget::Outside => self.close(),
            PointerTarget::Container { .. } | PointerTarget::Item { .. } => MenuResponse::Ignored,
        }
    }

    /// Handle a click on an item.
    pub fn click_item(&mut self, level: usize, index: usize) -> MenuResponse {
        if !self.open {
            return MenuResponse::Ignored;
        }
        self.activate(level, index)
    }

    /// Handle the pointer moving over an item.
    ///
    /// Hovering a submenu item opens it; hovering an action collapses any
    /// deeper levels and focuses the action.
    pub fn hover_item(&mut self, level: usize, index: usize) -> MenuResponse {
        if !self.open {
            return MenuResponse::Ignored;
        }
        let Some(item) = self.item(level, index) else {
            return MenuResponse::Ignored;
        };

        if item.is_submenu() {
            if self.open_levels.get(level) == Some(&index) && self.depth() == level + 1 {
                return MenuResponse::Ignored;
            }
            self.expand(level, index);
            self.focus = None;
        } else {
            if self.depth() == level && self.focus == Some(index) {
                return MenuResponse::Ignored;
            }
            self.collapse_to(level);
            self.focus = item_is_selectable(self.item(level, index)).then_some(index);
        }
        MenuResponse::Handled
    }

    /// The viewport changed size; the menu closes regardless of fit.
    pub fn handle_resize(&mut self) -> MenuResponse {
        if !self.open {
            return MenuResponse::Ignored;
        }
        self.close()
    }

    /// Close the menu.
    pub fn close(&mut self) -> MenuResponse {
        self.open = false;
        self.focus = None;
        self.open_levels.clear();
        self.levels.truncate(1);
        MenuResponse::Close
    }

    fn item(&self, level: usize, index: usize) -> Option<&MenuItem> {
        self.levels.get(level).and_then(|items| items.get(index))
    }

    fn activate(&mut self, level: usize, index: usize) -> MenuResponse {
        let Some(item) = self.item(level, index).cloned() else {
            return MenuResponse::Ignored;
        };

        match item {
            MenuItem::Action { handler, .. } => {
                // Close first so the action never observes an open menu
                self.close();
                MenuResponse::Activate(handler)
            }
            MenuItem::Submenu { .. } => {
                self.expand(level, index);
                self.focus = self.first_selectable();
                MenuResponse::Handled
            }
            MenuItem::Separator => MenuResponse::Ignored,
        }
    }

    fn move_focus(&mut self, forward: bool) -> MenuResponse {
        let items = &self.levels[self.depth()];
        let len = items.len();
        if len == 0 {
            return MenuResponse::Handled;
        }

        let start = match (self.focus, forward) {
            (Some(i), true) => i + 1,
            (None, true) => 0,
            (Some(i), false) => i + len - 1,
            (None, false) => len - 1,
        };

        for offset in 0..len {
            let idx = if forward { (start + offset) % len } else { (start + len - offset) % len };
            if items[idx].is_selectable() {
                self.focus = Some(idx);
                break;
            }
        }
        MenuResponse::Handled
    }

    fn expand(&mut self, level: usize, index: usize) {
        let Some(entries) = self.item(level, index).and_then(MenuItem::submenu_entries) else {
            return;
        };
        let sub_items = filter_entries(entries.iter().cloned());
        self.collapse_to(level);
        self.open_levels.push(index);
        self.levels.push(sub_items);
    }

    fn collapse_to(&mut self, level: usize) {
        self.open_levels.truncate(level);
        self.levels.truncate(level + 1);
    }

    fn collapse_deepest(&mut self) -> MenuResponse {
        let Some(parent_index) = self.open_levels.pop() else {
            return MenuResponse::Ignored;
        };
        self.levels.pop();
        self.focus = Some(parent_index);
        MenuResponse::Handled
    }

    fn first_selectable(&self) -> Option<usize> {
        self.levels[self.depth()].iter().position(MenuItem::is_selectable)
    }
}

fn item_is_selectable(item: Option<&MenuItem>) -> bool {
    item.is_some_and(MenuItem::is_selectable)
}
