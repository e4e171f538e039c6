//! Menu item models.

use std::fmt;
use std::sync::Arc;

/// Handler type for menu actions.
///
/// Handlers are fire-and-forget: the menu never awaits or inspects what they do.
pub type ActionHandler = Arc<dyn Fn() + Send + Sync + 'static>;

/// An item as supplied by a call site.
///
/// `None` is a placeholder produced by inline conditions such as
/// `is_pinned.then(|| MenuItem::action("Unpin", ..))` and is dropped by
/// [`filter_entries`] before anything is measured or rendered.
pub type MenuEntry = Option<MenuItem>;

/// Represents an item in a context menu.
#[derive(Clone)]
pub enum MenuItem {
    /// A clickable action item.
    Action {
        label: String,
        icon: Option<String>,
        test_id: Option<String>,
        handler: ActionHandler,
    },
    /// A visual separator line.
    Separator,
    /// A nested submenu.
    Submenu {
        label: String,
        icon: Option<String>,
        items: Vec<MenuEntry>,
    },
}

impl MenuItem {
    /// Create an action item with a handler.
    pub fn action(label: impl Into<String>, handler: impl Fn() + Send + Sync + 'static) -> Self {
        Self::Action { label: label.into(), icon: None, test_id: None, handler: Arc::new(handler) }
    }

    /// Create a separator item.
    pub fn separator() -> Self {
        Self::Separator
    }

    /// Create a submenu item.
    pub fn submenu(label: impl Into<String>, items: Vec<MenuEntry>) -> Self {
        Self::Submenu { label: label.into(), icon: None, items }
    }

    /// Builder: add an icon name.
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        match &mut self {
            Self::Action { icon: i, .. } | Self::Submenu { icon: i, .. } => *i = Some(icon.into()),
            Self::Separator => {}
        }
        self
    }

    /// Builder: add a test identifier.
    pub fn test_id(mut self, id: impl Into<String>) -> Self {
        if let Self::Action { test_id, .. } = &mut self {
            *test_id = Some(id.into());
        }
        self
    }

    /// Check if this item is a separator.
    pub fn is_separator(&self) -> bool {
        matches!(self, Self::Separator)
    }

    /// Check if this item is a submenu.
    pub fn is_submenu(&self) -> bool {
        matches!(self, Self::Submenu { .. })
    }

    /// Check if keyboard focus can land on this item.
    pub fn is_selectable(&self) -> bool {
        !self.is_separator()
    }

    /// Get the label of this item.
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Action { label, .. } | Self::Submenu { label, .. } => Some(label),
            Self::Separator => None,
        }
    }

    /// Get the icon name, if any.
    pub fn icon_name(&self) -> Option<&str> {
        match self {
            Self::Action { icon, .. } | Self::Submenu { icon, .. } => icon.as_deref(),
            Self::Separator => None,
        }
    }

    /// Get submenu entries if this is a submenu.
    pub fn submenu_entries(&self) -> Option<&[MenuEntry]> {
        match self {
            Self::Submenu { items, .. } => Some(items),
            _ => None,
        }
    }

    /// Get the action handler if this is an action.
    pub fn handler(&self) -> Option<&ActionHandler> {
        match self {
            Self::Action { handler, .. } => Some(handler),
            _ => None,
        }
    }
}

impl fmt::Debug for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Action { label, icon, test_id, .. } => f
                .debug_struct("Action")
                .field("label", label)
                .field("icon", icon)
                .field("test_id", test_id)
                .finish_non_exhaustive(),
            Self::Separator => f.write_str("Separator"),
            Self::Submenu { label, icon, items } => f
                .debug_struct("Submenu")
                .field("label", label)
                .field("icon", icon)
                .field("items", items)
                .finish(),
        }
    }
}

/// Drop placeholder entries, keeping the order of the remaining items.
pub fn filter_entries(entries: impl IntoIterator<Item = MenuEntry>) -> Vec<MenuItem> {
    entries.into_iter().flatten().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_item_builders() {
        let sep = MenuItem::separator();
        assert!(sep.is_separator());
        assert!(!sep.is_selectable());
        assert_eq!(sep.label(), None);

        let action = MenuItem::action("Copy", || {}).icon("copy").test_id("menu-copy");
        assert!(action.is_selectable());
        assert_eq!(action.label(), Some("Copy"));
        assert_eq!(action.icon_name(), Some("copy"));
        assert!(action.handler().is_some());

        let submenu = MenuItem::submenu("Mute", vec![Some(MenuItem::action("1 hour", || {}))]);
        assert!(submenu.is_submenu());
        assert!(submenu.is_selectable());
        assert_eq!(submenu.submenu_entries().map(|e| e.len()), Some(1));
    }

    #[test]
    fn test_filter_entries_drops_placeholders() {
        let archived = false;
        let entries = vec![
            None,
            Some(MenuItem::action("A", || {})),
            archived.then(|| MenuItem::action("Unarchive", || {})),
            None,
        ];
        let items = filter_entries(entries);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].label(), Some("A"));
    }

    #[test]
    fn test_filter_entries_empty() {
        assert!(filter_entries(vec![None, None]).is_empty());
        assert!(filter_entries(Vec::new()).is_empty());
    }
}
