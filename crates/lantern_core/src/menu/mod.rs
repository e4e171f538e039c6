//! Context menu engine.
//!
//! Layout math ([`overflow`], [`position`]) is pure. [`controller`] owns the
//! keyboard and pointer state of one open menu, and [`layer`] is the single
//! overlay per view that callers show menus through.

pub mod activity;
pub mod controller;
pub mod layer;
pub mod overflow;
pub mod position;
pub mod trigger;

pub use activity::{MenuActivity, ScrollInput, ScrollSuppressor};
pub use controller::{ContextMenu, MenuKey, MenuResponse, PointerTarget};
pub use layer::{
    ContextMenuHandle, ContextMenuLayer, ItemKind, ItemSnapshot, LevelSnapshot, MenuSession,
    MenuSnapshot, ShowRequest,
};
pub use overflow::{estimate_overflow_lines, label_overflow, DEFAULT_OVERFLOW_THRESHOLD};
pub use position::{compute_layout, item_top, menu_height, place_submenu};
pub use trigger::{ContextMenuTrigger, ItemsSource};
