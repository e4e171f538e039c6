//! Data models for the context menu engine.
//!
//! - `item` - MenuItem, MenuEntry, ActionHandler
//! - `geometry` - CursorPosition, ComputedLayout, Viewport, LayoutConstants
//! - `style` - StyleSource and the menu custom properties

pub mod geometry;
pub mod item;
pub mod style;

pub use geometry::{ComputedLayout, CursorPosition, LayoutConstants, Viewport};
pub use item::{filter_entries, ActionHandler, MenuEntry, MenuItem};
pub use style::{StyleProperties, StyleSource};
