//! Screen-space geometry for menu placement.
//!
//! All coordinates are viewport-relative logical pixels.

use serde::{Deserialize, Serialize};

/// Point at which a menu should anchor, usually the pointer position of the
/// gesture that requested it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CursorPosition {
    pub x: f32,
    pub y: f32,
}

impl CursorPosition {
    /// Create a cursor position.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Final placement of a menu's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ComputedLayout {
    pub top: f32,
    pub left: f32,
}

/// Size of the area the overlay covers.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    /// Create a viewport of the given size.
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Menu geometry read from the theme.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutConstants {
    /// Width of one menu level.
    pub menu_width: f32,
    /// Height of one line of item text.
    pub item_line_height: f32,
    /// Padding above and below an item's text.
    pub item_vertical_padding: f32,
    /// Minimum clearance kept between the menu and the viewport edge.
    pub border_margin: f32,
}

impl LayoutConstants {
    /// Height of a single-line item.
    pub fn item_height(&self) -> f32 {
        2.0 * self.item_vertical_padding + self.item_line_height
    }
}
