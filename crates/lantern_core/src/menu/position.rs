//! Menu placement.
//!
//! A menu opens at the cursor, toward the bottom-right. When it would not fit
//! (keeping `border_margin` clearance) it flips to open leftward and/or upward.
//! Placement is computed once per show and never revisited.

use crate::menu::overflow::estimate_overflow_lines;
use crate::models::{ComputedLayout, CursorPosition, LayoutConstants, MenuItem, Viewport};

/// Estimated rendered height of a menu level.
pub fn menu_height(item_count: usize, overflow_lines: usize, constants: &LayoutConstants) -> f32 {
    item_count as f32 * constants.item_height() + overflow_lines as f32 * constants.item_line_height
}

/// Decide where the top-left corner of the root menu goes.
pub fn compute_layout(
    cursor: CursorPosition,
    viewport: Viewport,
    constants: &LayoutConstants,
    item_count: usize,
    overflow_lines: usize,
) -> ComputedLayout {
    let height = menu_height(item_count, overflow_lines, constants);

    let left = if cursor.x + constants.menu_width + constants.border_margin <= viewport.width {
        cursor.x
    } else {
        cursor.x - constants.menu_width
    };

    let top = if cursor.y + height + constants.border_margin <= viewport.height {
        cursor.y
    } else {
        cursor.y - height
    };

    ComputedLayout { top, left }
}

/// Top edge of the item at `index` inside a level placed at `level`.
///
/// Rows above the item that wrap push it down by their extra lines, as
/// estimated with `overflow_threshold`.
pub fn item_top(
    level: ComputedLayout,
    items: &[MenuItem],
    index: usize,
    constants: &LayoutConstants,
    overflow_threshold: usize,
) -> f32 {
    let above = &items[..index.min(items.len())];
    let wrapped = estimate_overflow_lines(above, overflow_threshold);
    level.top + menu_height(index, wrapped, constants)
}

/// Place a submenu beside its parent level.
///
/// The submenu opens to the right of the parent. If its right edge would pass
/// `right_limit` it opens to the left of the parent instead. Its top edge lines
/// up with the item that opened it.
pub fn place_submenu(
    parent: ComputedLayout,
    anchor_top: f32,
    constants: &LayoutConstants,
    right_limit: f32,
) -> ComputedLayout {
    let beside = parent.left + constants.menu_width;
    let left = if beside + constants.menu_width > right_limit {
        parent.left - constants.menu_width
    } else {
        beside
    };
    ComputedLayout { top: anchor_top, left }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn constants() -> LayoutConstants {
        LayoutConstants {
            menu_width: 200.0,
            item_line_height: 20.0,
            item_vertical_padding: 5.0,
            border_margin: 10.0,
        }
    }

    const VIEWPORT: Viewport = Viewport { width: 800.0, height: 600.0 };

    #[test]
    fn test_menu_height_is_item_count_times_item_height() {
        for n in 0..8 {
            assert_eq!(menu_height(n, 0, &constants()), n as f32 * 30.0);
        }
    }

    #[test]
    fn test_overflow_adds_line_heights() {
        assert_eq!(menu_height(3, 2, &constants()), 90.0 + 40.0);
    }

    #[test]
    fn test_opens_down_right_when_it_fits() {
        let layout = compute_layout(CursorPosition::new(100.0, 50.0), VIEWPORT, &constants(), 3, 0);
        assert_eq!(layout, ComputedLayout { top: 50.0, left: 100.0 });
    }

    #[test]
    fn test_opens_leftward_near_right_edge() {
        let layout = compute_layout(CursorPosition::new(790.0, 10.0), VIEWPORT, &constants(), 1, 0);
        assert_eq!(layout.left, 590.0);
        assert_eq!(layout.top, 10.0);
    }

    #[test]
    fn test_border_margin_counts_toward_fit() {
        // 591 + 200 fits the viewport but not the 10px clearance
        let layout = compute_layout(CursorPosition::new(591.0, 10.0), VIEWPORT, &constants(), 1, 0);
        assert_eq!(layout.left, 391.0);
        let layout = compute_layout(CursorPosition::new(590.0, 10.0), VIEWPORT, &constants(), 1, 0);
        assert_eq!(layout.left, 590.0);
    }

    #[test]
    fn test_opens_upward_near_bottom_edge() {
        // five 20px items make a 100px menu
        let constants = LayoutConstants { item_line_height: 10.0, ..constants() };
        assert_eq!(menu_height(5, 0, &constants), 100.0);
        let layout = compute_layout(CursorPosition::new(10.0, 590.0), VIEWPORT, &constants, 5, 0);
        assert_eq!(layout.top, 490.0);
        assert_eq!(layout.left, 10.0);
    }

    #[test]
    fn test_opens_up_and_left_in_corner() {
        let layout =
            compute_layout(CursorPosition::new(780.0, 580.0), VIEWPORT, &constants(), 4, 1);
        assert_eq!(layout, ComputedLayout { top: 580.0 - 140.0, left: 580.0 });
    }

    #[test]
    fn test_submenu_opens_right_of_parent() {
        let parent = ComputedLayout { top: 40.0, left: 100.0 };
        let items = vec![MenuItem::action("Pin", || {}), MenuItem::separator()];
        let anchor = item_top(parent, &items, 2, &constants(), 19);
        assert_eq!(anchor, 100.0);
        let sub = place_submenu(parent, anchor, &constants(), 800.0);
        assert_eq!(sub, ComputedLayout { top: 100.0, left: 300.0 });
    }

    #[test]
    fn test_item_top_counts_wrapped_rows_above() {
        let parent = ComputedLayout { top: 0.0, left: 100.0 };
        let items = vec![
            MenuItem::action("Delete chat for everyone", || {}),
            MenuItem::submenu("Mute", Vec::new()),
            MenuItem::action("Archive", || {}),
        ];
        // the first label wraps once, adding one 20px line
        assert_eq!(item_top(parent, &items, 0, &constants(), 19), 0.0);
        assert_eq!(item_top(parent, &items, 1, &constants(), 19), 50.0);
        assert_eq!(item_top(parent, &items, 2, &constants(), 19), 80.0);
    }

    #[test]
    fn test_submenu_flips_left_at_right_limit() {
        let parent = ComputedLayout { top: 0.0, left: 500.0 };
        let sub = place_submenu(parent, 0.0, &constants(), 800.0);
        assert_eq!(sub.left, 300.0);
    }
}
