//! Theme definitions for Lantern.

use gpui::{hsla, Global, Hsla, WindowAppearance};
use lantern_core::models::style::{
    BORDER_MARGIN_PROPERTY, ITEM_LINE_HEIGHT_PROPERTY, ITEM_PADDING_PROPERTY, MENU_WIDTH_PROPERTY,
};
use lantern_core::StyleProperties;

/// Color palette for UI rendering.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    /// Window background color.
    pub background: Hsla,
    /// Chat list background.
    pub surface: Hsla,
    /// Menu background.
    pub elevated_surface: Hsla,
    /// Primary text color.
    pub text: Hsla,
    /// Secondary/dimmed text.
    pub text_muted: Hsla,
    /// Element border color.
    pub border: Hsla,
    /// Primary accent color.
    pub accent: Hsla,
    /// Row under the pointer.
    pub list_hover_background: Hsla,
    /// Focused menu item, or a row whose menu is open.
    pub list_active_selection_background: Hsla,
}

impl ThemeColors {
    /// Create the dark palette.
    pub fn dark() -> Self {
        Self {
            // #1b1d23
            background: hsla(225.0 / 360.0, 0.13, 0.12, 1.0),
            // #22252d
            surface: hsla(223.0 / 360.0, 0.14, 0.16, 1.0),
            // #2c3039
            elevated_surface: hsla(222.0 / 360.0, 0.13, 0.20, 1.0),
            // #e4e6eb
            text: hsla(222.0 / 360.0, 0.13, 0.91, 1.0),
            // #9097a6
            text_muted: hsla(221.0 / 360.0, 0.10, 0.61, 1.0),
            // #3a3f4b
            border: hsla(222.0 / 360.0, 0.13, 0.26, 1.0),
            // #f2a33c
            accent: hsla(34.0 / 360.0, 0.88, 0.59, 1.0),
            list_hover_background: hsla(222.0 / 360.0, 0.13, 0.24, 1.0),
            list_active_selection_background: hsla(34.0 / 360.0, 0.50, 0.30, 1.0),
        }
    }

    /// Create the light palette.
    pub fn light() -> Self {
        Self {
            // #f7f7f9
            background: hsla(240.0 / 360.0, 0.14, 0.97, 1.0),
            // #ffffff
            surface: hsla(0.0, 0.0, 1.0, 1.0),
            // #ffffff
            elevated_surface: hsla(0.0, 0.0, 1.0, 1.0),
            // #23262e
            text: hsla(223.0 / 360.0, 0.14, 0.16, 1.0),
            // #6b7180
            text_muted: hsla(223.0 / 360.0, 0.09, 0.46, 1.0),
            // #d9dbe1
            border: hsla(225.0 / 360.0, 0.12, 0.87, 1.0),
            // #d9820f
            accent: hsla(34.0 / 360.0, 0.87, 0.45, 1.0),
            list_hover_background: hsla(225.0 / 360.0, 0.12, 0.93, 1.0),
            list_active_selection_background: hsla(34.0 / 360.0, 0.90, 0.88, 1.0),
        }
    }
}

/// Theme configuration for application styling.
#[derive(Debug, Clone)]
pub struct LanternTheme {
    /// Theme identifier.
    pub name: String,
    /// GPUI appearance (Light/Dark).
    pub appearance: WindowAppearance,
    /// Color palette.
    pub colors: ThemeColors,
    /// Custom properties the menu reads its geometry from.
    pub menu_style: StyleProperties,
}

impl LanternTheme {
    /// Create a new dark theme.
    pub fn dark() -> Self {
        Self {
            name: "dark".to_string(),
            appearance: WindowAppearance::Dark,
            colors: ThemeColors::dark(),
            menu_style: default_menu_style(),
        }
    }

    /// Create a new light theme.
    pub fn light() -> Self {
        Self {
            name: "light".to_string(),
            appearance: WindowAppearance::Light,
            colors: ThemeColors::light(),
            menu_style: default_menu_style(),
        }
    }

    /// Pick the theme matching a window appearance.
    pub fn for_appearance(appearance: WindowAppearance) -> Self {
        match appearance {
            WindowAppearance::Light | WindowAppearance::VibrantLight => Self::light(),
            WindowAppearance::Dark | WindowAppearance::VibrantDark => Self::dark(),
        }
    }
}

impl Default for LanternTheme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Global for LanternTheme {}

fn default_menu_style() -> StyleProperties {
    StyleProperties::new()
        .with(MENU_WIDTH_PROPERTY, "200px")
        .with(ITEM_LINE_HEIGHT_PROPERTY, "20px")
        .with(ITEM_PADDING_PROPERTY, "5px")
        .with(BORDER_MARGIN_PROPERTY, "10px")
}
