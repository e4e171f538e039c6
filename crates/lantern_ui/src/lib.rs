//! GPUI front end for the Lantern context menu.
//!
//! - **theme**: Colors and the menu's layout properties
//! - **key_bindings**: Actions and their key bindings
//! - **context_menu**: The overlay that draws and drives the open menu

pub mod context_menu;
pub mod key_bindings;
pub mod theme;

pub use context_menu::MenuOverlay;
pub use key_bindings::register_key_bindings;
pub use theme::{LanternTheme, ThemeColors};
