//! Core types and the headless context menu engine for Lantern.
//!
//! This crate has no UI dependency; the `gpui` feature only adds `Global`
//! impls so the application can store its types as globals.
//!
//! - **error**: Error type shared by every fallible operation
//! - **models**: Menu items, geometry and style properties
//! - **menu**: Overflow estimate, placement, controller, overlay layer
//! - **config**: Menu settings persisted as JSON
//! - **logging**: Structured logging setup

pub mod config;
pub mod error;
pub mod logging;
pub mod menu;
pub mod models;

pub use config::MenuConfig;
pub use error::{ErrorInfo, LanternError};
pub use menu::{
    ContextMenuHandle, ContextMenuLayer, ContextMenuTrigger, MenuActivity, MenuKey, MenuResponse,
    MenuSession, MenuSnapshot, PointerTarget, ScrollInput, ScrollSuppressor, ShowRequest,
};
pub use models::{
    ComputedLayout, CursorPosition, LayoutConstants, MenuEntry, MenuItem, StyleProperties,
    StyleSource, Viewport,
};
