//! Lantern - a chat list with right-click context menus, built with GPUI.

mod app;
mod app_menus;

use app::LanternApp;
use gpui::{px, size, App, AppContext, Application, Bounds, Size, WindowBounds, WindowOptions};
use lantern_core::logging::init_logging_default;
use lantern_core::MenuConfig;
use lantern_ui::key_bindings::{CloseWindow, Minimize, Quit};
use lantern_ui::{register_key_bindings, LanternTheme, MenuOverlay};

fn main() {
    let _logging_guard = init_logging_default();

    tracing::info!("Starting Lantern");

    Application::new().run(|cx: &mut App| {
        let config = match MenuConfig::load_default() {
            Ok(config) => config,
            Err(e) => {
                let info = e.to_error_info();
                tracing::warn!(
                    error_type = %info.error_type,
                    hint = ?info.hint,
                    "Failed to load menu settings, using defaults: {}",
                    info.message
                );
                MenuConfig::default()
            }
        };
        cx.set_global(config);
        cx.set_global(LanternTheme::for_appearance(cx.window_appearance()));

        // Reads the theme and config globals
        MenuOverlay::init(cx);

        cx.set_menus(app_menus::app_menus(cx));
        register_key_bindings(cx);
        register_global_actions(cx);

        let bounds = Bounds::centered(None, size(px(960.0), px(720.0)), cx);
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            window_min_size: Some(Size { width: px(360.0), height: px(280.0) }),
            focus: true,
            show: true,
            ..Default::default()
        };

        let opened = cx.open_window(window_options, |window, cx| {
            window.on_window_should_close(cx, |window, cx| {
                window.remove_window();
                cx.quit();
                false
            });

            cx.new(|cx| LanternApp::new(window, cx))
        });
        if let Err(e) = opened {
            tracing::error!(error = %e, "Failed to open window");
            cx.quit();
            return;
        }

        cx.activate(true);
    });
}

/// Register handlers for application-level actions.
fn register_global_actions(cx: &mut App) {
    cx.on_action(|_: &Quit, cx| {
        cx.quit();
    });

    // Deferred: the window may be borrowed while a menu action dispatches
    cx.on_action(|_: &Minimize, cx| {
        cx.defer(|cx| {
            if let Some(window_handle) = cx.windows().first().copied() {
                window_handle
                    .update(cx, |_, window, _cx| {
                        window.minimize_window();
                    })
                    .ok();
            }
        });
    });

    cx.on_action(|_: &CloseWindow, cx| {
        cx.defer(|cx| {
            if let Some(window_handle) = cx.windows().first().copied() {
                window_handle
                    .update(cx, |_, window, _cx| {
                        window.remove_window();
                    })
                    .ok();
            }
            cx.quit();
        });
    });
}
