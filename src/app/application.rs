//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use gpui::{
    actions, px, App, AppContext, Application, Bounds, KeyBinding, TitlebarOptions, WindowBounds,
    WindowOptions,
};

use crate::app::workspace::Workspace;
use crate::config::TableConfig;
use crate::i18n::t;

actions!(table_view, [Quit]);

/// Run the table view demo
pub fn run_app(config: TableConfig) {
    Application::new().run(move |cx: &mut App| {
        // Set up action handlers
        cx.bind_keys([KeyBinding::new("secondary-q", Quit, None)]);
        cx.on_action(|_: &Quit, cx: &mut App| cx.quit());

        // Quit the app when all windows are closed
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        let bounds = Bounds::centered(None, gpui::size(px(1100.0), px(720.0)), cx);
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some(t(config.locale, "app-title")),
                ..Default::default()
            }),
            ..Default::default()
        };

        if let Err(err) = cx.open_window(window_options, |_window, cx| {
            cx.new(|cx| Workspace::new(&config, cx))
        }) {
            tracing::error!("Failed to open window: {}", err);
            cx.quit();
            return;
        }

        cx.activate(true);
    });
}
