//! Table View - Main Entry Point
//!
//! Opens the data table demo window.

use table_view::app::application::run_app;
use table_view::config::TableConfig;

fn main() {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting Table View...");

    let config = match TableConfig::load() {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("Failed to load config, using defaults: {}", err);
            TableConfig::default()
        }
    };

    // Run the GPUI application
    run_app(config);
}
