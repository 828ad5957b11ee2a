//! # themeswitchd: theme switch asset server
//!
//! Composition root that serves the theme switch bundle and the page assets.
//!
//! ## Responsibilities
//! - Parse configuration (env vars, config file)
//! - Install the `tracing` subscriber
//! - Build the asset store (in-memory snapshot or hot-reload from disk)
//! - Build the axum router and serve it
//! - Handle graceful shutdown (SIGINT)
//!
//! ## Dependency rule
//! This is the wiring layer: no theme logic belongs here.

mod config;

use themeswitch_adapter_http_axum::router;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.logging.filter)?)
        .init();

    let source = config.asset_store().build()?;
    let app = router::build(source);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(
        address = %bind_addr,
        hot_reload = config.assets.hot_reload,
        "themeswitchd listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("themeswitchd stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
