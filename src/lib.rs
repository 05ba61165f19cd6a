pub(crate) mod controllers;
pub(crate) mod core;
pub(crate) mod routes;
pub(crate) mod types;
pub(crate) mod utils;
pub(crate) mod workers;

use axum::Router;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

pub use crate::core::config::Args;
pub use crate::core::error::ConfigError as Error;
use crate::core::state::AppState;

/// Builds the service router. Spawns the book store worker, so it must be
/// called from within a tokio runtime.
pub fn app(args: &Args) -> Result<Router, Error> {
    let state = AppState::new(args)?;

    Ok(routes::router::routes(state))
}

pub async fn run() -> Result<(), Error> {
    let config = Args::load()?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_new(&config.log_level).unwrap_or_default())
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::debug!(?config, "loaded configuration");

    let app = app(&config)?;

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .map_err(Error::IO)?;

    tracing::debug!("listening on port {}", config.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(Error::IO)?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
    }

    tracing::info!("shutting down");
}
