//! CrisisSim API server entry point.

use std::error::Error;
use std::sync::Arc;

use crisissim_api::config::ServerConfig;
use crisissim_api::reaper;
use crisissim_api::routes;
use crisissim_api::state::AppState;
use crisissim_core::clock::{Clock, SystemClock};
use crisissim_core::store::SessionStore;
use crisissim_scenario::domain::session::Session;
use crisissim_session_store::InMemorySessionStore;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting CrisisSim API server");

    let config = ServerConfig::from_env()?;
    let catalog = config.load_catalog()?;
    tracing::info!(
        templates = catalog.len(),
        source = ?config.templates_path,
        "template catalog loaded"
    );

    // Build application state.
    let clock: Arc<dyn Clock + Send + Sync> = Arc::new(SystemClock);
    let session_store: Arc<dyn SessionStore<Session>> =
        Arc::new(InMemorySessionStore::<Session>::new());
    let app_state = AppState::new(clock, session_store, Arc::new(catalog));

    let reaper = reaper::spawn_reaper(
        app_state.clone(),
        config.reaper_interval,
        config.session_max_age,
    )?;

    // TODO: Replace CorsLayer::permissive() with an allow-list once the web client has a fixed origin.
    let app = routes::router()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    let addr = config.socket_addr()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    reaper.abort();
    tracing::info!("CrisisSim API server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
