//! Solary Server - subscription-gated solar chart API

use anyhow::Result;
use axum::routing::get;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use solary_server::config::Config;
use solary_server::state::AppState;
use solary_server::{api, persistence};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("solary_server=debug".parse()?),
        )
        .init();

    tracing::info!("Starting Solary server...");

    let config = Config::from_env();
    let port = config.server_port;

    let db = persistence::init_database(&config.database_path, config.database_max_connections)
        .await?;
    let state = Arc::new(AppState::new(db, config));

    // Build the app
    let app = api::routes()
        .route("/health", get(|| async { "OK" }))
        .with_state(state)
        .layer(CorsLayer::permissive());

    // Run server
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
