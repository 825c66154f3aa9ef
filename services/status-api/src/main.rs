//! HYPR Status API
//!
//! HTTP service exposing HYPR authentication status polling.

mod config;
mod error;
mod handlers;
mod routes;
mod state;

use std::net::SocketAddr;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    tracing::info!("Starting HYPR Status API");

    let config = Config::from_env()?;
    let addr = SocketAddr::from(([0, 0, 0, 0], config.http_port));
    let app = routes::router(AppState::new(config));

    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
