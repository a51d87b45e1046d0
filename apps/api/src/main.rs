mod config;
mod contrast;
mod errors;
mod layout;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::layout::a4_geometry;
use crate::routes::{build_router, cors_layer};
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Palette API v{}", env!("CARGO_PKG_VERSION"));

    let geometry = a4_geometry();
    info!(
        "Layout grid: {} columns x {} rows per page (max palette {})",
        config.layout.max_cols, config.layout.max_rows_per_page, config.max_palette_size
    );

    let cors = cors_layer(&config)?;
    match &config.cors_allowed_origin {
        Some(origin) => info!("CORS restricted to {origin}"),
        None => info!("CORS permissive (CORS_ALLOWED_ORIGIN not set)"),
    }

    let port = config.port;
    let state = AppState::new(config, geometry);

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let addr: SocketAddr = format!("0.0.0.0:{port}").parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
