//! Portfolio relay server: forwards chat-completion requests to the LLM
//! provider with the server-side key and optionally serves the static site.

mod config;
mod handlers;
mod models;
mod request_context;
mod routes;
mod state;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = config::ServerConfig::from_env();

    tracing::info!("Starting portfolio relay");
    tracing::info!("Upstream: {}", config.relay.upstream_url);
    if config.relay.api_key().is_none() {
        tracing::warn!("OPENAI_API_KEY is not set; /api/analyze will answer 500");
    }
    match config.site_dir.as_deref() {
        Some(dir) => tracing::info!("Serving static site from {}", dir.display()),
        None => tracing::info!("SITE_DIR not set; serving the API only"),
    }

    let app_state = state::AppState::new(config.relay.clone())?;
    let app = routes::create_router(app_state, config.site_dir.as_deref());

    let addr = config.listen_addr();
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, app).await?;

    Ok(())
}
