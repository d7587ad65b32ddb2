use std::sync::Arc;

use anyhow::Context;
use castfinder::api::{AppState, create_router};
use castfinder::config::CONFIG;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    let config = &*CONFIG;
    if config.api_key.is_empty() {
        tracing::warn!("TMDB_API_KEY is not set; upstream will reject requests");
    }
    if config.request_timeout.is_none() {
        tracing::info!("no upstream request timeout configured");
    }

    let state = AppState::new(config).context("failed to build http client")?;
    let app = create_router(Arc::new(state), &config.static_dir);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    tracing::info!("listening on http://{}", config.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
