use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
};

use crate::config::Config;
use crate::detail::DetailPipeline;
use crate::search::SearchPipeline;
use crate::tmdb::TmdbClient;
use crate::views::ImageSettings;

pub mod handlers;
pub mod models;

/// Shared by all handlers; nothing in here changes after startup.
pub struct AppState {
    pub search: SearchPipeline,
    pub detail: DetailPipeline,
    pub images: ImageSettings,
}

impl AppState {
    pub fn new(config: &Config) -> reqwest::Result<AppState> {
        let client = TmdbClient::new(config)?;
        Ok(AppState {
            search: SearchPipeline::new(client.clone()),
            detail: DetailPipeline::new(client),
            images: ImageSettings::from_config(config),
        })
    }
}

pub fn create_router(state: Arc<AppState>, static_dir: &str) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // API routes
        .route("/api/search", get(handlers::search_handler))
        .route("/api/person", get(handlers::person_handler))
        .with_state(state)
        // Static file serving for the UI
        .fallback_service(ServeDir::new(static_dir))
        .layer(cors)
}
