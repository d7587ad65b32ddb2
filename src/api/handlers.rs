use axum::{
    Json,
    extract::{Query, State},
};
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

use crate::views::{DetailView, ResultsView};

use super::AppState;
use super::models::{PersonParams, SearchParams};

/// "User requested search with text T". Always 200; failures are messages.
pub async fn search_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Json<ResultsView> {
    let start = Instant::now();
    let outcome = state.search.search(&params.query).await;
    let view = ResultsView::from_outcome(outcome, &state.images);
    debug!(elapsed_ms = start.elapsed().as_millis() as u64, "search handled");
    Json(view)
}

/// "User selected summary with name N".
pub async fn person_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PersonParams>,
) -> Json<DetailView> {
    let start = Instant::now();
    let outcome = state.detail.load(&params.name).await;
    let view = DetailView::from_outcome(outcome, &state.images);
    debug!(elapsed_ms = start.elapsed().as_millis() as u64, "person handled");
    Json(view)
}
