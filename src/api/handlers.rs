//! REST API handlers for the state screens
//!
//! Upstream failures never turn into error statuses here: the screens
//! already fall back to empty lists, "Unknown" populations and no map.

use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use super::service::{ScreenService, StateDetailView, StatesView};

#[derive(Deserialize)]
pub struct SearchQuery {
    pub search: Option<String>,
}

pub type AppState = Arc<ScreenService>;

/// GET /api/v1/health
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({"status": "ok"}))
}

/// GET /api/v1/states?search=X
pub async fn get_states(
    State(service): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Json<StatesView> {
    let search = params.search.unwrap_or_default();
    Json(service.list_states(&search).await)
}

/// POST /api/v1/states/refresh
pub async fn refresh_states(State(service): State<AppState>) -> Json<StatesView> {
    Json(service.refresh_states().await)
}

/// GET /api/v1/state/:name
pub async fn get_state(
    State(service): State<AppState>,
    Path(name): Path<String>,
) -> Json<StateDetailView> {
    Json(service.state_detail(&name).await)
}
