//! API module for the state browser
//!
//! Serves the list and detail screens as JSON.

pub mod handlers;
pub mod service;

pub use service::ScreenService;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub fn create_router(service: Arc<ScreenService>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/v1/health", get(handlers::health))
        .route("/api/v1/states", get(handlers::get_states))
        .route("/api/v1/states/refresh", post(handlers::refresh_states))
        .route("/api/v1/state/:name", get(handlers::get_state))
        .with_state(service)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
