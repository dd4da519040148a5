//! HTTP API for the activities service.

mod handlers;
mod middleware;
mod types;

pub use handlers::*;
pub use middleware::logging_middleware;
pub use types::*;

use axum::{
    middleware as axum_middleware,
    routing::{delete, get, post},
    Router,
};
use roster_store::RosterStore;
use std::path::Path;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Activity roster owned by this server instance
    pub roster: RosterStore,
}

impl AppState {
    /// Create new application state.
    pub fn new(roster: RosterStore) -> Self {
        Self { roster }
    }
}

/// Create the API router serving static assets from `static/`.
pub fn create_router(state: AppState) -> Router {
    create_router_with_static_dir(state, "static")
}

/// Create the API router with a custom static asset directory.
pub fn create_router_with_static_dir(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        // Signup page
        .route("/", get(handlers::index_redirect))
        // Health check
        .route("/health", get(handlers::health))
        // Roster endpoints
        .route("/activities", get(handlers::list_activities))
        .route("/activities/:activity_name/signup", post(handlers::signup))
        .route(
            "/activities/:activity_name/unregister",
            delete(handlers::unregister),
        )
        // Static assets
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(axum_middleware::from_fn(middleware::logging_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
