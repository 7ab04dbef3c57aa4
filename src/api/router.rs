use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use super::health;
use super::state::AppState;
use super::users;

/// Create the full router with application state
pub fn create_router_with_state(state: AppState) -> Router {
    Router::new()
        // Health endpoint (no state needed)
        .route("/health", get(health::health_check))
        // Registration API
        .route("/api/1.0/users", post(users::register))
        // Add state and middleware
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
