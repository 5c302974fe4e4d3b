use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use super::health;
use super::members;
use super::state::AppState;

/// Create the full router with application state
pub fn create_router_with_state(state: AppState) -> Router {
    Router::new()
        // Health endpoints
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check))
        // Member search variants
        .route("/v1/members", get(members::search_members_v1))
        .route("/v2/members", get(members::search_members_v2))
        .route("/v3/members", get(members::search_members_v3))
        // Add state and middleware
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
