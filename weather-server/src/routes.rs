use axum::Router;
use axum::routing::{delete, get, post};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Forecast lookup (also records the city in the history)
        .route("/", post(handlers::submit_city))
        // Search history
        .route("/history", get(handlers::search_history))
        .route("/history/{id}", delete(handlers::delete_history_entry))
        .with_state(state)
        // Middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
