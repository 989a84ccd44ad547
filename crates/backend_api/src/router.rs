use axum::{
    routing::{get, post},
    Router,
};
use planner::PlanService;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::handlers;

/// Create the main application router with all API endpoints
pub fn create_router(service: Arc<PlanService>) -> Router {
    // Create CORS layer
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build the router
    Router::new()
        // Liveness
        .route("/", get(handlers::liveness))
        .route("/health", get(handlers::liveness))
        // Plan generation
        .route("/api/generate-plan", post(handlers::generate_plan))
        // Add shared state
        .with_state(service)
        // Add middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
