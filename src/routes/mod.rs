//! HTTP route definitions and handlers.
//!
//! The exporter serves the Prometheus exposition endpoint and a liveness check.

mod health_routes;
mod metrics;

use crate::state::AppState;
use axum::Router;

/// Creates the application router with all configured routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(metrics::routes())
        .merge(health_routes::routes())
        .with_state(state)
}
