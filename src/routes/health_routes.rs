//! Health check endpoints.

use crate::state::AppState;
use axum::{Json, Router, extract::State, routing::get};
use serde_json::{Value, json};

/// Registers health check routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

/// Liveness of the exporter itself, not of the node.
///
/// Always 200; `last_refresh` is null until the first cycle has finished.
async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "last_refresh": state.collector.last_refresh().map(|t| t.to_rfc3339()),
    }))
}
