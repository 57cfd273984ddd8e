//! Metrics exposition endpoint.

use crate::state::AppState;
use axum::{Router, extract::State, http::StatusCode, response::IntoResponse, routing::get};
use tracing::error;

/// Creates the metrics route.
pub fn routes() -> Router<AppState> {
    Router::new().route("/metrics", get(metrics_handler))
}

/// Handler for the /metrics endpoint.
///
/// Returns all gauges in Prometheus text format. When `refresh.on_scrape` is
/// set, a refresh cycle runs before the gauges are read.
async fn metrics_handler(State(state): State<AppState>) -> impl IntoResponse {
    if state.config.refresh.on_scrape {
        state.collector.refresh().await;
    }

    match state.collector.metrics().render() {
        Ok(metrics_text) => (
            StatusCode::OK,
            [("Content-Type", "text/plain; version=0.0.4; charset=utf-8")],
            metrics_text,
        ),
        Err(e) => {
            error!("Could not encode metrics: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                [("Content-Type", "text/plain; charset=utf-8")],
                format!("could not encode metrics: {}", e),
            )
        }
    }
}
