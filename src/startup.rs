//! Application startup and server initialization.
//!
//! This module wires the node API client, gauge registry and collector
//! together, starts the background refresh timer and serves the routes.

use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tracing::info;

use crate::client::{HttpNodeApi, NodeApi};
use crate::collector::Collector;
use crate::config::ConfigV1;
use crate::metrics::Metrics;
use crate::routes;
use crate::state::AppState;

/// Builds the shared state from configuration.
pub fn build_state(
    config: Arc<ConfigV1>,
    api: Arc<dyn NodeApi>,
) -> Result<AppState, Box<dyn std::error::Error>> {
    let metrics = Metrics::new()?;
    let collector = Arc::new(Collector::new(api, metrics));
    Ok(AppState { config, collector })
}

/// Spawns the periodic refresh task. Returns `None` when the interval is 0.
pub fn spawn_refresh_task(collector: Arc<Collector>, interval_in_ms: u64) -> Option<JoinHandle<()>> {
    if interval_in_ms == 0 {
        info!("Background refresh disabled");
        return None;
    }
    let period = Duration::from_millis(interval_in_ms);
    info!("Refreshing node metrics every {:?}", period);
    Some(tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        // The first tick completes immediately; `run` has already refreshed.
        interval.tick().await;
        loop {
            interval.tick().await;
            collector.refresh().await;
        }
    }))
}

/// Initializes and runs the exporter.
///
/// Performs one refresh before binding so the first scrape already sees
/// values, then serves until the process exits.
///
/// # Errors
///
/// Returns an error if the client or registry cannot be built, or if the
/// server fails to bind to the configured address.
pub async fn run(config: Arc<ConfigV1>) -> Result<(), Box<dyn std::error::Error>> {
    let api: Arc<dyn NodeApi> = Arc::new(HttpNodeApi::new(&config.node)?);
    let state = build_state(config.clone(), api)?;

    state.collector.refresh().await;
    let refresh_handle = spawn_refresh_task(state.collector.clone(), config.refresh.interval_in_ms);

    info!("Starting server on {}", config.bind_address);
    let app = routes::create_router(state);
    let listener = TcpListener::bind(&config.bind_address).await?;
    let result = axum::serve(listener, app).await;

    if let Some(handle) = refresh_handle {
        handle.abort();
    }
    result?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::fake::FakeNode;

    #[test]
    fn zero_interval_spawns_nothing() {
        let collector = Arc::new(Collector::new(
            Arc::new(FakeNode::default()),
            Metrics::new().unwrap(),
        ));
        assert!(spawn_refresh_task(collector, 0).is_none());
    }

    #[tokio::test]
    async fn first_timed_refresh_waits_one_period() {
        let node = Arc::new(FakeNode::default());
        let collector = Arc::new(Collector::new(node.clone(), Metrics::new().unwrap()));
        let handle = spawn_refresh_task(collector.clone(), 200).expect("task should spawn");

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(collector.last_refresh().is_none());
        assert!(node.calls().is_empty());

        tokio::time::sleep(Duration::from_millis(400)).await;
        assert!(collector.last_refresh().is_some());
        handle.abort();
    }
}
