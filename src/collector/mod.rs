//! Translates node API snapshots into gauge values.
//!
//! A refresh cycle runs the consensus, wallet, host and host-database
//! routines one after another. The routines are independent: each one logs
//! its own failures and leaves its gauges at their previous values, so a
//! cycle never fails as a whole.

pub mod consensus;
pub mod host;
pub mod hostdb;
pub mod wallet;

#[cfg(test)]
pub(crate) mod fake;

use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::client::{ApiError, NodeApi};
use crate::metrics::Metrics;
use crate::utils::log_throttle::should_emit;

const UNAVAILABLE_LOG_WINDOW: Duration = Duration::from_secs(300);

pub(crate) fn bool_to_f64(b: bool) -> f64 {
    if b {
        1.0
    } else {
        0.0
    }
}

/// Logs a failed call. Unavailable modules are expected on partially
/// configured nodes, so those notices are throttled per resource.
pub(crate) fn log_api_error(module: &'static str, what: &str, err: &ApiError) {
    if err.is_module_unavailable() {
        let key = format!("collector.{}.{}.unavailable", module, what);
        if let Some(suppressed_count) = should_emit(&key, UNAVAILABLE_LOG_WINDOW) {
            info!(
                event_name = "collector.module.unavailable",
                event_domain = "collector",
                module,
                suppressed_count,
                "{} module is not loaded ({})",
                module,
                what
            );
        }
    } else {
        warn!(
            event_name = "collector.fetch.failed",
            event_domain = "collector",
            module,
            error = %err,
            "Could not fetch {}",
            what
        );
    }
}

/// Owns the API client and the gauges it feeds.
pub struct Collector {
    api: Arc<dyn NodeApi>,
    metrics: Metrics,
    cycle: Mutex<()>,
    last_refresh: RwLock<Option<DateTime<Utc>>>,
}

impl Collector {
    pub fn new(api: Arc<dyn NodeApi>, metrics: Metrics) -> Self {
        Self {
            api,
            metrics,
            cycle: Mutex::new(()),
            last_refresh: RwLock::new(None),
        }
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// When the most recent cycle finished.
    pub fn last_refresh(&self) -> Option<DateTime<Utc>> {
        *self.last_refresh.read().unwrap_or_else(|e| e.into_inner())
    }

    /// Runs one refresh cycle. Overlapping calls wait for each other.
    pub async fn refresh(&self) {
        let _cycle = self.cycle.lock().await;
        let started = Instant::now();
        let api = self.api.as_ref();

        consensus::refresh(api, &self.metrics.consensus).await;
        wallet::refresh(api, &self.metrics.wallet).await;
        host::refresh(api, &self.metrics.host).await;
        hostdb::refresh(api, &self.metrics.hostdb).await;

        *self.last_refresh.write().unwrap_or_else(|e| e.into_inner()) = Some(Utc::now());

        debug!(
            event_name = "collector.refresh.completed",
            event_domain = "collector",
            elapsed_ms = started.elapsed().as_millis() as u64,
            "refresh cycle completed"
        );
    }
}
