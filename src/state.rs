//! Shared application state.
//!
//! Contains the state that is shared across all request handlers:
//! configuration and the collector with its gauges.

use crate::collector::Collector;
use crate::config::ConfigV1;
use std::sync::Arc;

/// Application state shared across all HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded at startup.
    pub config: Arc<ConfigV1>,
    /// Refreshes and owns the gauge registry.
    pub collector: Arc<Collector>,
}
