//! Metrics collection and exposition for Prometheus.
//!
//! This module owns the gauge registry the collector writes into.

mod gauges;

pub use gauges::{ConsensusGauges, HostDbGauges, HostGauges, Metrics, WalletGauges};
