//! Library exports for the exporter, shared between the binary and tests.

pub mod client;
pub mod collector;
pub mod config;
pub mod metrics;
pub mod routes;
pub mod startup;
pub mod state;
pub mod utils;
