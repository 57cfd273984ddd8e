//! Host database peer counts.

use tracing::debug;

use super::log_api_error;
use crate::client::{HostDbEntry, NodeApi};
use crate::metrics::HostDbGauges;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostClass {
    /// Reachable on the last scan and accepting contracts.
    Active,
    /// Reachable on the last scan but not accepting contracts.
    Inactive,
    /// Never scanned, or the last scan failed.
    Offline,
}

pub fn classify_host(host: &HostDbEntry) -> HostClass {
    let online = host.scan_history.last().is_some_and(|scan| scan.success);
    if online && host.accepting_contracts {
        HostClass::Active
    } else if online {
        HostClass::Inactive
    } else {
        HostClass::Offline
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HostCounts {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
    pub offline: usize,
}

pub fn classify_hosts(hosts: &[HostDbEntry]) -> HostCounts {
    let mut counts = HostCounts {
        total: hosts.len(),
        ..HostCounts::default()
    };
    for host in hosts {
        match classify_host(host) {
            HostClass::Active => counts.active += 1,
            HostClass::Inactive => counts.inactive += 1,
            HostClass::Offline => counts.offline += 1,
        }
    }
    counts
}

/// Retrieves every known host and sets the host database gauges.
pub async fn refresh(api: &dyn NodeApi, gauges: &HostDbGauges) {
    let all = match api.hostdb_all_get().await {
        Ok(a) => a,
        Err(e) => {
            log_api_error("hostdb", "host list", &e);
            return;
        }
    };

    let counts = classify_hosts(&all.hosts);
    gauges.total_hosts.set(counts.total as f64);
    gauges.active_hosts.set(counts.active as f64);
    gauges.inactive_hosts.set(counts.inactive as f64);
    gauges.offline_hosts.set(counts.offline as f64);
    debug!(?counts, "host database gauges updated");
}
