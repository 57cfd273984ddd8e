//! Host settings, storage folders and bandwidth.

use tracing::debug;

use super::{bool_to_f64, log_api_error};
use crate::client::{HostGet, NodeApi, StorageFolder};
use crate::metrics::HostGauges;

pub const BLOCKS_PER_HOUR: u64 = 6;
pub const BLOCKS_PER_WEEK: u64 = BLOCKS_PER_HOUR * 24 * 7;
pub const BLOCKS_PER_MONTH: u64 = BLOCKS_PER_HOUR * 24 * 30;
pub const BYTES_PER_TERABYTE: u64 = 1_000_000_000_000;
/// Converts a per-byte-per-block price into a per-terabyte-per-month price.
pub const BLOCK_BYTES_PER_MONTH_TERABYTE: u64 = BLOCKS_PER_MONTH * BYTES_PER_TERABYTE;

/// Window size in whole hours. The node reports blocks.
pub fn window_size_hours(blocks: u64) -> f64 {
    (blocks / BLOCKS_PER_HOUR) as f64
}

pub fn max_duration_weeks(blocks: u64) -> f64 {
    blocks as f64 / BLOCKS_PER_WEEK as f64
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FolderTotals {
    pub capacity: u64,
    pub remaining: u64,
    pub count: usize,
}

pub fn sum_folders(folders: &[StorageFolder]) -> FolderTotals {
    folders.iter().fold(
        FolderTotals {
            count: folders.len(),
            ..FolderTotals::default()
        },
        |acc, f| FolderTotals {
            capacity: acc.capacity.saturating_add(f.capacity),
            remaining: acc.remaining.saturating_add(f.capacity_remaining),
            ..acc
        },
    )
}

/// Retrieves host settings, storage and bandwidth and sets the host gauges.
pub async fn refresh(api: &dyn NodeApi, gauges: &HostGauges) {
    let host = match api.host_get().await {
        Ok(h) => h,
        Err(e) => {
            log_api_error("host", "host settings", &e);
            return;
        }
    };

    match api.host_storage_get().await {
        Ok(storage) => {
            let totals = sum_folders(&storage.folders);
            gauges.folder_total_storage.set(totals.capacity as f64);
            gauges.folder_remaining_storage.set(totals.remaining as f64);
            gauges.storage_folder_count.set(totals.count as f64);
        }
        Err(e) => log_api_error("host", "storage info", &e),
    }

    set_settings(&host, gauges);

    match api.host_bandwidth_get().await {
        Ok(bandwidth) => {
            gauges.upload_bytes.set(bandwidth.upload as f64);
            gauges.download_bytes.set(bandwidth.download as f64);
        }
        Err(e) => log_api_error("host", "bandwidth", &e),
    }

    debug!(
        contract_count = host.financial_metrics.contract_count,
        "host gauges updated"
    );
}

fn set_settings(host: &HostGet, gauges: &HostGauges) {
    let es = &host.external_settings;
    let is = &host.internal_settings;
    let fm = &host.financial_metrics;

    gauges.accepting_contracts.set(bool_to_f64(is.accepting_contracts));
    gauges.total_storage.set(es.total_storage as f64);
    gauges.remaining_storage.set(es.remaining_storage as f64);
    gauges.max_duration.set(max_duration_weeks(is.max_duration));
    gauges.max_download_batch_size.set(is.max_download_batch_size as f64);
    gauges.max_revise_batch_size.set(is.max_revise_batch_size as f64);
    gauges.window_size.set(window_size_hours(is.window_size));

    gauges.collateral.set(
        is.collateral
            .mul_u64(BLOCK_BYTES_PER_MONTH_TERABYTE)
            .to_display(),
    );
    gauges.collateral_budget.set(is.collateral_budget.to_display());
    gauges.max_collateral.set(is.max_collateral.to_display());
    gauges
        .locked_collateral
        .set(fm.locked_storage_collateral.to_display());

    gauges
        .ingress_potential
        .set(fm.potential_download_bandwidth_revenue.to_display());
    gauges
        .egress_potential
        .set(fm.potential_upload_bandwidth_revenue.to_display());
    gauges
        .storage_potential
        .set(fm.potential_storage_revenue.to_display());
    gauges.storage_revenue.set(fm.storage_revenue.to_display());
    gauges
        .download_revenue
        .set(fm.download_bandwidth_revenue.to_display());
    gauges
        .upload_revenue
        .set(fm.upload_bandwidth_revenue.to_display());
    gauges
        .contract_compensation
        .set(fm.contract_compensation.to_display());
    gauges.contract_count.set(fm.contract_count as f64);

    gauges.contract_price.set(es.contract_price.to_display());
    gauges.storage_price.set(
        es.storage_price
            .mul_u64(BLOCK_BYTES_PER_MONTH_TERABYTE)
            .to_display(),
    );
    gauges.download_price.set(
        es.download_bandwidth_price
            .mul_u64(BYTES_PER_TERABYTE)
            .to_display(),
    );
    gauges.upload_price.set(
        es.upload_bandwidth_price
            .mul_u64(BYTES_PER_TERABYTE)
            .to_display(),
    );
}
