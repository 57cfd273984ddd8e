//! Gauge definitions, one group per node module.

use prometheus::{Encoder, Gauge, Opts, Registry, TextEncoder};
use std::sync::Arc;

fn gauge(registry: &Registry, name: &str, help: &str) -> Result<Gauge, prometheus::Error> {
    let g = Gauge::with_opts(Opts::new(name, help))?;
    registry.register(Box::new(g.clone()))?;
    Ok(g)
}

#[derive(Clone)]
pub struct ConsensusGauges {
    pub module_loaded: Gauge,
    pub synced: Gauge,
    pub height: Gauge,
    pub difficulty: Gauge,
}

impl ConsensusGauges {
    fn register(r: &Registry) -> Result<Self, prometheus::Error> {
        Ok(Self {
            module_loaded: gauge(
                r,
                "consensus_module_loaded",
                "Is the consensus module loaded. 0=not loaded.  1=loaded",
            )?,
            synced: gauge(r, "consensus_synced", "Is the node synced. 0=not synced.  1=synced")?,
            height: gauge(r, "consensus_height", "Current block height")?,
            difficulty: gauge(r, "consensus_difficulty", "Current mining difficulty")?,
        })
    }
}

#[derive(Clone)]
pub struct WalletGauges {
    pub module_loaded: Gauge,
    pub locked: Gauge,
    pub confirmed_siacoin_balance: Gauge,
    pub confirmed_siacoin_balance_hastings: Gauge,
    pub unconfirmed_incoming_siacoins: Gauge,
    pub unconfirmed_outgoing_siacoins: Gauge,
    pub siafund_balance: Gauge,
    pub siacoin_claim_balance: Gauge,
    pub address_count: Gauge,
}

impl WalletGauges {
    fn register(r: &Registry) -> Result<Self, prometheus::Error> {
        Ok(Self {
            module_loaded: gauge(
                r,
                "wallet_module_loaded",
                "Is the wallet module loaded. 0=not loaded.  1=loaded",
            )?,
            locked: gauge(r, "wallet_locked", "Is the wallet locked. 0=not locked.  1=locked")?,
            confirmed_siacoin_balance: gauge(
                r,
                "wallet_confirmed_siacoin_balance",
                "Wallet confirmed Siacoin balance (Siacoins)",
            )?,
            confirmed_siacoin_balance_hastings: gauge(
                r,
                "wallet_confirmed_siacoin_balance_hastings",
                "Wallet confirmed Siacoin balance (Hastings)",
            )?,
            unconfirmed_incoming_siacoins: gauge(
                r,
                "wallet_unconfirmed_incoming_siacoins",
                "Unconfirmed incoming Siacoins",
            )?,
            unconfirmed_outgoing_siacoins: gauge(
                r,
                "wallet_unconfirmed_outgoing_siacoins",
                "Unconfirmed outgoing Siacoins",
            )?,
            siafund_balance: gauge(r, "wallet_siafund_balance", "Wallet Siafund balance")?,
            siacoin_claim_balance: gauge(
                r,
                "wallet_siacoin_claim_balance",
                "Siacoins claimable through held Siafunds (Siacoins)",
            )?,
            address_count: gauge(r, "wallet_address_count", "Number of addresses tracked by the wallet")?,
        })
    }
}

#[derive(Clone)]
pub struct HostGauges {
    pub accepting_contracts: Gauge,
    pub max_duration: Gauge,
    pub max_download_batch_size: Gauge,
    pub max_revise_batch_size: Gauge,
    pub window_size: Gauge,
    pub collateral: Gauge,
    pub collateral_budget: Gauge,
    pub max_collateral: Gauge,
    pub locked_collateral: Gauge,
    pub contract_count: Gauge,
    pub total_storage: Gauge,
    pub remaining_storage: Gauge,
    pub folder_total_storage: Gauge,
    pub folder_remaining_storage: Gauge,
    pub storage_folder_count: Gauge,
    pub ingress_potential: Gauge,
    pub egress_potential: Gauge,
    pub storage_potential: Gauge,
    pub storage_revenue: Gauge,
    pub download_revenue: Gauge,
    pub upload_revenue: Gauge,
    pub contract_compensation: Gauge,
    pub contract_price: Gauge,
    pub storage_price: Gauge,
    pub download_price: Gauge,
    pub upload_price: Gauge,
    pub upload_bytes: Gauge,
    pub download_bytes: Gauge,
}

impl HostGauges {
    fn register(r: &Registry) -> Result<Self, prometheus::Error> {
        Ok(Self {
            accepting_contracts: gauge(
                r,
                "host_accepting_contracts",
                "Is the host accepting contracts 0=no, 1=yes",
            )?,
            max_duration: gauge(r, "host_max_duration", "max duration in weeks")?,
            max_download_batch_size: gauge(
                r,
                "host_max_download_batch_size",
                "Max Download Batch Size",
            )?,
            max_revise_batch_size: gauge(r, "host_max_revise_batch_size", "Max revise Batch Size")?,
            window_size: gauge(r, "host_window_size", "Window Size in hours")?,
            collateral: gauge(r, "host_collateral", "Host Collateral in Siacoins per TB per month")?,
            collateral_budget: gauge(
                r,
                "host_collateral_budget",
                "Host Collateral budget in Siacoins",
            )?,
            max_collateral: gauge(r, "host_max_collateral", "Max collateral per contract")?,
            locked_collateral: gauge(r, "host_locked_collateral", "Locked collateral")?,
            contract_count: gauge(r, "host_contract_count", "number of host contracts")?,
            total_storage: gauge(
                r,
                "host_total_storage",
                "total amount of storage available on the host in bytes",
            )?,
            remaining_storage: gauge(
                r,
                "host_remaining_storage",
                "amount of storage remaining on the host in bytes",
            )?,
            folder_total_storage: gauge(
                r,
                "host_folder_total_storage",
                "sum of storage folder capacities in bytes",
            )?,
            folder_remaining_storage: gauge(
                r,
                "host_folder_remaining_storage",
                "sum of remaining storage folder capacities in bytes",
            )?,
            storage_folder_count: gauge(r, "host_storage_folder_count", "number of storage folders")?,
            ingress_potential: gauge(r, "host_ingress_potential", "Ingress potential revenue")?,
            egress_potential: gauge(r, "host_egress_potential", "Egress potential revenue")?,
            storage_potential: gauge(r, "host_storage_potential", "Storage potential revenue")?,
            storage_revenue: gauge(r, "host_storage_revenue", "Earned storage revenue")?,
            download_revenue: gauge(r, "host_download_revenue", "Earned download bandwidth revenue")?,
            upload_revenue: gauge(r, "host_upload_revenue", "Earned upload bandwidth revenue")?,
            contract_compensation: gauge(
                r,
                "host_contract_compensation",
                "Earned contract compensation",
            )?,
            contract_price: gauge(r, "host_contract_price", "Contract price in Siacoins")?,
            storage_price: gauge(
                r,
                "host_storage_price",
                "Storage price in Siacoins per TB per month",
            )?,
            download_price: gauge(r, "host_download_price", "Download price in Siacoins per TB")?,
            upload_price: gauge(r, "host_upload_price", "Upload price in Siacoins per TB")?,
            upload_bytes: gauge(r, "host_upload_bytes", "Node Data Uploaded")?,
            download_bytes: gauge(r, "host_download_bytes", "Node Data Downloaded")?,
        })
    }
}

#[derive(Clone)]
pub struct HostDbGauges {
    pub total_hosts: Gauge,
    pub active_hosts: Gauge,
    pub inactive_hosts: Gauge,
    pub offline_hosts: Gauge,
}

impl HostDbGauges {
    fn register(r: &Registry) -> Result<Self, prometheus::Error> {
        Ok(Self {
            total_hosts: gauge(r, "hostdb_total_hosts", "Number of hosts known to the host database")?,
            active_hosts: gauge(
                r,
                "hostdb_active_hosts",
                "Online hosts accepting contracts",
            )?,
            inactive_hosts: gauge(
                r,
                "hostdb_inactive_hosts",
                "Online hosts not accepting contracts",
            )?,
            offline_hosts: gauge(
                r,
                "hostdb_offline_hosts",
                "Hosts never scanned or failing their most recent scan",
            )?,
        })
    }
}

/// Prometheus gauge registry for everything the exporter publishes.
#[derive(Clone)]
pub struct Metrics {
    registry: Arc<Registry>,
    pub consensus: ConsensusGauges,
    pub wallet: WalletGauges,
    pub host: HostGauges,
    pub hostdb: HostDbGauges,
}

impl Metrics {
    /// Creates a new registry and registers every gauge in it.
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();
        let consensus = ConsensusGauges::register(&registry)?;
        let wallet = WalletGauges::register(&registry)?;
        let host = HostGauges::register(&registry)?;
        let hostdb = HostDbGauges::register(&registry)?;

        Ok(Metrics {
            registry: Arc::new(registry),
            consensus,
            wallet,
            host,
            hostdb,
        })
    }

    /// Renders all metrics in Prometheus text format.
    pub fn render(&self) -> Result<String, prometheus::Error> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }
}
