//! Response bodies of the node API, limited to the fields the exporter reads.
//!
//! Every struct is `#[serde(default)]` so that older or newer node versions
//! that omit a field still decode.

use serde::Deserialize;

use super::currency::Currency;

/// `GET /consensus`
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct ConsensusGet {
    pub synced: bool,
    pub height: u64,
    pub difficulty: Currency,
}

/// `GET /wallet`
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct WalletGet {
    pub encrypted: bool,
    pub unlocked: bool,
    pub rescanning: bool,
    pub height: u64,
    #[serde(rename = "confirmedsiacoinbalance")]
    pub confirmed_siacoin_balance: Currency,
    #[serde(rename = "unconfirmedoutgoingsiacoins")]
    pub unconfirmed_outgoing_siacoins: Currency,
    #[serde(rename = "unconfirmedincomingsiacoins")]
    pub unconfirmed_incoming_siacoins: Currency,
    #[serde(rename = "siafundbalance")]
    pub siafund_balance: Option<Currency>,
    #[serde(rename = "siacoinclaimbalance")]
    pub siacoin_claim_balance: Option<Currency>,
}

/// `GET /wallet/addresses`
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct WalletAddressesGet {
    #[serde(deserialize_with = "null_as_empty")]
    pub addresses: Vec<String>,
}

/// `GET /host`
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct HostGet {
    #[serde(rename = "externalsettings")]
    pub external_settings: HostExternalSettings,
    #[serde(rename = "financialmetrics")]
    pub financial_metrics: HostFinancialMetrics,
    #[serde(rename = "internalsettings")]
    pub internal_settings: HostInternalSettings,
}

/// Settings the host announces to renters.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct HostExternalSettings {
    #[serde(rename = "acceptingcontracts")]
    pub accepting_contracts: bool,
    #[serde(rename = "totalstorage")]
    pub total_storage: u64,
    #[serde(rename = "remainingstorage")]
    pub remaining_storage: u64,
    #[serde(rename = "contractprice")]
    pub contract_price: Currency,
    #[serde(rename = "storageprice")]
    pub storage_price: Currency,
    #[serde(rename = "downloadbandwidthprice")]
    pub download_bandwidth_price: Currency,
    #[serde(rename = "uploadbandwidthprice")]
    pub upload_bandwidth_price: Currency,
}

/// Settings the operator configured on the host.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct HostInternalSettings {
    #[serde(rename = "acceptingcontracts")]
    pub accepting_contracts: bool,
    /// In blocks.
    #[serde(rename = "maxduration")]
    pub max_duration: u64,
    #[serde(rename = "maxdownloadbatchsize")]
    pub max_download_batch_size: u64,
    #[serde(rename = "maxrevisebatchsize")]
    pub max_revise_batch_size: u64,
    /// In blocks.
    #[serde(rename = "windowsize")]
    pub window_size: u64,
    /// Per byte per block.
    pub collateral: Currency,
    #[serde(rename = "collateralbudget")]
    pub collateral_budget: Currency,
    #[serde(rename = "maxcollateral")]
    pub max_collateral: Currency,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct HostFinancialMetrics {
    #[serde(rename = "contractcount")]
    pub contract_count: u64,
    #[serde(rename = "contractcompensation")]
    pub contract_compensation: Currency,
    #[serde(rename = "lockedstoragecollateral")]
    pub locked_storage_collateral: Currency,
    #[serde(rename = "storagerevenue")]
    pub storage_revenue: Currency,
    #[serde(rename = "downloadbandwidthrevenue")]
    pub download_bandwidth_revenue: Currency,
    #[serde(rename = "uploadbandwidthrevenue")]
    pub upload_bandwidth_revenue: Currency,
    #[serde(rename = "potentialstoragerevenue")]
    pub potential_storage_revenue: Currency,
    #[serde(rename = "potentialdownloadbandwidthrevenue")]
    pub potential_download_bandwidth_revenue: Currency,
    #[serde(rename = "potentialuploadbandwidthrevenue")]
    pub potential_upload_bandwidth_revenue: Currency,
}

/// `GET /host/storage`
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct HostStorageGet {
    #[serde(deserialize_with = "null_as_empty")]
    pub folders: Vec<StorageFolder>,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct StorageFolder {
    pub path: String,
    /// Bytes.
    pub capacity: u64,
    /// Bytes.
    #[serde(rename = "capacityremaining")]
    pub capacity_remaining: u64,
}

/// `GET /host/bandwidth`
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct HostBandwidthGet {
    /// Bytes sent to renters.
    pub download: u64,
    /// Bytes received from renters.
    pub upload: u64,
}

/// `GET /hostdb/all`
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct HostDbAllGet {
    #[serde(deserialize_with = "null_as_empty")]
    pub hosts: Vec<HostDbEntry>,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct HostDbEntry {
    #[serde(rename = "publickeystring")]
    pub public_key: String,
    #[serde(rename = "netaddress")]
    pub net_address: String,
    #[serde(rename = "acceptingcontracts")]
    pub accepting_contracts: bool,
    /// Oldest first. `null` on hosts that were never scanned.
    #[serde(rename = "scanhistory", deserialize_with = "null_as_empty")]
    pub scan_history: Vec<HostDbScan>,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct HostDbScan {
    pub timestamp: String,
    pub success: bool,
}

/// The node encodes empty lists as `null`.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
