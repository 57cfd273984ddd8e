//! Client for the node's local JSON API.
//!
//! [`NodeApi`] is the seam the collector depends on; [`HttpNodeApi`] is the
//! reqwest implementation used in production.

pub mod currency;
pub mod error;
pub mod http_client;
pub mod types;

pub use currency::{Currency, HASTINGS_PER_SIACOIN};
pub use error::{ApiError, ClientBuildError};
pub use http_client::HttpNodeApi;
pub use types::*;

/// Read-only queries against a node. Each call either returns a snapshot of
/// one module or fails with an [`ApiError`].
#[async_trait::async_trait]
pub trait NodeApi: Send + Sync {
    async fn consensus_get(&self) -> Result<ConsensusGet, ApiError>;
    async fn wallet_get(&self) -> Result<WalletGet, ApiError>;
    async fn wallet_addresses_get(&self) -> Result<WalletAddressesGet, ApiError>;
    async fn host_get(&self) -> Result<HostGet, ApiError>;
    async fn host_storage_get(&self) -> Result<HostStorageGet, ApiError>;
    async fn host_bandwidth_get(&self) -> Result<HostBandwidthGet, ApiError>;
    async fn hostdb_all_get(&self) -> Result<HostDbAllGet, ApiError>;
}
