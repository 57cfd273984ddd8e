//! In-memory [`NodeApi`] for collector tests.

use std::sync::Mutex;

use crate::client::*;

/// Canned answer for one endpoint.
#[derive(Clone, Default)]
pub enum Reply<T> {
    Ok(T),
    #[default]
    Unavailable,
    Broken,
}

impl<T: Clone> Reply<T> {
    fn answer(&self, resource: &str) -> Result<T, ApiError> {
        match self {
            Reply::Ok(v) => Ok(v.clone()),
            Reply::Unavailable => Err(ApiError::ModuleUnavailable {
                resource: resource.to_string(),
            }),
            Reply::Broken => Err(ApiError::Status {
                resource: resource.to_string(),
                status: 500,
                message: "internal error".to_string(),
            }),
        }
    }
}

#[derive(Default)]
pub struct FakeNode {
    pub consensus: Reply<ConsensusGet>,
    pub wallet: Reply<WalletGet>,
    pub wallet_addresses: Reply<WalletAddressesGet>,
    pub host: Reply<HostGet>,
    pub host_storage: Reply<HostStorageGet>,
    pub host_bandwidth: Reply<HostBandwidthGet>,
    pub hostdb_all: Reply<HostDbAllGet>,
    pub calls: Mutex<Vec<&'static str>>,
}

impl FakeNode {
    /// Resources requested so far, in order.
    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, resource: &'static str) -> &'static str {
        self.calls.lock().unwrap().push(resource);
        resource
    }
}

#[async_trait::async_trait]
impl NodeApi for FakeNode {
    async fn consensus_get(&self) -> Result<ConsensusGet, ApiError> {
        self.consensus.answer(self.record("/consensus"))
    }

    async fn wallet_get(&self) -> Result<WalletGet, ApiError> {
        self.wallet.answer(self.record("/wallet"))
    }

    async fn wallet_addresses_get(&self) -> Result<WalletAddressesGet, ApiError> {
        self.wallet_addresses.answer(self.record("/wallet/addresses"))
    }

    async fn host_get(&self) -> Result<HostGet, ApiError> {
        self.host.answer(self.record("/host"))
    }

    async fn host_storage_get(&self) -> Result<HostStorageGet, ApiError> {
        self.host_storage.answer(self.record("/host/storage"))
    }

    async fn host_bandwidth_get(&self) -> Result<HostBandwidthGet, ApiError> {
        self.host_bandwidth.answer(self.record("/host/bandwidth"))
    }

    async fn hostdb_all_get(&self) -> Result<HostDbAllGet, ApiError> {
        self.hostdb_all.answer(self.record("/hostdb/all"))
    }
}
