use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, info};

use super::error::{ApiError, ClientBuildError, MODULE_NOT_READY};
use super::types::*;
use super::NodeApi;
use crate::config::NodeConfig;

/// Error body the node sends alongside non-2xx responses.
#[derive(Deserialize)]
struct NodeErrorBody {
    message: String,
}

/// [`NodeApi`] over HTTP.
pub struct HttpNodeApi {
    client: reqwest::Client,
    base_url: String,
    password: Option<String>,
}

impl HttpNodeApi {
    pub fn new(config: &NodeConfig) -> Result<Self, ClientBuildError> {
        info!(
            "Creating node API client for '{}' (timeout {} ms)",
            config.address, config.timeout_in_ms
        );
        let agent = HeaderValue::from_str(&config.user_agent)
            .map_err(|e| ClientBuildError::InvalidUserAgent(config.user_agent.clone(), e))?;
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, agent);
        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_millis(config.timeout_in_ms))
            .build()?;

        Ok(Self {
            client,
            base_url: config.address.trim_end_matches('/').to_string(),
            password: config.password.clone(),
        })
    }

    /// Performs a GET on `resource` and decodes the JSON body.
    async fn get<T: DeserializeOwned>(&self, resource: &str) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, resource);
        debug!("Sending node API request to: {}", url);

        let mut request = self.client.get(&url);
        if let Some(password) = &self.password {
            request = request.basic_auth("", Some(password));
        }

        let response = request.send().await.map_err(|source| ApiError::Request {
            resource: resource.to_string(),
            source,
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|source| ApiError::Request {
            resource: resource.to_string(),
            source,
        })?;

        if status.is_success() {
            return serde_json::from_str(&body).map_err(|source| ApiError::Decode {
                resource: resource.to_string(),
                source,
            });
        }

        Err(classify_failure(resource, status, &body))
    }
}

/// Maps a non-2xx answer to an [`ApiError`]. Unknown routes and modules that
/// are still starting are both reported as unavailable.
fn classify_failure(resource: &str, status: StatusCode, body: &str) -> ApiError {
    let message = serde_json::from_str::<NodeErrorBody>(body)
        .map(|b| b.message)
        .unwrap_or_else(|_| body.trim().to_string());

    if status == StatusCode::NOT_FOUND || message.contains(MODULE_NOT_READY) {
        ApiError::ModuleUnavailable {
            resource: resource.to_string(),
        }
    } else {
        ApiError::Status {
            resource: resource.to_string(),
            status: status.as_u16(),
            message,
        }
    }
}

#[async_trait::async_trait]
impl NodeApi for HttpNodeApi {
    async fn consensus_get(&self) -> Result<ConsensusGet, ApiError> {
        self.get("/consensus").await
    }

    async fn wallet_get(&self) -> Result<WalletGet, ApiError> {
        self.get("/wallet").await
    }

    async fn wallet_addresses_get(&self) -> Result<WalletAddressesGet, ApiError> {
        self.get("/wallet/addresses").await
    }

    async fn host_get(&self) -> Result<HostGet, ApiError> {
        self.get("/host").await
    }

    async fn host_storage_get(&self) -> Result<HostStorageGet, ApiError> {
        self.get("/host/storage").await
    }

    async fn host_bandwidth_get(&self) -> Result<HostBandwidthGet, ApiError> {
        self.get("/host/bandwidth").await
    }

    async fn hostdb_all_get(&self) -> Result<HostDbAllGet, ApiError> {
        self.get("/hostdb/all").await
    }
}
