use reqwest::header::InvalidHeaderValue;
use thiserror::Error;

/// Message the node returns while a module is still initialising.
pub const MODULE_NOT_READY: &str = "Module not loaded or still starting up";

/// Failure of a single node API call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The endpoint is not served: the module is absent or not started yet.
    #[error("API call not recognized: {resource}")]
    ModuleUnavailable { resource: String },

    #[error("request to {resource} failed: {source}")]
    Request {
        resource: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{resource} returned {status}: {message}")]
    Status {
        resource: String,
        status: u16,
        message: String,
    },

    #[error("could not decode response from {resource}: {source}")]
    Decode {
        resource: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    pub fn is_module_unavailable(&self) -> bool {
        matches!(self, ApiError::ModuleUnavailable { .. })
    }
}

/// Failure to construct the HTTP client from configuration.
#[derive(Debug, Error)]
pub enum ClientBuildError {
    #[error("invalid node.user_agent '{0}': {1}")]
    InvalidUserAgent(String, #[source] InvalidHeaderValue),

    #[error("could not build HTTP client: {0}")]
    Http(#[from] reqwest::Error),
}
