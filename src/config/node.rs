use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Where and how to reach the node's local API.
#[derive(Deserialize, Serialize, Debug, Clone, JsonSchema)]
pub struct NodeConfig {
    /// Base URL of the node API, e.g. `http://localhost:9980`.
    #[serde(default = "default_address")]
    pub address: String,
    /// API password, sent as basic auth with an empty user name.
    #[serde(default)]
    pub password: Option<String>,
    /// The node refuses requests that do not carry its expected user agent.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default = "default_timeout_in_ms")]
    pub timeout_in_ms: u64,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            address: default_address(),
            password: None,
            user_agent: default_user_agent(),
            timeout_in_ms: default_timeout_in_ms(),
        }
    }
}

fn default_address() -> String {
    "http://localhost:9980".to_string()
}

fn default_user_agent() -> String {
    "Sia-Agent".to_string()
}

fn default_timeout_in_ms() -> u64 {
    5000
}
