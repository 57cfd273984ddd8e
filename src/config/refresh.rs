use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Controls what triggers a refresh cycle.
#[derive(Deserialize, Serialize, Debug, Clone, JsonSchema)]
pub struct RefreshConfig {
    /// Background refresh period. `0` disables the timer.
    #[serde(default = "default_interval_in_ms")]
    pub interval_in_ms: u64,
    /// Refresh before answering each `/metrics` request.
    #[serde(default)]
    pub on_scrape: bool,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            interval_in_ms: default_interval_in_ms(),
            on_scrape: false,
        }
    }
}

fn default_interval_in_ms() -> u64 {
    30_000
}
