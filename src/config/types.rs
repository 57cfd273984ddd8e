use figment::providers::{Env, Format, Yaml};
use figment::Figment;
use schemars::{schema_for, JsonSchema};
use serde::{Deserialize, Serialize};

use super::logging::LoggingConfig;
use super::node::NodeConfig;
use super::refresh::RefreshConfig;

/// Environment variable that overrides the config file location.
pub const CONFIG_PATH_ENV: &str = "SIA_EXPORTER_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "./config.yaml";
const ENV_PREFIX: &str = "SIA_EXPORTER_";

/// A top-level enum for versioned configurations.
#[derive(Deserialize, Serialize, JsonSchema)]
#[serde(tag = "version")]
pub enum Config {
    #[serde(rename = "1.0.0")]
    ConfigV1(ConfigV1),
}

/// Main config for v1.0.0.
#[derive(Deserialize, Serialize, Debug, Clone, JsonSchema)]
pub struct ConfigV1 {
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    #[serde(default)]
    pub node: NodeConfig,
    #[serde(default)]
    pub refresh: RefreshConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_bind_address() -> String {
    "0.0.0.0:9983".to_string()
}

/// Builds the figment: YAML file first, then `SIA_EXPORTER_*` variables on top.
/// Nested keys use `__`, e.g. `SIA_EXPORTER_NODE__PASSWORD`.
pub fn figment(path: &str) -> Figment {
    Figment::new()
        .merge(Yaml::file(path))
        .merge(Env::prefixed(ENV_PREFIX).ignore(&["config"]).split("__"))
}

/// Extracts a [`ConfigV1`] from any figment.
pub fn extract(figment: Figment) -> Result<ConfigV1, figment::Error> {
    match figment.extract::<Config>()? {
        Config::ConfigV1(c) => Ok(c),
    }
}

/// Load config from `$SIA_EXPORTER_CONFIG` or "config.yaml" in the current directory.
pub fn load_config() -> ConfigV1 {
    let path = std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    match extract(figment(&path)) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error loading configuration from {}: {}", path, e);
            std::process::exit(1);
        }
    }
}

/// Print the JSON schema for the configuration to stdout.
pub fn print_schema() {
    let schema = schema_for!(Config);
    match serde_json::to_string_pretty(&schema) {
        Ok(s) => println!("{}", s),
        Err(e) => eprintln!("Could not serialize schema: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_yaml(yaml: &str) -> Result<ConfigV1, figment::Error> {
        extract(Figment::new().merge(Yaml::string(yaml)))
    }

    #[test]
    fn minimal_config_uses_defaults() {
        let config = from_yaml("version: \"1.0.0\"\n").expect("minimal config should load");
        assert_eq!(config.bind_address, "0.0.0.0:9983");
        assert_eq!(config.node.address, "http://localhost:9980");
        assert_eq!(config.node.user_agent, "Sia-Agent");
        assert_eq!(config.node.password, None);
        assert_eq!(config.refresh.interval_in_ms, 30_000);
        assert!(!config.refresh.on_scrape);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn full_config_is_parsed() {
        let yaml = r#"
version: "1.0.0"
bind_address: 127.0.0.1:9999
node:
  address: http://10.0.0.5:9980
  password: hunter2
  timeout_in_ms: 1500
refresh:
  interval_in_ms: 0
  on_scrape: true
logging:
  level: debug
  format: json
"#;
        let config = from_yaml(yaml).expect("config should load");
        assert_eq!(config.bind_address, "127.0.0.1:9999");
        assert_eq!(config.node.address, "http://10.0.0.5:9980");
        assert_eq!(config.node.password.as_deref(), Some("hunter2"));
        assert_eq!(config.node.timeout_in_ms, 1500);
        assert_eq!(config.refresh.interval_in_ms, 0);
        assert!(config.refresh.on_scrape);
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn unknown_version_is_rejected() {
        assert!(from_yaml("version: \"9.9.9\"\n").is_err());
    }
}
