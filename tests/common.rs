#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request};
use figment::{
    Figment,
    providers::{Format, Yaml},
};
use mockito::{Mock, ServerGuard};
use sia_node_exporter::client::HttpNodeApi;
use sia_node_exporter::config::{self, ConfigV1};
use sia_node_exporter::startup::build_state;
use sia_node_exporter::state::AppState;

pub const CONSENSUS_BODY: &str = r#"{"synced": true, "height": 500000, "currentblock": "00000000", "difficulty": "12345"}"#;

pub const WALLET_BODY: &str = r#"{
    "encrypted": true, "unlocked": false, "rescanning": false, "height": 500000,
    "confirmedsiacoinbalance": "1000000000000000000000000",
    "unconfirmedoutgoingsiacoins": "0", "unconfirmedincomingsiacoins": "0",
    "siafundbalance": "0", "siacoinclaimbalance": "0"
}"#;

pub const ADDRESSES_BODY: &str = r#"{"addresses": ["addr1", "addr2"]}"#;

pub const HOST_BODY: &str = r#"{
    "externalsettings": {"acceptingcontracts": true, "totalstorage": 4000000000000, "remainingstorage": 1000000000000,
                         "contractprice": "100000000000000000000000000", "storageprice": "0",
                         "downloadbandwidthprice": "0", "uploadbandwidthprice": "0"},
    "internalsettings": {"acceptingcontracts": true, "maxduration": 25920, "maxdownloadbatchsize": 17825792,
                         "maxrevisebatchsize": 17825792, "windowsize": 144, "collateral": "0",
                         "collateralbudget": "0", "maxcollateral": "0"},
    "financialmetrics": {"contractcount": 42}
}"#;

pub const STORAGE_BODY: &str = r#"{"folders": [
    {"path": "/a", "capacity": 100, "capacityremaining": 10},
    {"path": "/b", "capacity": 200, "capacityremaining": 20},
    {"path": "/c", "capacity": 300, "capacityremaining": 30}
]}"#;

pub const HOSTDB_BODY: &str = r#"{"hosts": [
    {"publickeystring": "ed25519:01", "acceptingcontracts": true,
     "scanhistory": [{"timestamp": "2024-01-01T00:00:00Z", "success": true}]},
    {"publickeystring": "ed25519:02", "acceptingcontracts": false,
     "scanhistory": [{"timestamp": "2024-01-01T00:00:00Z", "success": true}]},
    {"publickeystring": "ed25519:03", "acceptingcontracts": true, "scanhistory": null}
]}"#;

pub fn test_config(node_url: &str) -> ConfigV1 {
    let yaml = format!(
        r#"
version: "1.0.0"
bind_address: 127.0.0.1:0
node:
  address: {node_url}
  timeout_in_ms: 2000
refresh:
  interval_in_ms: 0
  on_scrape: true
logging:
  level: debug
  format: console
"#
    );
    config::extract(Figment::new().merge(Yaml::string(&yaml))).expect("Failed to parse test config YAML")
}

/// Registers a JSON answer for `path` on the mock node.
pub async fn mock_json(server: &mut ServerGuard, path: &str, body: &str) -> Mock {
    server
        .mock("GET", path)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await
}

/// Registers a "not recognized" answer for `path`, as the node gives for unloaded modules.
pub async fn mock_missing(server: &mut ServerGuard, path: &str) -> Mock {
    server
        .mock("GET", path)
        .with_status(404)
        .with_body(r#"{"message": "404 - Refer to API.md"}"#)
        .create_async()
        .await
}

pub fn build_app_state(config: ConfigV1) -> AppState {
    let api = HttpNodeApi::new(&config.node).expect("client should build");
    build_state(Arc::new(config), Arc::new(api)).expect("state should build")
}

pub fn get(path: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(path)
        .body(Body::empty())
        .expect("failed to build request")
}

/// Reads `name`'s value out of Prometheus text output.
pub fn gauge_value(text: &str, name: &str) -> Option<f64> {
    text.lines()
        .filter(|l| !l.starts_with('#'))
        .find_map(|l| {
            let (metric, value) = l.split_once(' ')?;
            (metric == name).then(|| value.parse().ok()).flatten()
        })
}
