use tracing::debug;

use super::{bool_to_f64, log_api_error};
use crate::client::NodeApi;
use crate::metrics::WalletGauges;

/// Retrieves wallet status and sets the wallet gauges.
pub async fn refresh(api: &dyn NodeApi, gauges: &WalletGauges) {
    let status = match api.wallet_get().await {
        Ok(s) => s,
        Err(e) => {
            if e.is_module_unavailable() {
                gauges.module_loaded.set(0.0);
            }
            log_api_error("wallet", "wallet status", &e);
            return;
        }
    };

    gauges.module_loaded.set(1.0);
    // Written exactly once per cycle.
    gauges.locked.set(bool_to_f64(!status.unlocked));

    let confirmed = &status.confirmed_siacoin_balance;
    gauges.confirmed_siacoin_balance_hastings.set(confirmed.to_f64());
    gauges.confirmed_siacoin_balance.set(confirmed.to_display());
    gauges
        .unconfirmed_incoming_siacoins
        .set(status.unconfirmed_incoming_siacoins.to_display());
    gauges
        .unconfirmed_outgoing_siacoins
        .set(status.unconfirmed_outgoing_siacoins.to_display());

    // Siafunds are whole units, not hastings.
    if let Some(siafunds) = &status.siafund_balance {
        gauges.siafund_balance.set(siafunds.to_f64());
    }
    if let Some(claim) = &status.siacoin_claim_balance {
        gauges.siacoin_claim_balance.set(claim.to_display());
    }

    match api.wallet_addresses_get().await {
        Ok(a) => gauges.address_count.set(a.addresses.len() as f64),
        Err(e) => log_api_error("wallet", "wallet addresses", &e),
    }

    debug!(unlocked = status.unlocked, "wallet gauges updated");
}
