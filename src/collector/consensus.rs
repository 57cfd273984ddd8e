use tracing::debug;

use super::{bool_to_f64, log_api_error};
use crate::client::NodeApi;
use crate::metrics::ConsensusGauges;

/// Retrieves consensus state and sets the consensus gauges.
pub async fn refresh(api: &dyn NodeApi, gauges: &ConsensusGauges) {
    let consensus = match api.consensus_get().await {
        Ok(c) => c,
        Err(e) => {
            if e.is_module_unavailable() {
                gauges.module_loaded.set(0.0);
            }
            log_api_error("consensus", "consensus state", &e);
            return;
        }
    };

    gauges.module_loaded.set(1.0);
    gauges.synced.set(bool_to_f64(consensus.synced));
    gauges.height.set(consensus.height as f64);
    gauges.difficulty.set(consensus.difficulty.to_f64());
    debug!(
        height = consensus.height,
        synced = consensus.synced,
        "consensus gauges updated"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{ConsensusGet, Currency};
    use crate::collector::fake::{FakeNode, Reply};
    use crate::metrics::Metrics;

    fn synced_node() -> FakeNode {
        FakeNode {
            consensus: Reply::Ok(ConsensusGet {
                synced: true,
                height: 500_000,
                difficulty: "123450000000".parse().unwrap(),
            }),
            ..FakeNode::default()
        }
    }

    #[tokio::test]
    async fn synced_node_sets_all_gauges() {
        let metrics = Metrics::new().unwrap();
        refresh(&synced_node(), &metrics.consensus).await;

        let g = &metrics.consensus;
        assert_eq!(g.module_loaded.get(), 1.0);
        assert_eq!(g.synced.get(), 1.0);
        assert_eq!(g.height.get(), 500_000.0);
        assert_eq!(g.difficulty.get(), 123_450_000_000.0);
    }

    #[tokio::test]
    async fn unsynced_node_reports_zero() {
        let node = FakeNode {
            consensus: Reply::Ok(ConsensusGet {
                synced: false,
                height: 10,
                difficulty: Currency::from(1),
            }),
            ..FakeNode::default()
        };
        let metrics = Metrics::new().unwrap();
        metrics.consensus.synced.set(1.0);
        refresh(&node, &metrics.consensus).await;
        assert_eq!(metrics.consensus.synced.get(), 0.0);
    }

    #[tokio::test]
    async fn unavailable_module_only_clears_loaded_flag() {
        let metrics = Metrics::new().unwrap();
        refresh(&synced_node(), &metrics.consensus).await;

        refresh(&FakeNode::default(), &metrics.consensus).await;

        let g = &metrics.consensus;
        assert_eq!(g.module_loaded.get(), 0.0);
        assert_eq!(g.synced.get(), 1.0);
        assert_eq!(g.height.get(), 500_000.0);
        assert_eq!(g.difficulty.get(), 123_450_000_000.0);
    }

    #[tokio::test]
    async fn fetch_failure_leaves_everything_stale() {
        let metrics = Metrics::new().unwrap();
        refresh(&synced_node(), &metrics.consensus).await;

        let broken = FakeNode {
            consensus: Reply::Broken,
            ..FakeNode::default()
        };
        refresh(&broken, &metrics.consensus).await;

        assert_eq!(metrics.consensus.module_loaded.get(), 1.0);
        assert_eq!(metrics.consensus.height.get(), 500_000.0);
    }
}
