//! Per-batch failure collector fed by the download tasks.

use super::event::FetchFailure;
use tokio::sync::mpsc;

/// Receives failures until every sender is dropped, then returns them in arrival order.
/// Spawn one per batch; the orchestrator drops its own sender after the join.
pub(super) async fn collect_failures(
    mut failure_rx: mpsc::UnboundedReceiver<FetchFailure>,
) -> Vec<FetchFailure> {
    let mut failures = Vec::new();
    while let Some(failure) = failure_rx.recv().await {
        failures.push(failure);
    }
    failures
}
