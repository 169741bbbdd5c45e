//! Console output for batch events.

use bdl_core::batch::BatchEvent;
use std::io::Write;
use tokio::sync::mpsc;

/// Renders one event as the lines printed to stdout.
pub(super) fn render(event: &BatchEvent) -> Vec<String> {
    match event {
        BatchEvent::Started {
            url_count,
            batch_count,
        } => vec![format!("URLs = {}, batches = {}", url_count, batch_count)],
        BatchEvent::ItemSucceeded { url, .. } => {
            vec![format!("Download file {} successfully", url)]
        }
        BatchEvent::ItemFailed { url, cause, .. } => {
            vec![format!("Download file {} failed: {}", url, cause)]
        }
        BatchEvent::BatchCompleted {
            batch, failures, ..
        } => std::iter::once(format!("Download batch {} completed", batch))
            .chain(failures.iter().map(|f| f.to_string()))
            .collect(),
    }
}

/// Prints events to stdout until the orchestrator drops its sender.
pub(super) async fn print_events(event_rx: mpsc::UnboundedReceiver<BatchEvent>) {
    write_events(event_rx, std::io::stdout()).await;
}

/// Writes events to `out` until the channel closes. A closed or broken console
/// must not end the run, so write errors are logged once and the rest of the
/// events are still drained.
pub(super) async fn write_events<W: Write>(
    mut event_rx: mpsc::UnboundedReceiver<BatchEvent>,
    mut out: W,
) {
    let mut console_ok = true;
    while let Some(event) = event_rx.recv().await {
        if !console_ok {
            continue;
        }
        let written = render(&event)
            .iter()
            .try_for_each(|line| writeln!(out, "{}", line))
            .and_then(|()| out.flush());
        if let Err(e) = written {
            tracing::warn!("console output failed, progress lines dropped: {}", e);
            console_ok = false;
        }
    }
}
