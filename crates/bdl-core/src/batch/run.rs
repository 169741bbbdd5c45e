//! Sequential batches, concurrent items.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;
use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::fetch::{FetchError, Fetcher};

use super::aggregate::collect_failures;
use super::event::{BatchEvent, FetchFailure, RunSummary};
use super::plan::plan_batches;

/// Optional sink for progress events. Send errors (receiver gone) are ignored.
pub type EventSender = mpsc::UnboundedSender<BatchEvent>;

fn emit(events: Option<&EventSender>, event: BatchEvent) {
    if let Some(tx) = events {
        let _ = tx.send(event);
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string())
}

/// Downloads `urls` into `output_dir`, `batch_size` at a time.
///
/// Each batch starts one blocking task per URL and waits for all of them
/// before the next batch begins. Failures are sent to a per-batch collector
/// and reported with `BatchEvent::BatchCompleted`; they never stop the run.
pub async fn run_batches<F: Fetcher>(
    urls: &[String],
    output_dir: &Path,
    batch_size: usize,
    fetcher: Arc<F>,
    events: Option<EventSender>,
) -> RunSummary {
    let batches = plan_batches(urls.len(), batch_size);
    let mut summary = RunSummary {
        url_count: urls.len(),
        batch_count: batches.len(),
        ..RunSummary::default()
    };
    tracing::debug!(
        urls = summary.url_count,
        batches = summary.batch_count,
        batch_size,
        "planned batches"
    );
    emit(
        events.as_ref(),
        BatchEvent::Started {
            url_count: summary.url_count,
            batch_count: summary.batch_count,
        },
    );

    for (index, range) in batches.into_iter().enumerate() {
        let batch = &urls[range];
        let (failure_tx, failure_rx) = mpsc::unbounded_channel::<FetchFailure>();
        let collector = tokio::spawn(collect_failures(failure_rx));
        // Blocking threads do not inherit the caller's span; each task enters this one.
        let batch_span = tracing::info_span!("batch", batch = index, size = batch.len());

        let mut join_set = JoinSet::new();
        for url in batch {
            let url = url.clone();
            let fetcher = Arc::clone(&fetcher);
            let output_dir = output_dir.to_path_buf();
            let failure_tx = failure_tx.clone();
            let events = events.clone();
            let span = batch_span.clone();
            join_set.spawn_blocking(move || {
                let _entered = span.enter();
                let result = panic::catch_unwind(AssertUnwindSafe(|| fetcher.fetch(&url, &output_dir)))
                    .unwrap_or_else(|payload| Err(FetchError::Panicked(panic_message(payload))));
                match result {
                    Ok(path) => {
                        tracing::debug!(url = %url, path = %path.display(), "downloaded");
                        emit(
                            events.as_ref(),
                            BatchEvent::ItemSucceeded {
                                batch: index,
                                url,
                                path,
                            },
                        );
                        true
                    }
                    Err(error) => {
                        tracing::warn!(url = %url, "download failed: {}", error);
                        emit(
                            events.as_ref(),
                            BatchEvent::ItemFailed {
                                batch: index,
                                url: url.clone(),
                                cause: error.to_string(),
                            },
                        );
                        let _ = failure_tx.send(FetchFailure { url, error });
                        false
                    }
                }
            });
        }

        while let Some(joined) = join_set.join_next().await {
            match joined {
                Ok(true) => summary.succeeded += 1,
                Ok(false) => {}
                Err(e) => {
                    tracing::error!(batch = index, "download task join: {}", e);
                    summary.failed += 1;
                }
            }
        }

        // Every task clone is gone; dropping ours closes the channel.
        drop(failure_tx);
        let failures = match collector.await {
            Ok(failures) => failures,
            Err(e) => {
                tracing::error!(batch = index, "failure collector join: {}", e);
                Vec::new()
            }
        };
        summary.failed += failures.len();

        batch_span.in_scope(|| tracing::info!(failed = failures.len(), "batch completed"));
        emit(
            events.as_ref(),
            BatchEvent::BatchCompleted {
                batch: index,
                size: batch.len(),
                failures,
            },
        );
    }

    tracing::info!(
        urls = summary.url_count,
        succeeded = summary.succeeded,
        failed = summary.failed,
        "run finished"
    );
    summary
}
