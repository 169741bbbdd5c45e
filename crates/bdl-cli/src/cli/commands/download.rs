//! Download every URL of the configured source, batch by batch.

use anyhow::{Context, Result};
use bdl_core::batch;
use bdl_core::config::RunConfig;
use bdl_core::fetch::CurlFetcher;
use bdl_core::logging::run_span;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::Instrument;

use super::printer::print_events;
use super::prompt::wait_for_enter;

pub async fn run_download(run: &RunConfig) -> Result<()> {
    // Configuration-stage failures end the run before any request is sent.
    let urls = run.source.load().context("build URL list")?;
    std::fs::create_dir_all(&run.output_dir)
        .with_context(|| format!("create output directory {}", run.output_dir.display()))?;
    let span = run_span(urls.len(), run.batch_size, &run.output_dir);
    span.in_scope(|| tracing::info!("starting download"));

    let (event_tx, event_rx) = mpsc::unbounded_channel();
    let printer = tokio::spawn(print_events(event_rx));

    let fetcher = Arc::new(CurlFetcher::new(run.remove_partial_files));
    let summary = batch::run_batches(&urls, &run.output_dir, run.batch_size, fetcher, Some(event_tx))
        .instrument(span.clone())
        .await;

    // The sender is dropped inside run_batches, so the printer drains and exits.
    if let Err(e) = printer.await {
        tracing::warn!("progress printer: {}", e);
    }
    span.in_scope(|| {
        tracing::info!(
            succeeded = summary.succeeded,
            failed = summary.failed,
            "download finished"
        )
    });
    drop(span);

    if run.prompt_on_exit {
        wait_for_enter();
    }
    Ok(())
}
