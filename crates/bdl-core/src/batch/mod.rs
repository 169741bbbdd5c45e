//! Batch download orchestrator.
//!
//! Splits the URL list into contiguous batches of at most `batch_size` items,
//! downloads each batch with one task per URL, and only starts the next batch
//! once every task of the current one has finished. Batch size is the only
//! concurrency limit. Per-URL failures are collected through a channel owned
//! by a per-batch collector task and never abort the run.

mod aggregate;
mod event;
mod plan;
mod run;

pub use event::{BatchEvent, FetchFailure, RunSummary};
pub use plan::{batch_count, plan_batches};
pub use run::{run_batches, EventSender};
