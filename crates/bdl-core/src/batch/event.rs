//! Progress events and outcome types reported by the orchestrator.

use crate::fetch::FetchError;
use std::fmt;
use std::path::PathBuf;

/// A URL that could not be downloaded, and why.
#[derive(Debug)]
pub struct FetchFailure {
    pub url: String,
    pub error: FetchError,
}

impl fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.url, self.error)
    }
}

/// Sent on the optional event channel as the run progresses.
#[derive(Debug)]
pub enum BatchEvent {
    /// Once, before the first batch.
    Started { url_count: usize, batch_count: usize },
    /// As soon as one item has been written.
    ItemSucceeded {
        batch: usize,
        url: String,
        path: PathBuf,
    },
    /// As soon as one item has failed. The full error is replayed in `BatchCompleted`.
    ItemFailed {
        batch: usize,
        url: String,
        cause: String,
    },
    /// After every task of the batch has finished.
    BatchCompleted {
        batch: usize,
        size: usize,
        failures: Vec<FetchFailure>,
    },
}

/// Totals for a whole run. Never turned into an exit status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub url_count: usize,
    pub batch_count: usize,
    pub succeeded: usize,
    pub failed: usize,
}
