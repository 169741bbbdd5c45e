//! Per-URL download failure.

use std::path::PathBuf;
use thiserror::Error;

/// Why one URL could not be saved. Every variant is reported the same way
/// (URL + cause) and none of them is retried.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("no file name in URL path: {0}")]
    NoFileName(String),
    #[error(transparent)]
    Transport(#[from] curl::Error),
    /// Final response status was not 200. `reason` is the status text, e.g. `404 Not Found`.
    #[error("{reason}")]
    Status { code: u32, reason: String },
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("download task panicked: {0}")]
    Panicked(String),
}
