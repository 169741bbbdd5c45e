//! Single-item fetcher: one URL to one file.
//!
//! The output file is `output_dir/<last path segment>`. It is only created
//! once the response is known to be a 200, so failed requests never leave an
//! empty file behind. Two URLs with the same last segment write the same path;
//! the one that finishes last wins.

mod easy;
mod error;
mod name;
mod sink;

pub use easy::CurlFetcher;
pub use error::FetchError;
pub use name::filename_from_url;

use std::path::{Path, PathBuf};

/// Downloads one URL into `output_dir`. Implementations are called from
/// blocking worker threads, one call per URL.
pub trait Fetcher: Send + Sync + 'static {
    /// Returns the path of the written file.
    fn fetch(&self, url: &str, output_dir: &Path) -> Result<PathBuf, FetchError>;
}
