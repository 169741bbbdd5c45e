//! CLI command handlers.

mod download;
mod printer;
mod prompt;

pub use download::run_download;
