//! Tracing setup for download runs.
//!
//! Records go to `~/.local/state/bdl/bdl.log`; console progress lines are
//! printed separately on stdout. Downloads of one batch run on separate
//! blocking threads, so each record carries its thread id and the
//! `download` / `batch` spans it was emitted under.

use anyhow::Result;
use std::fs;
use std::path::Path;
use std::sync::Mutex;
use tracing::Span;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::EnvFilter;

/// Directives used when `RUST_LOG` is unset. `bdl` is the binary's target,
/// `bdl_core` the library's.
pub const DEFAULT_FILTER: &str = "info,bdl_core=debug,bdl=debug";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Span wrapping one whole run; the orchestrator's per-batch spans nest under it.
pub fn run_span(url_count: usize, batch_size: usize, output_dir: &Path) -> Span {
    tracing::info_span!(
        "download",
        urls = url_count,
        batch_size,
        output_dir = %output_dir.display()
    )
}

/// Log to the XDG state file. Errors (e.g. unwritable state dir) are returned
/// so the caller can fall back to [`init_logging_stderr`].
pub fn init_logging() -> Result<()> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("bdl")?;
    let log_file_path = xdg_dirs.place_state_file("bdl.log")?;
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file_path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_thread_ids(true)
        .with_span_events(FmtSpan::CLOSE)
        .try_init()
        .map_err(|e| anyhow::anyhow!("install log subscriber: {}", e))?;

    tracing::info!("bdl logging initialized at {}", log_file_path.display());
    Ok(())
}

/// Log to stderr only. Used when the state dir is not usable.
pub fn init_logging_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_thread_ids(true)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_targets_both_crates() {
        let directives: Vec<&str> = DEFAULT_FILTER.split(',').collect();
        assert_eq!(directives[0], "info");
        assert!(directives.contains(&"bdl=debug"));
        assert!(directives.contains(&format!("{}=debug", env!("CARGO_CRATE_NAME")).as_str()));
        assert!(!directives.iter().any(|d| d.starts_with("bdl_cli")));
    }

    #[test]
    fn default_filter_parses() {
        assert!(DEFAULT_FILTER.parse::<EnvFilter>().is_ok());
    }
}
