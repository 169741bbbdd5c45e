//! CLI for the BDL batch downloader.

mod commands;

use anyhow::{Context, Result};
use bdl_core::config::{self, BdlConfig, RunConfig};
use bdl_core::url_source::UrlSource;
use clap::{ArgGroup, Parser};
use std::path::PathBuf;

use commands::run_download;

/// Top-level CLI for the BDL batch downloader.
#[derive(Debug, Parser)]
#[command(name = "bdl")]
#[command(about = "BDL: download a list of URLs in fixed-size concurrent batches", long_about = None)]
#[command(group(ArgGroup::new("source").required(true).args(["url", "file"])))]
pub struct Cli {
    /// URL template with one `{pattern}` placeholder, e.g. `https://host/img_{%03d}.jpg`.
    #[arg(short, long, value_name = "TEMPLATE")]
    pub url: Option<String>,

    /// File with one URL per line.
    #[arg(short, long, value_name = "PATH", conflicts_with_all = ["from", "to"])]
    pub file: Option<PathBuf>,

    /// Directory the downloaded files are written to (created if missing).
    #[arg(short = 'o', long = "outputDir", visible_alias = "output-dir", value_name = "DIR")]
    pub output_dir: PathBuf,

    /// Number of concurrent downloads per batch (default from config, 4).
    #[arg(short = 'b', long = "batchSize", visible_alias = "batch-size", value_name = "N")]
    pub batch_size: Option<usize>,

    /// First index substituted into the template (inclusive).
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub from: Option<i64>,

    /// Last index substituted into the template (inclusive).
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub to: Option<i64>,

    /// Exit without waiting for Enter.
    #[arg(long)]
    pub no_prompt: bool,

    /// Leave partially written files on disk when a transfer fails.
    #[arg(long)]
    pub keep_partial: bool,
}

impl Cli {
    /// Resolves flags over `defaults` into one validated run configuration.
    pub fn into_run_config(self, defaults: &BdlConfig) -> Result<RunConfig> {
        let source = match (self.url, self.file) {
            (Some(template), None) => UrlSource::template(&template, self.from, self.to)
                .context("invalid --url template")?,
            (None, Some(path)) => UrlSource::File(path),
            _ => anyhow::bail!("exactly one of --url or --file is required"),
        };
        let run = RunConfig {
            source,
            output_dir: self.output_dir,
            batch_size: self.batch_size.unwrap_or(defaults.batch_size),
            remove_partial_files: defaults.remove_partial_files && !self.keep_partial,
            prompt_on_exit: defaults.prompt_on_exit && !self.no_prompt,
        };
        run.validate()?;
        Ok(run)
    }

    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init().unwrap_or_else(|e| {
            tracing::warn!("using default config: {:#}", e);
            BdlConfig::default()
        });
        tracing::debug!("loaded config: {:?}", cfg);

        let run = cli.into_run_config(&cfg)?;
        run_download(&run).await
    }
}

#[cfg(test)]
mod tests;
