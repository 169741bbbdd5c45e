use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

use crate::url_source::UrlSource;

/// Default number of concurrent downloads per batch.
pub const DEFAULT_BATCH_SIZE: usize = 4;

/// Defaults loaded from `~/.config/bdl/config.toml`. Command-line flags override them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BdlConfig {
    /// Number of concurrent downloads per batch.
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
    /// Delete a file whose transfer failed after it was created.
    #[serde(default = "default_true")]
    pub remove_partial_files: bool,
    /// Wait for Enter before exiting.
    #[serde(default = "default_true")]
    pub prompt_on_exit: bool,
}

fn default_batch_size() -> usize {
    DEFAULT_BATCH_SIZE
}

fn default_true() -> bool {
    true
}

impl Default for BdlConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            remove_partial_files: true,
            prompt_on_exit: true,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("bdl")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<BdlConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = BdlConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: BdlConfig = toml::from_str(&data)?;
    Ok(cfg)
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("batch size must be at least 1")]
    ZeroBatchSize,
    #[error("output directory must not be empty")]
    EmptyOutputDir,
}

/// Everything one run needs, resolved from flags and config file before any download.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub source: UrlSource,
    pub output_dir: PathBuf,
    pub batch_size: usize,
    pub remove_partial_files: bool,
    pub prompt_on_exit: bool,
}

impl RunConfig {
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.batch_size == 0 {
            return Err(ConfigError::ZeroBatchSize);
        }
        if self.output_dir.as_os_str().is_empty() {
            return Err(ConfigError::EmptyOutputDir);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_config(batch_size: usize, output_dir: &str) -> RunConfig {
        RunConfig {
            source: UrlSource::File(PathBuf::from("urls.txt")),
            output_dir: PathBuf::from(output_dir),
            batch_size,
            remove_partial_files: true,
            prompt_on_exit: false,
        }
    }

    #[test]
    fn default_config_values() {
        let cfg = BdlConfig::default();
        assert_eq!(cfg.batch_size, 4);
        assert!(cfg.remove_partial_files);
        assert!(cfg.prompt_on_exit);
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = BdlConfig {
            batch_size: 9,
            remove_partial_files: false,
            prompt_on_exit: false,
        };
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: BdlConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.batch_size, 9);
        assert!(!parsed.remove_partial_files);
        assert!(!parsed.prompt_on_exit);
    }

    #[test]
    fn config_toml_missing_keys_use_defaults() {
        let cfg: BdlConfig = toml::from_str("batch_size = 16").unwrap();
        assert_eq!(cfg.batch_size, 16);
        assert!(cfg.remove_partial_files);
        assert!(cfg.prompt_on_exit);

        let cfg: BdlConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.batch_size, DEFAULT_BATCH_SIZE);
    }

    #[test]
    fn validate_rejects_zero_batch_and_empty_dir() {
        assert_eq!(run_config(4, "out").validate(), Ok(()));
        assert_eq!(
            run_config(0, "out").validate(),
            Err(ConfigError::ZeroBatchSize)
        );
        assert_eq!(
            run_config(4, "").validate(),
            Err(ConfigError::EmptyOutputDir)
        );
    }
}
