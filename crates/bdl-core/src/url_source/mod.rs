//! URL list construction.
//!
//! Two mutually exclusive modes: expand a numeric template over an inclusive
//! range, or read one URL per line from a file. Both preserve order and keep
//! duplicates.

mod file;
mod pattern;
mod template;

pub use file::read_url_lines;
pub use pattern::{NumberPattern, Verb};
pub use template::{check_bounds, UrlTemplate};

use std::path::PathBuf;
use thiserror::Error;

/// Problems with a URL template or its range. All are configuration errors.
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("template {0:?} has no `{{...}}` placeholder")]
    MissingPlaceholder(String),
    #[error("template {0:?} closes its placeholder before opening it")]
    MisorderedPlaceholder(String),
    #[error("template {0:?} has more than one placeholder")]
    MultiplePlaceholders(String),
    #[error("pattern {0:?} has no number directive (e.g. %d)")]
    NoDirective(String),
    #[error("pattern {0:?} has more than one number directive")]
    MultipleDirectives(String),
    #[error("pattern {0:?} is malformed")]
    InvalidPattern(String),
    #[error("unsupported pattern verb %{0}")]
    UnknownVerb(char),
    #[error("--{0} is required with a URL template")]
    MissingBound(&'static str),
    #[error("--{name} must not be negative (got {value})")]
    NegativeBound { name: &'static str, value: i64 },
}

#[derive(Debug, Error)]
pub enum UrlSourceError {
    #[error(transparent)]
    Template(#[from] TemplateError),
    #[error("read URL list {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Where the URL list comes from. Template input is validated on construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlSource {
    Template {
        template: UrlTemplate,
        from: u64,
        to: u64,
    },
    File(PathBuf),
}

impl UrlSource {
    /// Template mode from raw command-line values.
    pub fn template(template: &str, from: Option<i64>, to: Option<i64>) -> Result<Self, TemplateError> {
        let (from, to) = check_bounds(from, to)?;
        let template = UrlTemplate::parse(template)?;
        Ok(UrlSource::Template { template, from, to })
    }

    /// Produces the ordered URL list.
    pub fn load(&self) -> Result<Vec<String>, UrlSourceError> {
        match self {
            UrlSource::Template { template, from, to } => Ok(template.expand(*from, *to)),
            UrlSource::File(path) => read_url_lines(path),
        }
    }
}
