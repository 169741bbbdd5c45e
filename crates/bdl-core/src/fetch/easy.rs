//! Blocking HTTP GET with one curl `Easy` handle per URL.

use super::name::filename_from_url;
use super::sink::BodySink;
use super::{FetchError, Fetcher};
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::str;

/// Same hop limit a stock HTTP client applies when following redirects.
const MAX_REDIRECTS: u32 = 10;

/// Fetcher backed by libcurl with default client settings: no timeouts and no
/// custom headers.
#[derive(Debug, Clone, Copy)]
pub struct CurlFetcher {
    remove_partial_files: bool,
}

impl CurlFetcher {
    /// When `remove_partial_files` is set, a file that was created but not
    /// completely written is deleted before the error is returned.
    pub fn new(remove_partial_files: bool) -> Self {
        Self {
            remove_partial_files,
        }
    }
}

impl Default for CurlFetcher {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Fetcher for CurlFetcher {
    fn fetch(&self, url: &str, output_dir: &Path) -> Result<PathBuf, FetchError> {
        let name = filename_from_url(url)?;
        let mut sink = BodySink::new(output_dir.join(name));

        match get_into(url, &mut sink) {
            Ok(()) => Ok(sink.path().to_path_buf()),
            Err(e) => {
                if sink.created() {
                    tracing::debug!(
                        url,
                        bytes = sink.written(),
                        path = %sink.path().display(),
                        "transfer failed after file was created"
                    );
                    if self.remove_partial_files {
                        let path = sink.path().to_path_buf();
                        if let Err(rm) = sink.discard() {
                            tracing::warn!(path = %path.display(), "could not remove partial file: {}", rm);
                        }
                    }
                }
                Err(e)
            }
        }
    }
}

/// Latest status line seen. Redirect hops each send their own.
#[derive(Debug, Default)]
struct StatusLine {
    code: u32,
    reason: String,
}

impl StatusLine {
    /// Parses `HTTP/1.1 404 Not Found` (reason optional, as in HTTP/2).
    fn parse(line: &str) -> Option<Self> {
        let line = line.trim_end();
        let rest = line.strip_prefix("HTTP/")?;
        let mut parts = rest.splitn(3, ' ');
        let _version = parts.next()?;
        let code: u32 = parts.next()?.parse().ok()?;
        let text = parts.next().map(str::trim).unwrap_or("");
        let reason = if text.is_empty() {
            format!("HTTP {}", code)
        } else {
            format!("{} {}", code, text)
        };
        Some(Self { code, reason })
    }
}

/// Performs the GET and streams a 200 body into `sink`. Bodies of other
/// statuses are drained without touching the filesystem.
fn get_into(url: &str, sink: &mut BodySink) -> Result<(), FetchError> {
    let status = RefCell::new(StatusLine::default());
    let mut write_error: Option<std::io::Error> = None;

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.follow_location(true)?;
    easy.max_redirections(MAX_REDIRECTS)?;

    let performed = {
        let mut transfer = easy.transfer();
        transfer.header_function(|data| {
            if let Some(line) = str::from_utf8(data).ok().and_then(StatusLine::parse) {
                *status.borrow_mut() = line;
            }
            true
        })?;
        transfer.write_function(|data| {
            if status.borrow().code != 200 {
                return Ok(data.len());
            }
            match sink.write(data) {
                Ok(()) => Ok(data.len()),
                Err(e) => {
                    write_error = Some(e);
                    Ok(0) // abort transfer
                }
            }
        })?;
        transfer.perform()
    };

    if let Err(e) = performed {
        if let Some(source) = write_error.take() {
            return Err(FetchError::Io {
                path: sink.path().to_path_buf(),
                source,
            });
        }
        return Err(FetchError::Transport(e));
    }

    let code = easy.response_code()?;
    if code != 200 {
        let status = status.into_inner();
        let reason = if status.code == code {
            status.reason
        } else {
            format!("HTTP {}", code)
        };
        return Err(FetchError::Status { code, reason });
    }

    sink.finish().map_err(|source| FetchError::Io {
        path: sink.path().to_path_buf(),
        source,
    })
}
