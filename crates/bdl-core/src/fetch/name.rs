//! Output filename from the URL's last path segment.

use super::FetchError;

/// Returns the last non-empty path segment of `url`, still percent-encoded,
/// so it can never contain a path separator.
pub fn filename_from_url(url: &str) -> Result<String, FetchError> {
    let parsed = url::Url::parse(url).map_err(|source| FetchError::InvalidUrl {
        url: url.to_string(),
        source,
    })?;
    let segment = parsed
        .path_segments()
        .and_then(|segments| segments.filter(|s| !s.is_empty()).last())
        .ok_or_else(|| FetchError::NoFileName(url.to_string()))?;
    if segment == "." || segment == ".." {
        return Err(FetchError::NoFileName(url.to_string()));
    }
    Ok(segment.to_string())
}
