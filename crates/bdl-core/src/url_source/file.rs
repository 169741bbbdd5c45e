//! File mode: one URL per line, kept verbatim.

use super::UrlSourceError;
use std::fs;
use std::path::Path;

/// Reads `path` and returns its lines in order. Blank lines are kept as entries;
/// a trailing newline does not add one, and `\r\n` endings lose the `\r`.
pub fn read_url_lines(path: &Path) -> Result<Vec<String>, UrlSourceError> {
    let text = fs::read_to_string(path).map_err(|source| UrlSourceError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(text.lines().map(str::to_string).collect())
}
