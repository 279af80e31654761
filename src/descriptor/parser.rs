// src/descriptor/parser.rs

//! Source list extraction from SquareLine exports

use super::{DescriptorError, SourceList};
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

/// `SET(SOURCES` followed by whitespace, then everything up to the first `)`
static SOURCES_BLOCK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)SET\(SOURCES\s+(.*?)\)").unwrap());

/// Extract the ordered source list from export descriptor text
///
/// The block may span several lines. Blank lines and `#` comments are
/// skipped; every other line is kept verbatim after trimming. Nested
/// parentheses are not supported since the exporter never writes them.
///
/// `origin` only names the descriptor in the error.
pub fn parse_sources(content: &str, origin: &Path) -> Result<SourceList, DescriptorError> {
    let caps = SOURCES_BLOCK_RE
        .captures(content)
        .ok_or_else(|| DescriptorError::Malformed {
            path: origin.to_path_buf(),
        })?;

    let block = caps.get(1).map_or("", |m| m.as_str());

    let entries = block
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect();

    Ok(SourceList::new(entries))
}

/// Read and parse an export descriptor from disk
pub fn parse_sources_file(path: &Path) -> Result<SourceList, DescriptorError> {
    let content = fs::read_to_string(path).map_err(|source| DescriptorError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_sources(&content, path)
}
