//! Puzzle URL extraction from Apache access logs.
//!
//! A puzzle URL is an image request whose path contains `/puzzle/` and ends in
//! `.jpg`. The server's hostname is not in the log itself; it is the second
//! `_`-separated part of the log file's name (`animal_code.google.com`).

pub mod order;

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

pub use order::{sort_key, sort_urls};

const PUZZLE_SEGMENT: &str = "/puzzle/";
const IMAGE_EXTENSION: &str = ".jpg";
const LOG_EXTENSION: &str = ".log";

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("log file name {path:?} has no `_`-separated hostname part")]
    MissingHostname { path: PathBuf },

    #[error("failed to read log file {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Absolute `http://` URL of a puzzle image.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PuzzleUrl(String);

impl PuzzleUrl {
    /// Builds the URL for `path` on `hostname`, or `None` if `path` is not a puzzle image.
    pub fn new(hostname: &str, path: &str) -> Option<Self> {
        if !path.contains(PUZZLE_SEGMENT) || !path.ends_with(IMAGE_EXTENSION) {
            return None;
        }

        Some(Self(format!("http://{}{}", hostname, path)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn sort_key(&self) -> &str {
        order::sort_key(&self.0)
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for PuzzleUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PuzzleUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn request_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"GET (/.*?\.jpg)").expect("request pattern is valid"))
}

/// Derives the hostname from the second `_`-separated part of the file name.
///
/// A trailing `.log` is dropped, so both `animal_code.google.com` and
/// `x_code.google.com.log` give `code.google.com`.
pub fn hostname_from_path(path: &Path) -> Result<String, ExtractError> {
    let missing = || ExtractError::MissingHostname {
        path: path.to_path_buf(),
    };

    let name = path.file_name().ok_or_else(missing)?.to_string_lossy();

    let segment = name.split('_').nth(1).ok_or_else(missing)?;
    let hostname = segment.strip_suffix(LOG_EXTENSION).unwrap_or(segment);

    if hostname.is_empty() {
        return Err(missing());
    }

    Ok(hostname.to_string())
}

/// Finds every puzzle image requested in `content`, deduplicated and in puzzle order.
pub fn extract_urls(hostname: &str, content: &str) -> Vec<PuzzleUrl> {
    let mut requested = 0usize;

    let urls = request_pattern()
        .captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .inspect(|_| requested += 1)
        .filter_map(|path| PuzzleUrl::new(hostname, path.as_str()))
        .collect::<Vec<_>>();

    let kept = urls.len();
    let urls = sort_urls(urls);

    tracing::debug!(
        requested,
        kept,
        unique = urls.len(),
        "scanned log for puzzle images"
    );

    urls
}

/// Reads the log at `path` and returns its puzzle URLs in puzzle order.
pub fn read_urls(path: &Path) -> Result<Vec<PuzzleUrl>, ExtractError> {
    let hostname = hostname_from_path(path)?;

    let bytes = fs::read(path).map_err(|source| ExtractError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let content = String::from_utf8_lossy(&bytes);

    let urls = extract_urls(&hostname, &content);

    tracing::info!(
        log = %path.display(),
        hostname = %hostname,
        count = urls.len(),
        "extracted puzzle urls"
    );

    Ok(urls)
}
