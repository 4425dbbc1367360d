//! Ordering of puzzle pieces.
//!
//! Piece file names end in `-<word>-<word>.jpg`; the last word is the position
//! of the piece, compared as a plain string.

use std::sync::OnceLock;

use itertools::Itertools;
use regex::Regex;

use super::PuzzleUrl;

fn key_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"-(\w+)-(\w+)\.jpg").expect("sort key pattern is valid"))
}

/// Returns the second word of the `-word-word.jpg` tail, or the whole URL when there is none.
pub fn sort_key(url: &str) -> &str {
    key_pattern()
        .captures(url)
        .and_then(|caps| caps.get(2))
        .map_or(url, |key| key.as_str())
}

/// Drops duplicate URLs and sorts the rest by [`sort_key`], then by the full URL.
pub fn sort_urls<I>(urls: I) -> Vec<PuzzleUrl>
where
    I: IntoIterator<Item = PuzzleUrl>,
{
    urls.into_iter()
        .unique()
        .sorted_by(|a, b| a.sort_key().cmp(b.sort_key()).then_with(|| a.cmp(b)))
        .collect()
}
