//! Sources of image bytes. Fetchers never touch the filesystem.

mod ureq_fetcher;

pub use ureq_fetcher::UReqFetcher;

#[cfg(test)]
mod mock_fetcher;

#[cfg(test)]
pub use mock_fetcher::MockFetcher;

#[derive(Debug)]
pub enum Response {
    Ok { body: Vec<u8>, mime: Option<String> },
    InvalidBody,
    NotFound,
    NetworkError(String),
}

impl Response {
    pub fn ok(body: Vec<u8>, mime: Option<String>) -> Self {
        Self::Ok { body, mime }
    }

    pub fn invalid_body() -> Self {
        Self::InvalidBody
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }

    pub fn network_error(reason: impl Into<String>) -> Self {
        Self::NetworkError(reason.into())
    }
}

/// Retrieves the raw bytes behind a URL.
pub trait FileDownloader {
    fn fetch(&self, url: &str) -> Response;
}
