//! Runtime knobs for fetching and gallery building.
//!
//! There is no config file: the command line only carries the log file and the
//! destination directory, so everything else has a built-in default here.

use std::time::Duration;

/// HTTP client settings for [`UReqFetcher`](crate::downloader::UReqFetcher).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    /// Time allowed to establish the TCP/TLS connection.
    pub timeout_connect: Duration,
    /// Time allowed between reads of the response.
    pub timeout_read: Duration,
    /// Value of the `User-Agent` request header.
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_connect: Duration::from_secs(10),
            timeout_read: Duration::from_secs(30),
            user_agent: format!("logpuzzle/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// What to do when one image of the gallery cannot be fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Stop at the first failure; remaining images and `index.html` are not written.
    #[default]
    Abort,
    /// Log the failure, leave its slot out of `index.html` and keep going.
    Skip,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GalleryOptions {
    pub policy: FailurePolicy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FetchConfig::default();

        assert_eq!(config.timeout_connect, Duration::from_secs(10));
        assert_eq!(config.timeout_read, Duration::from_secs(30));
        assert!(config.user_agent.starts_with("logpuzzle/"));

        assert_eq!(GalleryOptions::default().policy, FailurePolicy::Abort);
    }
}
