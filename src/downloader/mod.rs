mod fetcher;
mod gallery;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use image::ImageFormat;
use thiserror::Error;
use url::Url;

use crate::config::{FetchConfig, GalleryOptions};

pub use fetcher::{FileDownloader, Response, UReqFetcher};
pub use gallery::{image_name, render_index, Gallery, GalleryError, GalleryImage, INDEX_FILE};

pub struct Downloader<T: FileDownloader> {
    fetcher: T,
    options: GalleryOptions,
}

#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("invalid url {url:?}")]
    InvalidUrl { url: String },

    #[error("{url} not found")]
    NotFound { url: String },

    #[error("network error fetching {url}: {reason}")]
    Network { url: String, reason: String },

    #[error("could not read response body from {url}")]
    InvalidBody { url: String },

    #[error("failed to write {path:?}")]
    Storage {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl DownloadError {
    /// URL the failed download was for, if the failure happened before writing.
    pub fn url(&self) -> Option<&str> {
        match self {
            DownloadError::InvalidUrl { url }
            | DownloadError::NotFound { url }
            | DownloadError::Network { url, .. }
            | DownloadError::InvalidBody { url } => Some(url.as_str()),
            DownloadError::Storage { .. } => None,
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct Download {
    pub source: String,
    pub file: PathBuf,
    pub size: usize,
    pub mime: Option<String>,
    pub format: Option<ImageFormat>,
}

impl<T> Downloader<T>
where
    T: FileDownloader,
{
    pub fn with_fetcher(fetcher: T) -> Self {
        Downloader {
            fetcher,
            options: GalleryOptions::default(),
        }
    }

    pub fn with_options(mut self, options: GalleryOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> GalleryOptions {
        self.options
    }

    /// Fetches `url` and writes the body verbatim to `file`.
    pub fn download_to(&self, url: &str, file: &Path) -> Result<Download, DownloadError> {
        let url = Url::parse(url).map_err(|_| DownloadError::InvalidUrl {
            url: url.to_string(),
        })?;

        let url = url.as_str();

        let response = self.fetcher.fetch(url);

        match response {
            Response::NetworkError(reason) => Err(DownloadError::Network {
                url: url.to_string(),
                reason,
            }),
            Response::NotFound => Err(DownloadError::NotFound {
                url: url.to_string(),
            }),
            Response::InvalidBody => Err(DownloadError::InvalidBody {
                url: url.to_string(),
            }),

            Response::Ok { body, mime } => {
                let format = image::guess_format(&body).ok();

                if format.is_none() {
                    tracing::warn!(
                        url,
                        mime = mime.as_deref().unwrap_or("-"),
                        "response does not look like an image"
                    );
                }

                fs::write(file, &body).map_err(|source| DownloadError::Storage {
                    path: file.to_path_buf(),
                    source,
                })?;

                Ok(Download {
                    source: url.to_string(),
                    file: file.to_path_buf(),
                    size: body.len(),
                    mime,
                    format,
                })
            }
        }
    }
}

impl Downloader<UReqFetcher> {
    pub fn new() -> Self {
        Self::with_config(&FetchConfig::default())
    }

    pub fn with_config(config: &FetchConfig) -> Self {
        Downloader::with_fetcher(UReqFetcher::with_config(config))
    }
}

impl Default for Downloader<UReqFetcher> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
use fetcher::MockFetcher;
