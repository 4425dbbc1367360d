//! Finds the puzzle image URLs in an Apache access log and rebuilds the
//! picture as a local gallery.

pub mod config;
pub mod downloader;
pub mod logging;
pub mod puzzle;

pub use config::{FailurePolicy, FetchConfig, GalleryOptions};
pub use downloader::{
    render_index, Download, DownloadError, Downloader, FileDownloader, Gallery, GalleryError,
    Response, UReqFetcher,
};
pub use puzzle::{read_urls, ExtractError, PuzzleUrl};
