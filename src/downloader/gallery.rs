//! Gallery directory: numbered images plus an `index.html` showing them in order.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::{Download, DownloadError, Downloader, FileDownloader};
use crate::config::FailurePolicy;

pub const INDEX_FILE: &str = "index.html";

#[derive(Debug, Error)]
pub enum GalleryError {
    #[error("failed to create gallery directory {path:?}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("image {index} could not be downloaded")]
    Fetch {
        index: usize,
        #[source]
        source: DownloadError,
    },

    #[error("failed to write {path:?}")]
    WriteIndex {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug)]
pub struct GalleryImage {
    /// Position of the URL in the ordered input.
    pub index: usize,
    pub name: String,
    pub download: Download,
}

#[derive(Debug)]
pub struct Gallery {
    pub dir: PathBuf,
    pub index_file: PathBuf,
    pub images: Vec<GalleryImage>,
    /// Images left out under [`FailurePolicy::Skip`], by position.
    pub failures: Vec<(usize, DownloadError)>,
}

/// Local file name of the image at `index`. No extension is added.
pub fn image_name(index: usize) -> String {
    format!("img{}", index)
}

/// Renders the gallery page, one `<img>` tag per name, in order.
pub fn render_index<I, S>(names: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let tags = names
        .into_iter()
        .map(|name| format!("<img src=\"{}\">", name.as_ref()))
        .collect::<String>();

    format!("<html><body>{}</body></html>", tags)
}

impl<T> Downloader<T>
where
    T: FileDownloader,
{
    /// Downloads `urls` one at a time into `dest_dir` as `img0`, `img1`, ... and
    /// writes `index.html` referencing them in the same order.
    ///
    /// `dest_dir` is created if needed; anything already in it is left alone
    /// apart from the files written here.
    pub fn download_images<U>(&self, urls: &[U], dest_dir: &Path) -> Result<Gallery, GalleryError>
    where
        U: AsRef<str>,
    {
        fs::create_dir_all(dest_dir).map_err(|source| GalleryError::CreateDir {
            path: dest_dir.to_path_buf(),
            source,
        })?;

        let policy = self.options().policy;

        let mut images = Vec::with_capacity(urls.len());
        let mut failures = Vec::new();

        for (index, url) in urls.iter().enumerate() {
            let url = url.as_ref();
            let name = image_name(index);

            tracing::info!(index, url, "retrieving image");

            match self.download_to(url, &dest_dir.join(&name)) {
                Ok(download) => images.push(GalleryImage {
                    index,
                    name,
                    download,
                }),

                Err(source) if policy == FailurePolicy::Skip => {
                    tracing::warn!(index, url, error = %source, "skipping image");
                    failures.push((index, source));
                }

                Err(source) => {
                    tracing::error!(index, url, error = %source, "aborting gallery");
                    return Err(GalleryError::Fetch { index, source });
                }
            }
        }

        let index_file = dest_dir.join(INDEX_FILE);
        let page = render_index(images.iter().map(|image| image.name.as_str()));

        fs::write(&index_file, page).map_err(|source| GalleryError::WriteIndex {
            path: index_file.clone(),
            source,
        })?;

        tracing::info!(
            dir = %dest_dir.display(),
            images = images.len(),
            skipped = failures.len(),
            "gallery written"
        );

        Ok(Gallery {
            dir: dest_dir.to_path_buf(),
            index_file,
            images,
            failures,
        })
    }
}
