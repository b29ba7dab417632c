//! Content-addressed image cache
//!
//! Objects live at `<cache>/<sha256(url)>/<basename(url)>`. Fetches of the
//! same URL are serialized with an exclusive lock on `<cache>/<key>.lock`
//! and a download only becomes visible once it is complete.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use fs2::FileExt;
use sha2::{Digest, Sha256};
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::domain::ports::{DownloadError, ImageDownloader};

/// Default cache location under the user's cache directory
pub fn default_cache_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("agentgen")
        .join("image_cache")
}

/// Download cache for large images
#[derive(Debug, Clone)]
pub struct ImageCache {
    dir: PathBuf,
    timeout: Option<Duration>,
}

impl ImageCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            timeout: None,
        }
    }

    /// Bound each transfer; unbounded by default since images are large
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Cache key for a URL
    pub fn key(url: &str) -> String {
        format!("{:x}", Sha256::digest(url.as_bytes()))
    }

    /// Where the object for `url` lives once cached
    pub fn object_path(&self, url: &str) -> PathBuf {
        self.dir.join(Self::key(url)).join(basename(url))
    }

    fn io_error(path: &Path) -> impl FnOnce(io::Error) -> DownloadError + '_ {
        move |source| DownloadError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    fn transfer(&self, url: &str, dest: &mut HashingWriter<'_>) -> Result<(), DownloadError> {
        if let Some(path) = local_path(url) {
            let mut source = File::open(&path).map_err(Self::io_error(&path))?;
            io::copy(&mut source, dest).map_err(Self::io_error(&path))?;
            return Ok(());
        }

        let mut builder = reqwest::blocking::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| DownloadError::Request(e.to_string()))?;

        let mut response = client
            .get(url)
            .send()
            .map_err(|e| DownloadError::Request(e.to_string()))?;
        if !response.status().is_success() {
            return Err(DownloadError::Status {
                status: response.status().as_u16(),
            });
        }

        response
            .copy_to(dest)
            .map_err(|e| DownloadError::Request(e.to_string()))?;
        Ok(())
    }

    fn download(
        &self,
        url: &str,
        sha256: Option<&str>,
        object: &Path,
    ) -> Result<(), DownloadError> {
        let object_dir = object.parent().unwrap_or(&self.dir);
        fs::create_dir_all(object_dir).map_err(Self::io_error(object_dir))?;

        let mut temp = NamedTempFile::new_in(object_dir).map_err(Self::io_error(object_dir))?;
        let mut writer = HashingWriter::new(temp.as_file_mut());
        self.transfer(url, &mut writer)?;
        let actual = writer.finish();

        if let Some(expected) = sha256 {
            if !expected.eq_ignore_ascii_case(&actual) {
                return Err(DownloadError::Checksum {
                    expected: expected.to_string(),
                    actual,
                });
            }
        }

        temp.as_file().sync_all().map_err(Self::io_error(object))?;
        temp.persist(object)
            .map_err(|e| DownloadError::Io {
                path: object.to_path_buf(),
                source: e.error,
            })?;
        Ok(())
    }
}

impl ImageDownloader for ImageCache {
    fn fetch_by_url(&self, url: &str, sha256: Option<&str>) -> Result<PathBuf, DownloadError> {
        fs::create_dir_all(&self.dir).map_err(Self::io_error(&self.dir))?;

        let lock_path = self.dir.join(format!("{}.lock", Self::key(url)));
        let lock_file = File::create(&lock_path).map_err(Self::io_error(&lock_path))?;
        lock_file
            .lock_exclusive()
            .map_err(Self::io_error(&lock_path))?;

        let object = self.object_path(url);
        let result = if object.is_file() {
            debug!("Found cached image {}", object.display());
            Ok(())
        } else {
            info!("Downloading {} to {}", url, object.display());
            self.download(url, sha256, &object)
        };

        // lock released when `lock_file` drops
        result.map(|()| object)
    }
}

/// Tees written bytes into a SHA-256 digest
struct HashingWriter<'a> {
    inner: &'a mut File,
    hasher: Sha256,
}

impl<'a> HashingWriter<'a> {
    fn new(inner: &'a mut File) -> Self {
        Self {
            inner,
            hasher: Sha256::new(),
        }
    }

    fn finish(self) -> String {
        format!("{:x}", self.hasher.finalize())
    }
}

impl Write for HashingWriter<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let written = self.inner.write(buf)?;
        self.hasher.update(&buf[..written]);
        Ok(written)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

fn basename(url: &str) -> String {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    match path.rsplit('/').next() {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => "image".to_string(),
    }
}

fn local_path(url: &str) -> Option<PathBuf> {
    if let Some(path) = url.strip_prefix("file://") {
        return Some(PathBuf::from(path));
    }
    if url.contains("://") {
        return None;
    }
    Some(PathBuf::from(url))
}
