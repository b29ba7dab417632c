//! ImageDownloader port - content-addressed download cache
//!
//! Implementations must return the cached object for a URL that was
//! fetched before and serialize concurrent fetches of the same URL.

use std::path::PathBuf;

/// Download and cache errors
#[derive(Debug, thiserror::Error)]
pub enum DownloadError {
    #[error("request failed: {0}")]
    Request(String),

    #[error("server returned HTTP {status}")]
    Status { status: u16 },

    #[error("checksum mismatch: expected {expected}, got {actual}")]
    Checksum { expected: String, actual: String },

    #[error("cache I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Fetches a URL into the local cache and returns the cached path
pub trait ImageDownloader {
    fn fetch_by_url(&self, url: &str, sha256: Option<&str>) -> Result<PathBuf, DownloadError>;
}
