//! FileFetcher port - access to previously persisted asset files

use std::path::{Path, PathBuf};

use crate::domain::entities::AssetFile;

/// File fetch errors; `NotFound` is distinguishable from everything else
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FetchError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchError::NotFound(_))
    }
}

/// Fetches persisted files by their asset-relative name
pub trait FileFetcher {
    fn fetch_by_name(&self, name: &Path) -> Result<AssetFile, FetchError>;

    /// Where `name` lives, without reading it; for artifacts too large to hold in memory
    fn locate_by_name(&self, name: &Path) -> Result<PathBuf, FetchError>;
}
