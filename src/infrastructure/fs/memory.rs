//! In-memory file fetcher

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::domain::entities::AssetFile;
use crate::domain::ports::{FetchError, FileFetcher};

/// Serves files from memory; anything not added is reported as not found
#[derive(Debug, Clone, Default)]
pub struct MemoryFetcher {
    files: HashMap<PathBuf, Vec<u8>>,
}

impl MemoryFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, name: impl AsRef<Path>, data: impl Into<Vec<u8>>) -> Self {
        self.insert(name, data);
        self
    }

    pub fn insert(&mut self, name: impl AsRef<Path>, data: impl Into<Vec<u8>>) {
        self.files.insert(name.as_ref().to_path_buf(), data.into());
    }
}

impl FileFetcher for MemoryFetcher {
    fn fetch_by_name(&self, name: &Path) -> Result<AssetFile, FetchError> {
        self.files
            .get(name)
            .map(|data| AssetFile::new(name, data.clone()))
            .ok_or_else(|| FetchError::NotFound(name.to_path_buf()))
    }

    /// In-memory files have no other location than their name
    fn locate_by_name(&self, name: &Path) -> Result<PathBuf, FetchError> {
        if self.files.contains_key(name) {
            Ok(name.to_path_buf())
        } else {
            Err(FetchError::NotFound(name.to_path_buf()))
        }
    }
}
