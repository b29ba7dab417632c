//! AssetFile entity - a file produced by an asset
//!
//! Files are replaced wholesale by the next `generate`/`load`, never patched.

use std::path::{Path, PathBuf};

/// A generated or reloaded artifact file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetFile {
    /// Path relative to the asset directory, or an absolute path for
    /// artifacts that live outside it (e.g. a cached image)
    filename: PathBuf,
    /// File content; empty for artifacts that are referenced by path only
    data: Vec<u8>,
}

impl AssetFile {
    /// Create a file with content
    pub fn new(filename: impl Into<PathBuf>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            filename: filename.into(),
            data: data.into(),
        }
    }

    /// Create a file that only references an object on disk
    pub fn reference(filename: impl Into<PathBuf>) -> Self {
        Self {
            filename: filename.into(),
            data: Vec::new(),
        }
    }

    pub fn filename(&self) -> &Path {
        &self.filename
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
