//! Asset directory access
//!
//! `DirectoryFetcher` reads persisted assets relative to an asset directory;
//! `AssetWriter` persists generated files back into it.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::domain::entities::AssetFile;
use crate::domain::ports::{FetchError, FileFetcher};

/// Reads files relative to an asset directory
#[derive(Debug, Clone)]
pub struct DirectoryFetcher {
    root: PathBuf,
}

impl DirectoryFetcher {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl FileFetcher for DirectoryFetcher {
    fn fetch_by_name(&self, name: &Path) -> Result<AssetFile, FetchError> {
        let path = self.root.join(name);
        match fs::read(&path) {
            Ok(data) => Ok(AssetFile::new(name, data)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(FetchError::NotFound(name.to_path_buf()))
            }
            Err(source) => Err(FetchError::Io { path, source }),
        }
    }

    fn locate_by_name(&self, name: &Path) -> Result<PathBuf, FetchError> {
        let path = self.root.join(name);
        match fs::metadata(&path) {
            Ok(meta) if meta.is_file() => Ok(path),
            Ok(_) => Err(FetchError::NotFound(name.to_path_buf())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(FetchError::NotFound(name.to_path_buf()))
            }
            Err(source) => Err(FetchError::Io { path, source }),
        }
    }
}

/// Writes asset files into an asset directory
#[derive(Debug, Clone)]
pub struct AssetWriter {
    root: PathBuf,
}

impl AssetWriter {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Persist every file with content; returns the paths written.
    ///
    /// Reference-only files (no data, e.g. a cached image) are skipped.
    pub fn persist(&self, files: &[&AssetFile]) -> std::io::Result<Vec<PathBuf>> {
        let mut written = Vec::new();
        for file in files.iter().filter(|f| !f.is_empty()) {
            let path = self.root.join(file.filename());
            atomic_write(&path, file.data())?;
            written.push(path);
        }
        Ok(written)
    }
}

/// Write content to a file atomically (tempfile + rename in the same directory)
pub fn atomic_write(path: &Path, content: &[u8]) -> std::io::Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;

    let mut temp = NamedTempFile::new_in(parent)?;
    temp.write_all(content)?;
    temp.as_file().sync_all()?;
    temp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
