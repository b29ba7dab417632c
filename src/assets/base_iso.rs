//! BaseIso asset - obtains the bootable disk image
//!
//! Two ordered strategies:
//! 1. extract the ISO from the release payload (only when a release image is
//!    declared), retried by the extractor itself
//! 2. download the ISO named by the OS image stream metadata into the cache
//!
//! If both fail the extraction error is the one reported.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use super::{ClusterManifests, RegistriesConf};
use crate::domain::entities::AssetFile;
use crate::domain::ports::{
    Asset, AssetId, ExtractError, ExtractRequest, FileFetcher, ImageDownloader, ImageExtractor,
    IsoSource, Parents, StreamMetadataFetcher, WritableAsset,
};
use crate::error::{AssetError, AssetResult};

/// Architecture used when none is configured
pub const DEFAULT_ARCHITECTURE: &str = "x86_64";

const METAL_ARTIFACT: &str = "metal";
const ISO_FORMAT: &str = "iso";

/// Outcome of the release payload strategy
#[derive(Debug)]
pub enum Extraction {
    /// Image extracted to this path
    Extracted(PathBuf),
    /// No release image declared; strategy skipped
    NotConfigured,
    /// Extraction binary missing; already reported by the extractor
    ToolUnavailable(ExtractError),
    /// Extraction ran and failed
    Failed(ExtractError),
}

/// Downloads the ISO listed in the OS image stream metadata
pub struct StreamIsoDownloader {
    fetcher: Box<dyn StreamMetadataFetcher>,
    downloader: Box<dyn ImageDownloader>,
    architecture: String,
}

impl StreamIsoDownloader {
    pub fn new(
        fetcher: Box<dyn StreamMetadataFetcher>,
        downloader: Box<dyn ImageDownloader>,
        architecture: impl Into<String>,
    ) -> Self {
        Self {
            fetcher,
            downloader,
            architecture: architecture.into(),
        }
    }

    fn lookup_failed(&self, what: &str) -> AssetError {
        AssetError::MetadataLookup {
            what: what.to_string(),
            arch: self.architecture.clone(),
        }
    }
}

impl IsoSource for StreamIsoDownloader {
    fn describe(&self) -> &'static str {
        "OS image stream"
    }

    fn fetch_iso(&self) -> AssetResult<PathBuf> {
        let stream = self.fetcher.fetch_build()?;
        let arch = stream
            .get_architecture(&self.architecture)
            .map_err(|_| self.lookup_failed("architecture"))?;
        let metal = arch
            .artifacts
            .get(METAL_ARTIFACT)
            .ok_or_else(|| self.lookup_failed("metal artifact"))?;
        let disk = metal
            .formats
            .get(ISO_FORMAT)
            .and_then(|format| format.disk.as_ref())
            .ok_or_else(|| self.lookup_failed("ISO format"))?;

        self.downloader
            .fetch_by_url(&disk.location, disk.sha256.as_deref())
            .map_err(|source| AssetError::Download {
                url: disk.location.clone(),
                source,
            })
    }
}

/// The base ISO image asset
pub struct BaseIso {
    file: Option<AssetFile>,
    extractor: Box<dyn ImageExtractor>,
    iso_source: Box<dyn IsoSource>,
    architecture: String,
    cached_filename: Option<PathBuf>,
}

impl BaseIso {
    pub fn new(extractor: Box<dyn ImageExtractor>, iso_source: Box<dyn IsoSource>) -> Self {
        Self {
            file: None,
            extractor,
            iso_source,
            architecture: DEFAULT_ARCHITECTURE.to_string(),
            cached_filename: None,
        }
    }

    pub fn with_architecture(mut self, architecture: impl Into<String>) -> Self {
        self.architecture = architecture.into();
        self
    }

    /// Name `load` looks for; without one `load` never finds a previous image
    pub fn with_cached_filename(mut self, filename: impl Into<PathBuf>) -> Self {
        self.cached_filename = Some(filename.into());
        self
    }

    pub fn file(&self) -> Option<&AssetFile> {
        self.file.as_ref()
    }

    /// Run the release payload strategy
    pub fn extract(&self, parents: &Parents) -> Extraction {
        let Some(manifests) = parents.get::<ClusterManifests>() else {
            return Extraction::NotConfigured;
        };
        let Some(release_image) = manifests.release_image() else {
            return Extraction::NotConfigured;
        };

        let request = ExtractRequest {
            release_image,
            pull_secret: manifests.pull_secret(),
            architecture: &self.architecture,
            mirror_config: parents
                .get::<RegistriesConf>()
                .and_then(RegistriesConf::mirror_config),
        };

        info!("Extracting base ISO from release payload");
        match self.extractor.extract_base_iso(&request) {
            Ok(path) if path.is_file() => Extraction::Extracted(path),
            Ok(path) => Extraction::Failed(ExtractError::Failed {
                command: "release payload extraction".to_string(),
                message: format!("no image found at {}", path.display()),
            }),
            Err(err) if err.is_tool_unavailable() => Extraction::ToolUnavailable(err),
            Err(err) => Extraction::Failed(err),
        }
    }

    fn download(&self) -> AssetResult<PathBuf> {
        let path = self.iso_source.fetch_iso()?;
        ensure_image_exists(&path, self.iso_source.describe())?;
        Ok(path)
    }
}

fn ensure_image_exists(path: &Path, strategy: &str) -> AssetResult<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(AssetError::MissingImage {
            path: path.to_path_buf(),
            strategy: strategy.to_string(),
        })
    }
}

impl Asset for BaseIso {
    fn name(&self) -> &'static str {
        "BaseIso Image"
    }

    fn dependencies(&self) -> Vec<AssetId> {
        vec![
            AssetId::of::<ClusterManifests>(),
            AssetId::of::<RegistriesConf>(),
        ]
    }

    fn generate(&mut self, parents: &Parents) -> AssetResult<()> {
        self.file = None;

        let extraction_error = match self.extract(parents) {
            Extraction::Extracted(path) => {
                debug!("Extracted base ISO image {} from release payload", path.display());
                self.file = Some(AssetFile::reference(path));
                return Ok(());
            }
            Extraction::NotConfigured => None,
            Extraction::ToolUnavailable(err) => Some(err),
            Extraction::Failed(err) => {
                warn!("Failed to extract base ISO from release payload - check registry configuration");
                Some(err)
            }
        };

        info!("Downloading base ISO");
        match self.download() {
            Ok(path) => {
                debug!("Using base ISO image {}", path.display());
                self.file = Some(AssetFile::reference(path));
                Ok(())
            }
            Err(download_err) => {
                debug!("Failed to download base ISO: {}", download_err);
                match extraction_error {
                    Some(source) => Err(AssetError::Extraction { source }),
                    None => Err(download_err),
                }
            }
        }
    }
}

impl WritableAsset for BaseIso {
    fn files(&self) -> Vec<&AssetFile> {
        self.file.iter().collect()
    }

    fn load(&mut self, fetcher: &dyn FileFetcher) -> AssetResult<bool> {
        let Some(filename) = self.cached_filename.clone() else {
            return Ok(false);
        };

        match fetcher.locate_by_name(&filename) {
            Ok(path) => {
                debug!("Reusing base ISO image {}", path.display());
                self.file = Some(AssetFile::reference(path));
                Ok(true)
            }
            Err(err) if err.is_not_found() => Ok(false),
            Err(source) => Err(AssetError::Fetch {
                file: filename,
                source,
            }),
        }
    }
}
