//! RegistriesConf asset - registry mirror configuration
//!
//! Parses `mirror/registries.conf` (containers-registries TOML) into the
//! mirror list handed to the release extractor.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::domain::entities::{AssetFile, MirrorConfig, MirrorEntry};
use crate::domain::ports::{Asset, AssetId, FileFetcher, Parents, WritableAsset};
use crate::error::{AssetError, AssetResult};

const MIRROR_DIR: &str = "mirror";
const REGISTRIES_CONF_FILENAME: &str = "registries.conf";

#[derive(Debug, Default, Deserialize)]
struct RegistriesToml {
    #[serde(default)]
    registry: Vec<RegistryToml>,
}

#[derive(Debug, Deserialize)]
struct RegistryToml {
    #[serde(default)]
    prefix: Option<String>,
    location: String,
    #[serde(default)]
    mirror: Vec<MirrorToml>,
}

#[derive(Debug, Deserialize)]
struct MirrorToml {
    location: String,
}

#[derive(Debug, Clone, Default)]
pub struct RegistriesConf {
    file: Option<AssetFile>,
    mirror_config: Option<MirrorConfig>,
}

impl RegistriesConf {
    pub fn from_mirror_config(mirror_config: MirrorConfig) -> Self {
        Self {
            file: None,
            mirror_config: Some(mirror_config),
        }
    }

    pub fn filename() -> PathBuf {
        Path::new(MIRROR_DIR).join(REGISTRIES_CONF_FILENAME)
    }

    /// Mirrors, `None` when nothing is mirrored
    pub fn mirror_config(&self) -> Option<&MirrorConfig> {
        self.mirror_config.as_ref().filter(|config| !config.is_empty())
    }
}

fn parse_registries(data: &[u8], file: &Path) -> AssetResult<MirrorConfig> {
    let text = String::from_utf8_lossy(data);
    let parsed: RegistriesToml = toml::from_str(&text).map_err(|source| AssetError::Toml {
        file: file.to_path_buf(),
        source,
    })?;

    let entries = parsed
        .registry
        .into_iter()
        .map(|registry| MirrorEntry {
            source: registry.prefix.unwrap_or(registry.location),
            mirrors: registry.mirror.into_iter().map(|m| m.location).collect(),
        })
        .collect();
    Ok(MirrorConfig { entries })
}

impl Asset for RegistriesConf {
    fn name(&self) -> &'static str {
        "Mirror Registries Config"
    }

    fn dependencies(&self) -> Vec<AssetId> {
        Vec::new()
    }

    fn generate(&mut self, _parents: &Parents) -> AssetResult<()> {
        Ok(())
    }
}

impl WritableAsset for RegistriesConf {
    fn files(&self) -> Vec<&AssetFile> {
        self.file.iter().collect()
    }

    fn load(&mut self, fetcher: &dyn FileFetcher) -> AssetResult<bool> {
        let filename = Self::filename();
        let file = match fetcher.fetch_by_name(&filename) {
            Ok(file) => file,
            Err(err) if err.is_not_found() => return Ok(false),
            Err(source) => {
                return Err(AssetError::Fetch {
                    file: filename,
                    source,
                })
            }
        };

        let mirror_config = parse_registries(file.data(), &filename)?;
        self.file = Some(file);
        self.mirror_config = Some(mirror_config);
        Ok(true)
    }
}
