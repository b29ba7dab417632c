//! ClusterManifests asset - release image and pull secret
//!
//! Reads the cluster image set and pull secret manifests the user placed in
//! the manifest directory. Either may be absent.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::domain::entities::AssetFile;
use crate::domain::ports::{Asset, AssetId, FileFetcher, Parents, WritableAsset};
use crate::error::{AssetError, AssetResult};

/// Directory holding cluster manifests
pub const CLUSTER_MANIFEST_DIR: &str = "cluster-manifests";

const CLUSTER_IMAGE_SET_FILENAME: &str = "cluster-image-set.yaml";
const PULL_SECRET_FILENAME: &str = "pull-secret.yaml";
const DOCKER_CONFIG_JSON_KEY: &str = ".dockerconfigjson";

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ClusterImageSetSpec {
    #[serde(default)]
    release_image: String,
}

#[derive(Debug, Default, Deserialize)]
struct ClusterImageSetManifest {
    #[serde(default)]
    spec: ClusterImageSetSpec,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SecretManifest {
    #[serde(default)]
    string_data: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default)]
pub struct ClusterManifests {
    files: Vec<AssetFile>,
    release_image: Option<String>,
    pull_secret: String,
}

impl ClusterManifests {
    pub fn new(release_image: Option<String>, pull_secret: impl Into<String>) -> Self {
        Self {
            files: Vec::new(),
            release_image: release_image.filter(|image| !image.is_empty()),
            pull_secret: pull_secret.into(),
        }
    }

    pub fn cluster_image_set_filename() -> PathBuf {
        Path::new(CLUSTER_MANIFEST_DIR).join(CLUSTER_IMAGE_SET_FILENAME)
    }

    pub fn pull_secret_filename() -> PathBuf {
        Path::new(CLUSTER_MANIFEST_DIR).join(PULL_SECRET_FILENAME)
    }

    /// Release payload reference, `None` when no image set is declared
    pub fn release_image(&self) -> Option<&str> {
        self.release_image.as_deref()
    }

    pub fn pull_secret(&self) -> &str {
        &self.pull_secret
    }
}

fn fetch_optional(fetcher: &dyn FileFetcher, name: &Path) -> AssetResult<Option<AssetFile>> {
    match fetcher.fetch_by_name(name) {
        Ok(file) => Ok(Some(file)),
        Err(err) if err.is_not_found() => Ok(None),
        Err(source) => Err(AssetError::Fetch {
            file: name.to_path_buf(),
            source,
        }),
    }
}

fn parse_yaml<T: serde::de::DeserializeOwned>(file: &AssetFile) -> AssetResult<T> {
    serde_yaml_ng::from_slice(file.data()).map_err(|source| AssetError::Yaml {
        file: file.filename().to_path_buf(),
        source,
    })
}

impl Asset for ClusterManifests {
    fn name(&self) -> &'static str {
        "Cluster Manifests"
    }

    fn dependencies(&self) -> Vec<AssetId> {
        Vec::new()
    }

    fn generate(&mut self, _parents: &Parents) -> AssetResult<()> {
        Ok(())
    }
}

impl WritableAsset for ClusterManifests {
    fn files(&self) -> Vec<&AssetFile> {
        self.files.iter().collect()
    }

    fn load(&mut self, fetcher: &dyn FileFetcher) -> AssetResult<bool> {
        let image_set = fetch_optional(fetcher, &Self::cluster_image_set_filename())?;
        let secret = fetch_optional(fetcher, &Self::pull_secret_filename())?;
        if image_set.is_none() && secret.is_none() {
            return Ok(false);
        }

        let release_image = match &image_set {
            Some(file) => Some(parse_yaml::<ClusterImageSetManifest>(file)?.spec.release_image),
            None => None,
        };
        let pull_secret = match &secret {
            Some(file) => parse_yaml::<SecretManifest>(file)?
                .string_data
                .remove(DOCKER_CONFIG_JSON_KEY)
                .unwrap_or_default(),
            None => String::new(),
        };

        let mut loaded = Self::new(release_image, pull_secret);
        loaded.files = image_set.into_iter().chain(secret).collect();
        *self = loaded;
        Ok(true)
    }
}
