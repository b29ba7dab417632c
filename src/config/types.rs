//! Configuration type definitions

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::assets::DEFAULT_ARCHITECTURE;
use crate::infrastructure::{
    default_cache_dir, DEFAULT_MAX_CONCURRENT_GENERATIONS, DEFAULT_MAX_TRIES,
    DEFAULT_METADATA_TIMEOUT, DEFAULT_RETRY_DELAY, DEFAULT_STREAM_URL,
};

use super::loader::{self, ConfigError, ConfigWarning};

/// Base image acquisition settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageConfig {
    pub architecture: String,
    /// Image cache location; `<user cache dir>/agentgen/image_cache` when unset
    pub cache_dir: Option<PathBuf>,
    /// Stream metadata URL or local path
    pub stream_url: String,
    pub metadata_timeout_secs: u64,
    /// Per-image transfer bound; unbounded when unset
    pub download_timeout_secs: Option<u64>,
    /// Previously acquired image that `load` may reuse
    pub cached_filename: Option<PathBuf>,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            architecture: DEFAULT_ARCHITECTURE.to_string(),
            cache_dir: None,
            stream_url: DEFAULT_STREAM_URL.to_string(),
            metadata_timeout_secs: DEFAULT_METADATA_TIMEOUT.as_secs(),
            download_timeout_secs: None,
            cached_filename: None,
        }
    }
}

impl ImageConfig {
    pub fn cache_dir(&self) -> PathBuf {
        self.cache_dir.clone().unwrap_or_else(default_cache_dir)
    }

    pub fn metadata_timeout(&self) -> Duration {
        Duration::from_secs(self.metadata_timeout_secs)
    }

    pub fn download_timeout(&self) -> Option<Duration> {
        self.download_timeout_secs.map(Duration::from_secs)
    }
}

/// Release payload extraction settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractConfig {
    pub tool: String,
    pub max_tries: u32,
    pub retry_delay_secs: u64,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            tool: "oc".to_string(),
            max_tries: DEFAULT_MAX_TRIES,
            retry_delay_secs: DEFAULT_RETRY_DELAY.as_secs(),
        }
    }
}

impl ExtractConfig {
    pub fn retry_delay(&self) -> Duration {
        Duration::from_secs(self.retry_delay_secs)
    }
}

/// Static network tool settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkToolConfig {
    pub tool: String,
    pub max_concurrent_generations: usize,
}

impl Default for NetworkToolConfig {
    fn default() -> Self {
        Self {
            tool: "nmstatectl".to_string(),
            max_concurrent_generations: DEFAULT_MAX_CONCURRENT_GENERATIONS,
        }
    }
}

/// Generator configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub image: ImageConfig,
    pub extract: ExtractConfig,
    pub network: NetworkToolConfig,
}

impl GeneratorConfig {
    /// Load one config file, ignoring warnings
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        loader::load_with_warnings(path).map(|(config, _)| config)
    }

    /// Load one config file and collect unknown-key warnings
    pub fn load_with_warnings(path: &Path) -> Result<(Self, Vec<ConfigWarning>), ConfigError> {
        loader::load_with_warnings(path)
    }
}
