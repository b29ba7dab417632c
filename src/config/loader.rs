//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

pub use crate::domain::value_objects::ConfigWarning;

use super::types::GeneratorConfig;

/// Config file looked up in the asset directory
pub const PROJECT_CONFIG_FILE: &str = "agentgen.toml";

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> Result<(GeneratorConfig, Vec<ConfigWarning>), ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: GeneratorConfig = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from the asset directory config, the user config, or defaults,
/// then apply `AGENTGEN_*` overrides
pub fn load(asset_dir: Option<&Path>) -> Result<(GeneratorConfig, Vec<ConfigWarning>), ConfigError> {
    let candidates = asset_dir
        .map(|dir| dir.join(PROJECT_CONFIG_FILE))
        .into_iter()
        .chain(user_config_path());

    for path in candidates {
        if path.is_file() {
            debug!("Loading configuration from {}", path.display());
            let (config, warnings) = load_with_warnings(&path)?;
            return Ok((with_env_overrides(config), warnings));
        }
    }

    Ok((with_env_overrides(GeneratorConfig::default()), Vec::new()))
}

/// Apply environment variable overrides (AGENTGEN_* prefix)
pub fn with_env_overrides(config: GeneratorConfig) -> GeneratorConfig {
    with_overrides_from(config, |name| std::env::var(name).ok())
}

/// Apply overrides from an arbitrary variable source
pub fn with_overrides_from(
    mut config: GeneratorConfig,
    var: impl Fn(&str) -> Option<String>,
) -> GeneratorConfig {
    if let Some(arch) = var("AGENTGEN_ARCH").filter(|v| !v.trim().is_empty()) {
        config.image.architecture = arch.trim().to_string();
    }

    if let Some(dir) = var("AGENTGEN_CACHE_DIR").filter(|v| !v.is_empty()) {
        config.image.cache_dir = Some(PathBuf::from(dir));
    }

    if let Some(url) = var("AGENTGEN_STREAM_URL").filter(|v| !v.is_empty()) {
        config.image.stream_url = url;
    }

    if let Some(tries) = var("AGENTGEN_MAX_TRIES") {
        match tries.trim().parse::<u32>() {
            Ok(n) if n > 0 => config.extract.max_tries = n,
            _ => warn!("Ignoring invalid AGENTGEN_MAX_TRIES value '{}'", tries),
        }
    }

    if let Some(delay) = var("AGENTGEN_RETRY_DELAY_SECS") {
        match delay.trim().parse::<u64>() {
            Ok(secs) => config.extract.retry_delay_secs = secs,
            Err(_) => warn!("Ignoring invalid AGENTGEN_RETRY_DELAY_SECS value '{}'", delay),
        }
    }

    config
}

fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("agentgen").join("config.toml"))
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "image",
        "architecture",
        "cache_dir",
        "stream_url",
        "metadata_timeout_secs",
        "download_timeout_secs",
        "cached_filename",
        "extract",
        "tool",
        "max_tries",
        "retry_delay_secs",
        "network",
        "max_concurrent_generations",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
