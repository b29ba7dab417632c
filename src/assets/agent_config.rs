//! AgentConfig asset - the user-supplied host declarations
//!
//! Never synthesized: `generate` leaves it unconfigured and `load` reads
//! `agent-config.yaml` from the asset directory.

use std::path::Path;

use crate::domain::entities::{AgentConfigSpec, AssetFile};
use crate::domain::ports::{Asset, AssetId, FileFetcher, Parents, WritableAsset};
use crate::error::{AssetError, AssetResult};

/// Name of the user-supplied agent configuration
pub const AGENT_CONFIG_FILENAME: &str = "agent-config.yaml";

#[derive(Debug, Clone, Default)]
pub struct AgentConfig {
    file: Option<AssetFile>,
    config: Option<AgentConfigSpec>,
}

impl AgentConfig {
    /// Build from an already parsed configuration
    pub fn from_spec(config: AgentConfigSpec) -> Self {
        Self {
            file: None,
            config: Some(config),
        }
    }

    pub fn config(&self) -> Option<&AgentConfigSpec> {
        self.config.as_ref()
    }
}

impl Asset for AgentConfig {
    fn name(&self) -> &'static str {
        "Agent Config"
    }

    fn dependencies(&self) -> Vec<AssetId> {
        Vec::new()
    }

    fn generate(&mut self, _parents: &Parents) -> AssetResult<()> {
        Ok(())
    }
}

impl WritableAsset for AgentConfig {
    fn files(&self) -> Vec<&AssetFile> {
        self.file.iter().collect()
    }

    fn load(&mut self, fetcher: &dyn FileFetcher) -> AssetResult<bool> {
        let filename = Path::new(AGENT_CONFIG_FILENAME);
        let file = match fetcher.fetch_by_name(filename) {
            Ok(file) => file,
            Err(err) if err.is_not_found() => return Ok(false),
            Err(source) => {
                return Err(AssetError::Fetch {
                    file: filename.to_path_buf(),
                    source,
                })
            }
        };

        let config: AgentConfigSpec =
            serde_yaml_ng::from_slice(file.data()).map_err(|source| AssetError::Yaml {
                file: filename.to_path_buf(),
                source,
            })?;

        self.file = Some(file);
        self.config = Some(config);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::fs::MemoryFetcher;

    #[test]
    fn load_absent_file_is_not_an_error() {
        let mut asset = AgentConfig::default();
        assert!(!asset.load(&MemoryFetcher::new()).unwrap());
        assert!(asset.config().is_none());
        assert!(asset.files().is_empty());
    }

    #[test]
    fn load_parses_hosts() {
        let fetcher = MemoryFetcher::new().with_file(
            AGENT_CONFIG_FILENAME,
            "metadata:\n  name: ostest\nspec:\n  hosts:\n  - hostname: master-0\n",
        );
        let mut asset = AgentConfig::default();

        assert!(asset.load(&fetcher).unwrap());
        assert_eq!(asset.config().map(|c| c.hosts().len()), Some(1));
        assert_eq!(asset.files().len(), 1);
    }

    #[test]
    fn load_malformed_file_keeps_state_unset() {
        let fetcher = MemoryFetcher::new().with_file(AGENT_CONFIG_FILENAME, "spec: [unclosed");
        let mut asset = AgentConfig::default();

        let err = asset.load(&fetcher).unwrap_err();
        assert!(matches!(err, AssetError::Yaml { .. }));
        assert!(asset.config().is_none());
    }
}
