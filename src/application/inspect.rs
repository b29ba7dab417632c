//! Inspect Use Case
//!
//! Reloads the persisted network manifest for read-only queries.

use crate::assets::{nmstate_config_filename, NmStateConfig};
use crate::domain::ports::{FileFetcher, NetworkConfigFile, WritableAsset};
use crate::error::{AssetError, AssetResult};

/// Read-only access to a persisted network manifest
pub struct InspectUseCase {
    nmstate_config: NmStateConfig,
}

impl InspectUseCase {
    /// Load and validate the manifest; an absent file is an error here
    pub fn load(mut nmstate_config: NmStateConfig, fetcher: &dyn FileFetcher) -> AssetResult<Self> {
        if !nmstate_config.load(fetcher)? {
            return Err(AssetError::MissingManifest {
                file: nmstate_config_filename(),
            });
        }
        Ok(Self { nmstate_config })
    }

    pub fn nmstate_config(&self) -> &NmStateConfig {
        &self.nmstate_config
    }

    pub fn record_names(&self) -> Vec<&str> {
        self.nmstate_config
            .records()
            .iter()
            .map(|record| record.name())
            .collect()
    }

    pub fn node_zero_ip(&self) -> AssetResult<String> {
        self.nmstate_config.node_zero_ip()
    }

    pub fn network_config_files(&self) -> AssetResult<Vec<NetworkConfigFile>> {
        self.nmstate_config.network_config_files()
    }
}
