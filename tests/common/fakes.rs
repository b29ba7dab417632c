//! Fake collaborators implementing the domain ports

use std::path::PathBuf;

use agentgen::domain::entities::StaticNetworkConfig;
use agentgen::domain::ports::{
    ExtractError, ExtractRequest, ImageExtractor, IsoSource, NetworkConfigFile,
    StaticNetworkError, StaticNetworkService,
};
use agentgen::AssetResult;

/// Static network service that accepts everything and renders the MAC map only
pub struct AcceptingNetworkService;

impl StaticNetworkService for AcceptingNetworkService {
    fn validate_static_config_params(
        &self,
        _configs: &[StaticNetworkConfig],
    ) -> Result<(), StaticNetworkError> {
        Ok(())
    }

    fn format_static_network_config_for_db(
        &self,
        configs: &[StaticNetworkConfig],
    ) -> Result<String, StaticNetworkError> {
        serde_json::to_string(configs).map_err(|e| StaticNetworkError::Format(e.to_string()))
    }

    fn generate_static_network_config_data(
        &self,
        formatted: &str,
    ) -> Result<Vec<NetworkConfigFile>, StaticNetworkError> {
        let configs: Vec<StaticNetworkConfig> = serde_json::from_str(formatted)
            .map_err(|e| StaticNetworkError::Format(e.to_string()))?;
        Ok(configs
            .iter()
            .enumerate()
            .map(|(i, config)| NetworkConfigFile {
                file_path: format!("host{i}/mac_interface.ini"),
                file_contents: config
                    .mac_interface_map
                    .iter()
                    .map(|m| format!("{}={}\n", m.mac_address, m.logical_nic_name))
                    .collect(),
            })
            .collect())
    }
}

/// Extractor with a fixed outcome
pub struct FixedExtractor(pub Result<PathBuf, ExtractError>);

impl ImageExtractor for FixedExtractor {
    fn extract_base_iso(&self, _request: &ExtractRequest<'_>) -> Result<PathBuf, ExtractError> {
        self.0.clone()
    }
}

/// ISO source returning a fixed path
pub struct FixedIsoSource(pub PathBuf);

impl IsoSource for FixedIsoSource {
    fn describe(&self) -> &'static str {
        "fixed"
    }

    fn fetch_iso(&self) -> AssetResult<PathBuf> {
        Ok(self.0.clone())
    }
}
