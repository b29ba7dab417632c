//! StaticNetworkService port - validation and rendering of host network configs
//!
//! Implementations bound their own internal concurrency.

use serde::{Deserialize, Serialize};

use crate::domain::entities::StaticNetworkConfig;

/// Static network errors
#[derive(Debug, thiserror::Error)]
pub enum StaticNetworkError {
    /// A host's network configuration was rejected
    #[error("host {host}: {message}")]
    Invalid { host: usize, message: String },

    /// The backing tool could not be run
    #[error("{tool}: {message}")]
    Tool { tool: String, message: String },

    /// Formatted data could not be encoded or decoded
    #[error("{0}")]
    Format(String),
}

/// A rendered configuration file for one host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkConfigFile {
    pub file_path: String,
    pub file_contents: String,
}

pub trait StaticNetworkService {
    fn validate_static_config_params(
        &self,
        configs: &[StaticNetworkConfig],
    ) -> Result<(), StaticNetworkError>;

    fn format_static_network_config_for_db(
        &self,
        configs: &[StaticNetworkConfig],
    ) -> Result<String, StaticNetworkError>;

    fn generate_static_network_config_data(
        &self,
        formatted: &str,
    ) -> Result<Vec<NetworkConfigFile>, StaticNetworkError>;
}
