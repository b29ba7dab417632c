//! Concrete assets
//!
//! `BaseIso` and `NmStateConfig` are the generated artifacts; the remaining
//! assets carry user input they depend on.

mod agent_config;
mod base_iso;
mod cluster_manifests;
mod nmstate_config;
mod registries_conf;

pub use agent_config::{AgentConfig, AGENT_CONFIG_FILENAME};
pub use base_iso::{BaseIso, Extraction, StreamIsoDownloader, DEFAULT_ARCHITECTURE};
pub use cluster_manifests::{ClusterManifests, CLUSTER_MANIFEST_DIR};
pub use nmstate_config::{network_config_files, nmstate_config_filename, NmStateConfig};
pub use registries_conf::RegistriesConf;
