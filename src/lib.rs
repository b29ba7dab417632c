//! agentgen - installer asset generation for agent-based cluster installs
//!
//! Produces two assets from a user-supplied asset directory:
//! the bootable base ISO (extracted from the release payload, or downloaded
//! from the OS image stream) and the per-host NMState network manifest.
//! Both follow the load-or-generate asset contract in `domain::ports`.

pub mod application;
pub mod assets;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

#[cfg(test)]
pub(crate) mod test_support;

// Re-exports for convenience
pub use application::{AssetFactory, GenerateResult, GenerateUseCase, InspectUseCase};
pub use assets::{AgentConfig, BaseIso, ClusterManifests, NmStateConfig, RegistriesConf};
pub use config::GeneratorConfig;
pub use domain::ports::{Asset, AssetId, Parents, WritableAsset};
pub use error::{AssetError, AssetResult};
