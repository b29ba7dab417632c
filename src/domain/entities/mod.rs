//! Domain Entities
//!
//! - `AssetFile` - A file produced or reloaded by an asset
//! - `NetworkRecord` - A per-host NMState manifest and its derived static config
//! - `AgentConfigSpec` - Declared hosts the manifests are built from
//! - `MirrorConfig` - Registry mirrors passed through to release extraction

mod agent_config;
mod asset_file;
mod mirror;
mod net_config;
mod network_record;

pub use agent_config::{AgentConfigBody, AgentConfigMeta, AgentConfigSpec, HostSpec};
pub use asset_file::AssetFile;
pub use mirror::{MirrorConfig, MirrorEntry};
pub use net_config::NetConfig;
pub use network_record::{
    InterfaceBinding, MacInterfaceEntry, NetworkRecord, NetworkRecordSpec, ObjectMeta,
    StaticNetworkConfig, INFRAENV_LABEL, NMSTATE_CONFIG_API_VERSION, NMSTATE_CONFIG_KIND,
};
