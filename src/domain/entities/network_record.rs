//! NetworkRecord entity - one per-host NMState manifest document
//!
//! Records are built fresh by `generate` or decoded by `load` and are never
//! mutated afterwards. `StaticNetworkConfig` is always derived from a record.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::NetConfig;

/// Resource kind of a network record
pub const NMSTATE_CONFIG_KIND: &str = "NMStateConfig";

/// API version of a network record
pub const NMSTATE_CONFIG_API_VERSION: &str = "agent-install.openshift.io/v1beta1";

/// Label key tying records to their infra environment
pub const INFRAENV_LABEL: &str = "infraenvs.agent-install.openshift.io";

/// Object identity of a record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectMeta {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub namespace: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,
}

/// Interface name to MAC address binding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterfaceBinding {
    pub name: String,
    pub mac_address: String,
}

impl InterfaceBinding {
    pub fn new(name: impl Into<String>, mac_address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mac_address: mac_address.into(),
        }
    }
}

/// Record body
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkRecordSpec {
    #[serde(default, skip_serializing_if = "NetConfig::is_empty")]
    pub config: NetConfig,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub interfaces: Vec<InterfaceBinding>,
}

/// A per-host NMState manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkRecord {
    #[serde(default)]
    api_version: String,
    #[serde(default)]
    kind: String,
    #[serde(default)]
    metadata: ObjectMeta,
    #[serde(default)]
    spec: NetworkRecordSpec,
}

impl NetworkRecord {
    /// Create a record with the standard kind and API version
    pub fn new(metadata: ObjectMeta, spec: NetworkRecordSpec) -> Self {
        Self {
            api_version: NMSTATE_CONFIG_API_VERSION.to_string(),
            kind: NMSTATE_CONFIG_KIND.to_string(),
            metadata,
            spec,
        }
    }

    /// Record name for the host at `index`: `<base>-<index>`
    pub fn indexed_name(base: &str, index: usize) -> String {
        format!("{}-{}", base, index)
    }

    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    pub fn namespace(&self) -> &str {
        &self.metadata.namespace
    }

    pub fn labels(&self) -> &BTreeMap<String, String> {
        &self.metadata.labels
    }

    pub fn config(&self) -> &NetConfig {
        &self.spec.config
    }

    pub fn interfaces(&self) -> &[InterfaceBinding] {
        &self.spec.interfaces
    }

    /// Derive the static network configuration for this host
    pub fn to_static_network_config(&self) -> StaticNetworkConfig {
        let mac_interface_map = self
            .spec
            .interfaces
            .iter()
            .map(|iface| {
                tracing::debug!(
                    name = %iface.name,
                    mac_address = %iface.mac_address,
                    "adding MAC interface map to host static network config"
                );
                MacInterfaceEntry {
                    mac_address: iface.mac_address.clone(),
                    logical_nic_name: iface.name.clone(),
                }
            })
            .collect();

        StaticNetworkConfig {
            mac_interface_map,
            network_yaml: self.spec.config.as_text(),
        }
    }
}

/// MAC address to logical NIC association
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacInterfaceEntry {
    pub mac_address: String,
    pub logical_nic_name: String,
}

/// Host static network configuration consumed by the static network service
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticNetworkConfig {
    #[serde(default)]
    pub mac_interface_map: Vec<MacInterfaceEntry>,
    #[serde(default)]
    pub network_yaml: String,
}
