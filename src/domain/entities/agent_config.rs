//! Declared agent configuration - the hosts a network manifest is built from

use serde::{Deserialize, Serialize};

use super::{InterfaceBinding, NetConfig};

/// Identity shared by every generated record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentConfigMeta {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub namespace: String,
}

/// One declared host
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    #[serde(default)]
    pub interfaces: Vec<InterfaceBinding>,
    #[serde(default, skip_serializing_if = "NetConfig::is_empty")]
    pub network_config: NetConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentConfigBody {
    #[serde(default)]
    pub hosts: Vec<HostSpec>,
}

/// Contents of `agent-config.yaml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentConfigSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
    #[serde(default)]
    pub metadata: AgentConfigMeta,
    #[serde(default)]
    pub spec: AgentConfigBody,
}

impl AgentConfigSpec {
    pub fn hosts(&self) -> &[HostSpec] {
        &self.spec.hosts
    }
}
