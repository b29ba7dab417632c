//! Node-zero IP extraction
//!
//! The first record's raw nmstate payload seeds the bootstrap address. Only
//! the first interface is inspected; an IPv6 address replaces an IPv4 one
//! when both are present.

use serde::Deserialize;
use std::net::IpAddr;

use crate::domain::entities::NetworkRecord;

#[derive(Debug, thiserror::Error)]
pub enum NodeZeroError {
    #[error("no NMStateConfig records to read the node zero IP from")]
    NoRecords,

    #[error("error unmarshalling nodeZero nmStateConfig: {0}")]
    Unmarshal(#[source] serde_yaml_ng::Error),

    #[error("invalid NMStateConfig yaml, no valid interfaces set")]
    NoInterfaces,

    #[error("could not parse nodeZeroIP: {0}")]
    InvalidIp(String),
}

#[derive(Debug, Default, Deserialize)]
struct NmState {
    #[serde(default)]
    interfaces: Option<Vec<NmInterface>>,
}

#[derive(Debug, Default, Deserialize)]
struct NmInterface {
    #[serde(default)]
    ipv4: Option<NmIpFamily>,
    #[serde(default)]
    ipv6: Option<NmIpFamily>,
}

#[derive(Debug, Default, Deserialize)]
struct NmIpFamily {
    #[serde(default)]
    address: Option<Vec<NmAddress>>,
}

#[derive(Debug, Default, Deserialize)]
struct NmAddress {
    #[serde(default)]
    ip: String,
}

impl NmIpFamily {
    fn first_ip(family: &Option<NmIpFamily>) -> Option<&str> {
        family
            .as_ref()
            .and_then(|f| f.address.as_deref())
            .and_then(<[NmAddress]>::first)
            .map(|a| a.ip.as_str())
    }
}

/// Bootstrap IP of the first declared host
pub fn node_zero_ip(records: &[NetworkRecord]) -> Result<String, NodeZeroError> {
    let first = records.first().ok_or(NodeZeroError::NoRecords)?;
    let raw = first.config().raw();
    if raw.is_empty() {
        return Err(NodeZeroError::NoInterfaces);
    }

    let state: NmState = serde_yaml_ng::from_slice(raw).map_err(NodeZeroError::Unmarshal)?;
    let interface = state
        .interfaces
        .as_deref()
        .and_then(<[NmInterface]>::first)
        .ok_or(NodeZeroError::NoInterfaces)?;

    let mut selected = "";
    if let Some(ip) = NmIpFamily::first_ip(&interface.ipv4) {
        selected = ip;
    }
    if let Some(ip) = NmIpFamily::first_ip(&interface.ipv6) {
        selected = ip;
    }

    selected
        .parse::<IpAddr>()
        .map(|_| selected.to_string())
        .map_err(|_| NodeZeroError::InvalidIp(selected.to_string()))
}
