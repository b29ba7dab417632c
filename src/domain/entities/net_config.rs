//! NetConfig - opaque per-host network configuration payload
//!
//! Stored as raw YAML bytes. On the wire it is embedded as a nested YAML
//! mapping; reading it back re-renders that mapping, so a payload that was
//! itself produced by deserialization survives a write/read cycle unchanged.

use serde::de::Error as _;
use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_yaml_ng::Value;

/// Raw network configuration (nmstate YAML)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NetConfig(Vec<u8>);

impl NetConfig {
    /// Wrap raw bytes verbatim
    pub fn from_raw(raw: impl Into<Vec<u8>>) -> Self {
        Self(raw.into())
    }

    /// Render a YAML value into its canonical byte form
    pub fn from_value(value: &Value) -> Result<Self, serde_yaml_ng::Error> {
        if value.is_null() {
            return Ok(Self::default());
        }
        serde_yaml_ng::to_string(value).map(|s| Self(s.into_bytes()))
    }

    /// Re-render in the form a write/read cycle produces
    pub fn canonical(&self) -> Result<Self, serde_yaml_ng::Error> {
        if self.0.is_empty() {
            return Ok(Self::default());
        }
        let value: Value = serde_yaml_ng::from_slice(&self.0)?;
        Self::from_value(&value)
    }

    pub fn raw(&self) -> &[u8] {
        &self.0
    }

    /// Raw payload as text (lossy for non-UTF-8 input)
    pub fn as_text(&self) -> String {
        String::from_utf8_lossy(&self.0).into_owned()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for NetConfig {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let value: Value = if self.0.is_empty() {
            Value::Null
        } else {
            serde_yaml_ng::from_slice(&self.0).map_err(S::Error::custom)?
        };
        value.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for NetConfig {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        NetConfig::from_value(&value).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    struct Wrapper {
        #[serde(default, skip_serializing_if = "NetConfig::is_empty")]
        config: NetConfig,
    }

    #[test]
    fn net_config_serializes_as_nested_mapping() {
        let wrapper = Wrapper {
            config: NetConfig::from_raw("interfaces:\n- name: eth0\n"),
        };
        let yaml = serde_yaml_ng::to_string(&wrapper).unwrap();

        assert!(yaml.contains("config:"));
        assert!(yaml.contains("name: eth0"));
        assert!(!yaml.contains('|'), "should not be a block string: {yaml}");
    }

    #[test]
    fn net_config_round_trips_canonical_bytes() {
        let source = "config:\n  interfaces:\n    - name: eth0\n      type: ethernet\n";
        let first: Wrapper = serde_yaml_ng::from_str(source).unwrap();

        let rendered = serde_yaml_ng::to_string(&first).unwrap();
        let second: Wrapper = serde_yaml_ng::from_str(&rendered).unwrap();

        assert_eq!(first.config, second.config);
        assert!(!first.config.is_empty());
    }

    #[test]
    fn canonical_matches_what_deserialization_produces() {
        let raw = NetConfig::from_raw("interfaces:\n  - name: eth0\n    type: ethernet\n");
        let canonical = raw.canonical().unwrap();

        let rendered = serde_yaml_ng::to_string(&Wrapper { config: raw }).unwrap();
        let reread: Wrapper = serde_yaml_ng::from_str(&rendered).unwrap();

        assert_eq!(reread.config, canonical);
        assert_eq!(canonical.as_text(), "interfaces:\n- name: eth0\n  type: ethernet\n");
    }

    #[test]
    fn canonical_of_empty_stays_empty() {
        assert!(NetConfig::default().canonical().unwrap().is_empty());
    }

    #[test]
    fn missing_config_is_empty() {
        let wrapper: Wrapper = serde_yaml_ng::from_str("{}").unwrap();
        assert!(wrapper.config.is_empty());
    }

    #[test]
    fn invalid_raw_payload_fails_to_serialize() {
        let wrapper = Wrapper {
            config: NetConfig::from_raw("interfaces: [unclosed"),
        };
        assert!(serde_yaml_ng::to_string(&wrapper).is_err());
    }
}
