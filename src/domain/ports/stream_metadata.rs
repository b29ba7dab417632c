//! StreamMetadataFetcher port - OS image stream build metadata
//!
//! Mirrors the CoreOS stream format:
//! `architectures.<arch>.artifacts.<artifact>.formats.<format>.disk`.

use serde::Deserialize;
use std::collections::BTreeMap;

/// Stream metadata errors
#[derive(Debug, thiserror::Error)]
pub enum StreamError {
    #[error("request to {url} failed: {message}")]
    Request { url: String, message: String },

    #[error("request to {url} timed out after {secs}s")]
    Timeout { url: String, secs: u64 },

    #[error("invalid stream metadata from {source_name}: {message}")]
    Parse {
        source_name: String,
        message: String,
    },

    #[error("stream does not have architecture {0}")]
    ArchitectureNotFound(String),
}

/// A downloadable file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StreamArtifact {
    pub location: String,
    #[serde(default)]
    pub sha256: Option<String>,
}

/// One image format (e.g. `iso`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ImageFormat {
    #[serde(default)]
    pub disk: Option<StreamArtifact>,
}

/// One platform artifact (e.g. `metal`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PlatformArtifacts {
    #[serde(default)]
    pub release: String,
    #[serde(default)]
    pub formats: BTreeMap<String, ImageFormat>,
}

/// Artifacts for one architecture
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct StreamArch {
    #[serde(default)]
    pub artifacts: BTreeMap<String, PlatformArtifacts>,
}

/// Stream build metadata
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct StreamMetadata {
    #[serde(default)]
    pub stream: String,
    #[serde(default)]
    pub architectures: BTreeMap<String, StreamArch>,
}

impl StreamMetadata {
    pub fn get_architecture(&self, name: &str) -> Result<&StreamArch, StreamError> {
        self.architectures
            .get(name)
            .ok_or_else(|| StreamError::ArchitectureNotFound(name.to_string()))
    }
}

/// Fetches the current stream build, bounded by its own timeout
pub trait StreamMetadataFetcher {
    fn fetch_build(&self) -> Result<StreamMetadata, StreamError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    const STREAM: &str = r#"{
        "stream": "rhcos-4.12",
        "architectures": {
            "x86_64": {
                "artifacts": {
                    "metal": {
                        "release": "412.86.202208101039-0",
                        "formats": {
                            "iso": {
                                "disk": {
                                    "location": "https://example.com/rhcos-live.x86_64.iso",
                                    "sha256": "abc"
                                }
                            }
                        }
                    }
                }
            }
        }
    }"#;

    #[test]
    fn parses_stream_json() {
        let stream: StreamMetadata = serde_json::from_str(STREAM).unwrap();
        let arch = stream.get_architecture("x86_64").unwrap();
        let disk = arch.artifacts["metal"].formats["iso"].disk.as_ref().unwrap();

        assert_eq!(stream.stream, "rhcos-4.12");
        assert_eq!(disk.location, "https://example.com/rhcos-live.x86_64.iso");
        assert_eq!(disk.sha256.as_deref(), Some("abc"));
    }

    #[test]
    fn unknown_architecture_is_an_error() {
        let stream: StreamMetadata = serde_json::from_str(STREAM).unwrap();
        let err = stream.get_architecture("ppc64le").unwrap_err();
        assert_eq!(err.to_string(), "stream does not have architecture ppc64le");
    }
}
