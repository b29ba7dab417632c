//! Registry mirror configuration passed through to the release extractor

use serde::{Deserialize, Serialize};

/// Mirrors for one source registry location
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MirrorEntry {
    pub source: String,
    #[serde(default)]
    pub mirrors: Vec<String>,
}

/// Registry mirror configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MirrorConfig {
    #[serde(default)]
    pub entries: Vec<MirrorEntry>,
}

impl MirrorConfig {
    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(|entry| entry.mirrors.is_empty())
    }

    /// Render as an ImageContentSourcePolicy document understood by `oc`
    pub fn to_icsp_yaml(&self) -> Result<String, serde_yaml_ng::Error> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Icsp<'a> {
            api_version: &'static str,
            kind: &'static str,
            metadata: IcspMeta,
            spec: IcspSpec<'a>,
        }
        #[derive(Serialize)]
        struct IcspMeta {
            name: &'static str,
        }
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct IcspSpec<'a> {
            repository_digest_mirrors: Vec<IcspMirror<'a>>,
        }
        #[derive(Serialize)]
        struct IcspMirror<'a> {
            source: &'a str,
            mirrors: &'a [String],
        }

        let icsp = Icsp {
            api_version: "operator.openshift.io/v1alpha1",
            kind: "ImageContentSourcePolicy",
            metadata: IcspMeta {
                name: "image-digest-mirror",
            },
            spec: IcspSpec {
                repository_digest_mirrors: self
                    .entries
                    .iter()
                    .filter(|entry| !entry.mirrors.is_empty())
                    .map(|entry| IcspMirror {
                        source: &entry.source,
                        mirrors: &entry.mirrors,
                    })
                    .collect(),
            },
        };
        serde_yaml_ng::to_string(&icsp)
    }
}
