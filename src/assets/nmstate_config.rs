//! NmStateConfig asset - per-host network manifests
//!
//! `generate` builds one record per declared host and writes them as a
//! multi-document YAML file (a `---` line after every record, not a YAML
//! list). `load` decodes that file, derives the static network configs and
//! has them cross-validated before accepting anything.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::{AgentConfig, CLUSTER_MANIFEST_DIR};
use crate::domain::entities::{
    AgentConfigSpec, AssetFile, NetworkRecord, NetworkRecordSpec, ObjectMeta,
    StaticNetworkConfig, INFRAENV_LABEL,
};
use crate::domain::ports::{
    Asset, AssetId, FileFetcher, NetworkConfigFile, Parents, StaticNetworkService, WritableAsset,
};
use crate::domain::services::{decode_documents, node_zero_ip, TypedDecoder};
use crate::domain::value_objects::{FieldError, FieldErrors};
use crate::error::{AssetError, AssetResult};

const NMSTATE_CONFIG_FILENAME: &str = "nmstateconfig.yaml";
const DOCUMENT_TERMINATOR: &str = "---\n";
const KIND: &str = "NMStateConfig";

/// Path of the persisted manifest, relative to the asset directory
pub fn nmstate_config_filename() -> PathBuf {
    Path::new(CLUSTER_MANIFEST_DIR).join(NMSTATE_CONFIG_FILENAME)
}

pub struct NmStateConfig {
    file: Option<AssetFile>,
    static_network_config: Vec<StaticNetworkConfig>,
    config: Vec<NetworkRecord>,
    service: Box<dyn StaticNetworkService>,
}

impl NmStateConfig {
    pub fn new(service: Box<dyn StaticNetworkService>) -> Self {
        Self {
            file: None,
            static_network_config: Vec::new(),
            config: Vec::new(),
            service,
        }
    }

    pub fn file(&self) -> Option<&AssetFile> {
        self.file.as_ref()
    }

    pub fn records(&self) -> &[NetworkRecord] {
        &self.config
    }

    pub fn static_network_config(&self) -> &[StaticNetworkConfig] {
        &self.static_network_config
    }

    /// Bootstrap IP of the first host
    pub fn node_zero_ip(&self) -> AssetResult<String> {
        Ok(node_zero_ip(&self.config)?)
    }

    /// NetworkManager files ready to embed in an ignition config
    pub fn network_config_files(&self) -> AssetResult<Vec<NetworkConfigFile>> {
        network_config_files(self.service.as_ref(), &self.static_network_config)
    }

    /// Payloads are stored canonically so a later `load` reproduces them
    fn build_records(agent_config: &AgentConfigSpec) -> AssetResult<Vec<NetworkRecord>> {
        let base_name = &agent_config.metadata.name;
        let labels = labels_for(agent_config);

        agent_config
            .hosts()
            .iter()
            .enumerate()
            .map(|(index, host)| {
                let config = host
                    .network_config
                    .canonical()
                    .map_err(|source| AssetError::Serialize { kind: KIND, source })?;
                Ok(NetworkRecord::new(
                    ObjectMeta {
                        name: NetworkRecord::indexed_name(base_name, index),
                        namespace: agent_config.metadata.namespace.clone(),
                        labels: labels.clone(),
                    },
                    NetworkRecordSpec {
                        config,
                        interfaces: host.interfaces.clone(),
                    },
                ))
            })
            .collect()
    }

    /// Render records as consecutive documents, each terminated by `---`
    fn render(records: &[NetworkRecord]) -> AssetResult<String> {
        let mut data = String::new();
        for record in records {
            let document = serde_yaml_ng::to_string(record)
                .map_err(|source| AssetError::Serialize { kind: KIND, source })?;
            data.push_str(&document);
            data.push_str(DOCUMENT_TERMINATOR);
        }
        Ok(data)
    }

    fn finish(records: &[NetworkRecord]) -> AssetResult<()> {
        if records.is_empty() {
            return Err(AssetError::MissingConfiguration);
        }

        if let Some(errors) = validate_labels(records).into_aggregate() {
            return Err(AssetError::Validation { kind: KIND, errors });
        }
        Ok(())
    }
}

/// Labels shared by every record; empty when the config has no name
fn labels_for(agent_config: &AgentConfigSpec) -> BTreeMap<String, String> {
    let name = &agent_config.metadata.name;
    if name.is_empty() {
        return BTreeMap::new();
    }
    BTreeMap::from([(INFRAENV_LABEL.to_string(), name.clone())])
}

fn validate_labels(records: &[NetworkRecord]) -> FieldErrors {
    let mut errors = FieldErrors::new();
    for record in records {
        if record.labels().is_empty() {
            errors.push(FieldError::required(
                "ObjectMeta.Labels",
                format!("{} does not have any label set", record.name()),
            ));
        }
    }
    errors
}

/// Format the static configs and have the service render per-host files
pub fn network_config_files(
    service: &dyn StaticNetworkService,
    configs: &[StaticNetworkConfig],
) -> AssetResult<Vec<NetworkConfigFile>> {
    let formatted = service
        .format_static_network_config_for_db(configs)
        .map_err(|source| AssetError::StaticNetwork {
            context: "error marshalling StaticNetwork configuration",
            source,
        })?;

    service
        .generate_static_network_config_data(&formatted)
        .map_err(|source| AssetError::StaticNetwork {
            context: "failed to create StaticNetwork config data",
            source,
        })
}

impl Asset for NmStateConfig {
    fn name(&self) -> &'static str {
        "NMState Config"
    }

    fn dependencies(&self) -> Vec<AssetId> {
        vec![AssetId::of::<AgentConfig>()]
    }

    fn generate(&mut self, parents: &Parents) -> AssetResult<()> {
        self.file = None;
        self.config.clear();
        self.static_network_config.clear();

        let records = parents
            .get::<AgentConfig>()
            .and_then(AgentConfig::config)
            .map(Self::build_records)
            .transpose()?
            .unwrap_or_default();

        let data = Self::render(&records)?;
        Self::finish(&records)?;

        self.static_network_config = records
            .iter()
            .map(NetworkRecord::to_static_network_config)
            .collect();
        self.config = records;
        self.file = Some(AssetFile::new(nmstate_config_filename(), data));
        Ok(())
    }
}

impl WritableAsset for NmStateConfig {
    fn files(&self) -> Vec<&AssetFile> {
        self.file.iter().collect()
    }

    fn load(&mut self, fetcher: &dyn FileFetcher) -> AssetResult<bool> {
        let filename = nmstate_config_filename();
        let file = match fetcher.fetch_by_name(&filename) {
            Ok(file) => file,
            Err(err) if err.is_not_found() => return Ok(false),
            Err(source) => {
                return Err(AssetError::Fetch {
                    file: filename,
                    source,
                })
            }
        };

        let records = decode_documents(file.data(), &TypedDecoder::<NetworkRecord>::new())
            .map_err(|source| AssetError::Decode {
                file: filename.clone(),
                source,
            })?;

        let static_network_config: Vec<StaticNetworkConfig> = records
            .iter()
            .map(NetworkRecord::to_static_network_config)
            .collect();

        self.service
            .validate_static_config_params(&static_network_config)
            .map_err(|source| AssetError::StaticNetwork {
                context: "staticNetwork configuration is not valid",
                source,
            })?;

        Self::finish(&records)?;

        self.file = Some(file);
        self.static_network_config = static_network_config;
        self.config = records;
        Ok(true)
    }
}
