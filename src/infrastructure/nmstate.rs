//! `nmstatectl`-backed static network service
//!
//! Validation and generation both run `nmstatectl gc` over a host's network
//! YAML. Generation fans out one thread per host but never runs more than
//! `max_concurrent_generations` tool processes at once.

use std::collections::BTreeMap;
use std::sync::{Condvar, Mutex, PoisonError};

use serde::Deserialize;
use tracing::debug;

use crate::domain::entities::StaticNetworkConfig;
use crate::domain::ports::{
    CommandExecutor, NetworkConfigFile, StaticNetworkError, StaticNetworkService,
};

/// Default cap on simultaneous `nmstatectl` processes
pub const DEFAULT_MAX_CONCURRENT_GENERATIONS: usize = 2;

const STDIN_PATH: &str = "/dev/stdin";
const MAC_INTERFACE_FILE: &str = "mac_interface.ini";

/// Counting gate shared by all generation threads
#[derive(Debug)]
struct ConcurrencyLimit {
    max: usize,
    active: Mutex<usize>,
    released: Condvar,
}

struct Permit<'a>(&'a ConcurrencyLimit);

impl ConcurrencyLimit {
    fn new(max: usize) -> Self {
        Self {
            max: max.max(1),
            active: Mutex::new(0),
            released: Condvar::new(),
        }
    }

    fn acquire(&self) -> Permit<'_> {
        let mut active = self.active.lock().unwrap_or_else(PoisonError::into_inner);
        while *active >= self.max {
            active = self
                .released
                .wait(active)
                .unwrap_or_else(PoisonError::into_inner);
        }
        *active += 1;
        Permit(self)
    }
}

impl Drop for Permit<'_> {
    fn drop(&mut self) {
        let mut active = self.0.active.lock().unwrap_or_else(PoisonError::into_inner);
        *active -= 1;
        self.0.released.notify_one();
    }
}

/// Output of `nmstatectl gc`: NetworkManager keyfiles as `[name, contents]` pairs
#[derive(Debug, Default, Deserialize)]
struct GeneratedConnections {
    #[serde(rename = "NetworkManager", default)]
    network_manager: Vec<(String, String)>,
}

pub struct NmstatectlService {
    executor: Box<dyn CommandExecutor>,
    tool: String,
    limit: ConcurrencyLimit,
}

impl NmstatectlService {
    pub fn new(executor: Box<dyn CommandExecutor>) -> Self {
        Self {
            executor,
            tool: "nmstatectl".to_string(),
            limit: ConcurrencyLimit::new(DEFAULT_MAX_CONCURRENT_GENERATIONS),
        }
    }

    pub fn with_tool(mut self, tool: impl Into<String>) -> Self {
        self.tool = tool.into();
        self
    }

    pub fn with_max_concurrent_generations(mut self, max: usize) -> Self {
        self.limit = ConcurrencyLimit::new(max);
        self
    }

    /// Run `nmstatectl gc` for one host's network YAML
    fn gc(&self, host: usize, network_yaml: &str) -> Result<String, StaticNetworkError> {
        let _permit = self.limit.acquire();
        let args = ["gc".to_string(), STDIN_PATH.to_string()];

        let output = self
            .executor
            .execute(&self.tool, &args, Some(network_yaml.as_bytes()))
            .map_err(|e| StaticNetworkError::Tool {
                tool: self.tool.clone(),
                message: e.to_string(),
            })?;

        if !output.success() {
            return Err(StaticNetworkError::Invalid {
                host,
                message: output.stderr.trim().to_string(),
            });
        }
        Ok(output.stdout)
    }

    fn host_files(
        &self,
        host: usize,
        config: &StaticNetworkConfig,
    ) -> Result<Vec<NetworkConfigFile>, StaticNetworkError> {
        let mut files = Vec::new();
        if !config.network_yaml.trim().is_empty() {
            let stdout = self.gc(host, &config.network_yaml)?;
            let generated: GeneratedConnections = serde_yaml_ng::from_str(&stdout)
                .map_err(|e| StaticNetworkError::Format(e.to_string()))?;
            files.extend(generated.network_manager.into_iter().map(|(name, contents)| {
                NetworkConfigFile {
                    file_path: format!("host{}/{}", host, name),
                    file_contents: contents,
                }
            }));
        }

        files.push(NetworkConfigFile {
            file_path: format!("host{}/{}", host, MAC_INTERFACE_FILE),
            file_contents: mac_interface_ini(config),
        });
        debug!(host, files = files.len(), "generated static network files");
        Ok(files)
    }
}

fn mac_interface_ini(config: &StaticNetworkConfig) -> String {
    config
        .mac_interface_map
        .iter()
        .map(|entry| format!("{}={}\n", entry.mac_address, entry.logical_nic_name))
        .collect()
}

fn check_mac_map(host: usize, config: &StaticNetworkConfig) -> Result<(), StaticNetworkError> {
    let mut seen = BTreeMap::new();
    for entry in &config.mac_interface_map {
        if entry.mac_address.is_empty() || entry.logical_nic_name.is_empty() {
            return Err(StaticNetworkError::Invalid {
                host,
                message: "interface mapping requires both a name and a MAC address".to_string(),
            });
        }
        if let Some(previous) = seen.insert(entry.mac_address.to_lowercase(), &entry.logical_nic_name)
        {
            return Err(StaticNetworkError::Invalid {
                host,
                message: format!(
                    "MAC address {} is assigned to both {} and {}",
                    entry.mac_address, previous, entry.logical_nic_name
                ),
            });
        }
    }
    Ok(())
}

impl StaticNetworkService for NmstatectlService {
    fn validate_static_config_params(
        &self,
        configs: &[StaticNetworkConfig],
    ) -> Result<(), StaticNetworkError> {
        for (host, config) in configs.iter().enumerate() {
            check_mac_map(host, config)?;
            if !config.network_yaml.trim().is_empty() {
                self.gc(host, &config.network_yaml)?;
            }
        }
        Ok(())
    }

    fn format_static_network_config_for_db(
        &self,
        configs: &[StaticNetworkConfig],
    ) -> Result<String, StaticNetworkError> {
        serde_json::to_string(configs).map_err(|e| StaticNetworkError::Format(e.to_string()))
    }

    fn generate_static_network_config_data(
        &self,
        formatted: &str,
    ) -> Result<Vec<NetworkConfigFile>, StaticNetworkError> {
        if formatted.trim().is_empty() {
            return Ok(Vec::new());
        }
        let configs: Vec<StaticNetworkConfig> = serde_json::from_str(formatted)
            .map_err(|e| StaticNetworkError::Format(e.to_string()))?;

        let per_host: Vec<Result<Vec<NetworkConfigFile>, StaticNetworkError>> =
            std::thread::scope(|scope| {
                let handles: Vec<_> = configs
                    .iter()
                    .enumerate()
                    .map(|(host, config)| scope.spawn(move || self.host_files(host, config)))
                    .collect();
                handles
                    .into_iter()
                    .enumerate()
                    .map(|(host, handle)| {
                        handle.join().unwrap_or_else(|_| {
                            Err(StaticNetworkError::Tool {
                                tool: self.tool.clone(),
                                message: format!("generation thread for host {} panicked", host),
                            })
                        })
                    })
                    .collect()
            });

        let mut files = Vec::new();
        for result in per_host {
            files.extend(result?);
        }
        Ok(files)
    }
}
