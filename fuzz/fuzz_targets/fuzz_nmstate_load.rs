#![no_main]

use agentgen::assets::{nmstate_config_filename, NmStateConfig};
use agentgen::domain::entities::StaticNetworkConfig;
use agentgen::domain::ports::{NetworkConfigFile, StaticNetworkError, StaticNetworkService};
use agentgen::infrastructure::MemoryFetcher;
use agentgen::WritableAsset;
use libfuzzer_sys::fuzz_target;

struct AcceptAll;

impl StaticNetworkService for AcceptAll {
    fn validate_static_config_params(
        &self,
        _: &[StaticNetworkConfig],
    ) -> Result<(), StaticNetworkError> {
        Ok(())
    }

    fn format_static_network_config_for_db(
        &self,
        _: &[StaticNetworkConfig],
    ) -> Result<String, StaticNetworkError> {
        Ok(String::new())
    }

    fn generate_static_network_config_data(
        &self,
        _: &str,
    ) -> Result<Vec<NetworkConfigFile>, StaticNetworkError> {
        Ok(Vec::new())
    }
}

fuzz_target!(|data: &[u8]| {
    let fetcher = MemoryFetcher::new().with_file(nmstate_config_filename(), data.to_vec());
    let mut asset = NmStateConfig::new(Box::new(AcceptAll));
    if asset.load(&fetcher).is_ok() {
        let _ = asset.node_zero_ip();
    }
});
