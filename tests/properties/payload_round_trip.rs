//! Property tests for the generate-then-load round trip.

use proptest::prelude::*;

use agentgen::assets::nmstate_config_filename;
use agentgen::domain::entities::{
    AgentConfigBody, AgentConfigMeta, AgentConfigSpec, HostSpec, InterfaceBinding, NetConfig,
};
use agentgen::infrastructure::MemoryFetcher;
use agentgen::{AgentConfig, Asset, NmStateConfig, Parents, WritableAsset};

use crate::common::AcceptingNetworkService;

/// Arbitrary nmstate-shaped payload as raw text, with lists either flush
/// with their key or indented under it
fn network_payload() -> impl Strategy<Value = String> {
    let address = (1u8..=254, 1u8..=254, 8u8..=32)
        .prop_map(|(a, b, prefix)| (format!("10.{a}.{b}.1"), prefix));
    (
        "[a-z]{2,6}[0-9]",
        proptest::collection::vec(address, 0..3),
        any::<bool>(),
        proptest::option::of(1000u32..9000),
        prop_oneof![Just(""), Just("  ")],
    )
        .prop_map(|(name, addresses, enabled, mtu, indent)| {
            let mut yaml = format!("interfaces:\n{indent}- name: {name}\n");
            yaml.push_str(&format!("{indent}  type: ethernet\n{indent}  state: up\n"));
            if let Some(mtu) = mtu {
                yaml.push_str(&format!("{indent}  mtu: {mtu}\n"));
            }
            yaml.push_str(&format!("{indent}  ipv4:\n{indent}    enabled: {enabled}\n"));
            if !addresses.is_empty() {
                yaml.push_str(&format!("{indent}    address:\n"));
                for (ip, prefix) in addresses {
                    yaml.push_str(&format!("{indent}    {indent}- ip: {ip}\n"));
                    yaml.push_str(&format!("{indent}    {indent}  prefix-length: {prefix}\n"));
                }
            }
            yaml
        })
}

fn hosts() -> impl Strategy<Value = Vec<HostSpec>> {
    proptest::collection::vec(network_payload(), 1..5).prop_map(|payloads| {
        payloads
            .into_iter()
            .enumerate()
            .map(|(i, payload)| HostSpec {
                hostname: Some(format!("master-{i}")),
                interfaces: vec![InterfaceBinding::new("eth0", format!("52:54:01:00:00:{i:02x}"))],
                network_config: NetConfig::from_raw(payload),
            })
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: load(generate(x)) reproduces every record and raw payload byte for byte.
    #[test]
    fn property_generate_then_load_round_trips(hosts in hosts()) {
        let inputs: Vec<NetConfig> = hosts.iter().map(|h| h.network_config.clone()).collect();
        let agent_config = AgentConfig::from_spec(AgentConfigSpec {
            api_version: None,
            metadata: AgentConfigMeta {
                name: "ostest".to_string(),
                namespace: "cluster0".to_string(),
            },
            spec: AgentConfigBody { hosts },
        });

        let mut generated = NmStateConfig::new(Box::new(AcceptingNetworkService));
        generated.generate(&Parents::new().with(agent_config)).unwrap();
        let file = generated.file().unwrap().clone();

        let fetcher = MemoryFetcher::new().with_file(nmstate_config_filename(), file.data().to_vec());
        let mut loaded = NmStateConfig::new(Box::new(AcceptingNetworkService));
        prop_assert!(loaded.load(&fetcher).unwrap());

        prop_assert_eq!(loaded.records(), generated.records());
        for ((a, b), input) in loaded.records().iter().zip(generated.records()).zip(&inputs) {
            prop_assert_eq!(a.config().raw(), b.config().raw());
            let expected = input.canonical().unwrap();
            prop_assert_eq!(a.config().raw(), expected.raw());
        }
        prop_assert_eq!(loaded.static_network_config(), generated.static_network_config());
        prop_assert_eq!(loaded.file().unwrap().data(), file.data());
    }
}
