//! Property tests for generated record naming and ordering.

use proptest::prelude::*;

use agentgen::domain::entities::{
    AgentConfigBody, AgentConfigMeta, AgentConfigSpec, HostSpec, InterfaceBinding, NetConfig,
};
use agentgen::{AgentConfig, Asset, NmStateConfig, Parents};

use crate::common::AcceptingNetworkService;

fn base_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z0-9-]{0,12}").unwrap()
}

fn mac() -> impl Strategy<Value = String> {
    proptest::collection::vec(any::<u8>(), 6).prop_map(|bytes| {
        bytes
            .iter()
            .map(|b| format!("{:02x}", b))
            .collect::<Vec<_>>()
            .join(":")
    })
}

fn host() -> impl Strategy<Value = HostSpec> {
    proptest::collection::vec(("eth[0-9]", mac()), 1..=3).prop_map(|nics| HostSpec {
        hostname: None,
        interfaces: nics
            .into_iter()
            .map(|(name, mac)| InterfaceBinding::new(name, mac))
            .collect(),
        network_config: NetConfig::default(),
    })
}

fn agent_config(name: String, hosts: Vec<HostSpec>) -> AgentConfig {
    AgentConfig::from_spec(AgentConfigSpec {
        api_version: None,
        metadata: AgentConfigMeta {
            name,
            namespace: "cluster0".to_string(),
        },
        spec: AgentConfigBody { hosts },
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: record i is named `<base>-i` and carries host i's bindings in order.
    #[test]
    fn property_records_follow_host_order(
        name in base_name(),
        hosts in proptest::collection::vec(host(), 1..6),
    ) {
        let mut asset = NmStateConfig::new(Box::new(AcceptingNetworkService));
        let parents = Parents::new().with(agent_config(name.clone(), hosts.clone()));

        asset.generate(&parents).unwrap();

        prop_assert_eq!(asset.records().len(), hosts.len());
        prop_assert_eq!(asset.static_network_config().len(), hosts.len());
        for (i, (record, host)) in asset.records().iter().zip(&hosts).enumerate() {
            prop_assert_eq!(record.name(), format!("{}-{}", name, i));
            prop_assert_eq!(record.interfaces(), host.interfaces.as_slice());

            let map = &asset.static_network_config()[i].mac_interface_map;
            prop_assert_eq!(map.len(), host.interfaces.len());
            for (entry, binding) in map.iter().zip(&host.interfaces) {
                prop_assert_eq!(&entry.mac_address, &binding.mac_address);
                prop_assert_eq!(&entry.logical_nic_name, &binding.name);
            }
        }
    }

    /// PROPERTY: the persisted file holds exactly one terminated document per host.
    #[test]
    fn property_one_document_per_host(
        name in base_name(),
        hosts in proptest::collection::vec(host(), 1..6),
    ) {
        let mut asset = NmStateConfig::new(Box::new(AcceptingNetworkService));
        asset.generate(&Parents::new().with(agent_config(name, hosts.clone()))).unwrap();

        let data = String::from_utf8(asset.file().unwrap().data().to_vec()).unwrap();
        let separators = data.lines().filter(|line| *line == "---").count();
        prop_assert_eq!(separators, hosts.len());
        prop_assert!(data.ends_with("---\n"));
    }
}
