//! A user hand-edits the persisted manifest before the next run.

use agentgen::assets::nmstate_config_filename;
use agentgen::infrastructure::{AssetWriter, DirectoryFetcher};
use agentgen::{Asset, AssetError, InspectUseCase, NmStateConfig, WritableAsset};

use crate::common::{AcceptingNetworkService, TestEnv};

const UNLABELLED: &str = r#"apiVersion: agent-install.openshift.io/v1beta1
kind: NMStateConfig
metadata:
  name: edited-0
  namespace: cluster0
spec:
  interfaces:
  - name: eth0
    macAddress: 52:54:01:aa:aa:a1
---
apiVersion: agent-install.openshift.io/v1beta1
kind: NMStateConfig
metadata:
  name: edited-1
  namespace: cluster0
spec:
  interfaces:
  - name: eth0
    macAddress: 52:54:01:aa:aa:a2
---
"#;

#[test]
fn removed_labels_are_reported_per_record() {
    let env = TestEnv::new().with_file("cluster-manifests/nmstateconfig.yaml", UNLABELLED);

    let err = InspectUseCase::load(
        NmStateConfig::new(Box::new(AcceptingNetworkService)),
        &DirectoryFetcher::new(env.path()),
    )
    .err()
    .unwrap();

    let message = err.to_string();
    assert!(matches!(err, AssetError::Validation { .. }));
    assert!(message.contains("edited-0 does not have any label set"), "{message}");
    assert!(message.contains("edited-1 does not have any label set"), "{message}");
}

#[test]
fn broken_yaml_aborts_load() {
    let env = TestEnv::new().with_file(
        "cluster-manifests/nmstateconfig.yaml",
        "metadata:\n  name: [unclosed\n---\n",
    );
    let mut asset = NmStateConfig::new(Box::new(AcceptingNetworkService));

    let err = asset.load(&DirectoryFetcher::new(env.path())).unwrap_err();

    assert!(matches!(err, AssetError::Decode { .. }));
    assert!(asset.records().is_empty());
}

#[test]
fn generated_manifest_is_independent_of_agent_config_formatting() {
    let compact = "metadata: {name: ostest, namespace: cluster0}\nspec:\n  hosts:\n  - interfaces: [{name: eth0, macAddress: '52:54:01:aa:aa:a1'}]\n    networkConfig: {interfaces: [{name: eth0, type: ethernet}]}\n";
    let env = TestEnv::new().with_file("agent-config.yaml", compact);
    let parents = agentgen::application::load_inputs(&DirectoryFetcher::new(env.path())).unwrap();

    let mut asset = NmStateConfig::new(Box::new(AcceptingNetworkService));
    asset.generate(&parents).unwrap();
    AssetWriter::new(env.path()).persist(&asset.files()).unwrap();

    let manifest = env.read(&nmstate_config_filename().display().to_string());
    assert!(manifest.contains("  config:\n    interfaces:\n    - name: eth0\n      type: ethernet\n"), "{manifest}");
}
