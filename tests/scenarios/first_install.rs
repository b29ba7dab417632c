//! First run over a fresh asset directory, then a rerun that reuses the manifest.

use std::fs;

use agentgen::assets::nmstate_config_filename;
use agentgen::domain::ports::ExtractError;
use agentgen::infrastructure::{AssetWriter, DirectoryFetcher};
use agentgen::{BaseIso, GenerateUseCase, InspectUseCase, NmStateConfig};

use crate::common::{AcceptingNetworkService, FixedExtractor, FixedIsoSource, TestEnv};

fn use_case(env: &TestEnv) -> GenerateUseCase {
    let iso = env.join("downloaded.iso");
    fs::write(&iso, "iso").unwrap();
    GenerateUseCase::new(
        NmStateConfig::new(Box::new(AcceptingNetworkService)),
        BaseIso::new(
            Box::new(FixedExtractor(Err(ExtractError::ToolUnavailable {
                tool: "oc".to_string(),
                message: "not found".to_string(),
            }))),
            Box::new(FixedIsoSource(iso)),
        ),
    )
}

#[test]
fn first_install_writes_manifest_for_every_host() {
    let env = TestEnv::with_all_inputs();
    let fetcher = DirectoryFetcher::new(env.path());
    let writer = AssetWriter::new(env.path());

    let result = use_case(&env).execute(&fetcher, &writer).unwrap();

    assert_eq!(result.written, vec![env.path().join(nmstate_config_filename())]);
    assert_eq!(result.base_iso, Some(env.join("downloaded.iso")));

    let manifest = env.read("cluster-manifests/nmstateconfig.yaml");
    let first = manifest.find("name: ostest-0").unwrap();
    let second = manifest.find("name: ostest-1").unwrap();
    assert!(first < second);
    assert_eq!(manifest.lines().filter(|l| *l == "---").count(), 2);
    assert!(manifest.contains("infraenvs.agent-install.openshift.io: ostest"));
    assert!(manifest.contains("macAddress: 52:54:01:bb:bb:b1"));
}

#[test]
fn persisted_manifest_answers_queries() {
    let env = TestEnv::with_all_inputs();
    let fetcher = DirectoryFetcher::new(env.path());
    use_case(&env)
        .execute(&fetcher, &AssetWriter::new(env.path()))
        .unwrap();

    let inspect =
        InspectUseCase::load(NmStateConfig::new(Box::new(AcceptingNetworkService)), &fetcher)
            .unwrap();

    assert_eq!(inspect.record_names(), vec!["ostest-0", "ostest-1"]);
    assert_eq!(inspect.node_zero_ip().unwrap(), "192.168.111.80");

    let files = inspect.network_config_files().unwrap();
    assert_eq!(files.len(), 2);
    assert_eq!(files[1].file_contents, "52:54:01:bb:bb:b1=eth0\n");
}

#[test]
fn rerun_reuses_persisted_manifest() {
    let env = TestEnv::with_all_inputs();
    let fetcher = DirectoryFetcher::new(env.path());
    let writer = AssetWriter::new(env.path());
    use_case(&env).execute(&fetcher, &writer).unwrap();
    let before = env.read("cluster-manifests/nmstateconfig.yaml");

    let result = use_case(&env).execute(&fetcher, &writer).unwrap();

    assert!(result.manifest_reused);
    assert!(result.written.is_empty());
    assert_eq!(env.read("cluster-manifests/nmstateconfig.yaml"), before);
}
