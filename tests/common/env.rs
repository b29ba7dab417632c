//! Isolated asset directory for tests

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use super::fixtures::{AGENT_CONFIG, CLUSTER_IMAGE_SET, PULL_SECRET, REGISTRIES_CONF};

pub struct TestEnv {
    dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp asset dir"),
        }
    }

    /// Asset directory with every input file present
    pub fn with_all_inputs() -> Self {
        Self::new()
            .with_file("agent-config.yaml", AGENT_CONFIG)
            .with_file("cluster-manifests/cluster-image-set.yaml", CLUSTER_IMAGE_SET)
            .with_file("cluster-manifests/pull-secret.yaml", PULL_SECRET)
            .with_file("mirror/registries.conf", REGISTRIES_CONF)
    }

    pub fn with_file(self, name: &str, content: &str) -> Self {
        let path = self.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent dir");
        }
        fs::write(&path, content).expect("write fixture");
        self
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn join(&self, name: &str) -> PathBuf {
        self.path().join(name)
    }

    pub fn read(&self, name: &str) -> String {
        fs::read_to_string(self.join(name)).expect("read asset file")
    }
}
