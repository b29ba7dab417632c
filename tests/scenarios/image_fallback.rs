//! Base image acquisition across the extraction and download strategies.

use std::fs;
use std::path::PathBuf;

use agentgen::application::load_inputs;
use agentgen::domain::ports::{ExtractError, IsoSource};
use agentgen::infrastructure::DirectoryFetcher;
use agentgen::{Asset, AssetError, AssetResult, BaseIso, WritableAsset};

use crate::common::{FixedExtractor, FixedIsoSource, TestEnv};

struct UnreachableStream;

impl IsoSource for UnreachableStream {
    fn describe(&self) -> &'static str {
        "unreachable"
    }

    fn fetch_iso(&self) -> AssetResult<PathBuf> {
        Err(AssetError::MetadataLookup {
            what: "architecture".to_string(),
            arch: "x86_64".to_string(),
        })
    }
}

fn failed_extraction() -> FixedExtractor {
    FixedExtractor(Err(ExtractError::Failed {
        command: "oc adm release info".to_string(),
        message: "unauthorized".to_string(),
    }))
}

#[test]
fn extracted_image_wins_when_release_is_declared() {
    let env = TestEnv::with_all_inputs();
    let extracted = env.join("coreos-x86_64.iso");
    fs::write(&extracted, "iso").unwrap();
    let parents = load_inputs(&DirectoryFetcher::new(env.path())).unwrap();

    let mut base_iso = BaseIso::new(
        Box::new(FixedExtractor(Ok(extracted.clone()))),
        Box::new(UnreachableStream),
    );
    base_iso.generate(&parents).unwrap();

    assert_eq!(base_iso.files()[0].filename(), extracted.as_path());
    assert!(base_iso.files()[0].data().is_empty());
}

#[test]
fn download_is_used_when_extraction_fails() {
    let env = TestEnv::with_all_inputs();
    let downloaded = env.join("downloaded.iso");
    fs::write(&downloaded, "iso").unwrap();
    let parents = load_inputs(&DirectoryFetcher::new(env.path())).unwrap();

    let mut base_iso = BaseIso::new(
        Box::new(failed_extraction()),
        Box::new(FixedIsoSource(downloaded.clone())),
    );
    base_iso.generate(&parents).unwrap();

    assert_eq!(base_iso.files()[0].filename(), downloaded.as_path());
}

#[test]
fn extraction_error_is_reported_when_both_fail() {
    let env = TestEnv::with_all_inputs();
    let parents = load_inputs(&DirectoryFetcher::new(env.path())).unwrap();

    let mut base_iso = BaseIso::new(Box::new(failed_extraction()), Box::new(UnreachableStream));
    let err = base_iso.generate(&parents).unwrap_err();

    assert!(matches!(err, AssetError::Extraction { .. }));
    assert!(err.to_string().contains("unauthorized"));
    assert!(base_iso.files().is_empty());
}

#[test]
fn download_error_is_reported_without_release_image() {
    let env = TestEnv::new().with_file("agent-config.yaml", crate::common::AGENT_CONFIG);
    let parents = load_inputs(&DirectoryFetcher::new(env.path())).unwrap();

    let mut base_iso = BaseIso::new(Box::new(failed_extraction()), Box::new(UnreachableStream));
    let err = base_iso.generate(&parents).unwrap_err();

    assert!(matches!(err, AssetError::MetadataLookup { .. }));
}
