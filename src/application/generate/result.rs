//! Generate result

use std::path::PathBuf;

/// What a generate run produced
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateResult {
    /// Files written into the asset directory
    pub written: Vec<PathBuf>,
    /// Location of the acquired base image
    pub base_iso: Option<PathBuf>,
    /// The network manifest was reloaded instead of synthesized
    pub manifest_reused: bool,
}
