//! Generate Use Case
//!
//! Resolves the fixed asset order: the user inputs first, then the network
//! manifest (reloaded when already persisted), then the base image.

use tracing::{debug, info};

use crate::assets::{AgentConfig, BaseIso, ClusterManifests, NmStateConfig, RegistriesConf};
use crate::domain::ports::{Asset, FileFetcher, Parents, WritableAsset};
use crate::error::{AssetError, AssetResult};
use crate::infrastructure::AssetWriter;

use super::result::GenerateResult;

/// Load an asset, falling back to generating it from `parents`.
///
/// Returns `true` when the asset was reloaded.
pub fn load_or_generate<A: WritableAsset>(
    asset: &mut A,
    fetcher: &dyn FileFetcher,
    parents: &Parents,
) -> AssetResult<bool> {
    if asset.load(fetcher)? {
        debug!("Loaded {} from asset directory", asset.name());
        return Ok(true);
    }

    let missing = parents.missing(&asset.dependencies());
    if !missing.is_empty() {
        debug!("{} is missing dependencies: {:?}", asset.name(), missing);
    }
    asset.generate(parents)?;
    Ok(false)
}

/// Load the user-supplied inputs every generated asset depends on
pub fn load_inputs(fetcher: &dyn FileFetcher) -> AssetResult<Parents> {
    let mut parents = Parents::new();

    let mut agent_config = AgentConfig::default();
    load_or_generate(&mut agent_config, fetcher, &parents)?;
    parents.add(agent_config);

    let mut manifests = ClusterManifests::default();
    load_or_generate(&mut manifests, fetcher, &parents)?;
    parents.add(manifests);

    let mut registries = RegistriesConf::default();
    load_or_generate(&mut registries, fetcher, &parents)?;
    parents.add(registries);

    Ok(parents)
}

/// Generate use case - produces the network manifest and the base image
pub struct GenerateUseCase {
    nmstate_config: NmStateConfig,
    base_iso: BaseIso,
}

impl GenerateUseCase {
    pub fn new(nmstate_config: NmStateConfig, base_iso: BaseIso) -> Self {
        Self {
            nmstate_config,
            base_iso,
        }
    }

    pub fn nmstate_config(&self) -> &NmStateConfig {
        &self.nmstate_config
    }

    pub fn base_iso(&self) -> &BaseIso {
        &self.base_iso
    }

    /// Run the whole pipeline and persist what was synthesized
    pub fn execute(
        &mut self,
        fetcher: &dyn FileFetcher,
        writer: &AssetWriter,
    ) -> AssetResult<GenerateResult> {
        let parents = load_inputs(fetcher)?;
        let mut result = GenerateResult::default();

        info!("Resolving {}", self.nmstate_config.name());
        result.manifest_reused = load_or_generate(&mut self.nmstate_config, fetcher, &parents)?;
        if !result.manifest_reused {
            let written = writer
                .persist(&self.nmstate_config.files())
                .map_err(AssetError::Persist)?;
            result.written.extend(written);
        }

        info!("Resolving {}", self.base_iso.name());
        load_or_generate(&mut self.base_iso, fetcher, &parents)?;
        result.base_iso = self
            .base_iso
            .files()
            .first()
            .map(|file| file.filename().to_path_buf());

        Ok(result)
    }
}
