//! Wires concrete adapters into assets from a `GeneratorConfig`

use crate::assets::{BaseIso, NmStateConfig, StreamIsoDownloader};
use crate::config::GeneratorConfig;
use crate::infrastructure::{
    HttpStreamFetcher, ImageCache, NmstatectlService, OcRelease, ReleaseConfig, StreamSource,
    SystemExecutor,
};

/// Builds assets backed by the system tools and the network
pub struct AssetFactory<'a> {
    config: &'a GeneratorConfig,
}

impl<'a> AssetFactory<'a> {
    pub fn new(config: &'a GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn base_iso(&self) -> BaseIso {
        let image = &self.config.image;
        let extract = &self.config.extract;
        let cache_dir = image.cache_dir();

        let release = OcRelease::new(
            Box::new(SystemExecutor::new()),
            ReleaseConfig {
                tool: extract.tool.clone(),
                max_tries: extract.max_tries,
                retry_delay: extract.retry_delay(),
                cache_dir: cache_dir.clone(),
            },
        );
        let stream = HttpStreamFetcher::new(StreamSource::parse(&image.stream_url))
            .with_timeout(image.metadata_timeout());
        let image_cache = match image.download_timeout() {
            Some(timeout) => ImageCache::new(cache_dir).with_timeout(timeout),
            None => ImageCache::new(cache_dir),
        };
        let downloader = StreamIsoDownloader::new(
            Box::new(stream),
            Box::new(image_cache),
            image.architecture.clone(),
        );

        let base_iso = BaseIso::new(Box::new(release), Box::new(downloader))
            .with_architecture(image.architecture.clone());
        match &image.cached_filename {
            Some(filename) => base_iso.with_cached_filename(filename.clone()),
            None => base_iso,
        }
    }

    pub fn static_network_service(&self) -> NmstatectlService {
        NmstatectlService::new(Box::new(SystemExecutor::new()))
            .with_tool(self.config.network.tool.clone())
            .with_max_concurrent_generations(self.config.network.max_concurrent_generations)
    }

    pub fn nmstate_config(&self) -> NmStateConfig {
        NmStateConfig::new(Box::new(self.static_network_service()))
    }
}
