//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod asset;
pub mod command_executor;
pub mod file_fetcher;
pub mod image_downloader;
pub mod image_extractor;
pub mod iso_source;
pub mod static_network;
pub mod stream_metadata;

pub use asset::{Asset, AssetId, Parents, WritableAsset};
pub use command_executor::{CommandExecutor, CommandOutput};
pub use file_fetcher::{FetchError, FileFetcher};
pub use image_downloader::{DownloadError, ImageDownloader};
pub use image_extractor::{ExtractError, ExtractRequest, ImageExtractor};
pub use iso_source::IsoSource;
pub use static_network::{NetworkConfigFile, StaticNetworkError, StaticNetworkService};
pub use stream_metadata::{
    ImageFormat, PlatformArtifacts, StreamArch, StreamArtifact, StreamError, StreamMetadata,
    StreamMetadataFetcher,
};
