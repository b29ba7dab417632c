//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Asset directory fetcher and writer, in-memory fetcher
//! - `exec` - System command executor
//! - `release` - `oc` release payload extractor
//! - `stream` - OS image stream metadata fetcher
//! - `cache` - Content-addressed image download cache
//! - `nmstate` - `nmstatectl` static network service

pub mod cache;
pub mod exec;
pub mod fs;
pub mod nmstate;
pub mod release;
pub mod stream;

// Re-export for convenience
pub use cache::{default_cache_dir, ImageCache};
pub use exec::SystemExecutor;
pub use fs::{AssetWriter, DirectoryFetcher, MemoryFetcher};
pub use nmstate::{NmstatectlService, DEFAULT_MAX_CONCURRENT_GENERATIONS};
pub use release::{OcRelease, ReleaseConfig, DEFAULT_MAX_TRIES, DEFAULT_RETRY_DELAY};
pub use stream::{HttpStreamFetcher, StreamSource, DEFAULT_METADATA_TIMEOUT, DEFAULT_STREAM_URL};
