//! File System Implementations
//!
//! Concrete implementations of the FileFetcher port plus the asset writer.

mod directory;
mod memory;

pub use directory::{atomic_write, AssetWriter, DirectoryFetcher};
pub use memory::MemoryFetcher;
