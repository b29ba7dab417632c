//! Error types for agentgen
//!
//! Uses `thiserror` for library errors. Each port carries its own error
//! enum; `AssetError` is what an asset's `generate`/`load` surfaces.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::{
    DownloadError, ExtractError, FetchError, StaticNetworkError, StreamError,
};
use crate::domain::services::multidoc::DecodeError;
use crate::domain::services::node_zero::NodeZeroError;
use crate::domain::value_objects::FieldErrors;

/// Result type alias for asset operations
pub type AssetResult<T> = Result<T, AssetError>;

/// Main error type for asset generation and reload
#[derive(Error, Debug)]
pub enum AssetError {
    /// Release payload extraction failed; surfaced when the download fallback failed too
    #[error("failed to get base ISO image: {source}")]
    Extraction {
        #[source]
        source: ExtractError,
    },

    /// Stream metadata could not be fetched or parsed
    #[error("failed to fetch OS image stream metadata: {0}")]
    Metadata(#[from] StreamError),

    /// Architecture, artifact or format missing from stream metadata
    #[error("no {what} found in OS image stream for {arch}")]
    MetadataLookup { what: String, arch: String },

    /// Transfer into the local image cache failed
    #[error("failed to download base ISO image {url}: {source}")]
    Download {
        url: String,
        #[source]
        source: DownloadError,
    },

    /// An acquisition strategy reported a path that does not exist
    #[error("image {path} reported by {strategy} does not exist")]
    MissingImage { path: PathBuf, strategy: String },

    /// Persisted file could not be fetched (other than not found)
    #[error("failed to load file {file}: {source}")]
    Fetch {
        file: PathBuf,
        #[source]
        source: FetchError,
    },

    /// Persisted multi-document YAML is malformed
    #[error("could not decode YAML for {file}: {source}")]
    Decode {
        file: PathBuf,
        #[source]
        source: DecodeError,
    },

    /// Single YAML input file is malformed
    #[error("invalid YAML in {file}: {source}")]
    Yaml {
        file: PathBuf,
        #[source]
        source: serde_yaml_ng::Error,
    },

    /// TOML input file is malformed
    #[error("invalid TOML in {file}: {source}")]
    Toml {
        file: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A record could not be rendered as YAML
    #[error("failed to marshal {kind}: {source}")]
    Serialize {
        kind: &'static str,
        #[source]
        source: serde_yaml_ng::Error,
    },

    /// Aggregated field validation failures
    #[error("invalid {kind} configuration: {errors}")]
    Validation {
        kind: &'static str,
        errors: FieldErrors,
    },

    /// Static network cross-validation or generation rejected the configuration
    #[error("{context}: {source}")]
    StaticNetwork {
        context: &'static str,
        #[source]
        source: StaticNetworkError,
    },

    /// Generated files could not be written to the asset directory
    #[error("failed to write asset files: {0}")]
    Persist(#[source] std::io::Error),

    /// A query needs a persisted manifest that does not exist
    #[error("{} not found; run generate first", file.display())]
    MissingManifest { file: PathBuf },

    /// No records after generate or load
    #[error("missing configuration or manifest file")]
    MissingConfiguration,

    /// Node-zero IP could not be determined
    #[error(transparent)]
    NodeZero(#[from] NodeZeroError),
}
