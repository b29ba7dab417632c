//! IsoSource port - pluggable fallback strategy for obtaining the base ISO

use std::path::PathBuf;

use crate::error::AssetResult;

/// Obtains a base ISO without a release payload
pub trait IsoSource {
    /// Short label used in log messages
    fn describe(&self) -> &'static str;

    fn fetch_iso(&self) -> AssetResult<PathBuf>;
}
