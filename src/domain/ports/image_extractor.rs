//! ImageExtractor port - pulls the base ISO out of a release payload

use std::path::PathBuf;

use crate::domain::entities::MirrorConfig;

/// Extraction failures
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExtractError {
    /// The extraction binary is not installed; the operator has been told already
    #[error("{tool} is not available: {message}")]
    ToolUnavailable { tool: String, message: String },

    /// The tool ran and failed, or produced no image
    #[error("`{command}` failed: {message}")]
    Failed { command: String, message: String },
}

impl ExtractError {
    pub fn is_tool_unavailable(&self) -> bool {
        matches!(self, ExtractError::ToolUnavailable { .. })
    }
}

/// Everything the extractor needs for one run
#[derive(Debug, Clone, Copy)]
pub struct ExtractRequest<'a> {
    pub release_image: &'a str,
    pub pull_secret: &'a str,
    pub architecture: &'a str,
    pub mirror_config: Option<&'a MirrorConfig>,
}

/// Extracts a bootable image from a release payload
pub trait ImageExtractor {
    fn extract_base_iso(&self, request: &ExtractRequest<'_>) -> Result<PathBuf, ExtractError>;
}
