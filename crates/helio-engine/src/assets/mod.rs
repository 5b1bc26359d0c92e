pub mod manifest;
pub mod registry;

use thiserror::Error;

/// Errors from the asset manifest and texture registry.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to parse asset manifest: {0}")]
    Manifest(#[from] serde_json::Error),
    #[error("texture '{0}' is not in the manifest")]
    UnknownTexture(String),
}
