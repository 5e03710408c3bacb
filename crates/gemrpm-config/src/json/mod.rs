//! JSON gem manifest parsing and serialization

use gemrpm_core::error::GemRpmError;

use crate::manifest::ManifestFile;
use crate::ConfigResult;

/// Parse a JSON manifest
pub fn parse_manifest_json(content: &str) -> ConfigResult<ManifestFile> {
    serde_json::from_str(content).map_err(|e| GemRpmError::ManifestParse {
        message: format!("JSON parsing error: {}", e),
    })
}

/// Serialize a manifest to pretty-printed JSON
pub fn serialize_manifest_json(manifest: &ManifestFile) -> ConfigResult<String> {
    serde_json::to_string_pretty(manifest).map_err(|e| GemRpmError::ManifestParse {
        message: format!("JSON serialization error: {}", e),
    })
}
