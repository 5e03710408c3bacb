//! TOML gem manifest parsing and serialization

use gemrpm_core::error::GemRpmError;

use crate::manifest::ManifestFile;
use crate::ConfigResult;

/// Parse a TOML manifest
pub fn parse_manifest_toml(content: &str) -> ConfigResult<ManifestFile> {
    toml::from_str(content).map_err(|e| GemRpmError::ManifestParse {
        message: format!("TOML parsing error: {}", e),
    })
}

/// Serialize a manifest to TOML
pub fn serialize_manifest_toml(manifest: &ManifestFile) -> ConfigResult<String> {
    toml::to_string_pretty(manifest).map_err(|e| GemRpmError::ManifestParse {
        message: format!("TOML serialization error: {}", e),
    })
}
