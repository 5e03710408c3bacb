//! Manifest parsing for gemrpm
//!
//! This crate reads gem manifests written in TOML or JSON and turns them into
//! the resolved `PackageSpec` the translation engine works on.

pub mod json;
pub mod loader;
pub mod manifest;
pub mod toml;

// Re-export main types
pub use loader::{ManifestFormat, ManifestLoader, ManifestSource};
pub use manifest::{ManifestFile, RequirementList};

use gemrpm_core::error::GemRpmError;

/// Result type for manifest operations
pub type ConfigResult<T> = Result<T, GemRpmError>;
