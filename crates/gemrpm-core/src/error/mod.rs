//! Error types and result aliases for gemrpm operations.
//!
//! Provides a unified error type covering the translation failures and the
//! manifest failures the driver can hit, with actionable error messages.

use crate::types::VersionError;
use thiserror::Error;

/// Unified error type for all gemrpm operations
#[derive(Error, Debug)]
pub enum GemRpmError {
    // Translation errors
    #[error("Malformed requirement '{requirement}': {reason}")]
    MalformedRequirement { requirement: String, reason: String },

    #[error("Malformed version '{version}'")]
    MalformedVersion {
        version: String,
        #[source]
        source: VersionError,
    },

    #[error("Unknown operator '{operator}' in requirement '{requirement}'")]
    UnknownOperator {
        operator: String,
        requirement: String,
    },

    // Manifest errors
    #[error("Failed to parse manifest: {message}")]
    ManifestParse { message: String },

    #[error("Manifest field '{field}' is invalid: {reason}")]
    ManifestValidation { field: String, reason: String },

    #[error("In manifest {path}")]
    InManifest {
        path: String,
        #[source]
        source: Box<GemRpmError>,
    },

    // IO errors
    #[error("IO error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for gemrpm operations
pub type GemRpmResult<T> = Result<T, GemRpmError>;

impl GemRpmError {
    /// Create an IO error from std::io::Error
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Attach the manifest path to an error
    pub fn in_manifest(path: impl Into<String>, source: GemRpmError) -> Self {
        Self::InManifest {
            path: path.into(),
            source: Box::new(source),
        }
    }

    /// The underlying error, looking through manifest context
    pub fn root(&self) -> &GemRpmError {
        match self {
            GemRpmError::InManifest { source, .. } => source.root(),
            other => other,
        }
    }

    /// Get a user-friendly suggestion for fixing this error
    pub fn suggestion(&self) -> Option<&'static str> {
        match self.root() {
            GemRpmError::MalformedRequirement { .. } => {
                Some("Requirements are written as '<operator> <version>', e.g. '>= 1.2'")
            },
            GemRpmError::MalformedVersion { .. } => {
                Some("Versions are dot-separated alphanumeric components, e.g. '1.2.3.dev'")
            },
            GemRpmError::UnknownOperator { .. } => {
                Some("Supported operators are =, !=, >, >=, <, <= and ~>")
            },
            GemRpmError::ManifestParse { .. } => {
                Some("Manifests are TOML or JSON with 'name', 'version' and 'dependencies'")
            },
            _ => None,
        }
    }
}

impl From<VersionError> for GemRpmError {
    fn from(source: VersionError) -> Self {
        let version = match &source {
            VersionError::Empty => String::new(),
            VersionError::EmptyComponent { input }
            | VersionError::InvalidComponent { input, .. }
            | VersionError::NothingToBump { input } => input.clone(),
            VersionError::InvalidNumber { component } => component.clone(),
        };
        Self::MalformedVersion { version, source }
    }
}
