//! # gemrpm-core
//!
//! Core types shared across all gemrpm crates.
//!
//! This crate provides:
//! - GemVersion, the dot-separated RubyGems version literal
//! - Op and Requirement, the RubyGems requirement dialect
//! - PackageSpec and DependencySpec, the resolved package specification
//! - GemRpmError enum for unified error handling
//!
//! ## Architecture
//!
//! The crate is organized into modules:
//! - `types`: Core data types (GemVersion, Requirement, PackageSpec, etc.)
//! - `error`: Error types and result aliases

pub mod error;
pub mod types;

// Re-export commonly used types
pub use error::{GemRpmError, GemRpmResult};
pub use types::{
    DependencySpec, GemVersion, Op, PackageSpec, Requirement, RpmName, VersionError,
    RUBYGEMS_CAPABILITY,
};
