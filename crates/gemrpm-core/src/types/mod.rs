//! Core data types for gemrpm.
//!
//! This module provides the fundamental types used throughout the gemrpm crates:
//! - Version literals in the RubyGems dialect
//! - Requirement operators and tokens
//! - Package and dependency specifications

pub mod dependency;
pub mod package;
pub mod requirement;
pub mod version;

// Re-export all public types
pub use dependency::DependencySpec;
pub use package::{PackageSpec, RpmName, RUBYGEMS_CAPABILITY};
pub use requirement::{Op, Requirement};
pub use version::{GemVersion, VersionError};
