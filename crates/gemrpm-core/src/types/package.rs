//! Package specification types.
//!
//! A PackageSpec is the fully resolved view of a gemspec: its name, its
//! version and its runtime dependencies in declaration order.

use super::{DependencySpec, GemVersion};
use std::fmt;

/// Capability every gem package requires from the RubyGems runtime
pub const RUBYGEMS_CAPABILITY: &str = "ruby(rubygems)";

/// Resolved package specification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageSpec {
    pub name: String,
    pub version: GemVersion,
    pub dependencies: Vec<DependencySpec>,
}

/// RPM capability name of a gem, rendered as `rubygem(<name>)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RpmName<'a>(pub &'a str);

impl PackageSpec {
    /// Create a package specification without dependencies
    pub fn new(name: impl Into<String>, version: GemVersion) -> Self {
        Self {
            name: name.into(),
            version,
            dependencies: Vec::new(),
        }
    }

    /// Append a dependency
    pub fn with_dependency(mut self, dependency: DependencySpec) -> Self {
        self.dependencies.push(dependency);
        self
    }

    /// RPM capability name of this package
    pub fn rpm_name(&self) -> RpmName<'_> {
        RpmName(&self.name)
    }

    /// Check if this is a valid gem name
    pub fn is_valid_name(name: &str) -> bool {
        !name.is_empty()
            && name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
            && !name.starts_with(['-', '.'])
    }
}

impl fmt::Display for RpmName<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rubygem({})", self.0)
    }
}
