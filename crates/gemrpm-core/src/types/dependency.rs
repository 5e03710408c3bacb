//! Dependency specification types.
//!
//! A dependency names a gem and carries its requirements in gemspec order.

use super::Requirement;
use crate::error::GemRpmResult;

/// Runtime dependency of a gem
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencySpec {
    pub name: String,
    pub requirements: Vec<Requirement>,
}

impl DependencySpec {
    /// Create a dependency from raw requirement tokens
    pub fn parse<S: AsRef<str>>(name: impl Into<String>, tokens: &[S]) -> GemRpmResult<Self> {
        let requirements = tokens
            .iter()
            .map(|token| Requirement::parse(token.as_ref()))
            .collect::<GemRpmResult<Vec<_>>>()?;

        Ok(Self {
            name: name.into(),
            requirements,
        })
    }

    /// Check if any version of the gem satisfies this dependency
    pub fn is_bare(&self) -> bool {
        self.requirements.is_empty()
    }

    /// Check if every requirement is an exclusion (and there is at least one)
    pub fn is_exclusion_only(&self) -> bool {
        !self.requirements.is_empty() && self.requirements.iter().all(|r| r.op.is_exclusion())
    }
}
