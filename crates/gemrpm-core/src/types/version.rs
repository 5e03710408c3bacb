//! RubyGems version literals.
//!
//! A gem version is a dot-separated list of components. Purely numeric
//! components form the release part; the first component containing a letter
//! starts the prerelease tail (`1.2.3.dev`, `2.0.0.rc1`).

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Dot-separated RubyGems version (1.2.3, 1.2.3.dev.2)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GemVersion {
    components: Vec<String>,
}

/// Version parsing and validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    #[error("Version literal is empty")]
    Empty,

    #[error("Empty component in version: {input}")]
    EmptyComponent { input: String },

    #[error("Invalid component '{component}' in version: {input}")]
    InvalidComponent { input: String, component: String },

    #[error("Invalid number in version: {component}")]
    InvalidNumber { component: String },

    #[error("No release component to bump in version: {input}")]
    NothingToBump { input: String },
}

impl GemVersion {
    /// Parse a version literal
    pub fn parse(input: &str) -> Result<Self, VersionError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(VersionError::Empty);
        }

        let mut components = Vec::new();
        for component in input.split('.') {
            if component.is_empty() {
                return Err(VersionError::EmptyComponent {
                    input: input.to_string(),
                });
            }
            if !component.bytes().all(|b| b.is_ascii_alphanumeric()) {
                return Err(VersionError::InvalidComponent {
                    input: input.to_string(),
                    component: component.to_string(),
                });
            }
            components.push(component.to_string());
        }

        Ok(Self { components })
    }

    /// All components in order
    pub fn components(&self) -> &[String] {
        &self.components
    }

    /// Index of the first non-numeric component, if any
    pub fn prerelease_index(&self) -> Option<usize> {
        self.components.iter().position(|c| !is_numeric(c))
    }

    /// Check if this is a prerelease version
    pub fn is_prerelease(&self) -> bool {
        self.prerelease_index().is_some()
    }

    /// Numeric components preceding the prerelease tail
    pub fn release(&self) -> &[String] {
        let end = self.prerelease_index().unwrap_or(self.components.len());
        &self.components[..end]
    }

    /// Next version that changes the second-least-significant release component.
    ///
    /// The prerelease tail is discarded, then the last release component is
    /// dropped unless it is the only one, and the new last one is incremented:
    /// `1.2.3` → `1.3`, `1.2` → `2`, `3` → `4`, `1.2.3.dev` → `1.3`.
    pub fn bump(&self) -> Result<GemVersion, VersionError> {
        let mut segments = self
            .release()
            .iter()
            .map(|c| {
                c.parse::<u64>().map_err(|_| VersionError::InvalidNumber {
                    component: c.clone(),
                })
            })
            .collect::<Result<Vec<u64>, _>>()?;

        if segments.len() > 1 {
            segments.pop();
        }

        let Some(last) = segments.last_mut() else {
            return Err(VersionError::NothingToBump {
                input: self.to_string(),
            });
        };
        *last = last.checked_add(1).ok_or_else(|| VersionError::InvalidNumber {
            component: last.to_string(),
        })?;

        Ok(GemVersion {
            components: segments.iter().map(u64::to_string).collect(),
        })
    }
}

fn is_numeric(component: &str) -> bool {
    component.bytes().all(|b| b.is_ascii_digit())
}

impl FromStr for GemVersion {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for GemVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.components.join("."))
    }
}
