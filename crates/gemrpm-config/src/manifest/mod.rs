//! Gem manifest model shared by the TOML and JSON readers

use gemrpm_core::error::GemRpmError;
use gemrpm_core::{DependencySpec, GemVersion, PackageSpec};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::ConfigResult;

/// On-disk gem manifest
///
/// ```toml
/// name = "foo"
/// version = "1.2.3"
///
/// [dependencies]
/// bar = ">= 2.3"
/// baz = ["~> 1.2", "!= 1.2.7"]
/// quz = []
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestFile {
    /// Gem name (required)
    pub name: String,

    /// Gem version (required)
    pub version: String,

    /// Runtime dependencies in declaration order
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub dependencies: IndexMap<String, RequirementList>,
}

/// Requirements of one dependency (single token or list)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RequirementList {
    /// Single requirement token
    Single(String),

    /// Requirement tokens in order; empty means any version
    Many(Vec<String>),
}

impl RequirementList {
    /// Requirement tokens in order
    pub fn tokens(&self) -> &[String] {
        match self {
            RequirementList::Single(token) => std::slice::from_ref(token),
            RequirementList::Many(tokens) => tokens,
        }
    }
}

impl ManifestFile {
    /// Create a manifest without dependencies
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            dependencies: IndexMap::new(),
        }
    }

    /// Append a dependency
    pub fn with_dependency(mut self, name: impl Into<String>, requirements: RequirementList) -> Self {
        self.dependencies.insert(name.into(), requirements);
        self
    }

    /// Validate the manifest and build the package specification
    pub fn to_package_spec(&self) -> ConfigResult<PackageSpec> {
        validate_name("name", &self.name)?;
        let version = GemVersion::parse(&self.version)?;

        let mut spec = PackageSpec::new(self.name.clone(), version);
        for (name, requirements) in &self.dependencies {
            validate_name(&format!("dependencies.{}", name), name)?;
            spec = spec.with_dependency(DependencySpec::parse(name.clone(), requirements.tokens())?);
        }

        Ok(spec)
    }
}

impl From<&PackageSpec> for ManifestFile {
    fn from(spec: &PackageSpec) -> Self {
        let dependencies = spec
            .dependencies
            .iter()
            .map(|dep| {
                let tokens = dep.requirements.iter().map(ToString::to_string).collect();
                (dep.name.clone(), RequirementList::Many(tokens))
            })
            .collect();

        Self {
            name: spec.name.clone(),
            version: spec.version.to_string(),
            dependencies,
        }
    }
}

fn validate_name(field: &str, name: &str) -> ConfigResult<()> {
    if name.is_empty() {
        return Err(GemRpmError::ManifestValidation {
            field: field.to_string(),
            reason: "gem name is required".to_string(),
        });
    }

    if !PackageSpec::is_valid_name(name) {
        return Err(GemRpmError::ManifestValidation {
            field: field.to_string(),
            reason: format!(
                "invalid gem name '{}'. Gem names may contain letters, digits, '-', '_' and '.'",
                name
            ),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_package_spec() {
        let manifest = ManifestFile::new("foo", "1.2.3")
            .with_dependency("bar", RequirementList::Single(">= 2.3".to_string()))
            .with_dependency(
                "baz",
                RequirementList::Many(vec!["~> 1.2".to_string(), "!= 1.2.7".to_string()]),
            )
            .with_dependency("quz", RequirementList::Many(Vec::new()));

        let spec = manifest.to_package_spec().unwrap();
        assert_eq!(spec.name, "foo");
        assert_eq!(spec.version.to_string(), "1.2.3");

        let names: Vec<&str> = spec.dependencies.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["bar", "baz", "quz"]);
        assert_eq!(spec.dependencies[1].requirements.len(), 2);
        assert!(spec.dependencies[2].is_bare());
    }

    #[test]
    fn test_invalid_names() {
        let err = ManifestFile::new("", "1.0").to_package_spec().unwrap_err();
        assert!(matches!(err, GemRpmError::ManifestValidation { ref field, .. } if field == "name"));

        let err = ManifestFile::new("foo", "1.0")
            .with_dependency("bad name", RequirementList::Many(Vec::new()))
            .to_package_spec()
            .unwrap_err();
        assert!(matches!(
            err,
            GemRpmError::ManifestValidation { ref field, .. } if field == "dependencies.bad name"
        ));
    }

    #[test]
    fn test_invalid_version_and_requirement() {
        let err = ManifestFile::new("foo", "1..2").to_package_spec().unwrap_err();
        assert!(matches!(err, GemRpmError::MalformedVersion { .. }));

        let err = ManifestFile::new("foo", "1.0")
            .with_dependency("bar", RequirementList::Single("=> 1.0".to_string()))
            .to_package_spec()
            .unwrap_err();
        assert!(matches!(err, GemRpmError::UnknownOperator { .. }));
    }

    #[test]
    fn test_from_package_spec() {
        let spec = ManifestFile::new("foo", "1.2.3.dev")
            .with_dependency("bar", RequirementList::Single(">=2.3".to_string()))
            .to_package_spec()
            .unwrap();

        let manifest = ManifestFile::from(&spec);
        assert_eq!(manifest.version, "1.2.3.dev");
        assert_eq!(manifest.dependencies["bar"].tokens(), &[">= 2.3".to_string()]);
        assert_eq!(manifest.to_package_spec().unwrap(), spec);
    }
}
