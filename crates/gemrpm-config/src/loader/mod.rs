//! Manifest discovery, format detection and loading

use std::fmt;

use camino::{Utf8Path, Utf8PathBuf};
use gemrpm_core::error::GemRpmError;
use gemrpm_core::PackageSpec;
use tracing::debug;

use crate::manifest::ManifestFile;
use crate::ConfigResult;

/// Serialization format of a manifest
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestFormat {
    Toml,
    Json,
}

/// Where a package specification was loaded from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestSource {
    pub path: Utf8PathBuf,
    pub format: ManifestFormat,
}

/// Loads manifests relative to a working directory
#[derive(Debug, Clone)]
pub struct ManifestLoader {
    cwd: Utf8PathBuf,
}

impl ManifestFormat {
    /// Detect the format from the file extension
    pub fn from_path(path: &Utf8Path) -> Option<Self> {
        match path.extension() {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Some(ManifestFormat::Toml),
            Some(ext) if ext.eq_ignore_ascii_case("json") => Some(ManifestFormat::Json),
            _ => None,
        }
    }

    /// Parse manifest content in this format
    pub fn parse(&self, content: &str) -> ConfigResult<ManifestFile> {
        match self {
            ManifestFormat::Toml => crate::toml::parse_manifest_toml(content),
            ManifestFormat::Json => crate::json::parse_manifest_json(content),
        }
    }
}

impl fmt::Display for ManifestFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ManifestFormat::Toml => f.write_str("TOML"),
            ManifestFormat::Json => f.write_str("JSON"),
        }
    }
}

/// Parse manifest content, sniffing the format when it is not known.
///
/// Without a format, TOML is tried first and JSON second.
pub fn parse_manifest(
    content: &str,
    format: Option<ManifestFormat>,
) -> ConfigResult<(ManifestFile, ManifestFormat)> {
    if let Some(format) = format {
        return format.parse(content).map(|manifest| (manifest, format));
    }

    match ManifestFormat::Toml.parse(content) {
        Ok(manifest) => Ok((manifest, ManifestFormat::Toml)),
        Err(toml_err) => match ManifestFormat::Json.parse(content) {
            Ok(manifest) => Ok((manifest, ManifestFormat::Json)),
            Err(_) => Err(toml_err),
        },
    }
}

impl ManifestLoader {
    /// Create a new manifest loader
    pub fn new(cwd: Utf8PathBuf) -> Self {
        Self { cwd }
    }

    /// Resolve a manifest path against the working directory
    pub fn resolve_path(&self, path: &Utf8Path) -> Utf8PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.cwd.join(path)
        }
    }

    /// Load and validate one manifest
    pub async fn load(&self, path: &Utf8Path) -> ConfigResult<(PackageSpec, ManifestSource)> {
        let resolved = self.resolve_path(path);
        let content = tokio::fs::read_to_string(&resolved)
            .await
            .map_err(|e| GemRpmError::io(format!("Failed to read {}", resolved), e))?;

        let (manifest, format) = parse_manifest(&content, ManifestFormat::from_path(&resolved))
            .map_err(|e| GemRpmError::in_manifest(resolved.as_str(), e))?;
        let spec = manifest
            .to_package_spec()
            .map_err(|e| GemRpmError::in_manifest(resolved.as_str(), e))?;

        debug!(
            "Loaded {} {} from {} ({} dependencies)",
            spec.name,
            spec.version,
            resolved,
            spec.dependencies.len()
        );

        Ok((
            spec,
            ManifestSource {
                path: resolved,
                format,
            },
        ))
    }

    /// Load several manifests concurrently, returning them in input order
    pub async fn load_all(
        &self,
        paths: &[Utf8PathBuf],
    ) -> ConfigResult<Vec<(PackageSpec, ManifestSource)>> {
        let handles: Vec<_> = paths
            .iter()
            .cloned()
            .map(|path| {
                let loader = self.clone();
                tokio::spawn(async move { loader.load(&path).await })
            })
            .collect();

        let mut loaded = Vec::with_capacity(handles.len());
        for handle in handles {
            let manifest = handle.await.map_err(|e| {
                GemRpmError::io("Manifest loading task failed", std::io::Error::other(e))
            })??;
            loaded.push(manifest);
        }

        Ok(loaded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn utf8_dir(temp_dir: &TempDir) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(temp_dir.path().to_path_buf()).unwrap()
    }

    #[test]
    fn test_format_detection() {
        assert_eq!(
            ManifestFormat::from_path(Utf8Path::new("foo.toml")),
            Some(ManifestFormat::Toml)
        );
        assert_eq!(
            ManifestFormat::from_path(Utf8Path::new("dir/foo.JSON")),
            Some(ManifestFormat::Json)
        );
        assert_eq!(ManifestFormat::from_path(Utf8Path::new("foo.gemspec")), None);
        assert_eq!(ManifestFormat::from_path(Utf8Path::new("foo")), None);
        assert_eq!(ManifestFormat::Toml.to_string(), "TOML");
        assert_eq!(ManifestFormat::Json.to_string(), "JSON");
    }

    #[test]
    fn test_parse_manifest_sniffs_format() {
        let (_, format) = parse_manifest("name = \"foo\"\nversion = \"1.0\"\n", None).unwrap();
        assert_eq!(format, ManifestFormat::Toml);

        let (_, format) = parse_manifest(r#"{"name": "foo", "version": "1.0"}"#, None).unwrap();
        assert_eq!(format, ManifestFormat::Json);

        assert!(parse_manifest("not a manifest", None).is_err());
    }

    #[tokio::test]
    async fn test_load_relative_path() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(
            temp_dir.path().join("foo.toml"),
            "name = \"foo\"\nversion = \"1.2.3\"\n\n[dependencies]\nbar = \"!= 2.4\"\n",
        )
        .unwrap();

        let loader = ManifestLoader::new(utf8_dir(&temp_dir));
        let (spec, source) = loader.load(Utf8Path::new("foo.toml")).await.unwrap();

        assert_eq!(spec.name, "foo");
        assert_eq!(spec.dependencies.len(), 1);
        assert_eq!(source.format, ManifestFormat::Toml);
        assert_eq!(source.path, utf8_dir(&temp_dir).join("foo.toml"));
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let loader = ManifestLoader::new(utf8_dir(&temp_dir));

        let err = loader.load(Utf8Path::new("missing.toml")).await.unwrap_err();
        assert!(matches!(err, GemRpmError::Io { .. }));
    }

    #[tokio::test]
    async fn test_load_attaches_path_to_translation_errors() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(
            temp_dir.path().join("bad.json"),
            r#"{"name": "foo", "version": "1.0", "dependencies": {"bar": "1.0"}}"#,
        )
        .unwrap();

        let loader = ManifestLoader::new(utf8_dir(&temp_dir));
        let err = loader.load(Utf8Path::new("bad.json")).await.unwrap_err();

        match &err {
            GemRpmError::InManifest { path, .. } => assert!(path.ends_with("bad.json")),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(matches!(err.root(), GemRpmError::MalformedRequirement { .. }));
    }

    #[tokio::test]
    async fn test_load_all_keeps_order() {
        let temp_dir = tempfile::tempdir().unwrap();
        let names = ["zeta", "alpha", "mid"];
        for name in names {
            fs::write(
                temp_dir.path().join(format!("{name}.json")),
                format!(r#"{{"name": "{name}", "version": "1.0"}}"#),
            )
            .unwrap();
        }

        let loader = ManifestLoader::new(utf8_dir(&temp_dir));
        let paths: Vec<Utf8PathBuf> = names
            .iter()
            .map(|name| Utf8PathBuf::from(format!("{name}.json")))
            .collect();
        let loaded = loader.load_all(&paths).await.unwrap();

        let loaded_names: Vec<&str> = loaded.iter().map(|(s, _)| s.name.as_str()).collect();
        assert_eq!(loaded_names, names);
        for ((_, source), name) in loaded.iter().zip(names) {
            assert_eq!(source.format, ManifestFormat::Json);
            assert_eq!(source.path, utf8_dir(&temp_dir).join(format!("{name}.json")));
        }
    }
}
