//! Common utilities for benchmarks

use criterion::Criterion;
use gemrpm_config::{ManifestFile, RequirementList};
use gemrpm_core::{DependencySpec, GemVersion, PackageSpec};
use pprof::criterion::{Output, PProfProfiler};

/// Configure criterion with flamegraph profiling support
pub fn criterion_config() -> Criterion {
    Criterion::default()
        .warm_up_time(std::time::Duration::from_secs(3))
        .measurement_time(std::time::Duration::from_secs(10))
        .sample_size(100)
        .with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)))
}

/// Requirement sets cycled through by the synthetic manifests
const REQUIREMENT_SETS: &[&[&str]] = &[
    &[],
    &[">= 1.0"],
    &["~> 2.3.1"],
    &["~> 1.2", "!= 1.2.7"],
    &["> 0.1", "<= 4.8.beta2"],
    &["!= 3.0"],
    &["= 1.0.0.rc1"],
];

/// Synthetic manifest with `dep_count` dependencies
pub fn manifest_with_dependencies(dep_count: usize) -> ManifestFile {
    (0..dep_count).fold(ManifestFile::new("bench", "1.2.3.dev"), |manifest, i| {
        let tokens = REQUIREMENT_SETS[i % REQUIREMENT_SETS.len()]
            .iter()
            .map(|token| token.to_string())
            .collect();
        manifest.with_dependency(format!("dep-{}", i), RequirementList::Many(tokens))
    })
}

/// Synthetic package specification with `dep_count` dependencies
pub fn package_with_dependencies(name: &str, dep_count: usize) -> PackageSpec {
    let version = GemVersion::parse("1.2.3").expect("valid benchmark version");
    (0..dep_count).fold(PackageSpec::new(name, version), |spec, i| {
        let tokens = REQUIREMENT_SETS[i % REQUIREMENT_SETS.len()];
        let dependency = DependencySpec::parse(format!("dep-{}", i), tokens)
            .expect("valid benchmark requirements");
        spec.with_dependency(dependency)
    })
}
