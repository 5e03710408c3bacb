//! Gem version to RPM version translation
//!
//! RPM sorts `1.2.3~dev` before `1.2.3`, which is how RubyGems orders
//! prereleases. Only the separator in front of the first non-numeric
//! component becomes a tilde; everything after it is kept verbatim.

use gemrpm_core::GemVersion;

/// Render a gem version in RPM syntax
pub fn translate(version: &GemVersion) -> String {
    let components = version.components();

    match version.prerelease_index() {
        Some(index) if index > 0 => format!(
            "{}~{}",
            components[..index].join("."),
            components[index..].join(".")
        ),
        _ => version.to_string(),
    }
}
