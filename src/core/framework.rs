//! Target framework moniker resolution.
//!
//! Maps the framework properties of an evaluated project to a single
//! normalized moniker string such as `net472` or `netstandard2.0`.
//! SDK-style projects state the moniker directly; legacy projects
//! describe it as identifier + version (+ profile), and one legacy
//! portable-library shape requires reading a `project.json` sidecar.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use serde::Deserialize;

use crate::core::errors::FrameworkError;
use crate::core::properties::{
    PropertyLookup, PROJECT_DIRECTORY, TARGET_FRAMEWORK, TARGET_FRAMEWORKS,
    TARGET_FRAMEWORK_IDENTIFIER, TARGET_FRAMEWORK_PROFILE, TARGET_FRAMEWORK_VERSION,
};

/// File name of the legacy portable-library sidecar manifest.
pub const LEGACY_MANIFEST_NAME: &str = "project.json";

/// Portable class library profile -> netstandard version suffix.
///
/// Fixed by the PCL compatibility matrix; profiles not listed here have
/// no netstandard equivalent.
static PCL_TO_NETSTANDARD: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("Profile7", "1.1"),
        ("Profile31", "1.0"),
        ("Profile32", "1.2"),
        ("Profile44", "1.2"),
        ("Profile49", "1.0"),
        ("Profile78", "1.0"),
        ("Profile84", "1.0"),
        ("Profile111", "1.1"),
        ("Profile151", "1.2"),
        ("Profile157", "1.0"),
        ("Profile259", "1.0"),
    ])
});

/// The `frameworks` section is the only part of project.json consumed.
#[derive(Debug, Deserialize)]
struct LegacyManifest {
    #[serde(default)]
    frameworks: serde_json::Map<String, serde_json::Value>,
}

/// Resolve the target framework moniker for an evaluated project.
///
/// Evaluated in order, first success wins:
/// 1. a non-empty `TargetFramework` is returned verbatim;
/// 2. a non-empty `TargetFrameworks` (multi-targeting list) is returned
///    verbatim;
/// 3. otherwise the moniker is assembled from `TargetFrameworkIdentifier`
///    and `TargetFrameworkVersion`, going through the PCL profile table
///    or the `project.json` sidecar for `.NETPortable` projects.
pub fn target_framework(project: &dyn PropertyLookup) -> Result<String, FrameworkError> {
    let tf = project.property_value(TARGET_FRAMEWORK);
    if !tf.is_empty() {
        return Ok(tf);
    }
    let tfs = project.property_value(TARGET_FRAMEWORKS);
    if !tfs.is_empty() {
        return Ok(tfs);
    }

    let identifier = project.property_value(TARGET_FRAMEWORK_IDENTIFIER);
    if identifier.is_empty() {
        return Err(FrameworkError::MissingProperty {
            name: TARGET_FRAMEWORK_IDENTIFIER,
        });
    }

    let prefix = match identifier.as_str() {
        ".NETFramework" => "net",
        ".NETStandard" => "netstandard",
        ".NETCoreApp" => "netcoreapp",
        ".NETPortable" => "netstandard",
        _ => return Err(FrameworkError::UnknownIdentifier { identifier }),
    };

    let version = project.property_value(TARGET_FRAMEWORK_VERSION);

    if identifier == ".NETPortable" {
        let profile = project.property_value(TARGET_FRAMEWORK_PROFILE);

        // Profile-less v5.0 portable projects carry their real target in
        // a project.json sidecar next to the project file.
        if profile.is_empty() && version == "v5.0" {
            return moniker_from_legacy_manifest(project);
        }

        let suffix = PCL_TO_NETSTANDARD
            .get(profile.as_str())
            .ok_or(FrameworkError::UnknownProfile { profile })?;
        tracing::debug!(identifier = %identifier, suffix, "mapped portable profile to netstandard");
        return Ok(format!("{prefix}{suffix}"));
    }

    if version.is_empty() {
        return Err(FrameworkError::MissingProperty {
            name: TARGET_FRAMEWORK_VERSION,
        });
    }

    // `v4.7.2` -> `4.7.2`; only the single leading marker is stripped.
    let version = version.strip_prefix('v').unwrap_or(&version);
    Ok(format!("{prefix}{version}"))
}

/// Read the moniker from `<MSBuildProjectDirectory>/project.json`.
///
/// The sidecar must contain a `frameworks` object with exactly one
/// entry; that entry's key is the moniker.
fn moniker_from_legacy_manifest(project: &dyn PropertyLookup) -> Result<String, FrameworkError> {
    let project_dir = project.property_value(PROJECT_DIRECTORY);
    let path = Path::new(&project_dir).join(LEGACY_MANIFEST_NAME);

    let contents = fs::read_to_string(&path).map_err(|source| FrameworkError::ManifestRead {
        path: path.clone(),
        source,
    })?;

    let manifest: LegacyManifest =
        serde_json::from_str(&contents).map_err(|err| FrameworkError::ManifestParse {
            path: path.clone(),
            reason: err.to_string(),
        })?;

    let mut monikers = manifest.frameworks.keys();
    match (monikers.next(), monikers.next()) {
        (Some(moniker), None) => {
            tracing::debug!(moniker = %moniker, path = %path.display(), "resolved moniker from legacy manifest");
            Ok(moniker.clone())
        }
        _ => Err(FrameworkError::ManifestParse {
            path,
            reason: format!(
                "expected exactly one entry under `frameworks`, found {}",
                manifest.frameworks.len()
            ),
        }),
    }
}
