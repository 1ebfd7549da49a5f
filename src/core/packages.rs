//! Legacy NuGet packages.config enumeration.
//!
//! Pre-PackageReference projects list their dependencies in a
//! `packages.config` file next to the project file:
//!
//! ```xml
//! <packages>
//!   <package id="Newtonsoft.Json" version="13.0.3" targetFramework="net472" />
//! </packages>
//! ```

use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::core::properties::{PropertyLookup, PROJECT_DIRECTORY};
use crate::util;

/// File name of the legacy NuGet dependency list.
pub const PACKAGES_CONFIG_NAME: &str = "packages.config";

/// One `<package>` entry from packages.config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageReference {
    /// NuGet package id
    pub id: String,

    /// Package version, verbatim from the file
    pub version: String,

    /// Framework the package was installed for, if recorded
    pub target_framework: Option<String>,

    /// Whether the package is a development-only dependency
    pub development_dependency: bool,
}

/// Read the package references of an evaluated project.
///
/// Looks for `packages.config` in `MSBuildProjectDirectory`. A missing
/// file is an error; projects without legacy packages simply have no
/// such file and callers are expected to check first or treat the
/// failure as "no legacy packages".
pub fn read_package_references(project: &dyn PropertyLookup) -> Result<Vec<PackageReference>> {
    let project_dir = project.property_value(PROJECT_DIRECTORY);
    let path = Path::new(&project_dir).join(PACKAGES_CONFIG_NAME);

    let contents = util::fs::read_to_string(&path)?;
    let packages = parse_packages_config(&contents)
        .with_context(|| format!("failed to parse {}", path.display()))?;

    tracing::debug!(count = packages.len(), path = %path.display(), "read package references");
    Ok(packages)
}

/// Parse packages.config content.
pub fn parse_packages_config(contents: &str) -> Result<Vec<PackageReference>> {
    let doc = roxmltree::Document::parse(contents).context("malformed XML")?;

    let root = doc.root_element();
    if root.tag_name().name() != "packages" {
        bail!("expected root element `packages`, found `{}`", root.tag_name().name());
    }

    let mut packages = Vec::new();
    for node in root.children().filter(|n| n.is_element()) {
        if node.tag_name().name() != "package" {
            continue;
        }

        let id = node
            .attribute("id")
            .with_context(|| "package entry is missing the `id` attribute")?;
        let version = node
            .attribute("version")
            .with_context(|| format!("package `{id}` is missing the `version` attribute"))?;

        packages.push(PackageReference {
            id: id.to_string(),
            version: version.to_string(),
            target_framework: node.attribute("targetFramework").map(str::to_string),
            development_dependency: node.attribute("developmentDependency") == Some("true"),
        });
    }

    Ok(packages)
}
