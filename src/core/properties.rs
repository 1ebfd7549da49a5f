//! The property-lookup capability and its in-memory implementation.
//!
//! MSBuild evaluation produces a flat, case-sensitive map from property
//! names to string values. Resolution code only ever needs single-key
//! lookups, so the capability is a one-method trait; tests and embedders
//! that hold the full evaluated set use [`PropertyBag`].

use std::collections::HashMap;

/// `TargetFramework` - the SDK-style single framework moniker.
pub const TARGET_FRAMEWORK: &str = "TargetFramework";

/// `TargetFrameworks` - the SDK-style multi-targeting moniker list.
pub const TARGET_FRAMEWORKS: &str = "TargetFrameworks";

/// `TargetFrameworkIdentifier` - legacy framework family, e.g. `.NETFramework`.
pub const TARGET_FRAMEWORK_IDENTIFIER: &str = "TargetFrameworkIdentifier";

/// `TargetFrameworkVersion` - legacy framework version, e.g. `v4.7.2`.
pub const TARGET_FRAMEWORK_VERSION: &str = "TargetFrameworkVersion";

/// `TargetFrameworkProfile` - portable class library profile, e.g. `Profile7`.
pub const TARGET_FRAMEWORK_PROFILE: &str = "TargetFrameworkProfile";

/// `MSBuildProjectDirectory` - directory containing the project file.
pub const PROJECT_DIRECTORY: &str = "MSBuildProjectDirectory";

/// Read access to an evaluated project's properties.
///
/// The convention throughout MSBuild is that an unset property evaluates
/// to the empty string, so this trait carries no `Option`: callers
/// distinguish "unset" from "set to empty" only by the empty-string
/// convention, exactly as the evaluation engine does.
pub trait PropertyLookup {
    /// The evaluated value of `name`, or the empty string when unset.
    fn property_value(&self, name: &str) -> String;
}

/// An owned, in-memory snapshot of evaluated project properties.
///
/// Keys are case-sensitive property names. The bag is read-only from the
/// resolver's perspective; mutation happens only while the embedder is
/// assembling it.
#[derive(Debug, Clone, Default)]
pub struct PropertyBag {
    values: HashMap<String, String>,
}

impl PropertyBag {
    /// Create an empty property bag.
    pub fn new() -> Self {
        PropertyBag::default()
    }

    /// Set a property, replacing any previous value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    /// Number of properties in the bag.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the bag holds no properties.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// All properties as `(name, value)` pairs, sorted by name.
    pub fn iter_sorted(&self) -> Vec<(&str, &str)> {
        let mut pairs: Vec<(&str, &str)> = self
            .values
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
            .collect();
        pairs.sort_by_key(|&(name, _)| name);
        pairs
    }
}

impl PropertyLookup for PropertyBag {
    fn property_value(&self, name: &str) -> String {
        self.values.get(name).cloned().unwrap_or_default()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PropertyBag {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        PropertyBag {
            values: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}
