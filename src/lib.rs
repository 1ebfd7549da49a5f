//! Projmeta - build metadata extraction for evaluated MSBuild projects
//!
//! This crate provides the core library functionality for projmeta,
//! including target framework moniker resolution, legacy package
//! reference enumeration, and property logging. It consumes a property
//! bag that an external project-evaluation engine has already computed;
//! it never parses project files itself.

pub mod core;
pub mod ops;
pub mod util;

/// Test utilities and fakes for projmeta unit tests.
///
/// This module is only available when compiling with `--cfg test` or
/// running tests. It provides an in-memory recording implementation of
/// the property-lookup capability.
#[cfg(test)]
pub mod test_support;

pub use crate::core::errors::FrameworkError;
pub use crate::core::framework::target_framework;
pub use crate::core::packages::{read_package_references, PackageReference};
pub use crate::core::properties::{PropertyBag, PropertyLookup};
