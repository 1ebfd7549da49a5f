//! Core data structures and resolution logic for projmeta.
//!
//! This module contains the foundational types used throughout projmeta:
//! - The property-lookup capability and its in-memory implementation
//! - Target framework moniker resolution
//! - Legacy packages.config enumeration

pub mod errors;
pub mod framework;
pub mod packages;
pub mod properties;

pub use errors::FrameworkError;
pub use framework::target_framework;
pub use packages::{read_package_references, PackageReference};
pub use properties::{PropertyBag, PropertyLookup};
