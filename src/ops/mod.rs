//! Operations composed from core types.

pub mod log_properties;

pub use log_properties::log_project_properties;
