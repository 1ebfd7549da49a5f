//! Framework resolution error types.
//!
//! Every error is terminal for the current resolution call: no retries,
//! no partial results. Nothing is logged here; the caller decides how to
//! surface the failure (typically by skipping the project).

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Common suggestion messages for consistent error surfacing.
pub mod suggestions {
    /// Suggestion when a required framework property is missing.
    pub const EVALUATE_FULL_IMPORTS: &str =
        "help: evaluate the project with its full import graph so framework properties are populated";

    /// Suggestion when a portable class library profile is unrecognized.
    pub const RETARGET_PCL: &str =
        "help: retarget the portable class library to .NET Standard";

    /// Suggestion when the legacy project.json sidecar is broken.
    pub const FIX_PROJECT_JSON: &str =
        "help: ensure project.json has exactly one entry under `frameworks`";
}

/// Error during target framework moniker resolution.
#[derive(Debug, Error)]
pub enum FrameworkError {
    #[error("required property `{name}` is not set")]
    MissingProperty { name: &'static str },

    #[error("unknown TargetFrameworkIdentifier `{identifier}`")]
    UnknownIdentifier { identifier: String },

    #[error("unknown portable class library profile `{profile}`")]
    UnknownProfile { profile: String },

    #[error("failed to read legacy manifest {}", .path.display())]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed legacy manifest {}: {reason}", .path.display())]
    ManifestParse { path: PathBuf, reason: String },
}

impl FrameworkError {
    /// An actionable suggestion for the user, when one exists.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            FrameworkError::MissingProperty { .. } => Some(suggestions::EVALUATE_FULL_IMPORTS),
            FrameworkError::UnknownProfile { .. } => Some(suggestions::RETARGET_PCL),
            FrameworkError::ManifestParse { .. } => Some(suggestions::FIX_PROJECT_JSON),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_the_offending_value() {
        let err = FrameworkError::UnknownIdentifier {
            identifier: ".NETMicroFramework".to_string(),
        };
        assert!(err.to_string().contains(".NETMicroFramework"));
    }

    #[test]
    fn test_missing_property_suggestion() {
        let err = FrameworkError::MissingProperty {
            name: "TargetFrameworkIdentifier",
        };
        assert_eq!(err.suggestion(), Some(suggestions::EVALUATE_FULL_IMPORTS));
    }

    #[test]
    fn test_manifest_read_has_no_suggestion() {
        let err = FrameworkError::ManifestRead {
            path: PathBuf::from("/proj/project.json"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.suggestion().is_none());
        assert!(err.to_string().contains("project.json"));
    }
}
