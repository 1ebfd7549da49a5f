//! Dump an evaluated project's properties to a log file.
//!
//! Used when diagnosing why a project resolves the way it does: one
//! `Name = Value` line per property, sorted by name so two dumps diff
//! cleanly.

use std::path::Path;

use anyhow::Result;

use crate::core::properties::PropertyBag;
use crate::util;

/// Write all properties of `project` to `log_path`, sorted by name.
pub fn log_project_properties(project: &PropertyBag, log_path: &Path) -> Result<()> {
    let mut out = String::new();
    for (name, value) in project.iter_sorted() {
        out.push_str(name);
        out.push_str(" = ");
        out.push_str(value);
        out.push('\n');
    }

    util::fs::write_string(log_path, &out)?;
    tracing::debug!(count = project.len(), path = %log_path.display(), "logged project properties");
    Ok(())
}
