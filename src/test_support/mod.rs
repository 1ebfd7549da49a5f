//! Test utilities and fakes for projmeta unit tests.
//!
//! # Example
//!
//! ```rust,ignore
//! use projmeta::test_support::RecordingProperties;
//!
//! #[test]
//! fn test_example() {
//!     let props = RecordingProperties::new(&[("TargetFramework", "net8.0")]);
//!     // ... exercise code under test ...
//!     assert_eq!(props.lookups(), vec!["TargetFramework"]);
//! }
//! ```

use std::cell::RefCell;
use std::collections::HashMap;

use crate::core::properties::PropertyLookup;

/// In-memory property source that records every lookup.
///
/// Used to assert which properties a resolution path actually reads.
#[derive(Debug, Default)]
pub struct RecordingProperties {
    values: HashMap<String, String>,
    lookups: RefCell<Vec<String>>,
}

impl RecordingProperties {
    /// Create a recording source preloaded with `(name, value)` pairs.
    pub fn new(pairs: &[(&str, &str)]) -> Self {
        RecordingProperties {
            values: pairs
                .iter()
                .map(|&(name, value)| (name.to_string(), value.to_string()))
                .collect(),
            lookups: RefCell::new(Vec::new()),
        }
    }

    /// The property names looked up so far, in order.
    pub fn lookups(&self) -> Vec<String> {
        self.lookups.borrow().clone()
    }
}

impl PropertyLookup for RecordingProperties {
    fn property_value(&self, name: &str) -> String {
        self.lookups.borrow_mut().push(name.to_string());
        self.values.get(name).cloned().unwrap_or_default()
    }
}
