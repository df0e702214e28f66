//! Table-level options.
//!
//! Options can be built in code or loaded from YAML:
//!
//! ```rust
//! use boxhead::{SelectionPolicy, TableOptions};
//!
//! let options = TableOptions::from_yaml("empty_selection: ignore\n").unwrap();
//! assert_eq!(options.empty_selection, SelectionPolicy::Ignore);
//! assert!(options.auto_align);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{BoxheadError, Result};

/// What a directive does when its selection resolves to no columns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionPolicy {
    /// Fail with [`BoxheadError::EmptySelection`].
    #[default]
    Error,
    /// Return the table unchanged.
    Ignore,
}

/// Options stored on a [`Table`](crate::Table).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableOptions {
    /// Handling of empty column selections.
    pub empty_selection: SelectionPolicy,
    /// Let renderers align columns by content when no alignment was set.
    pub auto_align: bool,
}

impl Default for TableOptions {
    fn default() -> Self {
        TableOptions {
            empty_selection: SelectionPolicy::Error,
            auto_align: true,
        }
    }
}

impl TableOptions {
    /// Parse options from YAML. Missing keys take their defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(|e| BoxheadError::InvalidOptions(e.to_string()))
    }

    pub fn empty_selection(mut self, policy: SelectionPolicy) -> Self {
        self.empty_selection = policy;
        self
    }

    pub fn auto_align(mut self, auto_align: bool) -> Self {
        self.auto_align = auto_align;
        self
    }
}
