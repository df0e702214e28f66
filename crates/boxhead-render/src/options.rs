//! Output modes and render options.

use serde::{Deserialize, Serialize};

use crate::error::{RenderError, Result};

/// Target format for [`render`](crate::render).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Aligned text with heading styles applied
    Term,
    /// Aligned text without styling
    #[default]
    Text,
    /// Spanner rows, column labels and body as CSV records
    Csv,
    /// The table snapshot serialized as JSON
    Json,
}

impl OutputMode {
    /// Returns true if this mode serializes data rather than laying it out.
    pub fn is_structured(&self) -> bool {
        matches!(self, OutputMode::Csv | OutputMode::Json)
    }

    /// Returns true if this mode emits ANSI styling.
    pub fn should_use_color(&self) -> bool {
        matches!(self, OutputMode::Term)
    }
}

/// Layout options for the text renderers.
///
/// ```rust
/// use boxhead_render::RenderOptions;
///
/// let options = RenderOptions::from_yaml("separator: \" | \"\nnull_repr: NA\n").unwrap();
/// assert_eq!(options.separator, " | ");
/// assert_eq!(options.spanner_rule, "-");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderOptions {
    /// Placed between adjacent columns.
    pub separator: String,
    /// Drawn under each spanner label across its run.
    pub spanner_rule: String,
    /// Drawn across the table between the headings and the body.
    pub heading_rule: String,
    /// Shown in place of empty cells.
    pub null_repr: String,
    /// Emit the column-label line.
    pub show_column_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            separator: "  ".to_string(),
            spanner_rule: "-".to_string(),
            heading_rule: "=".to_string(),
            null_repr: String::new(),
            show_column_labels: true,
        }
    }
}

impl RenderOptions {
    /// Parse options from YAML. Missing keys take their defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(|e| RenderError::InvalidOptions(e.to_string()))
    }

    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn spanner_rule(mut self, rule: impl Into<String>) -> Self {
        self.spanner_rule = rule.into();
        self
    }

    pub fn heading_rule(mut self, rule: impl Into<String>) -> Self {
        self.heading_rule = rule.into();
        self
    }

    pub fn null_repr(mut self, null_repr: impl Into<String>) -> Self {
        self.null_repr = null_repr.into();
        self
    }

    pub fn show_column_labels(mut self, show: bool) -> Self {
        self.show_column_labels = show;
        self
    }
}
