//! Styles for the heading parts of a table in [`OutputMode::Term`].
//!
//! Styles can be set in code or loaded from YAML, one entry per part:
//!
//! ```rust
//! use boxhead_render::HeadingStyles;
//!
//! let styles = HeadingStyles::from_yaml(r#"
//! title:
//!   fg: cyan
//!   bold: true
//! spanner:
//!   fg: bright_blue
//! source_note:
//!   dim: true
//! "#).unwrap();
//! ```
//!
//! Parts missing from the YAML keep their default style.
//!
//! [`OutputMode::Term`]: crate::OutputMode::Term

use console::{Color, Style};
use serde::Deserialize;

use crate::error::{RenderError, Result};

/// One style per heading part.
#[derive(Debug, Clone)]
pub struct HeadingStyles {
    pub title: Style,
    pub subtitle: Style,
    pub spanner: Style,
    pub column_label: Style,
    pub stub: Style,
    pub row_group: Style,
    pub source_note: Style,
}

impl Default for HeadingStyles {
    fn default() -> Self {
        HeadingStyles {
            title: Style::new().bold(),
            subtitle: Style::new().dim(),
            spanner: Style::new().bold(),
            column_label: Style::new().bold(),
            stub: Style::new(),
            row_group: Style::new().bold().underlined(),
            source_note: Style::new().dim(),
        }
    }
}

impl HeadingStyles {
    /// Parse styles from YAML on top of the defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let sheet: StyleSheet =
            serde_yaml::from_str(yaml).map_err(|e| RenderError::InvalidOptions(e.to_string()))?;
        let mut styles = HeadingStyles::default();
        let parts = [
            (sheet.title, &mut styles.title),
            (sheet.subtitle, &mut styles.subtitle),
            (sheet.spanner, &mut styles.spanner),
            (sheet.column_label, &mut styles.column_label),
            (sheet.stub, &mut styles.stub),
            (sheet.row_group, &mut styles.row_group),
            (sheet.source_note, &mut styles.source_note),
        ];
        for (spec, slot) in parts {
            if let Some(spec) = spec {
                *slot = spec.to_style()?;
            }
        }
        Ok(styles)
    }

    /// Force ANSI output regardless of terminal detection.
    pub fn force_styling(self, force: bool) -> Self {
        HeadingStyles {
            title: self.title.force_styling(force),
            subtitle: self.subtitle.force_styling(force),
            spanner: self.spanner.force_styling(force),
            column_label: self.column_label.force_styling(force),
            stub: self.stub.force_styling(force),
            row_group: self.row_group.force_styling(force),
            source_note: self.source_note.force_styling(force),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct StyleSheet {
    title: Option<StyleSpec>,
    subtitle: Option<StyleSpec>,
    spanner: Option<StyleSpec>,
    column_label: Option<StyleSpec>,
    stub: Option<StyleSpec>,
    row_group: Option<StyleSpec>,
    source_note: Option<StyleSpec>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct StyleSpec {
    fg: Option<ColorSpec>,
    bg: Option<ColorSpec>,
    bold: bool,
    dim: bool,
    italic: bool,
    underline: bool,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ColorSpec {
    Index(u8),
    Name(String),
}

impl StyleSpec {
    fn to_style(&self) -> Result<Style> {
        let mut style = Style::new();
        if let Some(fg) = &self.fg {
            style = style.fg(fg.to_color()?);
        }
        if let Some(bg) = &self.bg {
            style = style.bg(bg.to_color()?);
        }
        if self.bold {
            style = style.bold();
        }
        if self.dim {
            style = style.dim();
        }
        if self.italic {
            style = style.italic();
        }
        if self.underline {
            style = style.underlined();
        }
        Ok(style)
    }
}

impl ColorSpec {
    fn to_color(&self) -> Result<Color> {
        let name = match self {
            ColorSpec::Index(n) => return Ok(Color::Color256(*n)),
            ColorSpec::Name(name) => name.to_lowercase(),
        };

        // console uses Color256 indices 8-15 for bright colors
        if let Some(base) = name.strip_prefix("bright_") {
            let index = match base {
                "black" => 8,
                "red" => 9,
                "green" => 10,
                "yellow" => 11,
                "blue" => 12,
                "magenta" => 13,
                "cyan" => 14,
                "white" => 15,
                _ => return Err(unknown_color(&name)),
            };
            return Ok(Color::Color256(index));
        }

        match name.as_str() {
            "black" => Ok(Color::Black),
            "red" => Ok(Color::Red),
            "green" => Ok(Color::Green),
            "yellow" => Ok(Color::Yellow),
            "blue" => Ok(Color::Blue),
            "magenta" => Ok(Color::Magenta),
            "cyan" => Ok(Color::Cyan),
            "white" | "gray" | "grey" => Ok(Color::White),
            _ => Err(unknown_color(&name)),
        }
    }
}

fn unknown_color(name: &str) -> RenderError {
    RenderError::InvalidOptions(format!("unknown color name: {}", name))
}
