//! # Boxhead Render - Table Output
//!
//! Renders a [`boxhead::Table`] as aligned text, styled terminal text, CSV,
//! or JSON. The text renderers draw one label line and one rule line per
//! spanner level, then the column labels, the body, and the source notes.
//!
//! ## Quick Start
//!
//! ```rust
//! use boxhead::{SpannerDef, Table, TableData};
//! use boxhead_render::{render, OutputMode, RenderOptions};
//!
//! let data = TableData::new(["a", "b", "c"], [["1", "2", "3"]]).unwrap();
//! let table = Table::new(data)
//!     .tab_spanner(SpannerDef::new("AB").columns(["a", "b"]))
//!     .unwrap();
//!
//! let out = render(&table, OutputMode::Text, &RenderOptions::default()).unwrap();
//! assert_eq!(out, " AB\n----\na  b  c\n=======\n1  2  3\n");
//! ```
//!
//! ## Output Modes
//!
//! | Mode | Output |
//! |------|--------|
//! | [`OutputMode::Text`] | aligned plain text |
//! | [`OutputMode::Term`] | aligned text with [`HeadingStyles`] applied |
//! | [`OutputMode::Csv`] | spanner rows, labels and body as CSV records |
//! | [`OutputMode::Json`] | the table snapshot as JSON |
//!
//! Width strings set with `cols_width` are not interpreted here; columns are
//! sized by their content.

mod delimited;
mod error;
mod json;
mod layout;
mod options;
mod styles;
mod text;
mod util;

pub use delimited::render_csv;
pub use error::{RenderError, Result};
pub use json::render_json;
pub use layout::{Layout, LayoutColumn};
pub use options::{OutputMode, RenderOptions};
pub use styles::HeadingStyles;
pub use text::render_text;
pub use util::{display_width, pad, rule};

use boxhead::Table;
use tracing::debug;

/// Render `table` in `mode` with the default heading styles.
pub fn render(table: &Table, mode: OutputMode, options: &RenderOptions) -> Result<String> {
    render_with_styles(table, mode, options, &HeadingStyles::default())
}

/// Render `table` in `mode`, styling headings with `styles` in
/// [`OutputMode::Term`].
pub fn render_with_styles(
    table: &Table,
    mode: OutputMode,
    options: &RenderOptions,
    styles: &HeadingStyles,
) -> Result<String> {
    debug!(
        ?mode,
        structured = mode.is_structured(),
        rows = table.data().n_rows(),
        "rendering table"
    );
    match mode {
        OutputMode::Csv => render_csv(table, options),
        OutputMode::Json => render_json(table),
        OutputMode::Text | OutputMode::Term => {
            let styles = mode.should_use_color().then_some(styles);
            Ok(render_text(table, options, styles))
        }
    }
}
