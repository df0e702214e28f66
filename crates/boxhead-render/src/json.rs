//! JSON output: the table snapshot as data.

use boxhead::Table;

use crate::error::Result;

pub fn render_json(table: &Table) -> Result<String> {
    Ok(serde_json::to_string_pretty(table)?)
}
