//! CSV output.
//!
//! Records, in order: one per spanner row (label at the start of each run,
//! empty elsewhere), the column labels, then one per body row. When the table
//! has a row-group or stub column they lead every record, in that order.

use boxhead::Table;

use crate::error::Result;
use crate::layout::display_cell;
use crate::options::RenderOptions;

pub fn render_csv(table: &Table, options: &RenderOptions) -> Result<String> {
    let matrix = table.print_matrix(boxhead::MatrixOptions::default().omit_columns_row(true));
    let boxhead = table.boxhead();

    let mut lead: Vec<(&str, String)> = Vec::new();
    if let Some(group) = boxhead.row_group() {
        lead.push((group.var.as_str(), group.column_label().to_string()));
    }
    if let Some(stub) = boxhead.stub() {
        let label = table.stubhead().unwrap_or(stub.column_label());
        lead.push((stub.var.as_str(), label.to_string()));
    }

    let mut writer = csv::Writer::from_writer(Vec::new());

    for row in matrix.rows() {
        let mut record: Vec<&str> = vec![""; lead.len()];
        record.extend(row.iter().map(|cell| cell.text().unwrap_or_default()));
        writer.write_record(&record)?;
    }

    if options.show_column_labels {
        let mut record: Vec<String> = lead.iter().map(|(_, label)| label.clone()).collect();
        record.extend(
            matrix
                .vars()
                .iter()
                .filter_map(|var| boxhead.get(var))
                .map(|info| info.column_label().to_string()),
        );
        writer.write_record(&record)?;
    }

    let data = table.data();
    for row in 0..data.n_rows() {
        let cell = |var: &str| display_cell(data.cell(row, var).unwrap_or_default(), options);
        let mut record: Vec<String> = lead.iter().map(|(var, _)| cell(*var)).collect();
        record.extend(matrix.vars().iter().map(|var| cell(var.as_str())));
        writer.write_record(&record)?;
    }

    let bytes = writer.into_inner()?;
    Ok(String::from_utf8(bytes)?)
}
