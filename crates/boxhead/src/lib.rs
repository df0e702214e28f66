//! # Boxhead - Declarative Column Headings
//!
//! `boxhead` models the heading part of a presentation table: the ordered
//! columns (the *boxhead*), the spanners drawn above them, and the grid a
//! renderer walks to draw both.
//!
//! ## Core Concepts
//!
//! - [`Table`]: immutable snapshot; every directive returns a new one
//! - [`Boxhead`]: ordered column registry with move, hide and width operations
//! - [`Spanners`]: spanner registry with first-fit level placement
//! - [`spanners_print_matrix`]: the row-major grid of spanner and column labels
//! - [`seq_groups`]: lazy run-length grouping used to find spanner runs
//!
//! ## Quick Start
//!
//! ```rust
//! use boxhead::{MatrixCell, MatrixOptions, SpannerDef, Table, TableData};
//!
//! let data = TableData::from_columns(["num", "char", "fctr", "date"]).unwrap();
//! let table = Table::new(data)
//!     .tab_spanner(SpannerDef::new("A").columns(["num", "char", "fctr"]))
//!     .unwrap()
//!     .tab_spanner(SpannerDef::new("B").columns(["fctr"]))
//!     .unwrap()
//!     .tab_spanner(SpannerDef::new("C").columns(["num", "char"]))
//!     .unwrap()
//!     .tab_spanner(SpannerDef::new("E").spanners(["B", "C"]))
//!     .unwrap();
//!
//! let levels: Vec<_> = table.spanners().iter().map(|s| s.spanner_level).collect();
//! assert_eq!(levels, vec![0, 1, 1, 2]);
//!
//! // "E" spans spanners, so the column order is left alone
//! assert_eq!(table.boxhead().vars(), ["num", "char", "fctr", "date"]);
//!
//! let matrix = table.print_matrix(MatrixOptions::default());
//! assert_eq!(matrix.height(), 4);
//! assert_eq!(matrix.rows()[0][0], MatrixCell::label("E"));
//! ```
//!
//! ## Directives
//!
//! | Directive | Effect |
//! |-----------|--------|
//! | [`Table::tab_spanner`] | add a spanner over columns and/or spanners |
//! | [`Table::cols_move`] | move columns after an anchor |
//! | [`Table::cols_move_to_start`] / [`Table::cols_move_to_end`] | move columns to an edge |
//! | [`Table::cols_hide`] | hide columns, keeping their metadata |
//! | [`Table::cols_width`] | set opaque width strings |
//! | [`Table::cols_label`] / [`Table::cols_align`] | relabel or align columns |
//! | [`Table::tab_stubhead`] / [`Table::tab_header`] / [`Table::tab_source_note`] | table furniture |

mod boxhead;
mod column;
mod data;
mod error;
mod matrix;
mod options;
mod selection;
mod seq;
mod spanner;
mod table;

pub use boxhead::Boxhead;
pub use column::{Align, ColumnInfo, ColumnKind};
pub use data::TableData;
pub use error::{BoxheadError, Result};
pub use matrix::{
    empty_spanner_matrix, spanners_print_matrix, MatrixCell, MatrixOptions, Span, SpannerMatrix,
};
pub use options::{SelectionPolicy, TableOptions};
pub use selection::{Columns, MoveTarget};
pub use seq::{seq_groups, seq_groups_by, SeqGroups};
pub use spanner::{SpannerInfo, Spanners};
pub use table::{Heading, SpannerDef, Table, TableBuilder};
