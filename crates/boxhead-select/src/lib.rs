//! # Boxhead Select - Column Selector Expressions
//!
//! Directives in `boxhead` take explicit lists of column identities. This
//! crate builds those lists from predicates: prefixes, suffixes, substrings,
//! regexes, column kinds, and boolean combinations of them.
//!
//! ## Quick Start
//!
//! ```rust
//! use boxhead::{Table, TableData};
//! use boxhead_select::ColumnSelector;
//!
//! let data = TableData::from_columns(["date", "datetime", "num"]).unwrap();
//! let table = Table::new(data);
//!
//! let dates = ColumnSelector::starts_with("date")
//!     .resolve_columns(table.boxhead())
//!     .unwrap();
//! let table = table.cols_move_to_end(dates).unwrap();
//!
//! assert_eq!(table.boxhead().vars(), ["num", "date", "datetime"]);
//! ```
//!
//! ## Ordering
//!
//! - `Name` / `Names`: the order given; unknown names are an error
//! - patterns and `Kind`: boxhead order; matching nothing is not an error
//! - `Union`: left results first, then new right results

mod error;
mod selector;

pub use error::{Result, SelectError};
pub use selector::ColumnSelector;
