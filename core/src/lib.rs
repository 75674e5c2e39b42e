//! Core types shared by the csv2sql loader crates.
//!
//! This crate defines the foundational types for bulk-loading delimited text
//! into SQLite:
//!
//! - [`Dialect`] — the syntactic conventions governing how CSV bytes map to
//!   fields (delimiter, quoting, escaping, strictness).
//! - [`Header`] — the first record of a file, naming each column.
//! - [`Row`] — one data record, one field string per column.
//!
//! Table naming ([`table_name`]) derives a table name from an input path by
//! stripping the last extension-like suffix from its base name.
//!
//! # Example
//!
//! ```
//! use csv2sql_core::{Dialect, table_name};
//! use std::path::Path;
//!
//! let dialect = Dialect::default()
//!     .with_delimiter(';')
//!     .with_strict(true);
//! assert_eq!(dialect.delimiter, ';');
//!
//! assert_eq!(table_name(Path::new("/data/sales.2024.csv")), "sales.2024");
//! ```

mod naming;
mod types;

pub use naming::table_name;
pub use types::{Dialect, Header, Row};
