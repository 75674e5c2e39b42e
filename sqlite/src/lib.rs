//! SQLite storage backend for CSV bulk loads.
//!
//! This crate turns a parsed CSV file into a SQLite table: the header names
//! the columns (all declared `TEXT`), and every data row is appended through
//! a parameterized insert executed inside one transaction per file.
//!
//! # Architecture
//!
//! - **`schema`** — identifier quoting and SQL text generation
//! - **`loader`** — [`CsvLoader`], owning the connection and driving
//!   create-if-absent table setup plus transactional batch insertion
//!
//! # Quick start
//!
//! ```no_run
//! use csv2sql_core::Dialect;
//! use csv2sql_sqlite::CsvLoader;
//! use rusqlite::Connection;
//! use std::path::Path;
//!
//! let conn = Connection::open("default.db").unwrap();
//! let mut loader = CsvLoader::new(conn);
//!
//! let report = loader
//!     .load_path(Path::new("orders.csv"), &Dialect::default())
//!     .unwrap();
//! println!("{} row(s) into '{}'", report.rows_inserted, report.table);
//! ```
//!
//! # Identifier handling
//!
//! Table and column names come from user-controlled input (file names and
//! header text), so they are embedded in SQL with double-quote identifier
//! quoting rather than verbatim. Any name is accepted except empty strings
//! and names containing NUL bytes. Duplicate column names are passed
//! through; the engine rejects them at `CREATE TABLE` time.

mod error;
mod loader;
mod schema;

pub use error::{LoadError, Result};
pub use loader::{CsvLoader, LoadReport};
pub use schema::{create_table_sql, insert_sql, quote_identifier};
