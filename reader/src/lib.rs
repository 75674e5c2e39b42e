//! CSV reading with configurable dialects and a lazy row stream.
//!
//! The entry point is [`read`], which opens a file, parses its first record
//! as the header, and returns the remaining records as a lazy, forward-only
//! iterator:
//!
//! ```no_run
//! use csv2sql_core::Dialect;
//! use csv2sql_reader::read;
//!
//! let (header, rows) = read("orders.csv", &Dialect::default()).unwrap();
//! println!("columns: {}", header.len());
//! for row in rows {
//!     let row = row.unwrap();
//!     println!("{} field(s)", row.len());
//! }
//! ```
//!
//! # Single-pass contract
//!
//! The row stream owns the open file handle and is consumed strictly in file
//! order. It is not restartable: once exhausted it yields nothing, and a
//! caller that needs the data again must call [`read`] again. The handle is
//! released when the iterator is dropped or exhausted.
//!
//! # Dialect handling
//!
//! Parsing follows the [`Dialect`](csv2sql_core::Dialect) configuration:
//! quoted fields may contain delimiters and line terminators (records may
//! therefore span physical lines), doubled quote characters collapse to one
//! literal quote, and an optional escape character takes the following
//! character literally. In strict mode malformed quoting is a
//! [`ReadError::Parse`]; otherwise the reader recovers by treating the
//! malformed remainder as literal text.

mod error;
mod parse;
mod reader;

pub use error::{ReadError, Result};
pub use reader::{Rows, read};
