//! Table creation and batched row insertion.
//!
//! [`CsvLoader`] owns the database connection and provides the per-file
//! loading unit: ensure the target table exists, then append every row of
//! the file inside a single transaction. Each file is an independent unit —
//! a failure rolls back only that file's rows, and tables committed for
//! earlier files stay committed.
//!
//! # Example
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
//! for input in ["orders.csv", "customers.csv"] {
//!     let report = loader.load_path(Path::new(input), &Dialect::default()).unwrap();
//!     println!("{}: {} row(s)", report.table, report.rows_inserted);
//! }
//! ```

use std::path::Path;

use csv2sql_core::{Dialect, Row, table_name};
use rusqlite::{Connection, params_from_iter};
use tracing::{debug, info};

use crate::error::{LoadError, Result};
use crate::schema::{create_table_sql, insert_sql};

/// Loads parsed CSV records into SQLite tables.
///
/// Owns the [`Connection`] for its lifetime; use
/// [`into_connection`](Self::into_connection) to take it back, e.g. to close
/// it explicitly once all files are processed.
pub struct CsvLoader {
    conn: Connection,
}

impl CsvLoader {
    /// Creates a loader around an open connection.
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    /// Creates the target table from the header if it does not exist.
    ///
    /// Every column is declared `TEXT`, in header order. A table that
    /// already exists is left untouched regardless of its shape.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::InvalidIdentifier`] for unquotable names and
    /// [`LoadError::Database`] for engine failures (including duplicate
    /// column names in the header).
    pub fn ensure_table(&self, table: &str, header: &[String]) -> Result<()> {
        let sql = create_table_sql(table, header)?;
        debug!(table, columns = header.len(), "ensuring table exists");
        self.conn.execute_batch(&sql)?;
        Ok(())
    }

    /// Appends every row of the stream to `table` as one batch.
    ///
    /// Binds each row's fields positionally — as raw strings, no type
    /// coercion — to a single prepared insert with `header.len()`
    /// placeholders, executing all rows inside one transaction committed at
    /// the end. Returns the number of rows inserted.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::ShapeMismatch`] when a row's field count
    /// differs from the header width, and propagates read and database
    /// errors. Any failure rolls the transaction back: the file commits
    /// zero rows.
    pub fn insert_all<I>(&mut self, table: &str, header: &[String], rows: I) -> Result<usize>
    where
        I: IntoIterator<Item = csv2sql_reader::Result<Row>>,
    {
        let sql = insert_sql(table, header.len())?;
        let tx = self.conn.transaction()?;
        let mut inserted = 0usize;
        {
            let mut stmt = tx.prepare(&sql)?;
            for (index, row) in rows.into_iter().enumerate() {
                let row = row?;
                if row.len() != header.len() {
                    return Err(LoadError::ShapeMismatch {
                        table: table.to_string(),
                        row: index + 1,
                        expected: header.len(),
                        found: row.len(),
                    });
                }
                stmt.execute(params_from_iter(row.iter()))?;
                inserted += 1;
            }
        }
        tx.commit()?;
        debug!(table, rows = inserted, "batch insert committed");
        Ok(inserted)
    }

    /// Loads one CSV file into the table derived from its base name.
    ///
    /// The per-file unit: derive the table name (last extension stripped),
    /// read header and rows, [`ensure_table`](Self::ensure_table), then
    /// [`insert_all`](Self::insert_all). The read happens before any DDL,
    /// so a missing input creates no table.
    pub fn load_path(&mut self, path: &Path, dialect: &Dialect) -> Result<LoadReport> {
        let table = table_name(path);
        let (header, rows) = csv2sql_reader::read(path, dialect)?;
        self.ensure_table(&table, &header)?;
        let rows_inserted = self.insert_all(&table, &header, rows)?;
        info!(
            table = %table,
            rows = rows_inserted,
            path = %path.display(),
            "loaded file"
        );
        Ok(LoadReport {
            table,
            rows_inserted,
        })
    }

    /// Checks whether a table with the given name exists.
    pub fn table_exists(&self, table: &str) -> Result<bool> {
        let mut stmt = self
            .conn
            .prepare("SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name=?1")?;
        let count: i64 = stmt.query_row([table], |row| row.get(0))?;
        Ok(count > 0)
    }

    /// Returns a reference to the underlying connection.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Consumes the loader and returns the underlying connection.
    pub fn into_connection(self) -> Connection {
        self.conn
    }
}

/// Result of loading one file, returned by [`CsvLoader::load_path`].
#[derive(Debug, Clone)]
pub struct LoadReport {
    /// Table the file was loaded into.
    pub table: String,
    /// Number of rows appended.
    pub rows_inserted: usize,
}
