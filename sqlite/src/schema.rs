//! SQL text generation for table creation and row insertion.
//!
//! Table and column names originate from user-controlled input (file names
//! and CSV header text) and cannot be bound as statement parameters, so
//! they are embedded with double-quote identifier quoting: the name is
//! wrapped in `"` with embedded quote characters doubled. Every column is
//! declared `TEXT`.

use crate::error::{LoadError, Result};

/// Rejects names that cannot be represented as a quoted SQL identifier.
pub(crate) fn validate_identifier(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(LoadError::InvalidIdentifier(
            "identifier is empty".to_string(),
        ));
    }
    if name.contains('\0') {
        return Err(LoadError::InvalidIdentifier(format!(
            "identifier contains a NUL byte: {name:?}"
        )));
    }
    Ok(())
}

/// Quotes a table or column name for embedding in SQL text.
///
/// Wraps the name in double quotes with embedded double quotes doubled, so
/// arbitrary header text becomes a legal identifier.
///
/// # Errors
///
/// Returns [`LoadError::InvalidIdentifier`] for empty names or names
/// containing NUL bytes.
///
/// # Examples
///
/// ```
/// use csv2sql_sqlite::quote_identifier;
///
/// assert_eq!(quote_identifier("orders").unwrap(), "\"orders\"");
/// assert_eq!(quote_identifier("unit \"a\"").unwrap(), "\"unit \"\"a\"\"\"");
/// ```
pub fn quote_identifier(name: &str) -> Result<String> {
    validate_identifier(name)?;
    Ok(format!("\"{}\"", name.replace('"', "\"\"")))
}

/// Generates the create-if-absent statement for a table shaped by `header`.
///
/// Columns are declared in header order, each as generic `TEXT` storage.
/// The statement is a no-op when the table already exists, regardless of
/// its current shape.
///
/// # Errors
///
/// Returns [`LoadError::InvalidIdentifier`] if the table or any column
/// name cannot be quoted.
pub fn create_table_sql(table: &str, header: &[String]) -> Result<String> {
    let mut columns = Vec::with_capacity(header.len());
    for name in header {
        columns.push(format!("{} TEXT", quote_identifier(name)?));
    }
    Ok(format!(
        "CREATE TABLE IF NOT EXISTS {} ({})",
        quote_identifier(table)?,
        columns.join(", ")
    ))
}

/// Generates the parameterized insert statement for `width` columns.
///
/// Placeholders are positional (`?1..?N`); callers bind one row's fields
/// per execution.
///
/// # Errors
///
/// Returns [`LoadError::InvalidIdentifier`] if the table name cannot be
/// quoted.
pub fn insert_sql(table: &str, width: usize) -> Result<String> {
    let placeholders: Vec<String> = (1..=width).map(|i| format!("?{i}")).collect();
    Ok(format!(
        "INSERT INTO {} VALUES ({})",
        quote_identifier(table)?,
        placeholders.join(", ")
    ))
}
