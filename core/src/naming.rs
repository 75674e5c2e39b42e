//! Table name derivation from input paths.

use std::path::Path;

/// Derives a table name from a file path: the base name with its last
/// extension-like suffix stripped.
///
/// Only the final suffix is removed, so `sales.2024.csv` maps to
/// `sales.2024`. Files without an extension, and dot-prefixed names like
/// `.csv`, map to their full base name.
///
/// # Examples
///
/// ```
/// use csv2sql_core::table_name;
/// use std::path::Path;
///
/// assert_eq!(table_name(Path::new("/data/orders.csv")), "orders");
/// assert_eq!(table_name(Path::new("backup.2024.csv")), "backup.2024");
/// assert_eq!(table_name(Path::new("README")), "README");
/// ```
pub fn table_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "table".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_extension() {
        assert_eq!(table_name(Path::new("orders.csv")), "orders");
        assert_eq!(table_name(Path::new("/var/data/orders.csv")), "orders");
    }

    #[test]
    fn test_strips_only_last_suffix() {
        assert_eq!(table_name(Path::new("backup.2024.csv")), "backup.2024");
        assert_eq!(table_name(Path::new("a.b.c")), "a.b");
    }

    #[test]
    fn test_no_extension() {
        assert_eq!(table_name(Path::new("README")), "README");
        assert_eq!(table_name(Path::new("/tmp/data")), "data");
    }

    #[test]
    fn test_hidden_file_keeps_name() {
        // A leading dot is part of the base name, not an extension.
        assert_eq!(table_name(Path::new(".csv")), ".csv");
        assert_eq!(table_name(Path::new(".config.csv")), ".config");
    }
}
