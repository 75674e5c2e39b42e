use std::fs;
use std::path::PathBuf;

use clap::Parser;
use csv2sql_core::Dialect;
use csv2sql_sqlite::CsvLoader;

#[derive(Debug, Parser)]
#[command(name = "csv2sql")]
#[command(about = "Bulk-load CSV files into tables of a SQLite database")]
struct Cli {
    /// CSV files to load; each becomes one table named after its base name.
    #[arg(required = true)]
    csv: Vec<PathBuf>,
    /// Directory in which the database file is created or opened
    /// (default: ~/Documents/packages/csv2sql).
    #[arg(long)]
    output: Option<PathBuf>,
    /// Database filename inside the output directory.
    #[arg(long, default_value = "default.db")]
    database: String,
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), String> {
    let output = cli.output.unwrap_or_else(default_output_dir);
    fs::create_dir_all(&output).map_err(|err| {
        format!(
            "Failed to create output directory '{}': {err}",
            output.display()
        )
    })?;

    let db_path = output.join(&cli.database);
    let conn = rusqlite::Connection::open(&db_path)
        .map_err(|err| format!("Failed to open database '{}': {err}", db_path.display()))?;
    let mut loader = CsvLoader::new(conn);

    // Dialect options are not exposed on the command line; the defaults
    // cover the common interchange format.
    let dialect = Dialect::default();

    for path in &cli.csv {
        let report = loader
            .load_path(path, &dialect)
            .map_err(|err| format!("Failed to load '{}': {err}", path.display()))?;
        println!(
            "Loaded {} row(s) into table '{}'.",
            report.rows_inserted, report.table
        );
    }

    loader
        .into_connection()
        .close()
        .map_err(|(_, err)| format!("Failed to close database: {err}"))?;

    Ok(())
}

/// Default database directory (~/Documents/packages/csv2sql), computed at
/// invocation time.
fn default_output_dir() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home)
            .join("Documents")
            .join("packages")
            .join("csv2sql");
    }
    PathBuf::from(".")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_requires_at_least_one_input() {
        assert!(Cli::try_parse_from(["csv2sql"]).is_err());
        assert!(Cli::try_parse_from(["csv2sql", "a.csv"]).is_ok());
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["csv2sql", "a.csv", "b.csv"]).unwrap();
        assert_eq!(cli.csv.len(), 2);
        assert!(cli.output.is_none());
        assert_eq!(cli.database, "default.db");
    }

    #[test]
    fn test_cli_output_and_database_flags() {
        let cli = Cli::try_parse_from([
            "csv2sql",
            "a.csv",
            "--output",
            "/tmp/out",
            "--database",
            "data.db",
        ])
        .unwrap();
        assert_eq!(cli.output, Some(PathBuf::from("/tmp/out")));
        assert_eq!(cli.database, "data.db");
    }
}
