use std::fs;
use std::path::PathBuf;
use std::process::Command;

/// Helper to create a temp directory that is cleaned up on drop.
struct TempDir {
    path: PathBuf,
}

impl TempDir {
    fn new(name: &str) -> Self {
        let path = std::env::temp_dir().join(format!("csv2sql_test_{name}_{}", std::process::id()));
        let _ = fs::remove_dir_all(&path);
        fs::create_dir_all(&path).expect("failed to create temp dir");
        Self { path }
    }

    fn path(&self) -> &PathBuf {
        &self.path
    }

    fn join(&self, name: &str) -> PathBuf {
        self.path.join(name)
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

fn write_csv(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("failed to write csv");
    path
}

fn csv2sql(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_csv2sql"))
        .args(args)
        .output()
        .expect("failed to run csv2sql")
}

fn table_rows(db: &PathBuf, table: &str) -> Vec<Vec<String>> {
    let conn = rusqlite::Connection::open(db).unwrap();
    let mut stmt = conn
        .prepare(&format!("SELECT * FROM \"{table}\" ORDER BY rowid"))
        .unwrap();
    let width = stmt.column_count();
    let rows = stmt
        .query_map([], |row| {
            (0..width)
                .map(|i| row.get::<_, String>(i))
                .collect::<rusqlite::Result<Vec<String>>>()
        })
        .unwrap();
    rows.map(Result::unwrap).collect()
}

#[test]
fn loads_one_file_into_named_table() {
    let dir = TempDir::new("basic");
    let out = TempDir::new("basic_out");
    let input = write_csv(&dir, "people.csv", "id,name\n1,alice\n2,bob\n");

    let output = csv2sql(&[
        input.to_str().unwrap(),
        "--output",
        out.path().to_str().unwrap(),
    ]);
    assert!(output.status.success(), "stderr: {:?}", output.stderr);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Loaded 2 row(s) into table 'people'."));

    let db = out.join("default.db");
    assert_eq!(table_rows(&db, "people"), vec![
        vec!["1", "alice"],
        vec!["2", "bob"],
    ]);
}

#[test]
fn respects_database_flag() {
    let dir = TempDir::new("dbflag");
    let out = TempDir::new("dbflag_out");
    let input = write_csv(&dir, "t.csv", "a\n1\n");

    let output = csv2sql(&[
        input.to_str().unwrap(),
        "--output",
        out.path().to_str().unwrap(),
        "--database",
        "custom.db",
    ]);
    assert!(output.status.success());
    assert!(out.join("custom.db").exists());
    assert!(!out.join("default.db").exists());
}

#[test]
fn loads_multiple_files_in_argument_order() {
    let dir = TempDir::new("multi");
    let out = TempDir::new("multi_out");
    let a = write_csv(&dir, "a.csv", "x\n1\n");
    let b = write_csv(&dir, "b.csv", "y,z\n2,3\n");

    let output = csv2sql(&[
        a.to_str().unwrap(),
        b.to_str().unwrap(),
        "--output",
        out.path().to_str().unwrap(),
    ]);
    assert!(output.status.success());

    let db = out.join("default.db");
    assert_eq!(table_rows(&db, "a"), vec![vec!["1"]]);
    assert_eq!(table_rows(&db, "b"), vec![vec!["2", "3"]]);
}

#[test]
fn same_base_name_appends_into_one_table() {
    let dir = TempDir::new("same_name");
    let out = TempDir::new("same_name_out");
    let first = dir.join("one");
    let second = dir.join("two");
    fs::create_dir_all(&first).unwrap();
    fs::create_dir_all(&second).unwrap();
    fs::write(first.join("events.csv"), "id\n1\n2\n").unwrap();
    fs::write(second.join("events.csv"), "id\n3\n").unwrap();

    let output = csv2sql(&[
        first.join("events.csv").to_str().unwrap(),
        second.join("events.csv").to_str().unwrap(),
        "--output",
        out.path().to_str().unwrap(),
    ]);
    assert!(output.status.success());

    let db = out.join("default.db");
    assert_eq!(table_rows(&db, "events"), vec![
        vec!["1"],
        vec!["2"],
        vec!["3"],
    ]);
}

#[test]
fn missing_input_exits_nonzero() {
    let out = TempDir::new("missing_out");

    let output = csv2sql(&[
        "/nonexistent/input.csv",
        "--output",
        out.path().to_str().unwrap(),
    ]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error:"), "stderr: {stderr}");
    assert!(stderr.contains("not found"), "stderr: {stderr}");
}

#[test]
fn failure_keeps_earlier_files_committed() {
    let dir = TempDir::new("partial");
    let out = TempDir::new("partial_out");
    let good = write_csv(&dir, "good.csv", "a\n1\n");
    let bad = write_csv(&dir, "bad.csv", "a,b\n1\n");

    let output = csv2sql(&[
        good.to_str().unwrap(),
        bad.to_str().unwrap(),
        "--output",
        out.path().to_str().unwrap(),
    ]);
    assert!(!output.status.success());

    // good.csv was committed before bad.csv failed, and stays committed.
    let db = out.join("default.db");
    assert_eq!(table_rows(&db, "good"), vec![vec!["1"]]);

    let conn = rusqlite::Connection::open(&db).unwrap();
    let bad_rows: i64 = conn
        .query_row("SELECT COUNT(*) FROM bad", [], |row| row.get(0))
        .unwrap();
    assert_eq!(bad_rows, 0);
}

#[test]
fn no_inputs_is_a_usage_error() {
    let output = csv2sql(&[]);
    assert!(!output.status.success());
}
