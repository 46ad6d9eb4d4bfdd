//! Tests for migration discovery and comment stripping.

use super::*;
use tempfile::TempDir;

// ── Discovery ──────────────────────────────────────────────────────────

#[test]
fn discovers_units_sorted_by_filename() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("002_add_tokens.sql"),
        "CREATE TABLE tokens (id INT);",
    )
    .unwrap();
    std::fs::write(
        dir.path().join("001_auth_schema.sql"),
        "CREATE TABLE users (id INT);",
    )
    .unwrap();
    std::fs::write(dir.path().join("notes.txt"), "not a migration").unwrap();

    let units = discover_migrations(dir.path()).unwrap();
    assert_eq!(units.len(), 2);
    assert_eq!(units[0].name, "001_auth_schema.sql");
    assert_eq!(units[1].name, "002_add_tokens.sql");
}

#[test]
fn missing_directory_is_an_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("does_not_exist");

    let err = discover_migrations(&missing).unwrap_err();
    assert!(matches!(err, CoreError::DirNotFound { .. }));
}

#[test]
fn directory_without_sql_files_is_an_error() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("README.md"), "docs only").unwrap();

    let err = discover_migrations(dir.path()).unwrap_err();
    assert!(matches!(err, CoreError::NoMigrations { .. }));
}

#[test]
fn from_file_keeps_the_full_filename() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("003_add_sessions.sql");
    std::fs::write(&path, "CREATE TABLE sessions (id INT);").unwrap();

    let unit = MigrationUnit::from_file(&path).unwrap();
    assert_eq!(unit.name, "003_add_sessions.sql");
    assert_eq!(unit.content, "CREATE TABLE sessions (id INT);");
}

#[test]
fn from_file_missing_path_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.sql");

    let err = MigrationUnit::from_file(&path).unwrap_err();
    assert!(matches!(err, CoreError::IoWithPath { .. }));
}

// ── Comment stripping ──────────────────────────────────────────────────

#[test]
fn strips_full_comment_lines_and_blanks() {
    let unit = MigrationUnit {
        name: "001_auth_schema.sql".to_string(),
        content: "-- users table\nCREATE TABLE users (id INT);\n\n-- index\nCREATE INDEX idx_users ON users (id);\n"
            .to_string(),
    };

    assert_eq!(
        unit.executable_sql().unwrap(),
        "CREATE TABLE users (id INT);\nCREATE INDEX idx_users ON users (id);"
    );
}

#[test]
fn strips_indented_comment_lines() {
    let unit = MigrationUnit {
        name: "002_add_tokens.sql".to_string(),
        content: "CREATE TABLE tokens (\n    -- surrogate key\n    id INT\n);".to_string(),
    };

    assert_eq!(
        unit.executable_sql().unwrap(),
        "CREATE TABLE tokens (\n    id INT\n);"
    );
}

#[test]
fn keeps_trailing_comments_on_statement_lines() {
    // Only full comment lines are dropped; the trailing comment rides
    // along with its statement.
    let unit = MigrationUnit {
        name: "003_cleanup.sql".to_string(),
        content: "DELETE FROM tokens; -- expired only".to_string(),
    };

    assert_eq!(
        unit.executable_sql().unwrap(),
        "DELETE FROM tokens; -- expired only"
    );
}

#[test]
fn comment_only_file_has_no_executable_sql() {
    let unit = MigrationUnit {
        name: "004_placeholder.sql".to_string(),
        content: "-- reserved for a future backfill\n\n   -- nothing yet\n".to_string(),
    };

    assert!(unit.executable_sql().is_none());
}

#[test]
fn whitespace_only_file_has_no_executable_sql() {
    let unit = MigrationUnit {
        name: "005_blank.sql".to_string(),
        content: "\n   \n\t\n".to_string(),
    };

    assert!(unit.executable_sql().is_none());
}
