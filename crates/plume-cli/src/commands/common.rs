//! Shared utilities for CLI commands

use plume_core::{CoreError, CoreResult};
use plume_db::DbError;

/// Read the connection string from the environment.
///
/// An unset or empty `DATABASE_URL` is the same configuration error;
/// operators sometimes export the variable with no value.
pub(crate) fn database_url() -> CoreResult<String> {
    std::env::var("DATABASE_URL")
        .ok()
        .filter(|url| !url.is_empty())
        .ok_or(CoreError::MissingDatabaseUrl)
}

/// Map a command error to its console line and process exit code.
///
/// Every command returns `anyhow::Result`; this is the one place that
/// downcasts back to the typed taxonomy. Configuration errors exit 1,
/// connection and ledger errors exit 2, a failed migration exits 3.
/// The printed lines are the operator contract, so they carry no error
/// codes or Rust formatting.
pub(crate) fn report_error(err: &anyhow::Error) -> i32 {
    if let Some(core) = err.downcast_ref::<CoreError>() {
        match core {
            CoreError::DirNotFound { path } => {
                println!("Migrations directory not found: {path}");
            }
            CoreError::NoMigrations { path } => {
                println!("No migration files found in {path}");
            }
            CoreError::MissingDatabaseUrl => {
                println!("DATABASE_URL environment variable is required");
            }
            other => println!("{other}"),
        }
        return 1;
    }

    if let Some(db) = err.downcast_ref::<DbError>() {
        return match db {
            DbError::InvalidPassword => {
                println!("Invalid database password. Check your DATABASE_URL.");
                2
            }
            DbError::UnknownDatabase => {
                println!("Database does not exist. Check your DATABASE_URL.");
                2
            }
            DbError::Connection(message) | DbError::Query(message) => {
                println!("Database connection error: {message}");
                2
            }
            DbError::MigrationFailed { filename, message } => {
                println!("Error running {filename}: {message}");
                3
            }
        };
    }

    eprintln!("Error: {err:#}");
    1
}

// ---------------------------------------------------------------------------
// Table-printing utilities
// ---------------------------------------------------------------------------

/// Calculate column widths for a table given headers and row data.
///
/// For each column, returns the maximum width across the header and all
/// row values so that data aligns when printed with left-padding.
pub(crate) fn calculate_column_widths(headers: &[&str], rows: &[Vec<String>]) -> Vec<usize> {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (w, cell) in widths.iter_mut().zip(row.iter()) {
            *w = (*w).max(cell.len());
        }
    }
    widths
}

/// Print a formatted table to stdout.
///
/// Calculates column widths from `headers` and `rows`, then prints
/// a left-aligned header row, a separator line of dashes, and each
/// data row.  Columns are separated by two spaces.
pub(crate) fn print_table(headers: &[&str], rows: &[Vec<String>]) {
    let widths = calculate_column_widths(headers, rows);

    let header_parts: Vec<String> = headers
        .iter()
        .zip(&widths)
        .map(|(h, &w)| format!("{:<width$}", h, width = w))
        .collect();
    println!("{}", header_parts.join("  "));

    let sep_parts: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
    println!("{}", sep_parts.join("  "));

    for row in rows {
        let row_parts: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, &w)| format!("{:<width$}", cell, width = w))
            .collect();
        println!("{}", row_parts.join("  "));
    }
}

#[cfg(test)]
#[path = "common_test.rs"]
mod tests;
