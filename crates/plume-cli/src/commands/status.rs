//! Status command implementation

use anyhow::Result;
use chrono::{DateTime, Utc};
use plume_core::discover_migrations;
use plume_db::{LedgerEntry, MigrationStore, PostgresGateway};
use serde::Serialize;
use std::collections::HashMap;
use std::path::Path;

use crate::cli::{GlobalArgs, StatusArgs, StatusOutput};
use crate::commands::common::{database_url, print_table};

/// One discovered unit joined with its ledger entry, if any.
///
/// Ledger rows with no matching file (renamed or deleted migrations)
/// are not reported; status only describes the migrations directory.
#[derive(Debug, Serialize)]
struct UnitStatus {
    filename: String,
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    executed_at: Option<DateTime<Utc>>,
}

/// Execute the status command
pub async fn execute(args: &StatusArgs, global: &GlobalArgs) -> Result<()> {
    let dir = Path::new(&global.migrations_dir);
    let units = discover_migrations(dir)?;
    let url = database_url()?;

    let mut gateway = PostgresGateway::connect(&url).await?;
    gateway.ensure_ledger().await?;
    let entries = gateway.ledger_entries().await?;
    gateway.close().await;

    let names: Vec<String> = units.into_iter().map(|u| u.name).collect();
    let statuses = unit_statuses(&names, entries);

    match args.output {
        StatusOutput::Table => print_status_table(&statuses),
        StatusOutput::Json => println!("{}", serde_json::to_string_pretty(&statuses)?),
    }

    Ok(())
}

/// Join discovered filenames with ledger rows, preserving file order.
fn unit_statuses(names: &[String], entries: Vec<LedgerEntry>) -> Vec<UnitStatus> {
    let executed_at: HashMap<String, DateTime<Utc>> = entries
        .into_iter()
        .map(|e| (e.filename, e.executed_at))
        .collect();

    names
        .iter()
        .map(|name| {
            let at = executed_at.get(name).copied();
            UnitStatus {
                filename: name.clone(),
                status: if at.is_some() { "applied" } else { "pending" },
                executed_at: at,
            }
        })
        .collect()
}

/// Print statuses as an aligned table with a count footer
fn print_status_table(statuses: &[UnitStatus]) {
    let rows: Vec<Vec<String>> = statuses
        .iter()
        .map(|s| {
            vec![
                s.filename.clone(),
                s.status.to_string(),
                s.executed_at
                    .map(|at| at.format("%Y-%m-%d %H:%M:%S").to_string())
                    .unwrap_or_else(|| "-".to_string()),
            ]
        })
        .collect();

    print_table(&["FILENAME", "STATUS", "EXECUTED_AT"], &rows);

    let applied = statuses.iter().filter(|s| s.status == "applied").count();
    let pending = statuses.len() - applied;
    println!();
    println!("{applied} applied, {pending} pending");
}

#[cfg(test)]
#[path = "status_test.rs"]
mod tests;
