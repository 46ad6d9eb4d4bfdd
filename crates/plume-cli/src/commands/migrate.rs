//! Migrate command implementation

use anyhow::Result;
use plume_core::discover_migrations;
use plume_db::{apply_all, LegacySeed, PostgresGateway, UnitProgress};
use std::path::Path;

use crate::cli::{GlobalArgs, MigrateArgs};
use crate::commands::common::database_url;

/// Execute the migrate command.
///
/// Discovery and the `DATABASE_URL` check run before any connection is
/// attempted, so configuration mistakes fail fast and cheap. The
/// connection is closed on both the success and the failure path; the
/// error itself propagates to the top-level handler in `main`.
pub async fn execute(args: &MigrateArgs, global: &GlobalArgs) -> Result<()> {
    let dir = Path::new(&global.migrations_dir);
    let units = discover_migrations(dir)?;
    let url = database_url()?;

    println!("Found {} migration files", units.len());
    println!("Connecting to database...");
    println!();

    let mut gateway = PostgresGateway::connect(&url).await?;
    println!("Connected to database");
    println!();

    let seed = if args.no_legacy_seed {
        None
    } else {
        Some(LegacySeed {
            anchor_table: args.legacy_table.clone(),
            filename: args.legacy_file.clone(),
        })
    };
    if global.verbose {
        match &seed {
            Some(s) => eprintln!(
                "[verbose] Legacy seed: anchor table '{}' -> {}",
                s.anchor_table, s.filename
            ),
            None => eprintln!("[verbose] Legacy reconciliation disabled"),
        }
    }

    let result = apply_all(&mut gateway, &units, seed.as_ref(), |progress| {
        match progress {
            UnitProgress::AlreadyApplied { name } => {
                println!("Skipping {name} (already executed)");
            }
            UnitProgress::Applying { name } => {
                println!("Running {name}...");
            }
            UnitProgress::EmptyRecorded { name } => {
                println!("Skipping {name} (empty or comments only)");
                println!();
            }
            UnitProgress::Applied { name, elapsed } => {
                println!("Completed {name} [{}ms]", elapsed.as_millis());
                println!();
            }
        }
    })
    .await;

    gateway.close().await;
    let summary = result?;

    if global.verbose {
        eprintln!(
            "[verbose] {} applied, {} skipped",
            summary.applied, summary.skipped
        );
    }

    println!("All migrations completed successfully!");
    Ok(())
}
