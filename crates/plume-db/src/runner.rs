//! Migration execution engine.
//!
//! `apply_all` drives one run: ensure the ledger exists, reconcile
//! legacy state, then walk the discovered units in filename order,
//! skipping recorded ones and applying the rest one transaction at a
//! time. The first failure halts the run; committed units stay
//! committed and everything after the failing unit stays pending.

use crate::error::{DbError, DbResult};
use crate::traits::MigrationStore;
use plume_core::MigrationUnit;
use std::time::{Duration, Instant};

/// Strategy value for backfilling a database that predates the ledger.
///
/// If `anchor_table` exists the database was migrated by hand before
/// the ledger was introduced, so `filename` is recorded as applied
/// without running it. One pair only; this is a compatibility shim,
/// not a dependency resolver.
#[derive(Debug, Clone)]
pub struct LegacySeed {
    /// Table whose presence implies the seed migration already ran
    pub anchor_table: String,

    /// Ledger filename to backfill for that migration
    pub filename: String,
}

impl Default for LegacySeed {
    fn default() -> Self {
        Self {
            anchor_table: "users".to_string(),
            filename: "001_auth_schema.sql".to_string(),
        }
    }
}

/// Per-unit progress events emitted while the engine runs.
///
/// The engine reports through a callback so the console contract lives
/// with the caller, not in this crate.
#[derive(Debug)]
pub enum UnitProgress<'a> {
    /// The unit is already in the ledger; nothing was written
    AlreadyApplied { name: &'a str },

    /// The unit's transaction is about to start
    Applying { name: &'a str },

    /// The unit held only comments or blank lines and was recorded
    /// without executing any SQL
    EmptyRecorded { name: &'a str },

    /// The unit's transaction committed
    Applied { name: &'a str, elapsed: Duration },
}

/// Outcome counts for a completed run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Units newly recorded this run, empty units included
    pub applied: usize,

    /// Units found in the ledger and skipped
    pub skipped: usize,
}

/// Backfill the ledger when the anchor table exists outside its knowledge.
async fn reconcile_legacy<S>(store: &mut S, seed: &LegacySeed) -> DbResult<()>
where
    S: MigrationStore + ?Sized,
{
    if store.table_exists(&seed.anchor_table).await? {
        log::debug!(
            "Anchor table '{}' present; backfilling ledger entry for {}",
            seed.anchor_table,
            seed.filename
        );
        store.record_applied(&seed.filename).await?;
    }
    Ok(())
}

/// Apply every unapplied unit in order, reporting progress per unit.
///
/// Units must already be sorted by filename; `discover_migrations`
/// guarantees that. The applied set is loaded once up front, which is
/// safe because the engine is the only writer during a run. Errors
/// halt the run immediately and carry enough context for the caller
/// to name the failing unit.
pub async fn apply_all<S, F>(
    store: &mut S,
    units: &[MigrationUnit],
    legacy: Option<&LegacySeed>,
    mut progress: F,
) -> DbResult<RunSummary>
where
    S: MigrationStore + ?Sized,
    F: FnMut(UnitProgress<'_>),
{
    store.ensure_ledger().await?;

    if let Some(seed) = legacy {
        reconcile_legacy(store, seed).await?;
    }

    let applied_set = store.applied_filenames().await?;

    let mut summary = RunSummary::default();
    for unit in units {
        if applied_set.contains(&unit.name) {
            progress(UnitProgress::AlreadyApplied { name: &unit.name });
            summary.skipped += 1;
            continue;
        }

        progress(UnitProgress::Applying { name: &unit.name });
        match unit.executable_sql() {
            None => {
                // Nothing to execute, so no transaction: the ledger
                // insert stands alone. A failure here still names the
                // unit, matching the per-file error contract.
                progress(UnitProgress::EmptyRecorded { name: &unit.name });
                store
                    .record_applied(&unit.name)
                    .await
                    .map_err(|e| DbError::MigrationFailed {
                        filename: unit.name.clone(),
                        message: match e {
                            DbError::Query(message) => message,
                            other => other.to_string(),
                        },
                    })?;
            }
            Some(sql) => {
                let started = Instant::now();
                store.apply_migration(&unit.name, &sql).await?;
                progress(UnitProgress::Applied {
                    name: &unit.name,
                    elapsed: started.elapsed(),
                });
            }
        }
        summary.applied += 1;
    }

    Ok(summary)
}

#[cfg(test)]
#[path = "runner_test.rs"]
mod tests;
