//! Migration store trait definition

use crate::error::DbResult;
use crate::ledger::LedgerEntry;
use async_trait::async_trait;
use std::collections::HashSet;

/// Persistence seam between the migration engine and a database.
///
/// The live implementation is `PostgresGateway`; tests swap in an
/// in-memory store.
#[async_trait]
pub trait MigrationStore: Send {
    /// Create the applied-state ledger table if it does not exist
    async fn ensure_ledger(&mut self) -> DbResult<()>;

    /// Check whether a table exists in the public schema
    async fn table_exists(&self, table: &str) -> DbResult<bool>;

    /// Load the set of filenames already recorded as applied
    async fn applied_filenames(&self) -> DbResult<HashSet<String>>;

    /// Load full ledger rows in insert order
    async fn ledger_entries(&self) -> DbResult<Vec<LedgerEntry>>;

    /// Record a filename as applied, outside any migration transaction
    async fn record_applied(&mut self, filename: &str) -> DbResult<()>;

    /// Execute a unit's SQL and record it inside one transaction
    async fn apply_migration(&mut self, filename: &str, sql: &str) -> DbResult<()>;
}
