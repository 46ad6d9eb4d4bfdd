//! Applied-state ledger over the `schema_migrations` table.
//!
//! The helpers take any `GenericClient` so the same statement runs either
//! standalone on the client or inside a unit's transaction.

use chrono::{DateTime, Utc};
use std::collections::HashSet;
use tokio_postgres::GenericClient;

/// One row of the `schema_migrations` table.
#[derive(Debug, Clone)]
pub struct LedgerEntry {
    /// Surrogate key, assigned by the database in insert order
    pub id: i32,

    /// Migration filename, unique across the table
    pub filename: String,

    /// Server-assigned time the migration was recorded
    pub executed_at: DateTime<Utc>,
}

const CREATE_LEDGER_SQL: &str = "\
CREATE TABLE IF NOT EXISTS schema_migrations (
    id SERIAL PRIMARY KEY,
    filename TEXT NOT NULL UNIQUE,
    executed_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
)";

/// The insert is a no-op when the filename is already recorded, so the
/// reconciler and a concurrent runner can both call it safely.
const RECORD_SQL: &str =
    "INSERT INTO schema_migrations (filename) VALUES ($1) ON CONFLICT (filename) DO NOTHING";

const TABLE_EXISTS_SQL: &str = "\
SELECT EXISTS(
    SELECT 1 FROM information_schema.tables
    WHERE table_schema = 'public' AND table_name = $1
)";

const SELECT_APPLIED_SQL: &str = "SELECT filename FROM schema_migrations";

const SELECT_ENTRIES_SQL: &str =
    "SELECT id, filename, executed_at FROM schema_migrations ORDER BY id";

/// Create the ledger table when it does not exist yet.
pub(crate) async fn ensure_ledger<C>(client: &C) -> Result<(), tokio_postgres::Error>
where
    C: GenericClient + Sync,
{
    client.batch_execute(CREATE_LEDGER_SQL).await
}

/// Check `information_schema` for a table in the `public` schema.
pub(crate) async fn table_exists<C>(client: &C, table: &str) -> Result<bool, tokio_postgres::Error>
where
    C: GenericClient + Sync,
{
    let row = client.query_one(TABLE_EXISTS_SQL, &[&table]).await?;
    Ok(row.get(0))
}

/// Load every recorded filename.
pub(crate) async fn applied_filenames<C>(
    client: &C,
) -> Result<HashSet<String>, tokio_postgres::Error>
where
    C: GenericClient + Sync,
{
    let rows = client.query(SELECT_APPLIED_SQL, &[]).await?;
    Ok(rows.iter().map(|row| row.get(0)).collect())
}

/// Load full ledger rows in insert order.
pub(crate) async fn ledger_entries<C>(
    client: &C,
) -> Result<Vec<LedgerEntry>, tokio_postgres::Error>
where
    C: GenericClient + Sync,
{
    let rows = client.query(SELECT_ENTRIES_SQL, &[]).await?;
    Ok(rows
        .iter()
        .map(|row| LedgerEntry {
            id: row.get(0),
            filename: row.get(1),
            executed_at: row.get(2),
        })
        .collect())
}

/// Record a filename as applied, idempotently.
pub(crate) async fn record_applied<C>(
    client: &C,
    filename: &str,
) -> Result<(), tokio_postgres::Error>
where
    C: GenericClient + Sync,
{
    client.execute(RECORD_SQL, &[&filename]).await?;
    Ok(())
}
