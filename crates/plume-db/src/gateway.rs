//! Live Postgres connection gateway.
//!
//! One gateway owns one client connection plus the background driver
//! task tokio-postgres requires. `connect` classifies authentication
//! and unknown-database failures so the CLI can report them precisely.

use crate::error::{DbError, DbResult};
use crate::ledger::{self, LedgerEntry};
use crate::traits::MigrationStore;
use async_trait::async_trait;
use std::collections::HashSet;
use tokio::task::JoinHandle;
use tokio_postgres::error::SqlState;
use tokio_postgres::{Client, NoTls};

/// A single-connection Postgres session.
pub struct PostgresGateway {
    client: Client,
    driver: JoinHandle<()>,
}

impl PostgresGateway {
    /// Connect to the database named by a `postgres://` URL.
    pub async fn connect(url: &str) -> DbResult<Self> {
        let (client, connection) = tokio_postgres::connect(url, NoTls)
            .await
            .map_err(classify_connect_error)?;

        // tokio-postgres performs all socket I/O on this task; it
        // resolves once the client is dropped.
        let driver = tokio::spawn(async move {
            if let Err(e) = connection.await {
                log::warn!("Connection driver task ended with error: {e}");
            }
        });

        Ok(Self { client, driver })
    }

    /// Borrow the underlying client for raw queries.
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Drop the connection and wait for the driver task to finish.
    pub async fn close(self) {
        drop(self.client);
        let _ = self.driver.await;
    }
}

fn classify_connect_error(err: tokio_postgres::Error) -> DbError {
    match err.code() {
        Some(code) if *code == SqlState::INVALID_PASSWORD => DbError::InvalidPassword,
        Some(code) if *code == SqlState::INVALID_CATALOG_NAME => DbError::UnknownDatabase,
        _ => DbError::Connection(err.to_string()),
    }
}

#[async_trait]
impl MigrationStore for PostgresGateway {
    async fn ensure_ledger(&mut self) -> DbResult<()> {
        ledger::ensure_ledger(&self.client)
            .await
            .map_err(|e| DbError::Query(e.to_string()))
    }

    async fn table_exists(&self, table: &str) -> DbResult<bool> {
        ledger::table_exists(&self.client, table)
            .await
            .map_err(|e| DbError::Query(e.to_string()))
    }

    async fn applied_filenames(&self) -> DbResult<HashSet<String>> {
        ledger::applied_filenames(&self.client)
            .await
            .map_err(|e| DbError::Query(e.to_string()))
    }

    async fn ledger_entries(&self) -> DbResult<Vec<LedgerEntry>> {
        ledger::ledger_entries(&self.client)
            .await
            .map_err(|e| DbError::Query(e.to_string()))
    }

    async fn record_applied(&mut self, filename: &str) -> DbResult<()> {
        ledger::record_applied(&self.client, filename)
            .await
            .map_err(|e| DbError::Query(e.to_string()))
    }

    async fn apply_migration(&mut self, filename: &str, sql: &str) -> DbResult<()> {
        let fail = |e: tokio_postgres::Error| DbError::MigrationFailed {
            filename: filename.to_string(),
            message: e.to_string(),
        };

        // The SQL batch and the ledger insert share one transaction.
        // Dropping the transaction on any error rolls both back.
        let tx = self.client.transaction().await.map_err(fail)?;
        tx.batch_execute(sql).await.map_err(fail)?;
        ledger::record_applied(&tx, filename).await.map_err(fail)?;
        tx.commit().await.map_err(fail)?;
        Ok(())
    }
}
