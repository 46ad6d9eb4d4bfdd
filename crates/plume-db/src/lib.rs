//! plume-db - Postgres layer for Plume
//!
//! This crate provides the `MigrationStore` trait, the live Postgres
//! gateway, and the engine that applies discovered migration units in
//! filename order.

pub mod error;
pub mod gateway;
pub mod ledger;
pub mod runner;
pub mod traits;

pub use error::{DbError, DbResult};
pub use gateway::PostgresGateway;
pub use ledger::LedgerEntry;
pub use runner::{apply_all, LegacySeed, RunSummary, UnitProgress};
pub use traits::MigrationStore;
