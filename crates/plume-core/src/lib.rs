//! plume-core - Core library for Plume
//!
//! This crate provides migration file discovery, the comment stripping
//! rule, and the configuration error types shared across all Plume
//! components.

pub mod error;
pub mod migration;

pub use error::{CoreError, CoreResult};
pub use migration::{discover_migrations, MigrationUnit};
