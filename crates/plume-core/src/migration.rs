//! Migration file representation and discovery
//!
//! Migrations are plain `.sql` files applied in lexicographic filename
//! order. The full filename, extension included, is the unit's identity
//! in the applied-state ledger.

use crate::error::{CoreError, CoreResult};
use std::path::Path;

/// Extension a migration file must carry
const SQL_EXTENSION: &str = "sql";

/// Marker starting a full-line SQL comment
const LINE_COMMENT: &str = "--";

/// A single migration file read from disk
#[derive(Debug, Clone)]
pub struct MigrationUnit {
    /// Unit name: the filename including the `.sql` extension
    pub name: String,

    /// Raw file content
    pub content: String,
}

impl MigrationUnit {
    /// Read a migration unit from a `.sql` file path
    pub fn from_file(path: &Path) -> CoreResult<Self> {
        let name = path
            .file_name()
            .and_then(|s| s.to_str())
            .ok_or_else(|| CoreError::InvalidFileName {
                path: path.display().to_string(),
            })?
            .to_string();

        let content = std::fs::read_to_string(path).map_err(|e| CoreError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;

        Ok(Self { name, content })
    }

    /// Content with blank lines and full-line `--` comments removed
    ///
    /// Returns `None` when nothing remains, which marks the unit as
    /// recordable without execution. Only lines whose trimmed form starts
    /// with the marker are dropped; a trailing comment stays attached to
    /// its statement line.
    pub fn executable_sql(&self) -> Option<String> {
        let kept: Vec<&str> = self
            .content
            .lines()
            .filter(|line| {
                let trimmed = line.trim();
                !trimmed.is_empty() && !trimmed.starts_with(LINE_COMMENT)
            })
            .collect();

        if kept.is_empty() {
            return None;
        }

        Some(kept.join("\n").trim().to_string())
    }
}

/// Discover all migration files in the given directory
///
/// Units are sorted by filename so `001_...` runs before `002_...`.
/// A missing directory and a directory without `.sql` files are both
/// errors; neither may pass for a successful no-op run.
pub fn discover_migrations(dir: &Path) -> CoreResult<Vec<MigrationUnit>> {
    if !dir.exists() {
        return Err(CoreError::DirNotFound {
            path: dir.display().to_string(),
        });
    }

    let entries = std::fs::read_dir(dir).map_err(|e| CoreError::IoWithPath {
        path: dir.display().to_string(),
        source: e,
    })?;

    let mut units = Vec::new();
    for entry in entries.flatten() {
        let path = entry.path();
        if path.extension().is_some_and(|e| e == SQL_EXTENSION) {
            units.push(MigrationUnit::from_file(&path)?);
        }
    }

    if units.is_empty() {
        return Err(CoreError::NoMigrations {
            path: dir.display().to_string(),
        });
    }

    // Sort by filename for a stable apply order
    units.sort_by(|a, b| a.name.cmp(&b.name));

    log::debug!(
        "Discovered {} migration files in {}",
        units.len(),
        dir.display()
    );

    Ok(units)
}

#[cfg(test)]
#[path = "migration_test.rs"]
mod tests;
