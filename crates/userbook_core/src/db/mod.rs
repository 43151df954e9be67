//! SQLite storage bootstrap and schema migration entry points.
//!
//! # Responsibility
//! - Open and configure SQLite connections for the user store.
//! - Apply schema migrations in deterministic order.
//!
//! # Invariants
//! - Migration version is tracked via `PRAGMA user_version`.
//! - Core code must not read/write user rows before migrations succeed.
//! - Existing data is only discarded under `MigrationPolicy::DestructiveReset`.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Duration;

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory, open_db_in_memory_with, open_db_with};

pub type DbResult<T> = Result<T, DbError>;

const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// How an older on-disk schema is brought up to the latest version.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MigrationPolicy {
    /// Apply pending migrations in order, keeping all rows.
    #[default]
    Additive,
    /// Drop the `users` table and rebuild it from scratch.
    ///
    /// Every stored record is lost. Only for throwaway/dev databases.
    DestructiveReset,
}

/// Connection bootstrap options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenOptions {
    pub migration_policy: MigrationPolicy,
    pub busy_timeout: Duration,
}

impl Default for OpenOptions {
    fn default() -> Self {
        Self {
            migration_policy: MigrationPolicy::Additive,
            busy_timeout: DEFAULT_BUSY_TIMEOUT,
        }
    }
}

#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "database schema version {db_version} is newer than supported {latest_supported}"
            ),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
