//! SQLite migration registry and executor.
//!
//! # Responsibility
//! - Register schema migrations in strictly increasing order.
//! - Apply pending migrations atomically.
//! - Rebuild the schema from scratch when destructive reset is requested.
//!
//! # Invariants
//! - `version` values must remain monotonic.
//! - Applied migration version is mirrored to `PRAGMA user_version`.
//! - Migrations are additive; none of them drops user data.

use crate::db::{DbError, DbResult, MigrationPolicy};
use log::warn;
use rusqlite::Connection;

#[derive(Debug, Clone, Copy)]
struct Migration {
    version: u32,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    sql: include_str!("0001_users.sql"),
}];

const RESET_SQL: &str = "DROP TABLE IF EXISTS users;";

/// Returns the latest migration version known by this binary.
pub fn latest_version() -> u32 {
    MIGRATIONS.last().map_or(0, |migration| migration.version)
}

/// Applies all pending migrations on the provided connection.
///
/// Under [`MigrationPolicy::DestructiveReset`] an outdated database loses
/// its `users` table before the full migration chain is replayed.
pub fn apply_migrations(conn: &mut Connection, policy: MigrationPolicy) -> DbResult<()> {
    let current_version = current_user_version(conn)?;
    let latest = latest_version();

    if current_version > latest {
        return Err(DbError::UnsupportedSchemaVersion {
            db_version: current_version,
            latest_supported: latest,
        });
    }

    if current_version == latest {
        return Ok(());
    }

    let reset = policy == MigrationPolicy::DestructiveReset && users_table_exists(conn)?;
    let start_after = if reset {
        warn!(
            "event=schema_reset module=db status=start from_version={} to_version={} data_loss=true",
            current_version, latest
        );
        0
    } else {
        current_version
    };

    let tx = conn.transaction()?;
    if reset {
        tx.execute_batch(RESET_SQL)?;
    }
    for migration in MIGRATIONS {
        if migration.version <= start_after {
            continue;
        }

        tx.execute_batch(migration.sql)?;
        tx.execute_batch(&format!("PRAGMA user_version = {};", migration.version))?;
    }
    tx.commit()?;

    Ok(())
}

fn current_user_version(conn: &Connection) -> DbResult<u32> {
    let version = conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?;
    Ok(version)
}

fn users_table_exists(conn: &Connection) -> DbResult<bool> {
    let exists = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'users');",
        [],
        |row| row.get::<_, bool>(0),
    )?;
    Ok(exists)
}
