//! Connection bootstrap utilities for SQLite.
//!
//! # Responsibility
//! - Open file or in-memory SQLite connections.
//! - Configure busy timeout before any statement runs.
//! - Trigger schema migrations before returning a usable connection.
//!
//! # Invariants
//! - Returned connections have migrations fully applied.

use super::migrations::apply_migrations;
use super::{DbResult, OpenOptions};
use log::{error, info};
use rusqlite::Connection;
use std::path::Path;
use std::time::Instant;

/// Opens a SQLite database file with default options.
///
/// # Side effects
/// - Creates the file when missing.
/// - Emits `db_open` logging events with duration and status.
pub fn open_db(path: impl AsRef<Path>) -> DbResult<Connection> {
    open_db_with(path, OpenOptions::default())
}

/// Opens a SQLite database file and migrates it according to `options`.
pub fn open_db_with(path: impl AsRef<Path>, options: OpenOptions) -> DbResult<Connection> {
    open_logged("file", options, || Connection::open(path))
}

/// Opens an in-memory SQLite database with default options.
pub fn open_db_in_memory() -> DbResult<Connection> {
    open_db_in_memory_with(OpenOptions::default())
}

/// Opens an in-memory SQLite database and migrates it according to `options`.
pub fn open_db_in_memory_with(options: OpenOptions) -> DbResult<Connection> {
    open_logged("memory", options, Connection::open_in_memory)
}

fn open_logged(
    mode: &'static str,
    options: OpenOptions,
    connect: impl FnOnce() -> rusqlite::Result<Connection>,
) -> DbResult<Connection> {
    let started_at = Instant::now();
    info!("event=db_open module=db status=start mode={mode}");

    let mut conn = match connect() {
        Ok(conn) => conn,
        Err(err) => {
            error!(
                "event=db_open module=db status=error mode={mode} duration_ms={} error_code=db_open_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            return Err(err.into());
        }
    };

    match bootstrap_connection(&mut conn, options) {
        Ok(()) => {
            info!(
                "event=db_open module=db status=ok mode={mode} duration_ms={}",
                started_at.elapsed().as_millis()
            );
            Ok(conn)
        }
        Err(err) => {
            error!(
                "event=db_open module=db status=error mode={mode} duration_ms={} error_code=db_bootstrap_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            Err(err)
        }
    }
}

fn bootstrap_connection(conn: &mut Connection, options: OpenOptions) -> DbResult<()> {
    conn.busy_timeout(options.busy_timeout)?;
    apply_migrations(conn, options.migration_policy)?;
    Ok(())
}
