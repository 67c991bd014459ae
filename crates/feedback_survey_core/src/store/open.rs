//! Connection bootstrap for the SQLite document store.
//!
//! # Responsibility
//! - Open file or in-memory SQLite connections.
//! - Trigger schema migrations before returning a usable store.
//!
//! # Invariants
//! - Returned stores have migrations fully applied.

use super::migrations::apply_migrations;
use super::sqlite::SqliteDocumentStore;
use super::StoreResult;
use log::{error, info};
use rusqlite::Connection;
use std::path::Path;
use std::time::Instant;

/// Opens (or creates) a document store file and applies pending migrations.
///
/// # Side effects
/// - Emits `store_open` logging events with duration and status.
pub fn open_store(path: impl AsRef<Path>) -> StoreResult<SqliteDocumentStore> {
    let path = path.as_ref();
    bootstrap("file", || Connection::open(path))
}

/// Opens a throwaway in-memory document store.
pub fn open_store_in_memory() -> StoreResult<SqliteDocumentStore> {
    bootstrap("memory", Connection::open_in_memory)
}

fn bootstrap(
    mode: &str,
    connect: impl FnOnce() -> rusqlite::Result<Connection>,
) -> StoreResult<SqliteDocumentStore> {
    let started_at = Instant::now();
    info!("event=store_open module=store status=start mode={mode}");

    let mut conn = match connect() {
        Ok(conn) => conn,
        Err(err) => {
            error!(
                "event=store_open module=store status=error mode={} duration_ms={} error_code=store_open_failed error={}",
                mode,
                started_at.elapsed().as_millis(),
                err
            );
            return Err(err.into());
        }
    };

    if let Err(err) = apply_migrations(&mut conn) {
        error!(
            "event=store_open module=store status=error mode={} duration_ms={} error_code=store_migrate_failed error={}",
            mode,
            started_at.elapsed().as_millis(),
            err
        );
        return Err(err);
    }

    info!(
        "event=store_open module=store status=ok mode={} duration_ms={}",
        mode,
        started_at.elapsed().as_millis()
    );
    Ok(SqliteDocumentStore::new(conn))
}
