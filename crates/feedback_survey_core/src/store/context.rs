//! Process-wide store handle.
//!
//! # Responsibility
//! - Acquire the document store once at startup.
//! - Hand out borrowed access for each repository operation.
//! - Release the store exactly once at shutdown.
//!
//! # Invariants
//! - A failed startup connection never aborts the process; the context then
//!   wraps an [`UnavailableStore`] and records the startup error.

use super::open::{open_store, open_store_in_memory};
use super::unavailable::UnavailableStore;
use super::{DocumentStore, StoreError, StoreResult};
use log::{error, info};
use std::path::Path;

/// Owns the store handle shared by every operation of one shell session.
pub struct StoreContext {
    store: Box<dyn DocumentStore>,
    startup_error: Option<StoreError>,
}

impl StoreContext {
    /// Opens the store at `path`, falling back to an unavailable store.
    pub fn connect(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match open_store(path) {
            Ok(store) => {
                info!(
                    "event=store_connect module=store status=ok path={}",
                    path.display()
                );
                Self::from_store(Box::new(store))
            }
            Err(err) => {
                error!(
                    "event=store_connect module=store status=error path={} error={}",
                    path.display(),
                    err
                );
                Self {
                    store: Box::new(UnavailableStore::new(err.to_string())),
                    startup_error: Some(err),
                }
            }
        }
    }

    /// Opens a fresh in-memory store.
    pub fn in_memory() -> StoreResult<Self> {
        Ok(Self::from_store(Box::new(open_store_in_memory()?)))
    }

    /// Wraps an already opened store.
    pub fn from_store(store: Box<dyn DocumentStore>) -> Self {
        Self {
            store,
            startup_error: None,
        }
    }

    pub fn store(&self) -> &dyn DocumentStore {
        self.store.as_ref()
    }

    /// Error raised while opening the store, if any.
    pub fn startup_error(&self) -> Option<&StoreError> {
        self.startup_error.as_ref()
    }

    /// Releases the store connection.
    pub fn close(self) -> StoreResult<()> {
        self.store.close()
    }
}
