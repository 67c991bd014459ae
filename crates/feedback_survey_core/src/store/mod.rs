//! Document store gateway and SQLite-backed implementation.
//!
//! # Responsibility
//! - Define the collection-scoped document contract used by repositories.
//! - Open and configure the SQLite document store.
//! - Apply schema migrations in deterministic order.
//!
//! # Invariants
//! - Every stored document carries a string `_id` that is unique within its
//!   collection and never changes after insert.
//! - `find_all` returns documents in insertion order.
//! - Core code must not read/write documents before migrations succeed.

use crate::model::DocumentId;
use serde_json::{Map, Value};
use std::error::Error;
use std::fmt::{Display, Formatter};

mod context;
pub mod migrations;
mod open;
mod sqlite;
mod unavailable;

pub use context::StoreContext;
pub use open::{open_store, open_store_in_memory};
pub use sqlite::SqliteDocumentStore;
pub use unavailable::UnavailableStore;

/// Logical database namespace shared by both collections.
pub const DATABASE_NAME: &str = "feedback_system";
/// Collection holding feedback documents.
pub const FEEDBACK_COLLECTION: &str = "feedbacks";
/// Collection holding survey documents.
pub const SURVEY_COLLECTION: &str = "surveys";
/// Reserved identifier field present on every document.
pub const ID_FIELD: &str = "_id";

/// Schema-flexible record as persisted by the store.
pub type Document = Map<String, Value>;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug)]
pub enum StoreError {
    Sqlite(rusqlite::Error),
    Json(serde_json::Error),
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
    /// The store could not be reached when the process started.
    Unavailable(String),
    InvalidDocument(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::Json(err) => write!(f, "{err}"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "database schema version {db_version} is newer than supported {latest_supported}"
            ),
            Self::Unavailable(reason) => write!(f, "document store unavailable: {reason}"),
            Self::InvalidDocument(message) => write!(f, "invalid document: {message}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::Json(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. }
            | Self::Unavailable(_)
            | Self::InvalidDocument(_) => None,
        }
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// Collection-scoped document primitives.
///
/// Counts returned by `update_by_id` and `delete_by_id` are the number of
/// documents matched by the identifier, so callers can distinguish
/// "no such document" from success.
pub trait DocumentStore {
    /// Writes a new document and returns its identifier.
    ///
    /// A document without `_id` gets a freshly generated one.
    fn insert(&self, collection: &str, document: &Document) -> StoreResult<DocumentId>;
    /// Returns every document of the collection in insertion order.
    fn find_all(&self, collection: &str) -> StoreResult<Vec<Document>>;
    fn find_by_id(&self, collection: &str, id: DocumentId) -> StoreResult<Option<Document>>;
    /// Merges `changes` into the stored document. `_id` cannot be changed.
    fn update_by_id(&self, collection: &str, id: DocumentId, changes: &Document)
        -> StoreResult<u64>;
    fn delete_by_id(&self, collection: &str, id: DocumentId) -> StoreResult<u64>;
    /// Releases the underlying connection.
    fn close(self: Box<Self>) -> StoreResult<()>;
}
