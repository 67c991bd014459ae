//! Stand-in store used when the real store could not be opened.

use super::{Document, DocumentStore, StoreError, StoreResult};
use crate::model::DocumentId;

/// Store whose every call fails with [`StoreError::Unavailable`].
///
/// Lets the shell keep running after a startup connection failure; each
/// operation then reports the failure on its own round trip.
#[derive(Debug, Clone)]
pub struct UnavailableStore {
    reason: String,
}

impl UnavailableStore {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    fn fail<T>(&self) -> StoreResult<T> {
        Err(StoreError::Unavailable(self.reason.clone()))
    }
}

impl DocumentStore for UnavailableStore {
    fn insert(&self, _collection: &str, _document: &Document) -> StoreResult<DocumentId> {
        self.fail()
    }

    fn find_all(&self, _collection: &str) -> StoreResult<Vec<Document>> {
        self.fail()
    }

    fn find_by_id(&self, _collection: &str, _id: DocumentId) -> StoreResult<Option<Document>> {
        self.fail()
    }

    fn update_by_id(
        &self,
        _collection: &str,
        _id: DocumentId,
        _changes: &Document,
    ) -> StoreResult<u64> {
        self.fail()
    }

    fn delete_by_id(&self, _collection: &str, _id: DocumentId) -> StoreResult<u64> {
        self.fail()
    }

    fn close(self: Box<Self>) -> StoreResult<()> {
        Ok(())
    }
}
