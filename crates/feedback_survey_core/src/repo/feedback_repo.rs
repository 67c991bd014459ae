//! Feedback repository contract and document-store implementation.
//!
//! # Invariants
//! - Edits touch `message`, `rating` and `updatedAt` only.
//! - Update and delete report `NotFound` when no document matched.

use super::{from_document, require_match, to_document, RepoResult};
use crate::model::feedback::{Feedback, FeedbackEdit};
use crate::model::DocumentId;
use crate::store::{Document, DocumentStore, StoreError, FEEDBACK_COLLECTION};
use log::info;
use serde_json::Value;

/// Repository interface for feedback CRUD operations.
pub trait FeedbackRepository {
    fn create_feedback(&self, feedback: &Feedback) -> RepoResult<DocumentId>;
    fn list_feedbacks(&self) -> RepoResult<Vec<Feedback>>;
    fn get_feedback(&self, id: DocumentId) -> RepoResult<Option<Feedback>>;
    fn update_feedback(&self, id: DocumentId, edit: &FeedbackEdit) -> RepoResult<()>;
    fn delete_feedback(&self, id: DocumentId) -> RepoResult<()>;
}

/// Feedback repository backed by the `feedbacks` collection.
pub struct DocumentFeedbackRepository<'store> {
    store: &'store dyn DocumentStore,
}

impl<'store> DocumentFeedbackRepository<'store> {
    pub fn new(store: &'store dyn DocumentStore) -> Self {
        Self { store }
    }
}

impl FeedbackRepository for DocumentFeedbackRepository<'_> {
    fn create_feedback(&self, feedback: &Feedback) -> RepoResult<DocumentId> {
        let document = to_document(feedback)?;
        let id = self.store.insert(FEEDBACK_COLLECTION, &document)?;
        info!("event=feedback_create module=repo status=ok id={id}");
        Ok(id)
    }

    fn list_feedbacks(&self) -> RepoResult<Vec<Feedback>> {
        self.store
            .find_all(FEEDBACK_COLLECTION)?
            .into_iter()
            .map(|document| from_document(FEEDBACK_COLLECTION, document))
            .collect()
    }

    fn get_feedback(&self, id: DocumentId) -> RepoResult<Option<Feedback>> {
        self.store
            .find_by_id(FEEDBACK_COLLECTION, id)?
            .map(|document| from_document(FEEDBACK_COLLECTION, document))
            .transpose()
    }

    fn update_feedback(&self, id: DocumentId, edit: &FeedbackEdit) -> RepoResult<()> {
        let mut changes = Document::new();
        changes.insert("message".to_string(), Value::from(edit.message.as_str()));
        changes.insert("rating".to_string(), Value::from(edit.rating));
        changes.insert(
            "updatedAt".to_string(),
            serde_json::to_value(edit.updated_at).map_err(StoreError::from)?,
        );

        let matched = self.store.update_by_id(FEEDBACK_COLLECTION, id, &changes)?;
        require_match(id, matched)?;
        info!("event=feedback_update module=repo status=ok id={id}");
        Ok(())
    }

    fn delete_feedback(&self, id: DocumentId) -> RepoResult<()> {
        let deleted = self.store.delete_by_id(FEEDBACK_COLLECTION, id)?;
        require_match(id, deleted)?;
        info!("event=feedback_delete module=repo status=ok id={id}");
        Ok(())
    }
}
