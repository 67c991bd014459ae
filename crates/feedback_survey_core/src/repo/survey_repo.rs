//! Survey repository contract and document-store implementation.
//!
//! # Invariants
//! - Questions are written once with the survey and never edited here.
//! - Status changes touch `isActive` only.

use super::{from_document, require_match, to_document, RepoResult};
use crate::model::survey::Survey;
use crate::model::DocumentId;
use crate::store::{Document, DocumentStore, SURVEY_COLLECTION};
use log::info;
use serde_json::Value;

/// Repository interface for survey CRUD operations.
pub trait SurveyRepository {
    fn create_survey(&self, survey: &Survey) -> RepoResult<DocumentId>;
    fn list_surveys(&self) -> RepoResult<Vec<Survey>>;
    fn get_survey(&self, id: DocumentId) -> RepoResult<Option<Survey>>;
    fn set_survey_active(&self, id: DocumentId, is_active: bool) -> RepoResult<()>;
    fn delete_survey(&self, id: DocumentId) -> RepoResult<()>;
}

/// Survey repository backed by the `surveys` collection.
pub struct DocumentSurveyRepository<'store> {
    store: &'store dyn DocumentStore,
}

impl<'store> DocumentSurveyRepository<'store> {
    pub fn new(store: &'store dyn DocumentStore) -> Self {
        Self { store }
    }
}

impl SurveyRepository for DocumentSurveyRepository<'_> {
    fn create_survey(&self, survey: &Survey) -> RepoResult<DocumentId> {
        let document = to_document(survey)?;
        let id = self.store.insert(SURVEY_COLLECTION, &document)?;
        info!(
            "event=survey_create module=repo status=ok id={} question_count={}",
            id,
            survey.questions.len()
        );
        Ok(id)
    }

    fn list_surveys(&self) -> RepoResult<Vec<Survey>> {
        self.store
            .find_all(SURVEY_COLLECTION)?
            .into_iter()
            .map(|document| from_document(SURVEY_COLLECTION, document))
            .collect()
    }

    fn get_survey(&self, id: DocumentId) -> RepoResult<Option<Survey>> {
        self.store
            .find_by_id(SURVEY_COLLECTION, id)?
            .map(|document| from_document(SURVEY_COLLECTION, document))
            .transpose()
    }

    fn set_survey_active(&self, id: DocumentId, is_active: bool) -> RepoResult<()> {
        let mut changes = Document::new();
        changes.insert("isActive".to_string(), Value::Bool(is_active));

        let matched = self.store.update_by_id(SURVEY_COLLECTION, id, &changes)?;
        require_match(id, matched)?;
        info!("event=survey_status module=repo status=ok id={id} is_active={is_active}");
        Ok(())
    }

    fn delete_survey(&self, id: DocumentId) -> RepoResult<()> {
        let deleted = self.store.delete_by_id(SURVEY_COLLECTION, id)?;
        require_match(id, deleted)?;
        info!("event=survey_delete module=repo status=ok id={id}");
        Ok(())
    }
}
