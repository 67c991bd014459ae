//! Survey use-case service.
//!
//! # Invariants
//! - New surveys start active with questions numbered `1..=N`.
//! - The active flag can move between both states without restriction.

use crate::model::survey::Survey;
use crate::model::{parse_document_id, DocumentId};
use crate::repo::survey_repo::SurveyRepository;
use crate::repo::{RepoError, RepoResult};

/// Use-case wrapper for survey CRUD operations.
pub struct SurveyService<R: SurveyRepository> {
    repo: R,
}

impl<R: SurveyRepository> SurveyService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates an active survey from ordered question texts.
    ///
    /// An empty question list is accepted.
    pub fn create_survey<I, Q>(
        &self,
        title: impl Into<String>,
        description: impl Into<String>,
        questions: I,
    ) -> RepoResult<DocumentId>
    where
        I: IntoIterator<Item = Q>,
        Q: Into<String>,
    {
        let survey = Survey::new(title, description, questions);
        self.repo.create_survey(&survey)
    }

    pub fn list_surveys(&self) -> RepoResult<Vec<Survey>> {
        self.repo.list_surveys()
    }

    /// Loads one survey by raw identifier token.
    pub fn get_survey(&self, raw_id: &str) -> RepoResult<Survey> {
        let id = parse_document_id(raw_id)?;
        self.repo.get_survey(id)?.ok_or(RepoError::NotFound(id))
    }

    /// Sets the active flag and nothing else.
    pub fn update_active_status(&self, raw_id: &str, is_active: bool) -> RepoResult<()> {
        let id = parse_document_id(raw_id)?;
        self.repo.set_survey_active(id, is_active)
    }

    pub fn delete_survey(&self, raw_id: &str) -> RepoResult<()> {
        let id = parse_document_id(raw_id)?;
        self.repo.delete_survey(id)
    }
}
