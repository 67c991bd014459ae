//! Feedback use-case service.

use crate::model::feedback::{Feedback, FeedbackEdit};
use crate::model::{parse_document_id, DocumentId};
use crate::repo::feedback_repo::FeedbackRepository;
use crate::repo::{RepoError, RepoResult};

/// Use-case wrapper for feedback CRUD operations.
pub struct FeedbackService<R: FeedbackRepository> {
    repo: R,
}

impl<R: FeedbackRepository> FeedbackService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Records new feedback and returns its identifier.
    ///
    /// Rating range and email shape are not checked.
    pub fn create_feedback(
        &self,
        user_name: impl Into<String>,
        user_email: impl Into<String>,
        message: impl Into<String>,
        rating: i32,
    ) -> RepoResult<DocumentId> {
        let feedback = Feedback::new(user_name, user_email, message, rating);
        self.repo.create_feedback(&feedback)
    }

    /// Lists all feedback in storage order.
    pub fn list_feedbacks(&self) -> RepoResult<Vec<Feedback>> {
        self.repo.list_feedbacks()
    }

    /// Loads one feedback entry by raw identifier token.
    pub fn get_feedback(&self, raw_id: &str) -> RepoResult<Feedback> {
        let id = parse_document_id(raw_id)?;
        self.repo.get_feedback(id)?.ok_or(RepoError::NotFound(id))
    }

    /// Replaces message and rating, stamping the update time.
    pub fn update_feedback(
        &self,
        raw_id: &str,
        message: impl Into<String>,
        rating: i32,
    ) -> RepoResult<()> {
        let id = parse_document_id(raw_id)?;
        self.repo.update_feedback(id, &FeedbackEdit::new(message, rating))
    }

    pub fn delete_feedback(&self, raw_id: &str) -> RepoResult<()> {
        let id = parse_document_id(raw_id)?;
        self.repo.delete_feedback(id)
    }
}
