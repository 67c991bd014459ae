//! Core domain logic for the feedback and survey manager.
//! This crate owns the record shapes, the document store gateway and the
//! CRUD use-cases; front-ends only parse input and print results.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging};
pub use model::feedback::{Feedback, FeedbackEdit};
pub use model::survey::{parse_active_flag, Survey, SurveyQuestion};
pub use model::{parse_document_id, DocumentId, ParseError};
pub use repo::feedback_repo::{DocumentFeedbackRepository, FeedbackRepository};
pub use repo::survey_repo::{DocumentSurveyRepository, SurveyRepository};
pub use repo::{RepoError, RepoResult};
pub use service::feedback_service::FeedbackService;
pub use service::survey_service::SurveyService;
pub use store::{
    DocumentStore, SqliteDocumentStore, StoreContext, StoreError, StoreResult, UnavailableStore,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
