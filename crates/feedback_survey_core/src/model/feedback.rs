//! Feedback record.
//!
//! # Invariants
//! - `id` and `created_at` never change after creation.
//! - `updated_at` is `None` until the first edit.
//! - `rating` and `user_email` are stored as given; no range or format check.

use super::DocumentId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One feedback entry as stored in the `feedbacks` collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    #[serde(rename = "_id")]
    pub id: DocumentId,
    pub user_name: String,
    pub user_email: String,
    pub message: String,
    /// Intended range is 1-5.
    pub rating: i32,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Feedback {
    /// Creates a feedback entry with a fresh id, stamped now.
    pub fn new(
        user_name: impl Into<String>,
        user_email: impl Into<String>,
        message: impl Into<String>,
        rating: i32,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_name: user_name.into(),
            user_email: user_email.into(),
            message: message.into(),
            rating,
            created_at: Utc::now(),
            updated_at: None,
        }
    }
}

/// Field changes applied by a feedback edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackEdit {
    pub message: String,
    pub rating: i32,
    pub updated_at: DateTime<Utc>,
}

impl FeedbackEdit {
    pub fn new(message: impl Into<String>, rating: i32) -> Self {
        Self {
            message: message.into(),
            rating,
            updated_at: Utc::now(),
        }
    }
}
