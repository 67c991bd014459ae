//! Survey record and its positional questions.
//!
//! # Invariants
//! - Question numbers form the contiguous range `1..=N` in input order.
//! - The question list is fixed at creation.
//! - `is_active` starts as `true` and may be toggled freely afterwards.

use super::{DocumentId, ParseError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Question owned by a survey, addressed only by its position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyQuestion {
    pub question: String,
    /// 1-based position inside the owning survey.
    pub question_number: u32,
}

/// One survey as stored in the `surveys` collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Survey {
    #[serde(rename = "_id")]
    pub id: DocumentId,
    pub title: String,
    pub description: String,
    pub questions: Vec<SurveyQuestion>,
    pub created_at: DateTime<Utc>,
    pub is_active: bool,
}

impl Survey {
    /// Creates an active survey, numbering `questions` from 1 in order.
    pub fn new<I, Q>(title: impl Into<String>, description: impl Into<String>, questions: I) -> Self
    where
        I: IntoIterator<Item = Q>,
        Q: Into<String>,
    {
        let questions = (1..)
            .zip(questions)
            .map(|(question_number, question)| SurveyQuestion {
                question: question.into(),
                question_number,
            })
            .collect();

        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: description.into(),
            questions,
            created_at: Utc::now(),
            is_active: true,
        }
    }
}

/// Parses a `true`/`false` answer, ignoring case and surrounding whitespace.
pub fn parse_active_flag(raw: &str) -> Result<bool, ParseError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(ParseError::InvalidInput(format!(
            "expected `true` or `false`, got `{other}`"
        ))),
    }
}
