//! Domain records for the feedback and survey collections.
//!
//! # Responsibility
//! - Define the typed shape of each persisted document.
//! - Parse raw user tokens (identifiers, flags) into typed values.
//!
//! # Invariants
//! - Every record is identified by a stable `DocumentId`.
//! - Feedback and survey records never reference each other.

use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub mod feedback;
pub mod survey;

/// Stable identifier assigned to every record at creation.
pub type DocumentId = Uuid;

/// Rejected raw user token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Token is not a well-formed identifier.
    InvalidIdentifier(String),
    /// Token could not be parsed into the expected value type.
    InvalidInput(String),
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidIdentifier(raw) => write!(f, "invalid identifier: `{raw}`"),
            Self::InvalidInput(message) => write!(f, "invalid input: {message}"),
        }
    }
}

impl Error for ParseError {}

/// Parses a user-supplied identifier token.
///
/// Surrounding whitespace is ignored; anything else must be a uuid.
pub fn parse_document_id(raw: &str) -> Result<DocumentId, ParseError> {
    let trimmed = raw.trim();
    Uuid::parse_str(trimmed).map_err(|_| ParseError::InvalidIdentifier(trimmed.to_string()))
}
