//! Repository layer over the document store.
//!
//! # Responsibility
//! - Map typed records to and from collection documents.
//! - Turn gateway counts into semantic outcomes (`NotFound`).
//!
//! # Invariants
//! - Repository APIs take already-parsed identifiers; raw tokens are parsed
//!   by the service layer before any store call.
//! - Read paths reject documents that do not decode instead of masking them.

use crate::model::{DocumentId, ParseError};
use crate::store::{Document, StoreError};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod feedback_repo;
pub mod survey_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Error taxonomy shared by feedback and survey operations.
#[derive(Debug)]
pub enum RepoError {
    /// Supplied identifier token is malformed.
    InvalidIdentifier(String),
    /// Well-formed identifier that matches no record.
    NotFound(DocumentId),
    /// User value could not be parsed into the expected type.
    InvalidInput(String),
    /// Gateway failure, including an unreachable store.
    Store(StoreError),
    /// Persisted document does not match the record shape.
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidIdentifier(raw) => write!(f, "invalid identifier: `{raw}`"),
            Self::NotFound(id) => write!(f, "record not found: {id}"),
            Self::InvalidInput(message) => write!(f, "invalid input: {message}"),
            Self::Store(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StoreError> for RepoError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<ParseError> for RepoError {
    fn from(value: ParseError) -> Self {
        match value {
            ParseError::InvalidIdentifier(raw) => Self::InvalidIdentifier(raw),
            ParseError::InvalidInput(message) => Self::InvalidInput(message),
        }
    }
}

fn to_document<T: Serialize>(record: &T) -> RepoResult<Document> {
    match serde_json::to_value(record).map_err(StoreError::from)? {
        Value::Object(document) => Ok(document),
        other => Err(RepoError::InvalidData(format!(
            "record did not serialize to an object: {other}"
        ))),
    }
}

fn from_document<T: DeserializeOwned>(collection: &str, document: Document) -> RepoResult<T> {
    serde_json::from_value(Value::Object(document))
        .map_err(|err| RepoError::InvalidData(format!("undecodable `{collection}` document: {err}")))
}

fn require_match(id: DocumentId, matched: u64) -> RepoResult<()> {
    if matched == 0 {
        return Err(RepoError::NotFound(id));
    }
    Ok(())
}
