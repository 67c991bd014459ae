//! SQLite implementation of [`DocumentStore`].
//!
//! Every document lives in the single `documents` table as a JSON text body,
//! keyed by `(collection, doc_id)`. The autoincrement `seq` column preserves
//! insertion order for `find_all`.

use super::{Document, DocumentStore, StoreError, StoreResult, ID_FIELD};
use crate::model::DocumentId;
use log::info;
use rusqlite::{params, Connection, OptionalExtension};
use serde_json::Value;
use uuid::Uuid;

/// Document store backed by one SQLite connection.
pub struct SqliteDocumentStore {
    conn: Connection,
}

impl SqliteDocumentStore {
    /// Wraps a connection that already has migrations applied.
    ///
    /// Use [`super::open_store`] or [`super::open_store_in_memory`] instead of
    /// calling this directly.
    pub(crate) fn new(conn: Connection) -> Self {
        Self { conn }
    }
}

impl DocumentStore for SqliteDocumentStore {
    fn insert(&self, collection: &str, document: &Document) -> StoreResult<DocumentId> {
        let mut document = document.clone();
        let id = match document.get(ID_FIELD) {
            Some(value) => parse_document_id(value)?,
            None => Uuid::new_v4(),
        };
        document.insert(ID_FIELD.to_string(), Value::String(id.to_string()));

        let body = serde_json::to_string(&document)?;
        self.conn.execute(
            "INSERT INTO documents (collection, doc_id, body) VALUES (?1, ?2, ?3);",
            params![collection, id.to_string(), body],
        )?;

        Ok(id)
    }

    fn find_all(&self, collection: &str) -> StoreResult<Vec<Document>> {
        let mut stmt = self.conn.prepare(
            "SELECT body
             FROM documents
             WHERE collection = ?1
             ORDER BY seq ASC;",
        )?;

        let mut rows = stmt.query([collection])?;
        let mut documents = Vec::new();
        while let Some(row) = rows.next()? {
            let body: String = row.get(0)?;
            documents.push(parse_body(&body)?);
        }

        Ok(documents)
    }

    fn find_by_id(&self, collection: &str, id: DocumentId) -> StoreResult<Option<Document>> {
        let body: Option<String> = self
            .conn
            .query_row(
                "SELECT body FROM documents WHERE collection = ?1 AND doc_id = ?2;",
                params![collection, id.to_string()],
                |row| row.get(0),
            )
            .optional()?;

        body.as_deref().map(parse_body).transpose()
    }

    fn update_by_id(
        &self,
        collection: &str,
        id: DocumentId,
        changes: &Document,
    ) -> StoreResult<u64> {
        if changes.contains_key(ID_FIELD) {
            return Err(StoreError::InvalidDocument(format!(
                "`{ID_FIELD}` cannot be modified"
            )));
        }

        let patch = serde_json::to_string(changes)?;
        let matched = self.conn.execute(
            "UPDATE documents
             SET body = json_patch(body, ?3)
             WHERE collection = ?1 AND doc_id = ?2;",
            params![collection, id.to_string(), patch],
        )?;

        Ok(matched as u64)
    }

    fn delete_by_id(&self, collection: &str, id: DocumentId) -> StoreResult<u64> {
        let deleted = self.conn.execute(
            "DELETE FROM documents WHERE collection = ?1 AND doc_id = ?2;",
            params![collection, id.to_string()],
        )?;

        Ok(deleted as u64)
    }

    fn close(self: Box<Self>) -> StoreResult<()> {
        let store = *self;
        store.conn.close().map_err(|(_, err)| StoreError::from(err))?;
        info!("event=store_close module=store status=ok");
        Ok(())
    }
}

fn parse_document_id(value: &Value) -> StoreResult<DocumentId> {
    let text = value.as_str().ok_or_else(|| {
        StoreError::InvalidDocument(format!("`{ID_FIELD}` must be a string, got {value}"))
    })?;
    Uuid::parse_str(text)
        .map_err(|_| StoreError::InvalidDocument(format!("`{ID_FIELD}` is not a uuid: `{text}`")))
}

fn parse_body(body: &str) -> StoreResult<Document> {
    match serde_json::from_str::<Value>(body)? {
        Value::Object(document) => Ok(document),
        other => Err(StoreError::InvalidDocument(format!(
            "stored body is not an object: {other}"
        ))),
    }
}
