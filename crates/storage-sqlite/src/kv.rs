//! Typed JSON document access over the `kv_documents` table.
//!
//! Each well-known key holds one JSON document: the holdings array, the
//! snapshots array, or the budget object. Collections round-trip exactly
//! because JSON arrays preserve insertion order and the domain models
//! serialize with stable field names.

use diesel::prelude::*;
use diesel::SqliteConnection;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::StorageError;
use crate::schema::kv_documents;

/// Database row holding one stored document.
#[derive(Queryable, Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::kv_documents)]
pub struct KvDocumentDB {
    pub document_key: String,
    pub document_value: String,
}

/// Loads and deserializes the document stored under `key`.
/// An absent key is `None`, not an error.
pub fn load_document<T: DeserializeOwned>(
    conn: &mut SqliteConnection,
    key: &str,
) -> Result<Option<T>, StorageError> {
    let row = kv_documents::table
        .find(key)
        .first::<KvDocumentDB>(conn)
        .optional()?;
    match row {
        Some(row) => Ok(Some(serde_json::from_str(&row.document_value)?)),
        None => Ok(None),
    }
}

/// Serializes `value` and stores it under `key`, replacing any previous
/// document.
pub fn replace_document<T: Serialize>(
    conn: &mut SqliteConnection,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let row = KvDocumentDB {
        document_key: key.to_string(),
        document_value: serde_json::to_string(value)?,
    };
    diesel::replace_into(kv_documents::table)
        .values(&row)
        .execute(conn)?;
    Ok(())
}

/// Removes the document stored under `key`. Deleting an absent key is a
/// no-op.
pub fn delete_document(conn: &mut SqliteConnection, key: &str) -> Result<(), StorageError> {
    diesel::delete(kv_documents::table.find(key)).execute(conn)?;
    Ok(())
}
