//! Aggregate store implementations.
//!
//! Both stores keep each aggregate as a JSON object so that a merge write
//! only touches the fields it carries.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::Utc;
use rusqlite::{params, OptionalExtension};
use serde_json::{Map, Value};

use super::aggregate::{AggregateStore, DailyFocusAggregate};
use crate::error::StudyFocusError;
use crate::storage::Database;

/// Serialize an aggregate into a JSON object.
fn to_object(value: &DailyFocusAggregate) -> Result<Map<String, Value>, StudyFocusError> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        other => Err(StudyFocusError::PersistenceUnavailable(format!(
            "Aggregate did not serialize to an object: {other}"
        ))),
    }
}

/// Combine an existing document with a new write.
fn merged(
    existing: Option<Map<String, Value>>,
    incoming: Map<String, Value>,
    merge: bool,
) -> Map<String, Value> {
    match existing {
        Some(mut doc) if merge => {
            doc.extend(incoming);
            doc
        }
        _ => incoming,
    }
}

/// In-process store. Clones share the same documents.
#[derive(Debug, Clone, Default)]
pub struct MemoryAggregateStore {
    docs: Arc<Mutex<HashMap<String, Map<String, Value>>>>,
}

impl MemoryAggregateStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(
        &self,
    ) -> Result<std::sync::MutexGuard<'_, HashMap<String, Map<String, Value>>>, StudyFocusError>
    {
        self.docs
            .lock()
            .map_err(|_| StudyFocusError::PersistenceUnavailable("store lock poisoned".to_string()))
    }

    /// Raw document stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the store lock is poisoned.
    pub fn document(&self, key: &str) -> Result<Option<Value>, StudyFocusError> {
        Ok(self.lock()?.get(key).cloned().map(Value::Object))
    }

    /// Replace the raw document stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if `doc` is not a JSON object or the lock is poisoned.
    pub fn put_document(&self, key: &str, doc: Value) -> Result<(), StudyFocusError> {
        let Value::Object(map) = doc else {
            return Err(StudyFocusError::InvalidInput(
                "aggregate documents must be JSON objects".to_string(),
            ));
        };
        self.lock()?.insert(key.to_string(), map);
        Ok(())
    }

    /// Number of stored documents.
    ///
    /// # Errors
    ///
    /// Returns an error if the store lock is poisoned.
    pub fn document_count(&self) -> Result<usize, StudyFocusError> {
        Ok(self.lock()?.len())
    }
}

impl AggregateStore for MemoryAggregateStore {
    fn get(&self, key: &str) -> Result<Option<DailyFocusAggregate>, StudyFocusError> {
        self.lock()?
            .get(key)
            .map(|doc| serde_json::from_value(Value::Object(doc.clone())))
            .transpose()
            .map_err(StudyFocusError::from)
    }

    fn set(
        &mut self,
        key: &str,
        value: &DailyFocusAggregate,
        merge: bool,
    ) -> Result<(), StudyFocusError> {
        let incoming = to_object(value)?;
        let mut docs = self.lock()?;
        let doc = merged(docs.remove(key), incoming, merge);
        docs.insert(key.to_string(), doc);
        Ok(())
    }
}

/// Store backed by the local `SQLite` database.
pub struct SqliteAggregateStore {
    db: Database,
}

impl SqliteAggregateStore {
    /// Create a store with an existing database connection.
    #[must_use]
    pub const fn with_database(db: Database) -> Self {
        Self { db }
    }

    /// Raw document stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the stored JSON is corrupt.
    pub fn document(&self, key: &str) -> Result<Option<Value>, StudyFocusError> {
        Ok(self.read_object(key)?.map(Value::Object))
    }

    fn read_object(&self, key: &str) -> Result<Option<Map<String, Value>>, StudyFocusError> {
        let raw: Option<String> = self
            .db
            .connection()
            .query_row(
                "SELECT data FROM focus_aggregates WHERE key = ?1",
                [key],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| StudyFocusError::Database(format!("Failed to read aggregate {key}: {e}")))?;

        raw.map(|text| match serde_json::from_str::<Value>(&text)? {
            Value::Object(map) => Ok(map),
            _ => Err(StudyFocusError::Database(format!(
                "Aggregate {key} is not a JSON object"
            ))),
        })
        .transpose()
    }
}

impl AggregateStore for SqliteAggregateStore {
    fn get(&self, key: &str) -> Result<Option<DailyFocusAggregate>, StudyFocusError> {
        self.read_object(key)?
            .map(|doc| serde_json::from_value(Value::Object(doc)))
            .transpose()
            .map_err(StudyFocusError::from)
    }

    fn set(
        &mut self,
        key: &str,
        value: &DailyFocusAggregate,
        merge: bool,
    ) -> Result<(), StudyFocusError> {
        let existing = if merge { self.read_object(key)? } else { None };
        let doc = merged(existing, to_object(value)?, merge);
        let data = serde_json::to_string(&Value::Object(doc))?;

        self.db
            .connection()
            .execute(
                r"INSERT INTO focus_aggregates (key, data, updated_at)
                  VALUES (?1, ?2, ?3)
                  ON CONFLICT(key) DO UPDATE SET
                    data = excluded.data,
                    updated_at = excluded.updated_at",
                params![key, data, Utc::now().to_rfc3339()],
            )
            .map_err(|e| {
                StudyFocusError::Database(format!("Failed to write aggregate {key}: {e}"))
            })?;

        Ok(())
    }
}
