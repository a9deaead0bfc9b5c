//! Timetable storage.
//!
//! Persists class entries to the local database.

use chrono::{DateTime, Utc};
use rusqlite::{params, OptionalExtension, Row};

use super::types::{validate, AttendanceStatus, ClassEntry};
use crate::error::StudyFocusError;
use crate::storage::Database;

const COLUMNS: &str = "id, uid, course, day, time, teacher, place, status, created_at";

/// Storage for timetable entries.
pub struct TimetableStorage {
    db: Database,
}

impl TimetableStorage {
    /// Create storage with an existing database connection.
    #[must_use]
    pub const fn with_database(db: Database) -> Self {
        Self { db }
    }

    /// Hand the connection back, e.g. to read focus aggregates next.
    #[must_use]
    pub fn into_database(self) -> Database {
        self.db
    }

    /// Validate and insert a new class, filling in its id and creation time.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if a required field is missing, or a database
    /// error if the insert fails.
    pub fn add(&self, entry: &mut ClassEntry) -> Result<i64, StudyFocusError> {
        validate(entry)?;
        let created_at = Utc::now();

        self.db
            .connection()
            .execute(
                r"INSERT INTO timetable_entries
                  (uid, course, day, time, teacher, place, status, created_at)
                  VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                params![
                    entry.uid,
                    entry.course,
                    entry.day,
                    entry.time,
                    entry.teacher,
                    entry.place,
                    entry.status.map(AttendanceStatus::as_str),
                    created_at.to_rfc3339(),
                ],
            )
            .map_err(|e| StudyFocusError::Database(format!("Failed to insert class: {e}")))?;

        let id = self.db.connection().last_insert_rowid();
        entry.id = Some(id);
        entry.created_at = Some(created_at);
        tracing::debug!(id, course = %entry.course, "class added");
        Ok(id)
    }

    /// Update the details of a saved class. Status is left as stored.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the entry has no id or no longer exists, and
    /// `InvalidInput` if a required field is missing.
    pub fn update(&self, entry: &mut ClassEntry) -> Result<(), StudyFocusError> {
        let id = entry
            .id
            .ok_or_else(|| StudyFocusError::NotFound("class has not been saved".to_string()))?;
        validate(entry)?;

        let rows = self
            .db
            .connection()
            .execute(
                r"UPDATE timetable_entries SET
                  course = ?1,
                  day = ?2,
                  time = ?3,
                  teacher = ?4,
                  place = ?5
                  WHERE id = ?6 AND uid = ?7",
                params![
                    entry.course,
                    entry.day,
                    entry.time,
                    entry.teacher,
                    entry.place,
                    id,
                    entry.uid,
                ],
            )
            .map_err(|e| StudyFocusError::Database(format!("Failed to update class: {e}")))?;

        if rows == 0 {
            return Err(StudyFocusError::NotFound(format!("class {id}")));
        }
        Ok(())
    }

    /// Delete a class. Returns whether anything was removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn delete(&self, uid: &str, id: i64) -> Result<bool, StudyFocusError> {
        let rows = self
            .db
            .connection()
            .execute(
                "DELETE FROM timetable_entries WHERE id = ?1 AND uid = ?2",
                params![id, uid],
            )
            .map_err(|e| StudyFocusError::Database(format!("Failed to delete class: {e}")))?;

        Ok(rows > 0)
    }

    /// Get a class by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get(&self, uid: &str, id: i64) -> Result<Option<ClassEntry>, StudyFocusError> {
        self.db
            .connection()
            .query_row(
                &format!("SELECT {COLUMNS} FROM timetable_entries WHERE id = ?1 AND uid = ?2"),
                params![id, uid],
                row_to_entry,
            )
            .optional()
            .map_err(|e| StudyFocusError::Database(format!("Failed to query class: {e}")))
    }

    /// All classes for a user, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_for_user(&self, uid: &str) -> Result<Vec<ClassEntry>, StudyFocusError> {
        self.query(
            &format!("SELECT {COLUMNS} FROM timetable_entries WHERE uid = ?1 ORDER BY id"),
            params![uid],
        )
    }

    /// Classes for a user on one weekday (full name, e.g. "Monday").
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_for_day(&self, uid: &str, day: &str) -> Result<Vec<ClassEntry>, StudyFocusError> {
        self.query(
            &format!(
                "SELECT {COLUMNS} FROM timetable_entries WHERE uid = ?1 AND day = ?2 ORDER BY time, id"
            ),
            params![uid, day],
        )
    }

    /// Mark a class with an attendance status.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the class does not exist for this user.
    pub fn set_status(
        &self,
        uid: &str,
        id: i64,
        status: AttendanceStatus,
    ) -> Result<(), StudyFocusError> {
        let rows = self
            .db
            .connection()
            .execute(
                "UPDATE timetable_entries SET status = ?1 WHERE id = ?2 AND uid = ?3",
                params![status.as_str(), id, uid],
            )
            .map_err(|e| StudyFocusError::Database(format!("Failed to update status: {e}")))?;

        if rows == 0 {
            return Err(StudyFocusError::NotFound(format!("class {id}")));
        }
        tracing::debug!(id, %status, "class status updated");
        Ok(())
    }

    fn query(
        &self,
        sql: &str,
        params: impl rusqlite::Params,
    ) -> Result<Vec<ClassEntry>, StudyFocusError> {
        let conn = self.db.connection();
        let mut stmt = conn
            .prepare(sql)
            .map_err(|e| StudyFocusError::Database(format!("Failed to prepare query: {e}")))?;

        let rows = stmt
            .query_map(params, row_to_entry)
            .map_err(|e| StudyFocusError::Database(format!("Failed to query classes: {e}")))?;

        rows.collect::<Result<Vec<_>, _>>()
            .map_err(|e| StudyFocusError::Database(e.to_string()))
    }
}

/// Convert a database row to a `ClassEntry`.
fn row_to_entry(row: &Row<'_>) -> Result<ClassEntry, rusqlite::Error> {
    let status: Option<String> = row.get(7)?;
    let created_at: Option<String> = row.get(8)?;

    Ok(ClassEntry {
        id: Some(row.get(0)?),
        uid: row.get(1)?,
        course: row.get(2)?,
        day: row.get(3)?,
        time: row.get(4)?,
        teacher: row.get(5)?,
        place: row.get(6)?,
        // Unknown values read back as unmarked
        status: status.and_then(|s| s.parse().ok()),
        created_at: created_at.and_then(|s| {
            DateTime::parse_from_rfc3339(&s)
                .map(|t| t.with_timezone(&Utc))
                .ok()
        }),
    })
}
