//! Course storage.

use chrono::{DateTime, Utc};
use rusqlite::{params, Row};

use super::types::{validate, Course};
use crate::error::StudyFocusError;
use crate::storage::Database;

/// Storage for the course list.
pub struct CourseStorage {
    db: Database,
}

impl CourseStorage {
    #[must_use]
    pub const fn with_database(db: Database) -> Self {
        Self { db }
    }

    /// Validate and insert a course, filling in its id and creation time.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if a field is missing, or a database error if
    /// the insert fails.
    pub fn add(&self, course: &mut Course) -> Result<i64, StudyFocusError> {
        validate(course)?;
        let created_at = Utc::now();

        self.db
            .connection()
            .execute(
                r"INSERT INTO courses (uid, semester, code, title, credit, kind, created_at)
                  VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![
                    course.uid,
                    course.semester,
                    course.code,
                    course.title,
                    course.credit,
                    course.kind,
                    created_at.to_rfc3339(),
                ],
            )
            .map_err(|e| StudyFocusError::Database(format!("Failed to insert course: {e}")))?;

        let id = self.db.connection().last_insert_rowid();
        course.id = Some(id);
        course.created_at = Some(created_at);
        tracing::debug!(id, code = %course.code, "course added");
        Ok(id)
    }

    /// All courses for a user, in the order they were added.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_for_user(&self, uid: &str) -> Result<Vec<Course>, StudyFocusError> {
        let conn = self.db.connection();
        let mut stmt = conn
            .prepare(
                r"SELECT id, uid, semester, code, title, credit, kind, created_at
                  FROM courses WHERE uid = ?1 ORDER BY id",
            )
            .map_err(|e| StudyFocusError::Database(format!("Failed to prepare query: {e}")))?;

        let rows = stmt
            .query_map([uid], row_to_course)
            .map_err(|e| StudyFocusError::Database(format!("Failed to query courses: {e}")))?;

        rows.collect::<Result<Vec<_>, _>>()
            .map_err(|e| StudyFocusError::Database(e.to_string()))
    }

    /// Remove a course. Returns whether anything was removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn delete(&self, uid: &str, id: i64) -> Result<bool, StudyFocusError> {
        let rows = self
            .db
            .connection()
            .execute("DELETE FROM courses WHERE id = ?1 AND uid = ?2", params![id, uid])
            .map_err(|e| StudyFocusError::Database(format!("Failed to delete course: {e}")))?;

        Ok(rows > 0)
    }
}

fn row_to_course(row: &Row<'_>) -> Result<Course, rusqlite::Error> {
    let created_at: String = row.get(7)?;

    Ok(Course {
        id: Some(row.get(0)?),
        uid: row.get(1)?,
        semester: row.get(2)?,
        code: row.get(3)?,
        title: row.get(4)?,
        credit: row.get(5)?,
        kind: row.get(6)?,
        created_at: DateTime::parse_from_rfc3339(&created_at)
            .map(|t| t.with_timezone(&Utc))
            .ok(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_storage() -> CourseStorage {
        CourseStorage::with_database(Database::open_in_memory().unwrap())
    }

    #[test]
    fn test_add_and_list() {
        let storage = create_test_storage();
        let mut course = Course::new("u1", "Fall 2024", "CS201", "Algorithms", 3, "Core");

        let id = storage.add(&mut course).unwrap();
        assert_eq!(course.id, Some(id));

        let courses = storage.list_for_user("u1").unwrap();
        assert_eq!(courses.len(), 1);
        assert_eq!(courses[0].code, "CS201");
        assert_eq!(courses[0].credit, 3);
        assert_eq!(courses[0].kind, "Core");
        assert!(courses[0].created_at.is_some());
    }

    #[test]
    fn test_incomplete_course_is_not_saved() {
        let storage = create_test_storage();
        let mut course = Course::new("u1", "Fall 2024", "", "Algorithms", 3, "Core");

        assert!(matches!(
            storage.add(&mut course),
            Err(StudyFocusError::InvalidInput(_))
        ));
        assert!(storage.list_for_user("u1").unwrap().is_empty());
    }

    #[test]
    fn test_courses_are_scoped_to_user() {
        let storage = create_test_storage();
        let id = storage
            .add(&mut Course::new("u1", "Fall 2024", "CS201", "Algorithms", 3, "Core"))
            .unwrap();
        storage
            .add(&mut Course::new("u2", "Fall 2024", "PH101", "Physics", 4, "Core"))
            .unwrap();

        assert_eq!(storage.list_for_user("u1").unwrap().len(), 1);
        assert!(!storage.delete("u2", id).unwrap());
        assert!(storage.delete("u1", id).unwrap());
        assert!(storage.list_for_user("u1").unwrap().is_empty());
    }
}
