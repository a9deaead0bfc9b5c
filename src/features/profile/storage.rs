//! Profile storage.

use chrono::Utc;
use rusqlite::{params, OptionalExtension, Row};

use super::types::{AcademicInfo, AcademicSave, Profile};
use crate::error::StudyFocusError;
use crate::storage::Database;

/// Storage for user profiles.
pub struct ProfileStorage {
    db: Database,
}

impl ProfileStorage {
    #[must_use]
    pub const fn with_database(db: Database) -> Self {
        Self { db }
    }

    /// Load a profile. Users with no saved row get an empty one.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get(&self, uid: &str) -> Result<Profile, StudyFocusError> {
        let profile = self
            .db
            .connection()
            .query_row(
                r"SELECT uid, display_name, country, university, degree, department,
                         academic_info_saved
                  FROM profiles WHERE uid = ?1",
                [uid],
                row_to_profile,
            )
            .optional()
            .map_err(|e| StudyFocusError::Database(format!("Failed to read profile: {e}")))?;

        Ok(profile.unwrap_or_else(|| Profile::empty(uid)))
    }

    /// Change the display name. Other fields are kept.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a blank name, or a database error.
    pub fn set_display_name(&self, uid: &str, name: &str) -> Result<(), StudyFocusError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StudyFocusError::InvalidInput(
                "display name is required".to_string(),
            ));
        }

        self.db
            .connection()
            .execute(
                r"INSERT INTO profiles (uid, display_name, updated_at) VALUES (?1, ?2, ?3)
                  ON CONFLICT(uid) DO UPDATE SET
                    display_name = excluded.display_name,
                    updated_at = excluded.updated_at",
                params![uid, name, Utc::now().to_rfc3339()],
            )
            .map_err(|e| StudyFocusError::Database(format!("Failed to save profile: {e}")))?;

        tracing::debug!(uid, "display name updated");
        Ok(())
    }

    /// Record academic info the first time only.
    ///
    /// A second call leaves the stored record as it is and reports
    /// `AlreadySaved`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if a field is missing, or a database error.
    pub fn save_academic_info(
        &self,
        uid: &str,
        info: &mut AcademicInfo,
    ) -> Result<AcademicSave, StudyFocusError> {
        info.validate()?;

        let rows = self
            .db
            .connection()
            .execute(
                r"INSERT INTO profiles
                    (uid, country, university, degree, department, academic_info_saved, updated_at)
                  VALUES (?1, ?2, ?3, ?4, ?5, 1, ?6)
                  ON CONFLICT(uid) DO UPDATE SET
                    country = excluded.country,
                    university = excluded.university,
                    degree = excluded.degree,
                    department = excluded.department,
                    academic_info_saved = 1,
                    updated_at = excluded.updated_at
                  WHERE profiles.academic_info_saved = 0",
                params![
                    uid,
                    info.country,
                    info.university,
                    info.degree,
                    info.department,
                    Utc::now().to_rfc3339(),
                ],
            )
            .map_err(|e| StudyFocusError::Database(format!("Failed to save academic info: {e}")))?;

        if rows == 0 {
            tracing::info!(uid, "academic info already saved, left unchanged");
            return Ok(AcademicSave::AlreadySaved);
        }
        Ok(AcademicSave::Saved)
    }
}

fn row_to_profile(row: &Row<'_>) -> Result<Profile, rusqlite::Error> {
    let saved: bool = row.get(6)?;
    let academic_info = if saved {
        Some(AcademicInfo {
            country: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
            university: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
            degree: row.get::<_, Option<String>>(4)?.unwrap_or_default(),
            department: row.get::<_, Option<String>>(5)?.unwrap_or_default(),
        })
    } else {
        None
    };

    Ok(Profile {
        uid: row.get(0)?,
        display_name: row.get(1)?,
        academic_info,
    })
}
