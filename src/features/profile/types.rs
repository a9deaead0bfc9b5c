//! Profile types.

use serde::{Deserialize, Serialize};

use crate::error::StudyFocusError;

/// Name shown when the user has not picked one.
pub const DEFAULT_DISPLAY_NAME: &str = "Student";

/// Where and what the user studies. Recorded once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcademicInfo {
    pub country: String,
    pub university: String,
    pub degree: String,
    pub department: String,
}

impl AcademicInfo {
    /// Trim every field and check that none is empty.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` naming the first missing field.
    pub fn validate(&mut self) -> Result<(), StudyFocusError> {
        for (name, value) in [
            ("country", &mut self.country),
            ("university", &mut self.university),
            ("degree", &mut self.degree),
            ("department", &mut self.department),
        ] {
            *value = value.trim().to_string();
            if value.is_empty() {
                return Err(StudyFocusError::InvalidInput(format!("{name} is required")));
            }
        }
        Ok(())
    }
}

/// A user's profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub uid: String,
    pub display_name: Option<String>,
    pub academic_info: Option<AcademicInfo>,
}

impl Profile {
    /// Empty profile for a user with no saved row.
    #[must_use]
    pub fn empty(uid: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            display_name: None,
            academic_info: None,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(DEFAULT_DISPLAY_NAME)
    }
}

/// Result of saving academic info.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcademicSave {
    /// Written for the first time.
    Saved,
    /// A record already existed and was left untouched.
    AlreadySaved,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(department: &str) -> AcademicInfo {
        AcademicInfo {
            country: " Pakistan ".to_string(),
            university: "NUST".to_string(),
            degree: "BS Computer Science".to_string(),
            department: department.to_string(),
        }
    }

    #[test]
    fn test_validate() {
        let mut ok = info("Computing");
        ok.validate().unwrap();
        assert_eq!(ok.country, "Pakistan");

        let mut missing = info(" ");
        assert!(missing
            .validate()
            .unwrap_err()
            .to_string()
            .contains("department is required"));
    }

    #[test]
    fn test_default_name() {
        let mut profile = Profile::empty("u1");
        assert_eq!(profile.name(), "Student");

        profile.display_name = Some("Sam".to_string());
        assert_eq!(profile.name(), "Sam");
    }
}
