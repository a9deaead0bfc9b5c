//! Course types.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::StudyFocusError;

/// A course the user is enrolled in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Database id, `None` until saved
    pub id: Option<i64>,
    /// Owner
    pub uid: String,
    /// Semester label, e.g. "Fall 2024"
    pub semester: String,
    /// Course code, e.g. "CS201"
    pub code: String,
    pub title: String,
    /// Credit hours
    pub credit: u32,
    /// Core, elective, lab, ...
    #[serde(rename = "type")]
    pub kind: String,
    pub created_at: Option<DateTime<Utc>>,
}

impl Course {
    /// Create an unsaved course.
    #[must_use]
    pub fn new(
        uid: impl Into<String>,
        semester: impl Into<String>,
        code: impl Into<String>,
        title: impl Into<String>,
        credit: u32,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            uid: uid.into(),
            semester: semester.into(),
            code: code.into(),
            title: title.into(),
            credit,
            kind: kind.into(),
            created_at: None,
        }
    }
}

/// Trim the text fields and check that none is empty.
///
/// # Errors
///
/// Returns `InvalidInput` naming the first missing field.
pub fn validate(course: &mut Course) -> Result<(), StudyFocusError> {
    for (name, value) in [
        ("uid", &mut course.uid),
        ("semester", &mut course.semester),
        ("code", &mut course.code),
        ("title", &mut course.title),
        ("type", &mut course.kind),
    ] {
        *value = value.trim().to_string();
        if value.is_empty() {
            return Err(StudyFocusError::InvalidInput(format!("{name} is required")));
        }
    }
    Ok(())
}

/// Totals shown above the course list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CourseSummary {
    pub courses: usize,
    pub credits: u32,
    pub semesters: usize,
}

impl CourseSummary {
    #[must_use]
    pub fn from_courses(courses: &[Course]) -> Self {
        let semesters = courses
            .iter()
            .map(|c| c.semester.as_str())
            .collect::<BTreeSet<_>>()
            .len();

        Self {
            courses: courses.len(),
            credits: courses.iter().map(|c| c.credit).sum(),
            semesters,
        }
    }
}

/// Group courses by semester, keeping first-seen order of both semesters
/// and the courses inside them.
#[must_use]
pub fn group_by_semester(courses: &[Course]) -> Vec<(&str, Vec<&Course>)> {
    let mut groups: Vec<(&str, Vec<&Course>)> = Vec::new();

    for course in courses {
        match groups.iter_mut().find(|(sem, _)| *sem == course.semester) {
            Some((_, list)) => list.push(course),
            None => groups.push((course.semester.as_str(), vec![course])),
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(semester: &str, code: &str, credit: u32) -> Course {
        Course::new("u1", semester, code, "Some Title", credit, "Core")
    }

    #[test]
    fn test_validate_trims_fields() {
        let mut c = Course::new(" u1 ", " Fall 2024 ", "CS201 ", "Algorithms", 3, " Core");
        validate(&mut c).unwrap();

        assert_eq!(c.semester, "Fall 2024");
        assert_eq!(c.code, "CS201");
        assert_eq!(c.kind, "Core");
    }

    #[test]
    fn test_validate_requires_every_field() {
        let mut c = course("Fall 2024", "  ", 3);
        let err = validate(&mut c).unwrap_err();
        assert!(err.to_string().contains("code is required"));

        let mut c = Course::new("u1", "Fall 2024", "CS201", "Algorithms", 3, "");
        assert!(validate(&mut c).unwrap_err().to_string().contains("type is required"));
    }

    #[test]
    fn test_summary() {
        let courses = vec![
            course("Fall 2024", "CS201", 3),
            course("Fall 2024", "MA101", 4),
            course("Spring 2025", "CS301", 3),
        ];

        let summary = CourseSummary::from_courses(&courses);
        assert_eq!(summary.courses, 3);
        assert_eq!(summary.credits, 10);
        assert_eq!(summary.semesters, 2);

        assert_eq!(CourseSummary::from_courses(&[]), CourseSummary::default());
    }

    #[test]
    fn test_group_by_semester_keeps_order() {
        let courses = vec![
            course("Spring 2025", "CS301", 3),
            course("Fall 2024", "CS201", 3),
            course("Spring 2025", "CS302", 3),
        ];

        let groups = group_by_semester(&courses);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "Spring 2025");
        let codes: Vec<_> = groups[0].1.iter().map(|c| c.code.as_str()).collect();
        assert_eq!(codes, vec!["CS301", "CS302"]);
        assert_eq!(groups[1].0, "Fall 2024");
    }

    #[test]
    fn test_kind_serializes_as_type() {
        let json = serde_json::to_value(course("Fall 2024", "CS201", 3)).unwrap();
        assert_eq!(json["type"], "Core");
        assert!(json.get("kind").is_none());
    }
}
