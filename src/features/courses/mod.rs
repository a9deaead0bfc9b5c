//! Per-semester course list with credit totals.

pub mod storage;
pub mod types;

pub use storage::CourseStorage;
pub use types::{group_by_semester, validate, Course, CourseSummary};
