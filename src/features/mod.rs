//! Feature implementations for studyfocus.
//!
//! - Focus timer and daily session accounting
//! - Class timetable and attendance
//! - Course list and the user profile
//! - Quote of the day and the dashboard that shows it all

pub mod attendance;
pub mod courses;
pub mod dashboard;
pub mod focus;
pub mod motivation;
pub mod profile;
