//! User profile: display name and the one-time academic record.

pub mod storage;
pub mod types;

pub use storage::ProfileStorage;
pub use types::{AcademicInfo, AcademicSave, Profile, DEFAULT_DISPLAY_NAME};
