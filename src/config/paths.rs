//! Path resolution for studyfocus configuration and data files.
//!
//! All studyfocus data is stored in `~/.studyfocus/`:
//! - `config.yaml` - Main configuration file
//! - `studyfocus.db` - SQLite database for focus aggregates and the timetable
//! - `studyfocus.log` - Log output while the full-screen timer is running

use std::path::PathBuf;

use crate::error::StudyFocusError;

/// Paths to studyfocus configuration and data files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.studyfocus/`
    pub root: PathBuf,
    /// Config file: `~/.studyfocus/config.yaml`
    pub config_file: PathBuf,
    /// Database file: `~/.studyfocus/studyfocus.db`
    pub database: PathBuf,
    /// Log file: `~/.studyfocus/studyfocus.log`
    pub log_file: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, StudyFocusError> {
        let home = std::env::var("HOME").map_err(|_| {
            StudyFocusError::Config("Could not determine home directory".to_string())
        })?;

        Ok(Self::with_root(PathBuf::from(home).join(".studyfocus")))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            database: root.join("studyfocus.db"),
            log_file: root.join("studyfocus.log"),
            root,
        }
    }

    /// Ensure the root directory exists.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), StudyFocusError> {
        if !self.root.exists() {
            std::fs::create_dir_all(&self.root).map_err(|e| {
                StudyFocusError::Config(format!(
                    "Failed to create directory {}: {e}",
                    self.root.display()
                ))
            })?;
        }

        Ok(())
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self::new().unwrap_or_else(|_| Self::with_root(PathBuf::from(".studyfocus")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_paths_with_root() {
        let root = PathBuf::from("/tmp/test-studyfocus");
        let paths = Paths::with_root(root.clone());

        assert_eq!(paths.root, root);
        assert_eq!(paths.config_file, root.join("config.yaml"));
        assert_eq!(paths.database, root.join("studyfocus.db"));
        assert_eq!(paths.log_file, root.join("studyfocus.log"));
    }

    #[test]
    fn test_ensure_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let paths = Paths::with_root(temp_dir.path().join("nested").join(".studyfocus"));

        paths.ensure_dirs().unwrap();
        assert!(paths.root.exists());

        // Second call is a no-op
        paths.ensure_dirs().unwrap();
    }
}
