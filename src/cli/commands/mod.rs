//! Command implementations for studyfocus.
//!
//! Each command returns the text to print; the binary does the printing.

mod completions;
mod course;
mod dashboard;
mod focus;
mod timetable;

pub use completions::{completion_install_instructions, completions, generate_completions};
pub use course::{course, profile};
pub use dashboard::dashboard;
pub use focus::{focus, run_plain_session};
pub use timetable::timetable;

use crate::cli::args::OutputFormat;
use crate::config::{Config, Paths};
use crate::error::StudyFocusError;
use crate::features::focus::{ConfiguredIdentity, IdentityProvider};
use crate::storage::Database;

/// Everything a command needs besides its own arguments.
#[derive(Debug, Clone)]
pub struct Context {
    /// Data and config locations
    pub paths: Paths,
    /// Loaded configuration
    pub config: Config,
    /// Resolved output format
    pub format: OutputFormat,
    identity: ConfiguredIdentity,
}

impl Context {
    /// Build a context. A user given on the command line or in the
    /// environment wins over the one in the config file.
    #[must_use]
    pub fn new(
        paths: Paths,
        config: Config,
        output: Option<OutputFormat>,
        user: Option<String>,
    ) -> Self {
        let format = output.unwrap_or(config.general.default_output);
        let identity = ConfiguredIdentity::new(user.or_else(|| config.identity.user_id.clone()));

        Self {
            paths,
            config,
            format,
            identity,
        }
    }

    /// Identity for the focus runner; may be signed out.
    #[must_use]
    pub fn identity(&self) -> ConfiguredIdentity {
        self.identity.clone()
    }

    /// The current user, for commands that cannot run without one.
    ///
    /// # Errors
    ///
    /// Returns `Config` if no user is set anywhere.
    pub fn require_user(&self) -> Result<String, StudyFocusError> {
        self.identity.current_user_id().ok_or_else(|| {
            StudyFocusError::Config(
                "No user set. Pass --user, set STUDYFOCUS_USER, or add identity.user_id to the config file"
                    .to_string(),
            )
        })
    }

    /// Open the database under this context's data directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or the database
    /// cannot be opened.
    pub fn open_database(&self) -> Result<Database, StudyFocusError> {
        self.paths.ensure_dirs()?;
        Database::open_at(&self.paths.database)
    }
}
