//! Interfaces the focus runner needs from its surroundings.
//!
//! The signed-in user and the current date are supplied through these
//! traits rather than looked up globally, so the runner can be driven in
//! tests without a session backend or a real clock.

use chrono::{Local, NaiveDate};

/// Supplies the currently signed-in user, if any.
pub trait IdentityProvider {
    /// Stable id of the current user.
    fn current_user_id(&self) -> Option<String>;
}

/// Identity taken from configuration or the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfiguredIdentity {
    user_id: Option<String>,
}

impl ConfiguredIdentity {
    /// Create an identity. Blank ids are treated as signed out.
    #[must_use]
    pub fn new(user_id: Option<String>) -> Self {
        let user_id = user_id
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty());
        Self { user_id }
    }

    /// A signed-out identity.
    #[must_use]
    pub const fn anonymous() -> Self {
        Self { user_id: None }
    }
}

impl IdentityProvider for ConfiguredIdentity {
    fn current_user_id(&self) -> Option<String> {
        self.user_id.clone()
    }
}

/// Supplies the local calendar date.
pub trait Clock {
    /// Today's date in the user's local time zone.
    fn today(&self) -> NaiveDate;
}

/// The system clock in the local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock pinned to one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Callbacks into the UI that owns the timer.
///
/// Both methods default to doing nothing.
pub trait TimerHost {
    /// Remaining time changed and should be re-rendered.
    fn on_tick(&mut self, _remaining_seconds: u32) {}

    /// A session finished; the host decides how to notify the user.
    fn on_session_completed(&mut self, _completed_sessions: u32) {}
}

impl TimerHost for () {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_identity_trims_blank() {
        assert_eq!(ConfiguredIdentity::new(Some("  ".to_string())).current_user_id(), None);
        assert_eq!(ConfiguredIdentity::new(None).current_user_id(), None);
        assert_eq!(
            ConfiguredIdentity::new(Some(" abc ".to_string())).current_user_id(),
            Some("abc".to_string())
        );
        assert_eq!(ConfiguredIdentity::anonymous(), ConfiguredIdentity::default());
    }

    #[test]
    fn test_fixed_clock() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(FixedClock(date).today(), date);
    }
}
