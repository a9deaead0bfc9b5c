//! Per-user, per-day focus session counts.
//!
//! Aggregates live in a key-value store under `"{user_id}_{YYYY-MM-DD}"`.
//! The count is bumped with a read followed by a merge write, so any other
//! fields stored on the same document survive. Two writers racing on the same
//! key can lose an increment; nothing here serializes them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::StudyFocusError;

/// Completed focus sessions for one user on one calendar day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyFocusAggregate {
    /// Number of completed sessions.
    #[serde(default)]
    pub count: u32,
}

/// Build the store key for a user and local calendar date.
#[must_use]
pub fn aggregate_key(user_id: &str, date: NaiveDate) -> String {
    format!("{user_id}_{}", date.format("%Y-%m-%d"))
}

/// Key-value store holding daily aggregates.
#[cfg_attr(test, mockall::automock)]
pub trait AggregateStore: Send {
    /// Read the aggregate stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn get(&self, key: &str) -> Result<Option<DailyFocusAggregate>, StudyFocusError>;

    /// Write `value` under `key`.
    ///
    /// With `merge`, fields of `value` are overlaid on the existing document
    /// and unrelated fields are kept; without it the document is replaced.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    fn set(
        &mut self,
        key: &str,
        value: &DailyFocusAggregate,
        merge: bool,
    ) -> Result<(), StudyFocusError>;
}

impl<S: AggregateStore + ?Sized> AggregateStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<DailyFocusAggregate>, StudyFocusError> {
        (**self).get(key)
    }

    fn set(
        &mut self,
        key: &str,
        value: &DailyFocusAggregate,
        merge: bool,
    ) -> Result<(), StudyFocusError> {
        (**self).set(key, value, merge)
    }
}

/// Fold any store failure into `PersistenceUnavailable`.
fn unavailable(err: StudyFocusError) -> StudyFocusError {
    match err {
        StudyFocusError::PersistenceUnavailable(_) => err,
        other => StudyFocusError::PersistenceUnavailable(other.to_string()),
    }
}

/// Count one completed session for `user_id` on `date`.
///
/// Returns the new count for the day.
///
/// # Errors
///
/// Returns `PersistenceUnavailable` if the read or the write fails.
pub fn record_completion<S: AggregateStore + ?Sized>(
    store: &mut S,
    user_id: &str,
    date: NaiveDate,
) -> Result<u32, StudyFocusError> {
    let key = aggregate_key(user_id, date);

    let previous = store.get(&key).map_err(unavailable)?.map_or(0, |a| a.count);
    let next = DailyFocusAggregate {
        count: previous.saturating_add(1),
    };

    store.set(&key, &next, true).map_err(unavailable)?;

    debug!(%key, count = next.count, "focus aggregate updated");
    Ok(next.count)
}

/// Read the count for `user_id` on `date`, treating a missing document as 0.
///
/// # Errors
///
/// Returns `PersistenceUnavailable` if the store cannot be read.
pub fn count_for_day<S: AggregateStore + ?Sized>(
    store: &S,
    user_id: &str,
    date: NaiveDate,
) -> Result<u32, StudyFocusError> {
    let key = aggregate_key(user_id, date);
    Ok(store.get(&key).map_err(unavailable)?.map_or(0, |a| a.count))
}
