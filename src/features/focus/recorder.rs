//! Fire-and-forget persistence of completed sessions.
//!
//! The tick path only hands a [`CompletionRecord`] to a [`CompletionSink`].
//! [`BackgroundRecorder`] queues each record on a channel and a worker
//! thread applies it to the aggregate store. Failures are logged and
//! dropped; they never reach the timer.

use std::sync::mpsc::{self, Sender};
use std::thread::{self, JoinHandle};

use chrono::NaiveDate;
use tracing::{info, warn};

use super::aggregate::{aggregate_key, record_completion, AggregateStore};
use crate::error::StudyFocusError;

/// One completed session to be counted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRecord {
    /// User the session belongs to.
    pub user_id: String,
    /// Local calendar day of the completion.
    pub date: NaiveDate,
}

impl CompletionRecord {
    /// Store key this record increments.
    #[must_use]
    pub fn key(&self) -> String {
        aggregate_key(&self.user_id, self.date)
    }
}

/// Receives completions. Must return without waiting on the store.
pub trait CompletionSink {
    /// Queue `record` for persistence.
    fn dispatch(&self, record: CompletionRecord);
}

/// Persists completions on a dedicated worker thread.
///
/// Records are applied in dispatch order. Dropping the recorder drains the
/// queue and joins the worker.
pub struct BackgroundRecorder {
    sender: Option<Sender<CompletionRecord>>,
    worker: Option<JoinHandle<()>>,
}

impl BackgroundRecorder {
    /// Move `store` onto a new worker thread.
    ///
    /// # Errors
    ///
    /// Returns an error if the thread cannot be spawned.
    pub fn spawn<S>(mut store: S) -> Result<Self, StudyFocusError>
    where
        S: AggregateStore + 'static,
    {
        let (sender, receiver) = mpsc::channel::<CompletionRecord>();

        let worker = thread::Builder::new()
            .name("focus-recorder".to_string())
            .spawn(move || {
                for record in receiver {
                    match record_completion(&mut store, &record.user_id, record.date) {
                        Ok(count) => info!(key = %record.key(), count, "focus session recorded"),
                        Err(e) => warn!(key = %record.key(), error = %e, "focus session not recorded"),
                    }
                }
            })
            .map_err(|e| {
                StudyFocusError::PersistenceUnavailable(format!("Failed to start recorder: {e}"))
            })?;

        Ok(Self {
            sender: Some(sender),
            worker: Some(worker),
        })
    }

    /// Wait for queued records to be written and stop the worker.
    pub fn shutdown(mut self) {
        self.finish();
    }

    fn finish(&mut self) {
        drop(self.sender.take());
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                warn!("focus recorder thread panicked");
            }
        }
    }
}

impl CompletionSink for BackgroundRecorder {
    fn dispatch(&self, record: CompletionRecord) {
        let Some(sender) = &self.sender else {
            warn!(key = %record.key(), "focus recorder already stopped");
            return;
        };

        if let Err(e) = sender.send(record) {
            warn!(key = %e.0.key(), "focus recorder is gone, dropping session");
        }
    }
}

impl Drop for BackgroundRecorder {
    fn drop(&mut self) {
        self.finish();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    use crate::features::focus::aggregate::DailyFocusAggregate;
    use crate::features::focus::storage::MemoryAggregateStore;

    fn record(user: &str, day: u32) -> CompletionRecord {
        CompletionRecord {
            user_id: user.to_string(),
            date: NaiveDate::from_ymd_opt(2024, 5, day).unwrap(),
        }
    }

    #[test]
    fn test_record_key() {
        assert_eq!(record("u1", 6).key(), "u1_2024-05-06");
    }

    #[test]
    fn test_each_dispatch_is_recorded() {
        let store = MemoryAggregateStore::new();
        let recorder = BackgroundRecorder::spawn(store.clone()).unwrap();

        recorder.dispatch(record("u1", 6));
        recorder.dispatch(record("u1", 6));
        recorder.dispatch(record("u1", 7));
        recorder.shutdown();

        assert_eq!(store.get("u1_2024-05-06").unwrap().unwrap().count, 2);
        assert_eq!(store.get("u1_2024-05-07").unwrap().unwrap().count, 1);
    }

    #[test]
    fn test_drop_drains_queue() {
        let store = MemoryAggregateStore::new();
        {
            let recorder = BackgroundRecorder::spawn(store.clone()).unwrap();
            for _ in 0..5 {
                recorder.dispatch(record("u2", 1));
            }
        }

        assert_eq!(store.get("u2_2024-05-01").unwrap().unwrap().count, 5);
    }

    /// Fails the first `failures_left` reads, then behaves like the wrapped store.
    struct FlakyStore {
        inner: MemoryAggregateStore,
        failures_left: Cell<u32>,
    }

    impl AggregateStore for FlakyStore {
        fn get(&self, key: &str) -> Result<Option<DailyFocusAggregate>, StudyFocusError> {
            let left = self.failures_left.get();
            if left > 0 {
                self.failures_left.set(left - 1);
                return Err(StudyFocusError::Database("offline".to_string()));
            }
            self.inner.get(key)
        }

        fn set(
            &mut self,
            key: &str,
            value: &DailyFocusAggregate,
            merge: bool,
        ) -> Result<(), StudyFocusError> {
            self.inner.set(key, value, merge)
        }
    }

    #[test]
    fn test_failed_record_is_dropped_not_retried() {
        let inner = MemoryAggregateStore::new();
        let store = FlakyStore {
            inner: inner.clone(),
            failures_left: Cell::new(1),
        };

        let recorder = BackgroundRecorder::spawn(store).unwrap();
        recorder.dispatch(record("u1", 6));
        recorder.dispatch(record("u1", 6));
        recorder.shutdown();

        // The first completion was lost to the outage, the second still landed
        assert_eq!(inner.get("u1_2024-05-06").unwrap().unwrap().count, 1);
    }

    #[test]
    fn test_dispatch_does_not_wait_for_store() {
        let inner = MemoryAggregateStore::new();
        let store = FlakyStore {
            inner: inner.clone(),
            failures_left: Cell::new(u32::MAX),
        };

        let recorder = BackgroundRecorder::spawn(store).unwrap();
        for _ in 0..100 {
            recorder.dispatch(record("u1", 6));
        }
        recorder.shutdown();

        assert!(inner.get("u1_2024-05-06").unwrap().is_none());
    }
}
