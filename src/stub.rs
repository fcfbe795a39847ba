use crate::config::StubLoggerConfig;
use crate::error::AssertionFailure;
use crate::error::UnsupportedOperation;
use crate::logger::Logger;
use crate::record::EventId;
use crate::record::LogRecord;
use crate::record::RecordedError;
use crate::severity::Severity;
use std::convert::Infallible;
use std::marker::PhantomData;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::MutexGuard;
use std::sync::PoisonError;

struct Capture {
    /// Append-only, in call order.
    records: Vec<LogRecord>,
    minimum_severity: Severity,
}

/// A logger that records every event in memory so that tests can assert on
/// what the code under test logged.
///
/// Clones share the same captured records, which is how the [`log::Log`] and
/// [`tracing_subscriber::Layer`] adapters feed the same history. Create one
/// per test case.
///
/// `C` is the category the logger is created for, usually the type under
/// test.
pub struct StubLogger<C = ()> {
    capture: Arc<Mutex<Capture>>,
    category: PhantomData<fn() -> C>,
}

impl StubLogger {
    /// Creates a logger without a category. Use [`StubLogger::for_category`]
    /// for a logger typed after the code under test, `new` stays fixed to
    /// `()` so that `StubLogger::new()` needs no annotation.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C> StubLogger<C> {
    /// Creates a logger for category `C`, e.g.
    /// `StubLogger::<OrderService>::for_category()`.
    pub fn for_category() -> Self {
        Self::default()
    }

    pub fn from_config(config: &StubLoggerConfig) -> Self {
        Self::default().with_minimum_severity(config.minimum_severity)
    }

    pub fn with_minimum_severity(self, severity: Severity) -> Self {
        self.set_minimum_severity(severity);
        self
    }

    /// Name of the type the logger is created for.
    pub fn category(&self) -> &'static str {
        std::any::type_name::<C>()
    }

    fn lock(&self) -> MutexGuard<'_, Capture> {
        // The records are only ever appended to, so a panic while the lock
        // was held cannot have left them inconsistent.
        self.capture.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn minimum_severity(&self) -> Severity {
        self.lock().minimum_severity
    }

    /// Sets the threshold used by [`Logger::is_enabled`]. Recording is not
    /// affected.
    pub fn set_minimum_severity(&self, severity: Severity) {
        self.lock().minimum_severity = severity;
        tracing::debug!(
            target: crate::DIAGNOSTICS_TARGET,
            category = self.category(),
            %severity,
            "Minimum severity changed"
        );
    }

    /// Returns a copy of all captured records in call order.
    pub fn records(&self) -> Vec<LogRecord> {
        self.lock().records.clone()
    }

    pub fn len(&self) -> usize {
        self.lock().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().records.is_empty()
    }

    /// Returns the first captured record matching `predicate`.
    ///
    /// Predicates run on a snapshot taken before the call, so they may use
    /// the logger themselves. Records they log are not part of the search.
    pub fn find_record<P>(&self, mut predicate: P) -> Option<LogRecord>
    where
        P: FnMut(&LogRecord) -> bool,
    {
        self.records().into_iter().find(|record| predicate(record))
    }

    pub fn count_records<P>(&self, mut predicate: P) -> usize
    where
        P: FnMut(&LogRecord) -> bool,
    {
        self.records()
            .iter()
            .filter(|record| predicate(record))
            .count()
    }

    /// Like [`StubLogger::assert_record_exists`] but returns the failure
    /// instead of panicking.
    pub fn check_record_exists<P>(&self, mut predicate: P) -> Result<LogRecord, AssertionFailure>
    where
        P: FnMut(&LogRecord) -> bool,
    {
        let records = self.records();
        match records.iter().position(|record| predicate(record)) {
            Some(index) => Ok(records[index].clone()),
            None => Err(AssertionFailure::NotFound {
                captured: records.iter().map(ToString::to_string).collect(),
            }),
        }
    }

    /// Like [`StubLogger::assert_record_count`] but returns the failure
    /// instead of panicking.
    pub fn check_record_count<P>(&self, predicate: P, expected: usize) -> Result<(), AssertionFailure>
    where
        P: FnMut(&LogRecord) -> bool,
    {
        let actual = self.count_records(predicate);
        if actual != expected {
            return Err(AssertionFailure::CountMismatch { expected, actual });
        }
        Ok(())
    }

    /// Asserts that at least one captured record matches `predicate` and
    /// returns the first one.
    ///
    /// # Panics
    ///
    /// Panics if no record matches.
    #[track_caller]
    pub fn assert_record_exists<P>(&self, predicate: P) -> LogRecord
    where
        P: FnMut(&LogRecord) -> bool,
    {
        self.assert_record_exists_with(predicate, |_record| ())
    }

    /// Asserts that at least one captured record matches `predicate`, then
    /// runs the secondary assertions in `on_match` on the first match.
    ///
    /// # Panics
    ///
    /// Panics if no record matches. A panic inside `on_match` propagates
    /// unchanged.
    #[track_caller]
    pub fn assert_record_exists_with<P, F>(&self, predicate: P, on_match: F) -> LogRecord
    where
        P: FnMut(&LogRecord) -> bool,
        F: FnOnce(&LogRecord),
    {
        let record = match self.check_record_exists(predicate) {
            Ok(record) => record,
            Err(failure) => {
                tracing::debug!(
                    target: crate::DIAGNOSTICS_TARGET,
                    category = self.category(),
                    "Log record assertion failed"
                );
                panic!("{failure}");
            }
        };
        // The lock is released, so `on_match` may query the logger again.
        on_match(&record);
        record
    }

    /// Asserts that exactly `expected` captured records match `predicate`.
    ///
    /// # Panics
    ///
    /// Panics with both counts if they differ.
    #[track_caller]
    pub fn assert_record_count<P>(&self, predicate: P, expected: usize)
    where
        P: FnMut(&LogRecord) -> bool,
    {
        let actual = self.count_records(predicate);
        assert_eq!(
            actual, expected,
            "Unexpected number of matching log records"
        );
    }
}

impl<C> Logger for StubLogger<C> {
    type Scope = Infallible;

    /// Records the event regardless of the minimum severity.
    fn log<S, F>(
        &self,
        severity: Severity,
        _event_id: EventId,
        state: S,
        error: Option<RecordedError>,
        formatter: F,
    ) where
        F: FnOnce(&S, Option<&RecordedError>) -> String,
    {
        // Format before locking, the formatter may log too.
        let message = formatter(&state, error.as_ref());
        self.lock()
            .records
            .push(LogRecord::new(severity, message, error));
    }

    /// Returns `true` if `severity` ranks at or below the minimum severity.
    ///
    /// With the default `Trace` minimum only `Trace` is enabled, with `None`
    /// every level is.
    fn is_enabled(&self, severity: Severity) -> bool {
        severity.rank() <= self.minimum_severity().rank()
    }

    fn begin_scope<S>(&self, _state: S) -> anyhow::Result<Infallible> {
        Err(UnsupportedOperation {
            operation: "begin_scope",
        }
        .into())
    }
}

impl<C> Default for StubLogger<C> {
    fn default() -> Self {
        StubLogger {
            capture: Arc::new(Mutex::new(Capture {
                records: Vec::new(),
                minimum_severity: Severity::default(),
            })),
            category: PhantomData,
        }
    }
}

impl<C> Clone for StubLogger<C> {
    fn clone(&self) -> Self {
        StubLogger {
            capture: self.capture.clone(),
            category: PhantomData,
        }
    }
}

impl<C> std::fmt::Debug for StubLogger<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let capture = self.lock();
        f.debug_struct("StubLogger")
            .field("category", &self.category())
            .field("minimum_severity", &capture.minimum_severity)
            .field("records", &capture.records.len())
            .finish()
    }
}
