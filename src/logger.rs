use crate::record::EventId;
use crate::record::RecordedError;
use crate::severity::Severity;

/// The capability every logger-shaped dependency provides, whether it emits
/// events or, like [`crate::stub::StubLogger`], only records them.
pub trait Logger {
    /// Handle returned by [`Logger::begin_scope`], ending the scope when
    /// dropped.
    type Scope;

    /// Logs an event. `formatter` turns `state` and the optional `error` into
    /// the final message.
    fn log<S, F>(
        &self,
        severity: Severity,
        event_id: EventId,
        state: S,
        error: Option<RecordedError>,
        formatter: F,
    ) where
        F: FnOnce(&S, Option<&RecordedError>) -> String;

    fn is_enabled(&self, severity: Severity) -> bool;

    fn begin_scope<S>(&self, state: S) -> anyhow::Result<Self::Scope>;
}

/// Shorthands for logging plain messages.
pub trait LoggerExt: Logger {
    fn log_message(&self, severity: Severity, message: impl Into<String>) {
        self.log(
            severity,
            EventId::default(),
            message.into(),
            None,
            |message, _error| message.clone(),
        );
    }

    fn log_error(&self, severity: Severity, error: RecordedError, message: impl Into<String>) {
        self.log(
            severity,
            EventId::default(),
            message.into(),
            Some(error),
            |message, _error| message.clone(),
        );
    }

    fn trace(&self, message: impl Into<String>) {
        self.log_message(Severity::Trace, message);
    }

    fn debug(&self, message: impl Into<String>) {
        self.log_message(Severity::Debug, message);
    }

    fn information(&self, message: impl Into<String>) {
        self.log_message(Severity::Information, message);
    }

    fn warning(&self, message: impl Into<String>) {
        self.log_message(Severity::Warning, message);
    }

    fn error(&self, message: impl Into<String>) {
        self.log_message(Severity::Error, message);
    }

    fn error_with(&self, error: RecordedError, message: impl Into<String>) {
        self.log_error(Severity::Error, error, message);
    }

    fn critical(&self, message: impl Into<String>) {
        self.log_message(Severity::Critical, message);
    }
}

impl<L: Logger> LoggerExt for L {}
