use crate::severity::Severity;
use std::sync::Arc;

/// Error attached to a log event. The recorder only holds a shared reference,
/// the creator keeps ownership through its own clone of the `Arc`.
pub type RecordedError = Arc<dyn std::error::Error + Send + Sync + 'static>;

/// Identifies a kind of log event. Accepted by [`crate::logger::Logger::log`]
/// for interface conformance, never stored.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct EventId {
    pub id: i32,
    pub name: Option<String>,
}

impl EventId {
    pub fn new(id: i32) -> Self {
        EventId { id, name: None }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

impl From<i32> for EventId {
    fn from(id: i32) -> Self {
        EventId::new(id)
    }
}

/// A captured log event. Immutable once created.
#[derive(Clone, Debug)]
pub struct LogRecord {
    severity: Severity,
    message: String,
    error: Option<RecordedError>,
}

impl LogRecord {
    pub fn new(severity: Severity, message: String, error: Option<RecordedError>) -> Self {
        LogRecord {
            severity,
            message,
            error,
        }
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn error(&self) -> Option<&RecordedError> {
        self.error.as_ref()
    }

    pub fn has_severity(&self, severity: Severity) -> bool {
        self.severity == severity
    }

    pub fn message_contains(&self, pattern: &str) -> bool {
        self.message.contains(pattern)
    }

    /// Returns the attached error if it is of type `E`.
    pub fn error_as<E>(&self) -> Option<&E>
    where
        E: std::error::Error + 'static,
    {
        self.error.as_deref().and_then(|err| err.downcast_ref::<E>())
    }

    /// Checks that exactly this error instance, not only an equal one, was
    /// attached.
    pub fn error_is(&self, error: &RecordedError) -> bool {
        self.error
            .as_ref()
            .is_some_and(|attached| Arc::ptr_eq(attached, error))
    }
}

impl std::fmt::Display for LogRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)?;
        if let Some(error) = &self.error {
            write!(f, ": {error}")?;
        }
        Ok(())
    }
}
