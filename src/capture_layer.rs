//! Records `tracing` events, and `log` records forwarded by
//! `tracing_log::LogTracer`, into a [`StubLogger`].
//!
//! ```
//! use stub_logger::severity::Severity;
//! use tracing_subscriber::layer::SubscriberExt as _;
//!
//! let logger = stub_logger::StubLogger::new();
//! let subscriber = tracing_subscriber::registry().with(logger.layer());
//! tracing::subscriber::with_default(subscriber, || {
//!     tracing::warn!(attempt = 3, "Retrying upload");
//! });
//! let record = logger.assert_record_exists(|r| r.has_severity(Severity::Warning));
//! assert_eq!(record.message(), "Retrying upload attempt=3");
//! ```

use crate::logger::Logger;
use crate::record::EventId;
use crate::record::RecordedError;
use crate::severity::Severity;
use crate::stub::StubLogger;
use itertools::Itertools as _;
use std::sync::Arc;
use tracing::field::Field;
use tracing::field::Visit;
use tracing_log::NormalizeEvent as _;
use tracing_subscriber::layer::Context;

/// Error recorded through a `tracing` field. The original error is only
/// borrowed during the event, so its message and source chain are copied.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct CapturedError {
    pub message: String,
    /// Messages of the `source()` chain, outermost first.
    pub sources: Vec<String>,
}

impl CapturedError {
    fn from_dyn(error: &(dyn std::error::Error + 'static)) -> Self {
        let mut sources = Vec::new();
        let mut source = error.source();
        while let Some(err) = source {
            sources.push(err.to_string());
            source = err.source();
        }
        CapturedError {
            message: error.to_string(),
            sources,
        }
    }
}

/// See the module documentation.
pub struct CaptureLayer<C = ()> {
    logger: StubLogger<C>,
}

impl<C> StubLogger<C> {
    /// Returns a layer recording into this logger.
    pub fn layer(&self) -> CaptureLayer<C> {
        CaptureLayer {
            logger: self.clone(),
        }
    }
}

impl<S, C> tracing_subscriber::Layer<S> for CaptureLayer<C>
where
    S: tracing::Subscriber,
    C: 'static,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let normalized = event.normalized_metadata();
        let metadata = normalized.as_ref().unwrap_or_else(|| event.metadata());
        if metadata.target() == crate::DIAGNOSTICS_TARGET {
            return;
        }

        let mut fields = EventFields::default();
        event.record(&mut fields);
        let error = fields
            .error
            .take()
            .map(|captured| Arc::new(captured) as RecordedError);
        self.logger.log(
            Severity::from(*metadata.level()),
            EventId::default(),
            fields,
            error,
            |fields, _error| fields.to_message(),
        );
    }
}

#[derive(Default)]
struct EventFields {
    message: Option<String>,
    others: Vec<(&'static str, String)>,
    error: Option<CapturedError>,
}

impl EventFields {
    fn to_message(&self) -> String {
        let others = self
            .others
            .iter()
            .map(|(name, value)| format!("{name}={value}"));
        self.message.iter().cloned().chain(others).join(" ")
    }

    fn push(&mut self, field: &Field, value: String) {
        match field.name() {
            "message" => self.message = Some(value),
            // Added by tracing-log, already part of the normalized metadata.
            name if name.starts_with("log.") => (),
            name => self.others.push((name, value)),
        }
    }
}

impl Visit for EventFields {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.push(field, value.to_owned());
    }

    fn record_error(&mut self, field: &Field, value: &(dyn std::error::Error + 'static)) {
        self.push(field, value.to_string());
        if self.error.is_none() {
            self.error = Some(CapturedError::from_dyn(value));
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.push(field, format!("{value:?}"));
    }
}
