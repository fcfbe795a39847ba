//! A logger test double. [`StubLogger`] records log events in memory instead
//! of emitting them, and offers assertions over what was recorded.
//!
//! ```
//! use stub_logger::LoggerExt as _;
//! use stub_logger::Severity;
//!
//! let logger = stub_logger::StubLogger::new();
//! logger.warning(format!("This is a warning message with value: {}", 42));
//! logger.assert_record_exists(|r| {
//!     r.has_severity(Severity::Warning)
//!         && r.message_contains("This is a warning message with value:")
//! });
//! logger.assert_record_count(|r| r.has_severity(Severity::Information), 0);
//! ```

pub mod capture_layer;
pub mod config;
pub mod error;
pub mod log_bridge;
pub mod logger;
pub mod record;
pub mod severity;
pub mod stub;

pub use logger::Logger;
pub use logger::LoggerExt;
pub use record::LogRecord;
pub use severity::Severity;
pub use stub::StubLogger;

/// Target of the diagnostics this crate emits itself, never recorded by
/// [`capture_layer::CaptureLayer`].
pub(crate) const DIAGNOSTICS_TARGET: &str = "stub_logger::diagnostics";
