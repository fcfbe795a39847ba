use itertools::Itertools as _;

/// Error returned by logger operations the stub does not model.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[error("{operation} is not supported by the stub logger")]
pub struct UnsupportedOperation {
    pub operation: &'static str,
}

/// Failed assertion over the captured log records.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AssertionFailure {
    #[error(
        "No log record matches the predicate among {}",
        describe_captured(.captured)
    )]
    NotFound {
        /// The captured records, rendered for display.
        captured: Vec<String>,
    },
    #[error("Expected {expected} matching log records, found {actual}")]
    CountMismatch { expected: usize, actual: usize },
}

fn describe_captured(captured: &[String]) -> String {
    if captured.is_empty() {
        return "0 captured records".to_owned();
    }
    format!(
        "{} captured records:\n{}",
        captured.len(),
        captured.iter().map(|record| format!("  {record}")).join("\n")
    )
}
