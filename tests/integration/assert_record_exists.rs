use crate::fixtures::ArgumentNull;
use crate::fixtures::InvalidOperation;
use crate::fixtures::expect_panic;
use std::sync::Arc;
use stub_logger::LoggerExt as _;
use stub_logger::Severity;
use stub_logger::StubLogger;
use stub_logger::record::RecordedError;

#[test]
fn warning_event_can_be_asserted() {
    let logger = StubLogger::new();
    logger.warning(format!("This is a warning message with value: {}", 1234));

    logger.assert_record_exists(|r| {
        r.has_severity(Severity::Warning)
            && r.message_contains("This is a warning message with value:")
    });
}

#[test]
#[should_panic(expected = "No log record matches the predicate")]
fn missing_event_fails() {
    let logger = StubLogger::new();
    logger.information(format!("This is an info message with value: {}", 1234));

    logger.assert_record_exists(|r| {
        r.has_severity(Severity::Warning)
            && r.message_contains("This is a warning message with value:")
    });
}

#[test]
fn missing_event_lists_captured_records() {
    let logger = StubLogger::new();
    logger.information("Info message 1");
    logger.error_with(Arc::new(InvalidOperation), "Processing failed");

    let message = expect_panic(|| {
        logger.assert_record_exists(|r| r.has_severity(Severity::Warning));
    });
    insta::assert_snapshot!(message, @r"
    No log record matches the predicate among 2 captured records:
      information: Info message 1
      error: Processing failed: Invalid operation occurred
    ");
}

#[test]
fn logged_error_instance_can_be_asserted() {
    let logger = StubLogger::new();
    let error: RecordedError = Arc::new(InvalidOperation);
    logger.error_with(error.clone(), "An error occurred while processing");

    logger.assert_record_exists(|r| {
        r.has_severity(Severity::Error)
            && r.message_contains("An error occurred while processing")
            && r.error_is(&error)
    });
}

#[test]
fn logged_error_kind_can_be_asserted_independently() {
    let logger = StubLogger::new();
    logger.error_with(
        Arc::new(InvalidOperation),
        "An error occurred while processing",
    );

    logger.assert_record_exists_with(
        |r| {
            r.has_severity(Severity::Error)
                && r.message_contains("An error occurred while processing")
        },
        |r| {
            assert!(r.error_as::<InvalidOperation>().is_some());
        },
    );
}

#[test]
fn failing_secondary_assertion_propagates_unchanged() {
    let logger = StubLogger::new();
    logger.error_with(
        Arc::new(InvalidOperation),
        "An error occurred while processing",
    );

    let message = expect_panic(|| {
        logger.assert_record_exists_with(
            |r| {
                r.has_severity(Severity::Error)
                    && r.message_contains("An error occurred while processing")
            },
            |r| {
                assert!(
                    r.error_as::<ArgumentNull>().is_some(),
                    "expected ArgumentNull, got {:?}",
                    r.error()
                );
            },
        );
    });
    assert_eq!(message, "expected ArgumentNull, got Some(InvalidOperation)");
}

#[test]
fn secondary_assertion_may_query_the_logger() {
    let logger = StubLogger::new();
    logger.warning("low disk");
    logger.assert_record_exists_with(
        |r| r.has_severity(Severity::Warning),
        |_r| logger.assert_record_count(|r| r.message_contains("disk"), 1),
    );
}

#[test]
fn repeated_assertions_find_the_same_first_match() {
    let logger = StubLogger::new();
    logger.information("Info message 1");
    logger.information("Info message 2");
    let is_information = |r: &stub_logger::LogRecord| r.has_severity(Severity::Information);

    let first = logger.assert_record_exists(is_information);
    let second = logger.assert_record_exists(is_information);
    assert_eq!(first.message(), "Info message 1");
    assert_eq!(second.message(), first.message());
    assert_eq!(logger.len(), 2);
}

#[test]
fn empty_logger_fails_every_existence_assertion() {
    let logger = StubLogger::new();
    let message = expect_panic(|| {
        logger.assert_record_exists(|_r| true);
    });
    assert_eq!(
        message,
        "No log record matches the predicate among 0 captured records"
    );
}
