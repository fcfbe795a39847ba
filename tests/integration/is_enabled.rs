use rstest::rstest;
use stub_logger::Logger as _;
use stub_logger::Severity;
use stub_logger::StubLogger;

#[rstest]
fn enabled_iff_at_or_below_minimum(
    #[values(
        Severity::Trace,
        Severity::Debug,
        Severity::Information,
        Severity::Warning,
        Severity::Error,
        Severity::Critical,
        Severity::None
    )]
    minimum: Severity,
    #[values(
        Severity::Trace,
        Severity::Debug,
        Severity::Information,
        Severity::Warning,
        Severity::Error,
        Severity::Critical,
        Severity::None
    )]
    tested: Severity,
) {
    let logger = StubLogger::new();
    logger.set_minimum_severity(minimum);
    assert_eq!(
        logger.is_enabled(tested),
        tested.rank() <= minimum.rank(),
        "is_enabled({tested}) with minimum {minimum}"
    );
}

#[test]
fn none_minimum_enables_everything() {
    let logger = StubLogger::new().with_minimum_severity(Severity::None);
    for severity in Severity::ALL {
        assert!(logger.is_enabled(severity), "{severity} should be enabled");
    }
}

#[test]
fn trace_minimum_enables_only_trace() {
    let logger = StubLogger::new().with_minimum_severity(Severity::Trace);
    assert!(logger.is_enabled(Severity::Trace));
    for severity in &Severity::ALL[1..] {
        assert!(!logger.is_enabled(*severity), "{severity} should be disabled");
    }
}

#[rstest]
#[case::information(Severity::Information, &[Severity::Trace, Severity::Debug, Severity::Information])]
#[case::error(Severity::Error, &[Severity::Trace, Severity::Debug, Severity::Information, Severity::Warning, Severity::Error])]
fn enabled_levels(#[case] minimum: Severity, #[case] expected: &[Severity]) {
    let logger = StubLogger::new().with_minimum_severity(minimum);
    let enabled = Severity::ALL
        .into_iter()
        .filter(|severity| logger.is_enabled(*severity))
        .collect::<Vec<_>>();
    pretty_assertions::assert_eq!(enabled, expected);
}

#[test]
fn minimum_severity_does_not_filter_recording() {
    use stub_logger::LoggerExt as _;

    let logger = StubLogger::new().with_minimum_severity(Severity::None);
    logger.trace("t");
    logger.information("i");
    logger.critical("c");
    assert_eq!(logger.len(), 3);
    assert_eq!(logger.minimum_severity(), Severity::None);
}
