//! Lets code that logs through the `log` facade write into a
//! [`StubLogger`].

use crate::logger::Logger;
use crate::record::EventId;
use crate::severity::Severity;
use crate::stub::StubLogger;

impl<C> log::Log for StubLogger<C> {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        self.is_enabled(Severity::from(metadata.level()))
    }

    fn log(&self, record: &log::Record) {
        Logger::log(
            self,
            Severity::from(record.level()),
            EventId::default(),
            record.args(),
            None,
            |args, _error| args.to_string(),
        );
    }

    fn flush(&self) {}
}
