// Runs with a trace-level logger installed, so every log record the crate
// emits is actually formatted.

use log::{LevelFilter, Log, Metadata, Record};
use sformat::{format, format_with_options, Argument, ErrorKind, FormatOptions};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Once;

struct CountingLogger {
    records: AtomicUsize,
}

impl Log for CountingLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        // Force the message to be rendered like a real backend would
        let _ = record.args().to_string();
        self.records.fetch_add(1, Ordering::Relaxed);
    }

    fn flush(&self) {}
}

static LOGGER: CountingLogger = CountingLogger {
    records: AtomicUsize::new(0),
};
static INIT: Once = Once::new();

fn install_logger() {
    INIT.call_once(|| {
        log::set_logger(&LOGGER).unwrap();
        log::set_max_level(LevelFilter::Trace);
    });
}

#[test]
fn test_huge_width_with_trace_logging() {
    install_logger();

    let template = format!("%{}d", usize::MAX);
    let err = format(&template, &[Argument::from(1)]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::OutputTooLong);
}

#[test]
fn test_large_width_over_capacity_with_trace_logging() {
    install_logger();

    let options = FormatOptions::new().with_capacity(16);
    let err = format_with_options("%1000000000s", &[Argument::from("x")], options).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::OutputTooLong);
}

#[test]
fn test_records_emitted_for_success() {
    install_logger();

    let before = LOGGER.records.load(Ordering::Relaxed);
    let msg = format("n=%05d", &[Argument::from(-7)]).unwrap();
    assert_eq!(msg, "n=-0007");
    assert!(LOGGER.records.load(Ordering::Relaxed) > before);
}
