//! In-memory `log` sink for asserting on diagnostic lines in tests.

use std::sync::{Mutex, Once};

use log::{Level, LevelFilter, Log, Metadata, Record};

struct CaptureLogger {
	lines: Mutex<Vec<(Level, String)>>,
}

static LOGGER: CaptureLogger = CaptureLogger {
	lines: Mutex::new(Vec::new()),
};

impl Log for CaptureLogger {
	fn enabled(&self, _metadata: &Metadata) -> bool {
		true
	}

	fn log(&self, record: &Record) {
		if let Ok(mut lines) = self.lines.lock() {
			lines.push((record.level(), record.args().to_string()));
		}
	}

	fn flush(&self) {}
}

/// Route `log` records into the shared buffer. Safe to call from every test.
pub(crate) fn capture() {
	static INSTALL: Once = Once::new();
	INSTALL.call_once(|| {
		log::set_logger(&LOGGER).expect("no other logger in core tests");
		log::set_max_level(LevelFilter::Debug);
	});
}

/// Whether any test thread logged `message` at `level`. Tests run in
/// parallel, so messages should be specific enough to be unique.
pub(crate) fn logged(level: Level, message: &str) -> bool {
	LOGGER
		.lines
		.lock()
		.expect("log buffer")
		.iter()
		.any(|(logged_level, line)| *logged_level == level && line == message)
}
