//! Diagnostic log wiring.
//!
//! Every module logs through the `log` facade. The interactive UI collects
//! records with `tui-logger` and shows them in its log pane; headless runs
//! write to stderr through `env_logger`.

use std::sync::OnceLock;

use log::LevelFilter;

/// Where log records end up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogSink {
	/// Buffer records for the in-UI log pane.
	Widget,
	/// Write records to stderr. `RUST_LOG` overrides the `info` default.
	Stderr,
}

static INSTALLED: OnceLock<LogSink> = OnceLock::new();

/// Install the global logger once. Later calls keep the first sink and
/// return it.
pub fn initialize(sink: LogSink) -> LogSink {
	*INSTALLED.get_or_init(|| {
		install(sink);
		sink
	})
}

fn install(sink: LogSink) {
	match sink {
		LogSink::Widget => {
			if tui_logger::init_logger(LevelFilter::Debug).is_ok() {
				tui_logger::set_default_level(LevelFilter::Debug);
			}
		}
		LogSink::Stderr => {
			let _ = env_logger::Builder::from_env(
				env_logger::Env::default().default_filter_or("info"),
			)
			.try_init();
		}
	}
}
