use anyhow::Result;
use filefind::{SearchUi, SessionOutcome};

use crate::settings::ResolvedConfig;

/// Turns resolved settings into a configured [`SearchUi`] and runs it.
pub(crate) struct SearchWorkflow {
	search_ui: SearchUi,
}

impl SearchWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Self {
		let ResolvedConfig {
			provider,
			initial_query,
			mode,
			input_title,
		} = config;

		let mut search_ui = SearchUi::new(provider)
			.with_initial_query(initial_query)
			.with_mode(mode);
		if let Some(title) = input_title {
			search_ui = search_ui.with_input_title(title);
		}
		Self { search_ui }
	}

	pub(crate) fn run(self) -> Result<SessionOutcome> {
		self.search_ui.run()
	}

	pub(crate) fn run_headless(self) -> Result<SessionOutcome> {
		self.search_ui.search_once()
	}
}
