use std::time::Duration;

use anyhow::{Context, Result};
use filefind_core::{MatchMode, MockProvider, SearchPipeline};

use super::App;
use crate::SessionOutcome;

/// Extra time allowed past the backend delay before a headless search gives up.
const HEADLESS_GRACE: Duration = Duration::from_secs(5);

/// Builder for a search session over a mock backend.
///
/// The same configuration can drive the interactive terminal UI or a single
/// headless search.
pub struct SearchUi {
	provider: MockProvider,
	input_title: Option<String>,
	initial_query: String,
	mode: MatchMode,
}

impl SearchUi {
	pub fn new(provider: MockProvider) -> Self {
		Self {
			provider,
			input_title: None,
			initial_query: String::new(),
			mode: MatchMode::Substring,
		}
	}

	pub fn with_input_title(mut self, title: impl Into<String>) -> Self {
		self.input_title = Some(title.into());
		self
	}

	pub fn with_initial_query(mut self, query: impl Into<String>) -> Self {
		self.initial_query = query.into();
		self
	}

	pub fn with_mode(mut self, mode: MatchMode) -> Self {
		self.mode = mode;
		self
	}

	/// Run the interactive UI. A non-empty initial query is searched on start.
	pub fn run(self) -> Result<SessionOutcome> {
		let search_on_start = !self.initial_query.trim().is_empty();
		let mut app = self.into_app();
		if search_on_start {
			app.submit_search();
		}
		app.run()
	}

	/// Run one search without a terminal and wait for it to settle.
	pub fn search_once(self) -> Result<SessionOutcome> {
		let timeout = self.provider.delay() + HEADLESS_GRACE;
		let mut pipeline = SearchPipeline::new(self.provider);
		pipeline.search(&self.initial_query, self.mode.is_exact());
		pipeline
			.wait(timeout)
			.context("mock backend did not answer the search")?;
		Ok(SessionOutcome::capture(
			&pipeline,
			&self.initial_query,
			self.mode,
		))
	}

	fn into_app(self) -> App<'static> {
		let mut app = App::new(SearchPipeline::new(self.provider));
		app.set_query(self.initial_query);
		app.set_mode(self.mode);
		app.set_input_title(self.input_title);
		app
	}
}

#[cfg(test)]
mod tests {
	use filefind_core::{Catalog, FileRecord, MockProvider};

	use super::*;

	fn provider() -> MockProvider {
		MockProvider::new(Catalog::default(), Duration::from_millis(5))
	}

	#[test]
	fn headless_substring_search_returns_matches() {
		let outcome = SearchUi::new(provider())
			.with_initial_query("pdf")
			.search_once()
			.expect("search");
		assert!(outcome.searched);
		assert_eq!(outcome.query, "pdf");
		assert_eq!(outcome.displayed, vec![FileRecord::new("新功能设计稿.pdf")]);
	}

	#[test]
	fn headless_exact_search_with_blank_keyword_is_empty() {
		let outcome = SearchUi::new(provider())
			.with_initial_query("   ")
			.with_mode(MatchMode::Exact)
			.search_once()
			.expect("search");
		assert!(outcome.searched);
		assert_eq!(outcome.query, "");
		assert_eq!(outcome.mode, MatchMode::Exact);
		assert!(outcome.displayed.is_empty());
	}

	#[test]
	fn builder_settings_reach_the_app() {
		let app = SearchUi::new(provider())
			.with_input_title("Docs")
			.with_initial_query("md")
			.with_mode(MatchMode::Exact)
			.into_app();
		assert_eq!(app.search_input.text(), "md");
		assert!(app.mode.is_exact());
		assert_eq!(app.input_title.as_deref(), Some("Docs"));
	}
}
