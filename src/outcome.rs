use filefind_core::{FileRecord, MatchMode, SearchPipeline, SurfaceState};

/// What was on screen when a session ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionOutcome {
	/// Trimmed keyword of the last search, or the raw input if none ran.
	pub query: String,
	pub mode: MatchMode,
	/// Whether any search was issued during the session.
	pub searched: bool,
	/// The last search had not answered yet.
	pub loading: bool,
	/// The last search matched nothing and the no-results notice is shown.
	pub empty: bool,
	/// Rows still displayed, in display order.
	pub displayed: Vec<FileRecord>,
	/// Rows removed during the session.
	pub removed: Vec<FileRecord>,
}

impl SessionOutcome {
	pub(crate) fn capture(pipeline: &SearchPipeline, fallback_query: &str, mode: MatchMode) -> Self {
		let surface = pipeline.surface();
		let last_query = pipeline.last_query();
		let (query, mode) = last_query
			.map(|query| (query.keyword().to_string(), query.mode()))
			.unwrap_or_else(|| (fallback_query.trim().to_string(), mode));
		Self {
			query,
			mode,
			searched: last_query.is_some(),
			loading: surface.state() == SurfaceState::Loading,
			empty: surface.state() == SurfaceState::Empty,
			displayed: surface.displayed(),
			removed: surface.removed().to_vec(),
		}
	}
}
