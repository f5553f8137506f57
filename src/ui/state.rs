//! State container for the terminal front-end.

use filefind_core::{MatchMode, RowKey, SearchPipeline, SearchTicket};
use ratatui::widgets::TableState;
use throbber_widgets_tui::ThrobberState;
use tui_logger::TuiWidgetState;

use super::hit::HitMap;
use super::input::SearchInput;
use super::style::Theme;
use crate::SessionOutcome;
use crate::logging::{self, LogSink};

/// Aggregate state shared across the terminal UI.
///
/// The `App` owns the search pipeline handed to it by the caller, the input
/// widget, and the per-frame hit map used to route mouse clicks.
pub struct App<'a> {
	pub search_input: SearchInput<'a>,
	pub mode: MatchMode,
	pub table_state: TableState,
	pub theme: Theme,
	pub(crate) pipeline: SearchPipeline,
	pub(crate) input_title: Option<String>,
	pub(crate) throbber_state: ThrobberState,
	pub(crate) hit_map: HitMap,
	pub(crate) log_state: TuiWidgetState,
	pub(crate) show_log: bool,
}

impl<'a> App<'a> {
	pub fn new(pipeline: SearchPipeline) -> Self {
		logging::initialize(LogSink::Widget);
		Self {
			search_input: SearchInput::new(String::new()),
			mode: MatchMode::Substring,
			table_state: TableState::default(),
			theme: Theme::default(),
			pipeline,
			input_title: None,
			throbber_state: ThrobberState::default(),
			hit_map: HitMap::default(),
			log_state: TuiWidgetState::new(),
			show_log: true,
		}
	}

	pub fn set_query(&mut self, query: impl Into<String>) {
		self.search_input = SearchInput::new(query);
	}

	pub fn set_input_title(&mut self, title: Option<String>) {
		self.input_title = title;
	}

	pub fn set_mode(&mut self, mode: MatchMode) {
		self.mode = mode;
	}

	pub(crate) fn toggle_mode(&mut self) {
		self.mode = self.mode.toggled();
		log::debug!("match mode set to {}", self.mode.as_str());
	}

	/// Search for the current input text with the current mode.
	pub fn submit_search(&mut self) -> SearchTicket {
		self.table_state.select(None);
		self.pipeline
			.search(self.search_input.text(), self.mode.is_exact())
	}

	/// Apply any responses that arrived since the last frame.
	pub fn pump_search_results(&mut self) {
		if self.pipeline.pump() {
			self.table_state.select(Some(0));
			self.ensure_selection();
		}
	}

	/// Remove a displayed row by key; a no-op for rows that are gone.
	pub(crate) fn remove_row(&mut self, key: RowKey) {
		if self.pipeline.surface_mut().remove_row(key).is_some() {
			self.ensure_selection();
		}
	}

	pub(crate) fn remove_selected_row(&mut self) {
		let key = self
			.table_state
			.selected()
			.and_then(|index| self.pipeline.surface().key_at(index));
		if let Some(key) = key {
			self.remove_row(key);
		}
	}

	/// Keep the selection inside the displayed rows.
	pub(crate) fn ensure_selection(&mut self) {
		let len = self.row_count();
		if len == 0 {
			self.table_state.select(None);
		} else if let Some(selected) = self.table_state.selected() {
			if selected >= len {
				self.table_state.select(Some(len - 1));
			}
		} else {
			self.table_state.select(Some(0));
		}
	}

	pub(crate) fn row_count(&self) -> usize {
		self.pipeline.surface().row_count()
	}

	pub(crate) fn outcome(&self) -> SessionOutcome {
		SessionOutcome::capture(&self.pipeline, self.search_input.text(), self.mode)
	}
}
