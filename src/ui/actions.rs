use anyhow::Result;
use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::App;
use super::hit::{RegionId, Target};
use crate::SessionOutcome;

impl<'a> App<'a> {
	pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Result<Option<SessionOutcome>> {
		let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
		match key.code {
			KeyCode::Esc => return Ok(Some(self.outcome())),
			KeyCode::Char('c') if ctrl => return Ok(Some(self.outcome())),
			KeyCode::Enter => {
				self.submit_search();
			}
			KeyCode::Char('e') if ctrl => self.toggle_mode(),
			KeyCode::Char('d') if ctrl => self.remove_selected_row(),
			KeyCode::Char('l') if ctrl => self.show_log = !self.show_log,
			KeyCode::Up => self.move_selection_up(),
			KeyCode::Down => self.move_selection_down(),
			_ => {
				self.search_input.input(key);
			}
		}
		Ok(None)
	}

	pub(crate) fn handle_mouse(&mut self, mouse: MouseEvent) {
		if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
			return;
		}
		let Some(id) = self.hit_map.target_at(mouse.column, mouse.row) else {
			return;
		};
		match self.hit_map.target(id) {
			Some(Target::SearchButton) => {
				self.submit_search();
			}
			Some(Target::ExactToggle) => self.toggle_mode(),
			_ => {
				let in_results = self
					.hit_map
					.closest(id, |target| target == Target::ResultsContainer)
					.is_some();
				if in_results {
					self.handle_results_click(id);
				}
			}
		}
	}

	/// Delegated handler for every click inside the results container.
	fn handle_results_click(&mut self, id: RegionId) {
		let delete = self
			.hit_map
			.closest(id, |target| matches!(target, Target::DeleteButton(_)));
		if let Some(Target::DeleteButton(key)) = delete {
			self.remove_row(key);
		}
	}

	fn move_selection_up(&mut self) {
		if let Some(selected) = self.table_state.selected()
			&& selected > 0
		{
			self.table_state.select(Some(selected - 1));
		}
	}

	fn move_selection_down(&mut self) {
		if let Some(selected) = self.table_state.selected()
			&& selected + 1 < self.row_count()
		{
			self.table_state.select(Some(selected + 1));
		}
	}
}

#[cfg(test)]
mod tests {
	use std::time::Duration;

	use filefind_core::{Catalog, MockProvider, SearchPipeline, SurfaceState};

	use super::*;

	fn app() -> App<'static> {
		let provider = MockProvider::new(Catalog::default(), Duration::from_millis(5));
		App::new(SearchPipeline::new(provider))
	}

	fn press(code: KeyCode) -> KeyEvent {
		KeyEvent::new(code, KeyModifiers::NONE)
	}

	fn ctrl(c: char) -> KeyEvent {
		KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
	}

	fn type_text(app: &mut App, text: &str) {
		for c in text.chars() {
			app.handle_key(press(KeyCode::Char(c))).expect("key");
		}
	}

	fn wait_for_results(app: &mut App) {
		app.pipeline.wait(Duration::from_secs(2)).expect("search completes");
		app.table_state.select(Some(0));
		app.ensure_selection();
	}

	#[test]
	fn enter_starts_a_search_with_the_typed_keyword() {
		let mut app = app();
		type_text(&mut app, "pdf");
		app.handle_key(press(KeyCode::Enter)).expect("enter");
		assert_eq!(app.pipeline.surface().state(), SurfaceState::Loading);

		wait_for_results(&mut app);
		let names: Vec<_> = app
			.pipeline
			.surface()
			.displayed()
			.into_iter()
			.map(|record| record.name)
			.collect();
		assert_eq!(names, ["新功能设计稿.pdf"]);
	}

	#[test]
	fn ctrl_e_toggles_exact_mode() {
		let mut app = app();
		assert!(!app.mode.is_exact());
		app.handle_key(ctrl('e')).expect("toggle");
		assert!(app.mode.is_exact());
		assert_eq!(app.search_input.text(), "");
	}

	#[test]
	fn ctrl_d_removes_only_the_selected_row() {
		let mut app = app();
		app.handle_key(press(KeyCode::Enter)).expect("search all");
		wait_for_results(&mut app);
		assert_eq!(app.row_count(), 6);

		app.handle_key(press(KeyCode::Down)).expect("down");
		app.handle_key(ctrl('d')).expect("delete");

		let surface = app.pipeline.surface();
		assert_eq!(surface.row_count(), 5);
		assert_eq!(surface.removed()[0].name, "团队周报.xlsx");
		assert_eq!(app.table_state.selected(), Some(1));
	}

	#[test]
	fn escape_returns_the_session_outcome() {
		let mut app = app();
		type_text(&mut app, "md");
		app.handle_key(press(KeyCode::Enter)).expect("search");
		wait_for_results(&mut app);

		let outcome = app.handle_key(press(KeyCode::Esc)).expect("esc").expect("outcome");
		assert_eq!(outcome.query, "md");
		assert!(outcome.searched);
		assert_eq!(outcome.displayed.len(), 1);
	}

	#[test]
	fn selection_stays_in_bounds() {
		let mut app = app();
		app.handle_key(press(KeyCode::Up)).expect("up on empty surface");
		assert_eq!(app.table_state.selected(), None);

		type_text(&mut app, "png");
		app.handle_key(press(KeyCode::Enter)).expect("search");
		wait_for_results(&mut app);
		app.handle_key(press(KeyCode::Down)).expect("down");
		assert_eq!(app.table_state.selected(), Some(0));
	}
}
