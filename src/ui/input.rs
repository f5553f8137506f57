use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use tui_textarea::{CursorMove, TextArea};

const PLACEHOLDER: &str = "type a file name or extension";

/// Single-line keyword input backed by `tui-textarea`.
pub struct SearchInput<'a> {
	textarea: TextArea<'a>,
}

impl<'a> SearchInput<'a> {
	pub fn new(initial: impl Into<String>) -> Self {
		let mut textarea = TextArea::new(vec![initial.into()]);
		textarea.set_cursor_line_style(Style::default());
		textarea.set_placeholder_text(PLACEHOLDER);
		textarea.set_placeholder_style(Style::default().add_modifier(Modifier::DIM));
		textarea.move_cursor(CursorMove::End);
		Self { textarea }
	}

	#[must_use]
	pub fn text(&self) -> &str {
		self.textarea
			.lines()
			.first()
			.map(String::as_str)
			.unwrap_or_default()
	}

	/// Feed a key to the input. Returns `true` when the text changed.
	///
	/// Enter never reaches the textarea so the input stays on one line.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		if key.code == KeyCode::Enter {
			return false;
		}
		self.textarea.input(key)
	}

	pub fn render_textarea(&self, frame: &mut Frame, area: Rect) {
		frame.render_widget(&self.textarea, area);
	}
}
