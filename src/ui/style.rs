use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy)]
pub struct Theme {
	pub header: Style,
	pub row_highlight: Style,
	pub prompt: Style,
	pub empty: Style,
	pub button: Style,
	pub danger: Style,
}

impl Default for Theme {
	fn default() -> Self {
		Self {
			header: Style::new().fg(Color::Black).bg(Color::Cyan),
			row_highlight: Style::new().bg(Color::DarkGray),
			prompt: Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD),
			empty: Style::new().fg(Color::Gray),
			button: Style::new().fg(Color::Black).bg(Color::Green),
			danger: Style::new().fg(Color::White).bg(Color::Red),
		}
	}
}

impl Theme {
	#[must_use]
	pub fn header_style(&self) -> Style {
		self.header
	}

	#[must_use]
	pub fn row_highlight_style(&self) -> Style {
		self.row_highlight
	}

	#[must_use]
	pub fn prompt_style(&self) -> Style {
		self.prompt
	}

	#[must_use]
	pub fn empty_style(&self) -> Style {
		self.empty
	}

	#[must_use]
	pub fn button_style(&self) -> Style {
		self.button
	}

	#[must_use]
	pub fn danger_style(&self) -> Style {
		self.danger
	}

	#[must_use]
	pub fn header_fg(&self) -> Color {
		self.header.fg.unwrap_or(Color::Reset)
	}

	#[must_use]
	pub fn header_bg(&self) -> Color {
		self.header.bg.unwrap_or(Color::Reset)
	}
}
