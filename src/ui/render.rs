use filefind_core::{DisplaySurface, SurfaceState};
use ratatui::{
	Frame,
	layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
	style::Style,
	text::{Line, Span, Text},
	widgets::{Block, Cell, HighlightSpacing, Paragraph, Row, Table, TableState},
};
use throbber_widgets_tui::{Throbber, ThrobberState};
use tui_logger::{TuiLoggerLevelOutput, TuiLoggerWidget};
use unicode_width::UnicodeWidthStr;

use super::App;
use super::hit::{HitMap, RegionId, Target};
use super::style::Theme;

const DEFAULT_TITLE: &str = "Files";
const SEARCH_LABEL: &str = " Search ";
const DELETE_LABEL: &str = " Delete ";
const HIGHLIGHT_SYMBOL: &str = "▶ ";
const TABLE_COLUMN_SPACING: u16 = 1;
/// Header row plus the separator line drawn beneath it.
const HEADER_AND_DIVIDER_HEIGHT: u16 = 2;
const LOG_PANE_HEIGHT: u16 = 8;

const IDLE_NOTICE: &str = "Press Enter to search the catalog.";
const LOADING_NOTICE: &str = "Searching, please wait...";
const EMPTY_NOTICE: &str = "No matching files found.";
const HINTS: &str = "Enter search · Ctrl+E exact · Ctrl+D / click Delete remove · Ctrl+L log · Esc quit";

impl<'a> App<'a> {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});
		let log_height = if self.show_log { LOG_PANE_HEIGHT } else { 0 };
		let layout = Layout::default()
			.direction(Direction::Vertical)
			.constraints([
				Constraint::Length(1),
				Constraint::Min(3),
				Constraint::Length(log_height),
				Constraint::Length(1),
			])
			.split(area);

		self.hit_map.clear();
		self.render_toolbar(frame, layout[0]);
		self.render_results(frame, layout[1]);
		if self.show_log {
			self.render_log(frame, layout[2]);
		}
		let hints = Paragraph::new(HINTS).style(self.theme.empty_style());
		frame.render_widget(hints, layout[3]);
	}

	fn render_toolbar(&mut self, frame: &mut Frame, area: Rect) {
		let prompt = format!(
			"{} > ",
			self.input_title.as_deref().unwrap_or(DEFAULT_TITLE)
		);
		let toggle = toggle_label(self.mode.is_exact());
		let columns = Layout::default()
			.direction(Direction::Horizontal)
			.constraints([
				Constraint::Length(prompt.width() as u16),
				Constraint::Min(1),
				Constraint::Length(toggle.width() as u16 + 1),
				Constraint::Length(SEARCH_LABEL.width() as u16),
			])
			.split(area);

		frame.render_widget(
			Paragraph::new(prompt.as_str()).style(self.theme.prompt_style()),
			columns[0],
		);
		self.search_input.render_textarea(frame, columns[1]);

		let toggle_area = Rect {
			x: columns[2].x.saturating_add(1),
			width: columns[2].width.saturating_sub(1),
			..columns[2]
		};
		frame.render_widget(
			Paragraph::new(toggle).style(self.theme.header_style()),
			toggle_area,
		);
		self.hit_map.push(toggle_area, Target::ExactToggle, None);

		frame.render_widget(
			Paragraph::new(SEARCH_LABEL).style(self.theme.button_style()),
			columns[3],
		);
		self.hit_map.push(columns[3], Target::SearchButton, None);
	}

	fn render_results(&mut self, frame: &mut Frame, area: Rect) {
		let container = self.hit_map.push(area, Target::ResultsContainer, None);
		let surface = self.pipeline.surface();
		match surface.state() {
			SurfaceState::Idle => render_notice(frame, area, IDLE_NOTICE, &self.theme),
			SurfaceState::Loading => {
				render_loading(frame, area, &self.throbber_state, &self.theme);
			}
			SurfaceState::Empty => render_notice(frame, area, EMPTY_NOTICE, &self.theme),
			SurfaceState::Populated => render_rows(
				frame,
				area,
				RowsContext {
					surface,
					table_state: &mut self.table_state,
					hit_map: &mut self.hit_map,
					container,
					theme: &self.theme,
				},
			),
		}
	}

	fn render_log(&self, frame: &mut Frame, area: Rect) {
		let widget = TuiLoggerWidget::default()
			.block(Block::bordered().title(" Log "))
			.output_separator(' ')
			.output_level(Some(TuiLoggerLevelOutput::Abbreviated))
			.output_target(false)
			.output_file(false)
			.output_line(false)
			.style(self.theme.empty_style())
			.state(&self.log_state);
		frame.render_widget(widget, area);
	}
}

fn toggle_label(exact: bool) -> String {
	let mark = if exact { 'x' } else { ' ' };
	format!("[{mark}] Exact")
}

fn render_notice(frame: &mut Frame, area: Rect, text: &str, theme: &Theme) {
	let notice = Paragraph::new(text)
		.alignment(Alignment::Center)
		.style(theme.empty_style());
	frame.render_widget(notice, first_line(area));
}

fn render_loading(frame: &mut Frame, area: Rect, throbber_state: &ThrobberState, theme: &Theme) {
	let muted = theme.empty_style();
	let spinner = Throbber::default().style(muted).throbber_style(muted);
	let line = Line::from(vec![
		spinner.to_symbol_span(throbber_state),
		Span::styled(LOADING_NOTICE, muted),
	]);
	let notice = Paragraph::new(line).alignment(Alignment::Center);
	frame.render_widget(notice, first_line(area));
}

fn first_line(area: Rect) -> Rect {
	Rect {
		height: area.height.min(1),
		..area
	}
}

struct RowsContext<'s> {
	surface: &'s DisplaySurface,
	table_state: &'s mut TableState,
	hit_map: &'s mut HitMap,
	container: RegionId,
	theme: &'s Theme,
}

/// Draw one row per result and register each row and its delete button as
/// children of the results container.
fn render_rows(frame: &mut Frame, area: Rect, context: RowsContext<'_>) {
	let RowsContext {
		surface,
		table_state,
		hit_map,
		container,
		theme,
	} = context;

	let delete_width = DELETE_LABEL.width() as u16;
	let rows: Vec<Row> = surface
		.rows()
		.map(|row| {
			Row::new([
				Cell::from(format!("{} {}", row.icon, row.name)),
				Cell::from(Span::styled(DELETE_LABEL, theme.danger_style())),
			])
		})
		.collect();

	let header = Row::new([Cell::from("File"), Cell::from("")])
		.style(theme.header_style())
		.height(1)
		.bottom_margin(1);
	let table = Table::new(rows, [Constraint::Fill(1), Constraint::Length(delete_width)])
		.header(header)
		.column_spacing(TABLE_COLUMN_SPACING)
		.highlight_spacing(HighlightSpacing::Always)
		.row_highlight_style(theme.row_highlight_style())
		.highlight_symbol(HIGHLIGHT_SYMBOL);
	frame.render_stateful_widget(table, area, table_state);
	render_header_separator(frame, area, theme);

	let visible = usize::from(area.height.saturating_sub(HEADER_AND_DIVIDER_HEIGHT));
	let offset = table_state.offset();
	for (line, row) in surface.rows().skip(offset).take(visible).enumerate() {
		let y = area.y + HEADER_AND_DIVIDER_HEIGHT + line as u16;
		let row_area = Rect {
			x: area.x,
			y,
			width: area.width,
			height: 1,
		};
		let row_id = hit_map.push(row_area, Target::Row(row.key), Some(container));
		let button_width = delete_width.min(area.width);
		let button_area = Rect {
			x: area.right().saturating_sub(button_width),
			y,
			width: button_width,
			height: 1,
		};
		hit_map.push(button_area, Target::DeleteButton(row.key), Some(row_id));
	}
}

fn render_header_separator(frame: &mut Frame, area: Rect, theme: &Theme) {
	if area.height < HEADER_AND_DIVIDER_HEIGHT {
		return;
	}
	let width = area.width as usize;
	if width == 0 {
		return;
	}

	let sep_rect = Rect {
		x: area.x,
		y: area.y + 1,
		width: area.width,
		height: 1,
	};
	let header_bg = theme.header_bg();
	let base_style = Style::new().bg(header_bg);
	if width <= 2 {
		let para = Paragraph::new(" ".repeat(width)).style(base_style);
		frame.render_widget(para, sep_rect);
		return;
	}

	let middle_style = Style::new().bg(header_bg).fg(theme.header_fg());
	let spans = vec![
		Span::styled(" ", base_style),
		Span::styled("─".repeat(width - 2), middle_style),
		Span::styled(" ", base_style),
	];
	frame.render_widget(Paragraph::new(Text::from(Line::from(spans))), sep_rect);
}
