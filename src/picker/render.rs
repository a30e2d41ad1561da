use ratatui::{
	Frame,
	layout::{Alignment, Constraint, Layout, Rect},
	style::Style,
	text::{Line, Span},
	widgets::{Block, Borders, Cell, Clear, HighlightSpacing, Paragraph, Row, Table, TableState},
};
use throbber_widgets_tui::Throbber;
use unicode_width::UnicodeWidthStr;

use super::{CatalogStatus, Picker};
use crate::catalog::Country;
use crate::theme::Theme;

pub(crate) const HIGHLIGHT_SYMBOL: &str = "▶ ";
const BACK_SYMBOL: &str = "←";
const FLAG_WIDTH: u16 = 2;
const MIN_CODE_WIDTH: u16 = 4;
const SEARCH_BOX_HEIGHT: u16 = 3;

impl<'a> Picker<'a> {
	/// Draw the closed toggle showing the caller's selection.
	pub fn draw_button(&self, frame: &mut Frame, area: Rect, selected: &Country) {
		let theme = &self.config.theme;
		let block = Block::default()
			.borders(Borders::ALL)
			.border_set(ratatui::symbols::border::ROUNDED)
			.border_style(theme.border_style());

		let mut spans = Vec::new();
		if !selected.flag.is_empty() {
			spans.push(Span::raw(selected.flag.clone()));
			spans.push(Span::raw(" "));
		}
		spans.push(Span::styled(selected.dial_code.clone(), theme.prompt));
		spans.push(Span::styled(" ▾", theme.muted));

		let button = Paragraph::new(Line::from(spans)).block(block);
		frame.render_widget(button, area);
	}

	/// Draw the search overlay over `area`.
	pub fn draw_overlay(&mut self, frame: &mut Frame, area: Rect) {
		frame.render_widget(Clear, area);
		let theme = self.config.theme;

		let popular_len = self.popular_len() as u16;
		let with_popular = popular_len > 0;
		let mut constraints = vec![Constraint::Length(1), Constraint::Length(SEARCH_BOX_HEIGHT)];
		if with_popular {
			constraints.push(Constraint::Length(1));
			constraints.push(Constraint::Length(popular_len));
			constraints.push(Constraint::Length(1));
		}
		constraints.push(Constraint::Min(1));
		constraints.push(Constraint::Length(1));
		let layout = Layout::vertical(constraints).split(area);

		self.render_header(frame, layout[0], &theme);
		self.render_search_box(frame, layout[1], &theme);

		let list_area = if with_popular {
			let heading = Paragraph::new(self.config.labels.popular_heading.as_str()).style(theme.header);
			frame.render_widget(heading, layout[2]);
			self.render_popular(frame, layout[3], &theme);
			let heading = Paragraph::new(self.config.labels.all_heading.as_str()).style(theme.header);
			frame.render_widget(heading, layout[4]);
			layout[5]
		} else {
			layout[2]
		};

		self.render_list(frame, list_area, &theme);
		self.render_status(frame, layout[layout.len() - 1], &theme);
	}

	fn render_header(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
		let line = Line::from(vec![
			Span::styled(BACK_SYMBOL, theme.prompt),
			Span::raw(" "),
			Span::styled(self.config.labels.title.as_str(), theme.header),
		]);
		frame.render_widget(Paragraph::new(line), area);
	}

	fn render_search_box(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
		let block = Block::default()
			.borders(Borders::ALL)
			.border_set(ratatui::symbols::border::ROUNDED)
			.border_style(theme.border_style());
		let inner = block.inner(area);
		frame.render_widget(block, area);

		let [prompt_area, input_area] =
			Layout::horizontal([Constraint::Length(2), Constraint::Min(1)]).areas(inner);
		frame.render_widget(Paragraph::new("> ").style(theme.prompt), prompt_area);
		frame.render_widget(self.input.widget(), input_area);
	}

	fn render_popular(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
		let count = self.popular_len();
		let rows: Vec<&Country> = (0..count).filter_map(|pos| self.engine.get(pos)).collect();
		let selected = (self.cursor < count).then_some(self.cursor);
		render_rows(frame, area, &rows, selected, theme);
	}

	fn render_list(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
		let height = area.height as usize;
		self.page = height.max(1);

		let total = self.engine.filtered_len();
		if total == 0 {
			self.window.reset();
			let message = match self.status {
				CatalogStatus::Unavailable => self.config.labels.unavailable.as_str(),
				CatalogStatus::Idle | CatalogStatus::Loading => "",
				CatalogStatus::Ready => self.config.labels.empty.as_str(),
			};
			let empty = Paragraph::new(message)
				.alignment(Alignment::Center)
				.style(theme.empty);
			frame.render_widget(empty, area);
			return;
		}

		let popular = self.popular_len();
		let cursor = self.cursor.checked_sub(popular);
		let range = self.window.follow(cursor, total, height);
		let offset = range.start;
		let rows: Vec<&Country> = range.filter_map(|pos| self.engine.get(pos)).collect();
		let selected = cursor
			.filter(|cursor| *cursor >= offset)
			.map(|cursor| cursor - offset);
		render_rows(frame, area, &rows, selected, theme);
	}

	fn render_status(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
		let mut line = Line::default();
		if self.status == CatalogStatus::Loading {
			let spinner = Throbber::default()
				.style(theme.muted)
				.throbber_style(theme.muted);
			line.spans.push(spinner.to_symbol_span(&self.throbber_state));
			line.spans.push(Span::styled("Loading countries", theme.muted));
		} else {
			let label = format!(
				"{} of {}",
				self.engine.filtered_len(),
				self.engine.countries().len()
			);
			line.spans.push(Span::styled(label, theme.muted));
		}
		frame.render_widget(Paragraph::new(line).alignment(Alignment::Right), area);
	}
}

/// Render a slice of countries, only the rows given are materialized.
fn render_rows(
	frame: &mut Frame,
	area: Rect,
	countries: &[&Country],
	selected: Option<usize>,
	theme: &Theme,
) {
	if area.height == 0 || countries.is_empty() {
		return;
	}

	let code_width = countries
		.iter()
		.map(|country| country.dial_code.width() as u16)
		.max()
		.unwrap_or(0)
		.max(MIN_CODE_WIDTH);

	let rows = countries.iter().map(|country| {
		Row::new(vec![
			Cell::from(country.flag.as_str()),
			Cell::from(country.name.as_str()),
			Cell::from(Span::styled(country.dial_code.as_str(), theme.muted)),
		])
	});

	let widths = [
		Constraint::Length(FLAG_WIDTH),
		Constraint::Fill(1),
		Constraint::Length(code_width),
	];
	let table = Table::new(rows, widths)
		.column_spacing(1)
		.style(Style::default())
		.highlight_spacing(HighlightSpacing::Always)
		.row_highlight_style(theme.row_highlight)
		.highlight_symbol(HIGHLIGHT_SYMBOL);

	let mut state = TableState::default().with_selected(selected);
	frame.render_stateful_widget(table, area, &mut state);
}
