use ratatui::{
	Frame,
	layout::{Constraint, Layout, Margin},
	text::{Line, Span},
	widgets::Paragraph,
};

use super::App;

const BUTTON_WIDTH: u16 = 14;
const BUTTON_HEIGHT: u16 = 3;

impl<'a> App<'a> {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});

		if self.picker.is_open() {
			self.picker.draw_overlay(frame, area);
			return;
		}

		let theme = self.picker.config().theme;
		let [heading_area, row_area, hint_area] = Layout::vertical([
			Constraint::Length(1),
			Constraint::Length(BUTTON_HEIGHT),
			Constraint::Length(1),
		])
		.areas(area);

		frame.render_widget(Paragraph::new(self.heading.as_str()).style(theme.header), heading_area);

		let [button_area, name_area] =
			Layout::horizontal([Constraint::Length(BUTTON_WIDTH), Constraint::Min(1)]).areas(row_area);
		self.picker.draw_button(frame, button_area, &self.selected);

		let name_area = name_area.inner(Margin {
			vertical: 1,
			horizontal: 1,
		});
		frame.render_widget(Paragraph::new(self.selected.name.as_str()), name_area);

		let hint = Line::from(vec![
			Span::styled("enter", theme.prompt),
			Span::styled(" choose country  ", theme.muted),
			Span::styled("q", theme.prompt),
			Span::styled(" done", theme.muted),
		]);
		frame.render_widget(Paragraph::new(hint), hint_area);
	}
}
