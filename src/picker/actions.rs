use std::time::Instant;

use ratatui::crossterm::event::{KeyCode, KeyEvent};

use super::{Picker, PickerEvent, PickerProps};

impl<'a> Picker<'a> {
	/// Route a key press according to the overlay state.
	pub fn handle_key(
		&mut self,
		key: KeyEvent,
		props: &mut PickerProps<'_>,
		now: Instant,
	) -> PickerEvent {
		if !self.is_open() {
			return match key.code {
				KeyCode::Enter | KeyCode::Char(' ') => {
					self.open();
					PickerEvent::Opened
				}
				_ => PickerEvent::Ignored,
			};
		}

		match key.code {
			KeyCode::Esc => {
				self.close();
				PickerEvent::Closed
			}
			KeyCode::Enter => {
				if self.select_current(props) {
					PickerEvent::Selected
				} else {
					PickerEvent::Ignored
				}
			}
			KeyCode::Up => self.move_cursor_up(1),
			KeyCode::Down => self.move_cursor_down(1),
			KeyCode::PageUp => self.move_cursor_up(self.page),
			KeyCode::PageDown => self.move_cursor_down(self.page),
			KeyCode::Home => self.move_cursor_to(0),
			KeyCode::End => self.move_cursor_to(self.entry_count().saturating_sub(1)),
			_ => {
				if self.input.input(key) {
					self.set_query_from_input(now);
					PickerEvent::Handled
				} else {
					PickerEvent::Ignored
				}
			}
		}
	}

	fn move_cursor_up(&mut self, step: usize) -> PickerEvent {
		self.move_cursor_to(self.cursor.saturating_sub(step))
	}

	fn move_cursor_down(&mut self, step: usize) -> PickerEvent {
		let last = self.entry_count().saturating_sub(1);
		self.move_cursor_to(self.cursor.saturating_add(step).min(last))
	}

	fn move_cursor_to(&mut self, position: usize) -> PickerEvent {
		if position == self.cursor || position >= self.entry_count() {
			return PickerEvent::Ignored;
		}
		self.cursor = position;
		PickerEvent::Handled
	}
}
