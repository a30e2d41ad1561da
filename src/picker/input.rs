use ratatui::crossterm::event::KeyEvent;
use ratatui::style::Style;
use tui_textarea::{Input, Key, TextArea};

/// Single-line search box backed by `tui-textarea`.
pub struct QueryInput<'a> {
	textarea: TextArea<'a>,
	placeholder: String,
	style: Style,
	placeholder_style: Style,
}

impl<'a> QueryInput<'a> {
	pub fn new(placeholder: impl Into<String>) -> Self {
		let placeholder = placeholder.into();
		let style = Style::default();
		let placeholder_style = Style::default();
		Self {
			textarea: Self::build(&placeholder, style, placeholder_style),
			placeholder,
			style,
			placeholder_style,
		}
	}

	fn build(placeholder: &str, style: Style, placeholder_style: Style) -> TextArea<'a> {
		let mut textarea = TextArea::default();
		textarea.set_placeholder_text(placeholder.to_string());
		textarea.set_placeholder_style(placeholder_style);
		textarea.set_style(style);
		textarea.set_cursor_line_style(Style::default());
		textarea
	}

	pub fn set_styles(&mut self, style: Style, placeholder_style: Style) {
		self.style = style;
		self.placeholder_style = placeholder_style;
		self.textarea.set_style(style);
		self.textarea.set_placeholder_style(placeholder_style);
	}

	/// Current query text.
	pub fn text(&self) -> &str {
		self.textarea
			.lines()
			.first()
			.map(String::as_str)
			.unwrap_or_default()
	}

	pub fn is_empty(&self) -> bool {
		self.text().is_empty()
	}

	/// Feed a key to the editor. Returns `true` if the text changed.
	///
	/// Keys that would add a second line are swallowed.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		let input = Input::from(key);
		match input {
			Input {
				key: Key::Enter | Key::Tab,
				..
			} => false,
			Input {
				key: Key::Char('m' | 'j'),
				ctrl: true,
				..
			} => false,
			input => {
				let before = self.text().to_string();
				self.textarea.input(input);
				self.text() != before
			}
		}
	}

	pub fn clear(&mut self) {
		self.textarea = Self::build(&self.placeholder, self.style, self.placeholder_style);
	}

	pub fn widget(&self) -> &TextArea<'a> {
		&self.textarea
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use ratatui::crossterm::event::{KeyCode, KeyModifiers};

	fn key(code: KeyCode) -> KeyEvent {
		KeyEvent::new(code, KeyModifiers::NONE)
	}

	#[test]
	fn typing_updates_text() {
		let mut input = QueryInput::new("search");
		assert!(input.input(key(KeyCode::Char('f'))));
		assert!(input.input(key(KeyCode::Char('r'))));
		assert_eq!(input.text(), "fr");
		assert!(input.input(key(KeyCode::Backspace)));
		assert_eq!(input.text(), "f");
	}

	#[test]
	fn newline_keys_are_ignored() {
		let mut input = QueryInput::new("search");
		input.input(key(KeyCode::Char('a')));
		assert!(!input.input(key(KeyCode::Enter)));
		assert!(!input.input(KeyEvent::new(KeyCode::Char('m'), KeyModifiers::CONTROL)));
		assert_eq!(input.widget().lines().len(), 1);
	}

	#[test]
	fn cursor_moves_do_not_count_as_edits() {
		let mut input = QueryInput::new("search");
		input.input(key(KeyCode::Char('a')));
		assert!(!input.input(key(KeyCode::Left)));
	}

	#[test]
	fn clear_empties_text() {
		let mut input = QueryInput::new("search");
		input.input(key(KeyCode::Char('x')));
		input.clear();
		assert!(input.is_empty());
	}
}
