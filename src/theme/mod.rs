//! Named colour schemes for the picker.

mod light;
mod slate;

use ratatui::style::{Color, Style};

pub use light::LIGHT;
pub use slate::SLATE;

/// Styles applied to the button, overlay chrome and country rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	/// Overlay header and section headings.
	pub header: Style,
	/// The row under the cursor.
	pub row_highlight: Style,
	/// Search box prompt and the closed button.
	pub prompt: Style,
	/// Empty state and placeholder text.
	pub empty: Style,
	/// Dial codes and secondary labels.
	pub muted: Style,
}

impl Theme {
	/// Border colour derived from the header foreground.
	#[must_use]
	pub fn border_style(&self) -> Style {
		Style::new().fg(self.header.fg.unwrap_or(Color::Reset))
	}
}

impl Default for Theme {
	fn default() -> Self {
		SLATE
	}
}

struct BuiltinTheme {
	name: &'static str,
	aliases: &'static [&'static str],
	theme: Theme,
}

const BUILTINS: &[BuiltinTheme] = &[
	BuiltinTheme {
		name: "slate",
		aliases: &["dark", "default"],
		theme: SLATE,
	},
	BuiltinTheme {
		name: "light",
		aliases: &["day"],
		theme: LIGHT,
	},
];

fn normalize_name(name: &str) -> String {
	name.trim().to_ascii_lowercase().replace(['_', ' '], "-")
}

/// Look up a builtin theme by name or alias, ignoring case.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	let wanted = normalize_name(name);
	BUILTINS
		.iter()
		.find(|builtin| builtin.name == wanted || builtin.aliases.contains(&wanted.as_str()))
		.map(|builtin| builtin.theme)
}

/// Canonical names of every builtin theme.
#[must_use]
pub fn names() -> Vec<&'static str> {
	BUILTINS.iter().map(|builtin| builtin.name).collect()
}
