use anyhow::Result;

use super::{App, PickOutcome};
use crate::catalog::{CatalogSource, Country, HttpCatalog};
use crate::config::{PickerConfig, PickerLabels};
use crate::picker::Picker;
use crate::theme::Theme;

/// Builder for configuring and running the interactive picker.
pub struct PickerUi {
	source: Box<dyn CatalogSource>,
	selected: Country,
	config: PickerConfig,
	heading: Option<String>,
}

impl PickerUi {
	/// Create a picker UI that starts with `selected` and loads from `source`.
	pub fn new(source: Box<dyn CatalogSource>, selected: Country) -> Self {
		Self {
			source,
			selected,
			config: PickerConfig::default(),
			heading: None,
		}
	}

	/// Use the public countries API.
	pub fn http(selected: Country) -> Self {
		Self::new(Box::new(HttpCatalog::default()), selected)
	}

	pub fn with_config(mut self, config: PickerConfig) -> Self {
		self.config = config;
		self
	}

	pub fn with_theme(mut self, theme: Theme) -> Self {
		self.config.theme = theme;
		self
	}

	pub fn with_labels(mut self, labels: PickerLabels) -> Self {
		self.config.labels = labels;
		self
	}

	pub fn with_heading(mut self, heading: impl Into<String>) -> Self {
		self.heading = Some(heading.into());
		self
	}

	/// Assemble the [`App`] without running it.
	pub fn build<'a>(self) -> App<'a> {
		let app = App::with_picker(Picker::new(self.config, self.source), self.selected);
		match self.heading {
			Some(heading) => app.with_heading(heading),
			None => app,
		}
	}

	pub fn run(self) -> Result<PickOutcome> {
		self.build().run()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::catalog::FileCatalog;
	use crate::theme::LIGHT;

	#[test]
	fn builder_applies_config_to_picker() {
		let app = PickerUi::new(
			Box::new(FileCatalog::new("countries.json")),
			Country::new("Chile", "+56", "🇨🇱"),
		)
		.with_theme(LIGHT)
		.with_heading("Mobile")
		.build();

		assert_eq!(app.heading, "Mobile");
		assert_eq!(app.picker.config().theme, LIGHT);
		assert_eq!(app.selected.dial_code, "+56");
		assert!(!app.picker.is_open());
	}
}
