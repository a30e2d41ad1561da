use anyhow::Result;
use dialpick::{CatalogSource, FileCatalog, HttpCatalog, PickOutcome, PickerUi};

use crate::settings::{CatalogOrigin, ResolvedConfig};

/// Coordinates building and running the interactive picker.
pub(crate) struct PickWorkflow {
	picker_ui: PickerUi,
}

impl PickWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Self {
		Self {
			picker_ui: PickerUiFactory::build(config),
		}
	}

	pub(crate) fn run(self) -> Result<PickOutcome> {
		self.picker_ui.run()
	}
}

/// Translates resolved configuration into a configured [`PickerUi`].
struct PickerUiFactory;

impl PickerUiFactory {
	fn build(config: ResolvedConfig) -> PickerUi {
		let ResolvedConfig {
			origin,
			selection,
			picker,
			theme_name: _,
			heading,
		} = config;

		let builder = PickerUi::new(Self::source(origin), selection).with_config(picker);
		match heading {
			Some(heading) => builder.with_heading(heading),
			None => builder,
		}
	}

	fn source(origin: CatalogOrigin) -> Box<dyn CatalogSource> {
		match origin {
			CatalogOrigin::Http {
				endpoint,
				timeout,
				user_agent,
			} => {
				let catalog = HttpCatalog::new(endpoint).with_timeout(timeout);
				match user_agent {
					Some(agent) => Box::new(catalog.with_user_agent(agent)),
					None => Box::new(catalog),
				}
			}
			CatalogOrigin::File(path) => Box::new(FileCatalog::new(path)),
		}
	}
}

#[cfg(test)]
mod tests {
	use std::path::PathBuf;
	use std::time::Duration;

	use super::*;

	#[test]
	fn sources_follow_origin() {
		let http = PickerUiFactory::source(CatalogOrigin::Http {
			endpoint: "https://example.com/countries".into(),
			timeout: Duration::from_secs(3),
			user_agent: None,
		});
		assert_eq!(http.describe(), "https://example.com/countries");

		let file = PickerUiFactory::source(CatalogOrigin::File(PathBuf::from("countries.json")));
		assert!(file.describe().contains("countries.json"));
	}
}
