use std::time::Instant;

use serde::Serialize;

use crate::catalog::{CatalogSource, Country};
use crate::config::PickerConfig;
use crate::picker::Picker;

/// Result of a picker session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PickOutcome {
	/// `false` when the session was aborted with Ctrl-C.
	pub accepted: bool,
	/// Whether the final selection differs from the initial one.
	pub changed: bool,
	pub country: Country,
}

pub struct App<'a> {
	pub picker: Picker<'a>,
	/// The canonical selection. The picker only ever reports changes to it.
	pub selected: Country,
	initial: Country,
	pub(crate) heading: String,
}

impl<'a> App<'a> {
	pub fn new(config: PickerConfig, source: Box<dyn CatalogSource>, selected: Country) -> Self {
		Self::with_picker(Picker::new(config, source), selected)
	}

	pub fn with_picker(picker: Picker<'a>, selected: Country) -> Self {
		Self {
			picker,
			initial: selected.clone(),
			selected,
			heading: "Phone number".to_string(),
		}
	}

	pub fn with_heading(mut self, heading: impl Into<String>) -> Self {
		self.heading = heading.into();
		self
	}

	/// Mount the picker, starting its catalog fetch.
	pub fn mount(&mut self) {
		self.picker.mount();
	}

	pub(crate) fn tick(&mut self, now: Instant) -> bool {
		self.picker.pump(now)
	}

	pub(crate) fn outcome(&self, accepted: bool) -> PickOutcome {
		PickOutcome {
			accepted,
			changed: self.selected != self.initial,
			country: self.selected.clone(),
		}
	}
}
