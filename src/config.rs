//! Tunables and text shown by the picker.

use std::time::Duration;

use crate::filter::DEFAULT_DEBOUNCE;
use crate::theme::Theme;

/// Number of leading entries shown under the popular heading.
pub const DEFAULT_POPULAR_COUNT: usize = 3;

/// Human-readable labels rendered inside the overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerLabels {
	/// Overlay title next to the back affordance.
	pub title: String,
	/// Placeholder shown while the search box is empty.
	pub placeholder: String,
	/// Heading above the popular subset.
	pub popular_heading: String,
	/// Heading above the full list while no query is typed.
	pub all_heading: String,
	/// Shown when nothing matches the query.
	pub empty: String,
	/// Shown when the catalog could not be loaded.
	pub unavailable: String,
}

impl Default for PickerLabels {
	fn default() -> Self {
		Self {
			title: "Search country code".to_string(),
			placeholder: "Type country name or country code".to_string(),
			popular_heading: "Popular countries".to_string(),
			all_heading: "All countries".to_string(),
			empty: "No results".to_string(),
			unavailable: "Country list unavailable".to_string(),
		}
	}
}

#[derive(Debug, Clone)]
pub struct PickerConfig {
	/// Quiet period after the last keystroke before the list is re-filtered.
	pub debounce: Duration,
	pub popular_count: usize,
	pub labels: PickerLabels,
	pub theme: Theme,
}

impl Default for PickerConfig {
	fn default() -> Self {
		Self {
			debounce: DEFAULT_DEBOUNCE,
			popular_count: DEFAULT_POPULAR_COUNT,
			labels: PickerLabels::default(),
			theme: Theme::default(),
		}
	}
}

impl PickerConfig {
	pub fn with_debounce(mut self, debounce: Duration) -> Self {
		self.debounce = debounce;
		self
	}

	pub fn with_popular_count(mut self, count: usize) -> Self {
		self.popular_count = count;
		self
	}

	pub fn with_labels(mut self, labels: PickerLabels) -> Self {
		self.labels = labels;
		self
	}

	pub fn with_theme(mut self, theme: Theme) -> Self {
		self.theme = theme;
		self
	}
}
