//! The embeddable country-code picker.
//!
//! A [`Picker`] renders as a small button showing the caller's selection and,
//! once activated, as a full-screen overlay with a search box, a popular
//! subset and the filtered catalog. The caller keeps ownership of the selected
//! [`Country`]: it is passed in through [`PickerProps`] on every call and
//! changes are reported through the props callback.

mod actions;
mod input;
mod render;
mod window;

use std::sync::mpsc::{Receiver, TryRecvError};
use std::time::Instant;

use throbber_widgets_tui::ThrobberState;

pub use input::QueryInput;
pub use window::Window;

use crate::catalog::{CatalogResult, CatalogSource, Country, spawn_fetch};
use crate::config::PickerConfig;
use crate::filter::FilterEngine;

/// Page size used before the overlay has been drawn once.
const DEFAULT_PAGE: usize = 10;

/// Selection and callback supplied by the embedding view.
pub struct PickerProps<'p> {
	/// The caller's current selection.
	pub selected: &'p Country,
	/// Invoked once with the chosen record when the user picks a country.
	pub on_select: &'p mut dyn FnMut(Country),
}

/// Whether the search overlay is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Overlay {
	#[default]
	Closed,
	Open,
}

/// Lifecycle of the single catalog fetch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CatalogStatus {
	/// Not mounted yet.
	#[default]
	Idle,
	Loading,
	Ready,
	/// The fetch failed. The lists stay empty and nothing is retried.
	Unavailable,
}

/// What a key press did to the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerEvent {
	/// The key is not meaningful in the current state.
	Ignored,
	/// State changed but the overlay stayed as it was.
	Handled,
	Opened,
	Closed,
	/// A country was forwarded to the callback and the overlay closed.
	Selected,
}

/// A row the cursor can rest on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entry {
	/// Position within the popular subset.
	Popular(usize),
	/// Position within the filtered list.
	Listed(usize),
}

pub struct Picker<'a> {
	config: PickerConfig,
	overlay: Overlay,
	input: QueryInput<'a>,
	engine: FilterEngine,
	cursor: usize,
	window: Window,
	page: usize,
	status: CatalogStatus,
	source: Option<Box<dyn CatalogSource>>,
	catalog_rx: Option<Receiver<CatalogResult>>,
	pub(crate) throbber_state: ThrobberState,
}

impl<'a> Picker<'a> {
	pub fn new(config: PickerConfig, source: Box<dyn CatalogSource>) -> Self {
		let mut picker = Self::detached(config);
		picker.source = Some(source);
		picker
	}

	/// A picker with no catalog source; data arrives through [`load`](Self::load).
	pub fn detached(config: PickerConfig) -> Self {
		let mut input = QueryInput::new(config.labels.placeholder.clone());
		input.set_styles(config.theme.prompt, config.theme.empty);
		let engine = FilterEngine::new(config.debounce);
		Self {
			config,
			overlay: Overlay::Closed,
			input,
			engine,
			cursor: 0,
			window: Window::default(),
			page: DEFAULT_PAGE,
			status: CatalogStatus::Idle,
			source: None,
			catalog_rx: None,
			throbber_state: ThrobberState::default(),
		}
	}

	/// Start the catalog fetch. Later calls do nothing.
	pub fn mount(&mut self) {
		let Some(source) = self.source.take() else {
			return;
		};
		self.catalog_rx = Some(spawn_fetch(source));
		self.status = CatalogStatus::Loading;
	}

	/// Install a catalog, as if a fetch had just succeeded.
	pub fn load(&mut self, countries: Vec<Country>, now: Instant) {
		let query = self.input.text().to_string();
		self.engine.set_catalog(countries, &query, now);
		self.status = CatalogStatus::Ready;
		self.reset_cursor();
	}

	/// Advance background work: the fetch result and the debounce timer.
	///
	/// Returns `true` if anything visible changed.
	pub fn pump(&mut self, now: Instant) -> bool {
		let mut changed = self.pump_catalog(now);
		if self.engine.poll(now) {
			self.reset_cursor();
			changed = true;
		}
		if self.status == CatalogStatus::Loading {
			self.throbber_state.calc_next();
			changed = true;
		}
		changed
	}

	fn pump_catalog(&mut self, now: Instant) -> bool {
		let Some(rx) = &self.catalog_rx else {
			return false;
		};
		match rx.try_recv() {
			Ok(Ok(countries)) => {
				self.catalog_rx = None;
				self.load(countries, now);
				true
			}
			Ok(Err(_)) => {
				// Already logged by the fetch thread.
				self.catalog_rx = None;
				self.status = CatalogStatus::Unavailable;
				true
			}
			Err(TryRecvError::Empty) => false,
			Err(TryRecvError::Disconnected) => {
				tracing::error!("catalog fetch ended without a result");
				self.catalog_rx = None;
				self.status = CatalogStatus::Unavailable;
				true
			}
		}
	}

	pub fn open(&mut self) {
		if self.overlay == Overlay::Open {
			return;
		}
		tracing::debug!("country picker opened");
		self.overlay = Overlay::Open;
		self.reset_cursor();
	}

	/// Hide the overlay and forget the query.
	pub fn close(&mut self) {
		if self.overlay == Overlay::Closed {
			return;
		}
		tracing::debug!("country picker closed");
		self.overlay = Overlay::Closed;
		self.input.clear();
		self.engine.reset();
		self.reset_cursor();
	}

	/// Forward the entry at `position` to the caller and close.
	///
	/// Returns `false` without side effects if there is no such entry.
	pub fn select(&mut self, position: usize, props: &mut PickerProps<'_>) -> bool {
		let Some(country) = self.country_at(position).cloned() else {
			return false;
		};
		tracing::info!(
			name = %country.name,
			dial_code = %country.dial_code,
			previous = %props.selected.dial_code,
			"country selected"
		);
		(props.on_select)(country);
		self.close();
		true
	}

	/// Select the entry under the cursor.
	pub fn select_current(&mut self, props: &mut PickerProps<'_>) -> bool {
		self.select(self.cursor, props)
	}

	pub fn is_open(&self) -> bool {
		self.overlay == Overlay::Open
	}

	pub fn status(&self) -> CatalogStatus {
		self.status
	}

	pub fn query(&self) -> &str {
		self.input.text()
	}

	pub fn cursor(&self) -> usize {
		self.cursor
	}

	pub fn config(&self) -> &PickerConfig {
		&self.config
	}

	pub fn countries(&self) -> &[Country] {
		self.engine.countries()
	}

	pub fn filtered(&self) -> impl Iterator<Item = &Country> + '_ {
		self.engine.filtered_countries()
	}

	/// The popular subset is shown only while the search box is empty.
	pub fn shows_popular(&self) -> bool {
		self.input.is_empty()
	}

	fn popular_len(&self) -> usize {
		if self.shows_popular() {
			self.config.popular_count.min(self.engine.filtered_len())
		} else {
			0
		}
	}

	/// Number of rows the cursor can visit.
	pub fn entry_count(&self) -> usize {
		self.popular_len() + self.engine.filtered_len()
	}

	/// Cursor-addressable rows in display order.
	pub fn visible_entries(&self) -> Vec<Entry> {
		let popular = (0..self.popular_len()).map(Entry::Popular);
		let listed = (0..self.engine.filtered_len()).map(Entry::Listed);
		popular.chain(listed).collect()
	}

	fn entry_at(&self, position: usize) -> Option<Entry> {
		let popular = self.popular_len();
		if position < popular {
			Some(Entry::Popular(position))
		} else if position - popular < self.engine.filtered_len() {
			Some(Entry::Listed(position - popular))
		} else {
			None
		}
	}

	/// The country shown at cursor `position`.
	pub fn country_at(&self, position: usize) -> Option<&Country> {
		match self.entry_at(position)? {
			Entry::Popular(index) | Entry::Listed(index) => self.engine.get(index),
		}
	}

	fn reset_cursor(&mut self) {
		self.cursor = 0;
		self.window.reset();
	}

	pub(crate) fn set_query_from_input(&mut self, now: Instant) {
		let query = self.input.text().to_string();
		self.engine.set_query(&query, now);
		self.reset_cursor();
	}
}
