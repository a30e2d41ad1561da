//! Debounced substring filtering over the country catalog.
//!
//! [`FilterEngine`] owns the full list and the indices currently shown. Query
//! changes are routed through a [`Debouncer`] and applied only once the user
//! stops typing for the configured quiet period.

mod debounce;
mod matcher;

use std::time::{Duration, Instant};

pub use debounce::{DEFAULT_DEBOUNCE, Debouncer};
pub use matcher::{Query, filter_indices, matches};

use crate::catalog::Country;

pub struct FilterEngine {
	countries: Vec<Country>,
	filtered: Vec<usize>,
	applied_query: String,
	applied_revision: u64,
	debouncer: Debouncer<String>,
}

impl FilterEngine {
	pub fn new(delay: Duration) -> Self {
		Self {
			countries: Vec::new(),
			filtered: Vec::new(),
			applied_query: String::new(),
			applied_revision: 0,
			debouncer: Debouncer::new(delay),
		}
	}

	/// Install a freshly fetched catalog.
	///
	/// The filtered list becomes the full list straight away. A non-empty
	/// `query` is re-applied after the usual quiet period.
	pub fn set_catalog(&mut self, countries: Vec<Country>, query: &str, now: Instant) {
		self.countries = countries;
		self.filtered = (0..self.countries.len()).collect();
		self.applied_query.clear();
		if query.is_empty() {
			self.debouncer.cancel();
		} else {
			self.debouncer.schedule(query.to_string(), now);
		}
	}

	/// Record a query change. The filtered list is recomputed later by [`poll`](Self::poll).
	pub fn set_query(&mut self, query: &str, now: Instant) {
		self.debouncer.schedule(query.to_string(), now);
	}

	/// Apply the pending query if its quiet period has elapsed.
	///
	/// Returns `true` when the filtered list was recomputed.
	pub fn poll(&mut self, now: Instant) -> bool {
		let Some((revision, query)) = self.debouncer.poll(now) else {
			return false;
		};
		self.apply(revision, query)
	}

	fn apply(&mut self, revision: u64, query: String) -> bool {
		if revision <= self.applied_revision {
			tracing::trace!(revision, applied = self.applied_revision, "dropping stale filter");
			return false;
		}
		self.filtered = filter_indices(&self.countries, &query);
		self.applied_revision = revision;
		tracing::trace!(%query, matches = self.filtered.len(), "filter applied");
		self.applied_query = query;
		true
	}

	/// Drop any pending query and show the full list again.
	pub fn reset(&mut self) {
		self.debouncer.cancel();
		self.filtered = (0..self.countries.len()).collect();
		self.applied_query.clear();
	}

	pub fn countries(&self) -> &[Country] {
		&self.countries
	}

	/// Catalog indices of the current matches.
	pub fn filtered(&self) -> &[usize] {
		&self.filtered
	}

	pub fn filtered_len(&self) -> usize {
		self.filtered.len()
	}

	/// Country at `position` within the filtered list.
	pub fn get(&self, position: usize) -> Option<&Country> {
		let index = *self.filtered.get(position)?;
		self.countries.get(index)
	}

	pub fn filtered_countries(&self) -> impl Iterator<Item = &Country> + '_ {
		self.filtered.iter().filter_map(|&index| self.countries.get(index))
	}

	/// The query the filtered list was last computed from.
	pub fn applied_query(&self) -> &str {
		&self.applied_query
	}

	pub fn is_pending(&self) -> bool {
		self.debouncer.is_pending()
	}
}

impl Default for FilterEngine {
	fn default() -> Self {
		Self::new(DEFAULT_DEBOUNCE)
	}
}
