use crate::catalog::Country;

/// Lowercased needle prepared once per recomputation.
#[derive(Debug, Clone)]
pub struct Query {
	needle: String,
}

impl Query {
	pub fn new(text: &str) -> Self {
		Self {
			needle: text.to_lowercase(),
		}
	}

	pub fn is_empty(&self) -> bool {
		self.needle.is_empty()
	}

	/// Case-insensitive containment against the name or the dial code.
	pub fn matches(&self, country: &Country) -> bool {
		if self.is_empty() {
			return true;
		}
		country.name.to_lowercase().contains(&self.needle)
			|| country.dial_code.to_lowercase().contains(&self.needle)
	}
}

/// Return whether `country` should be shown for `query`.
pub fn matches(country: &Country, query: &str) -> bool {
	Query::new(query).matches(country)
}

/// Indices into `countries` that match `query`, in source order.
pub fn filter_indices(countries: &[Country], query: &str) -> Vec<usize> {
	let query = Query::new(query);
	if query.is_empty() {
		return (0..countries.len()).collect();
	}
	countries
		.iter()
		.enumerate()
		.filter(|(_, country)| query.matches(country))
		.map(|(index, _)| index)
		.collect()
}
