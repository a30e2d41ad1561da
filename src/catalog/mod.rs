//! Country catalog: the display model and the sources it is loaded from.
//!
//! Raw records from the public countries API are converted into [`Country`]
//! values once per fetch. The [`CatalogSource`] trait abstracts over where the
//! JSON comes from so the picker can be driven by the network in production and
//! by local files in tests.

mod error;
mod raw;
mod source;

use serde::Serialize;

pub use error::CatalogError;
pub use raw::{RawCountry, RawIdd, RawName, dial_code, parse_catalog};
pub use source::{
	CatalogResult, CatalogSource, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT, FileCatalog, HttpCatalog,
	spawn_fetch,
};

/// A single entry in the picker.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Country {
	/// Common English name, e.g. `France`.
	pub name: String,
	/// International calling-code prefix including the leading `+`.
	pub dial_code: String,
	/// Flag emoji. Empty when the source has none.
	pub flag: String,
}

/// Rendering key for a [`Country`].
///
/// The source data does not guarantee uniqueness of this pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CountryKey<'a> {
	pub name: &'a str,
	pub dial_code: &'a str,
}

impl Country {
	pub fn new(
		name: impl Into<String>,
		dial_code: impl Into<String>,
		flag: impl Into<String>,
	) -> Self {
		Self {
			name: name.into(),
			dial_code: dial_code.into(),
			flag: flag.into(),
		}
	}

	#[must_use]
	pub fn key(&self) -> CountryKey<'_> {
		CountryKey {
			name: &self.name,
			dial_code: &self.dial_code,
		}
	}
}

impl std::fmt::Display for Country {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		if self.flag.is_empty() {
			write!(f, "{} ({})", self.name, self.dial_code)
		} else {
			write!(f, "{} {} ({})", self.flag, self.name, self.dial_code)
		}
	}
}
