use thiserror::Error;

/// Errors raised while loading the country catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
	/// The HTTP request failed or returned a non-success status.
	#[error("request to {url} failed: {message}")]
	Http { url: String, message: String },

	/// The catalog could not be read from a local source.
	#[error("failed to read catalog: {0}")]
	Io(#[from] std::io::Error),

	/// The payload was not a JSON array of country records.
	#[error("failed to parse catalog: {0}")]
	Parse(#[from] serde_json::Error),
}

impl CatalogError {
	pub fn http(url: impl Into<String>, message: impl ToString) -> Self {
		Self::Http {
			url: url.into(),
			message: message.to_string(),
		}
	}
}
