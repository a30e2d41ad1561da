use std::fs;
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::{Duration, Instant};

use super::{CatalogError, Country, parse_catalog};

/// Public catalog limited to the fields the picker uses.
pub const DEFAULT_ENDPOINT: &str = "https://restcountries.com/v3.1/all?fields=name,idd,flag";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Outcome of a single catalog fetch.
pub type CatalogResult = Result<Vec<Country>, CatalogError>;

/// Somewhere the full country list can be loaded from.
pub trait CatalogSource: Send + 'static {
	/// Short human-readable origin used in log lines.
	fn describe(&self) -> String;

	/// Load the full catalog. Called at most once per picker.
	fn fetch(&self) -> CatalogResult;
}

/// Unauthenticated GET against a countries API.
#[derive(Debug, Clone)]
pub struct HttpCatalog {
	endpoint: String,
	timeout: Duration,
	user_agent: String,
}

impl HttpCatalog {
	pub fn new(endpoint: impl Into<String>) -> Self {
		Self {
			endpoint: endpoint.into(),
			timeout: DEFAULT_TIMEOUT,
			user_agent: format!("dialpick/{}", env!("CARGO_PKG_VERSION")),
		}
	}

	pub fn with_timeout(mut self, timeout: Duration) -> Self {
		self.timeout = timeout;
		self
	}

	pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
		self.user_agent = user_agent.into();
		self
	}

	pub fn endpoint(&self) -> &str {
		&self.endpoint
	}
}

impl Default for HttpCatalog {
	fn default() -> Self {
		Self::new(DEFAULT_ENDPOINT)
	}
}

impl CatalogSource for HttpCatalog {
	fn describe(&self) -> String {
		self.endpoint.clone()
	}

	fn fetch(&self) -> CatalogResult {
		let agent = ureq::AgentBuilder::new()
			.timeout(self.timeout)
			.user_agent(&self.user_agent)
			.build();

		let response = agent
			.get(&self.endpoint)
			.set("Accept", "application/json")
			.call()
			.map_err(|err| CatalogError::http(&self.endpoint, err))?;

		let body = response.into_string()?;
		parse_catalog(&body)
	}
}

/// Catalog JSON stored on disk in the same shape the API serves.
#[derive(Debug, Clone)]
pub struct FileCatalog {
	path: PathBuf,
}

impl FileCatalog {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}
}

impl CatalogSource for FileCatalog {
	fn describe(&self) -> String {
		self.path.display().to_string()
	}

	fn fetch(&self) -> CatalogResult {
		let body = fs::read_to_string(&self.path)?;
		parse_catalog(&body)
	}
}

/// Run one fetch on a background thread and hand back its result channel.
///
/// The fetch is never retried. If the receiver is dropped before the fetch
/// completes the result is discarded.
pub fn spawn_fetch(source: Box<dyn CatalogSource>) -> Receiver<CatalogResult> {
	let (tx, rx) = mpsc::channel();

	thread::spawn(move || {
		let origin = source.describe();
		tracing::debug!(%origin, "fetching country catalog");
		let started = Instant::now();
		let result = source.fetch();
		match &result {
			Ok(countries) => tracing::info!(
				%origin,
				count = countries.len(),
				elapsed_ms = started.elapsed().as_millis() as u64,
				"country catalog loaded"
			),
			Err(err) => tracing::error!(%origin, error = %err, "error fetching countries"),
		}
		let _ = tx.send(result);
	});

	rx
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::{Read, Write};
	use std::net::TcpListener;

	struct StaticCatalog(Vec<Country>);

	impl CatalogSource for StaticCatalog {
		fn describe(&self) -> String {
			"static".into()
		}

		fn fetch(&self) -> CatalogResult {
			Ok(self.0.clone())
		}
	}

	#[test]
	fn file_catalog_reads_api_shaped_json() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		write!(
			file,
			r#"[{{"name": {{"common": "Japan"}}, "idd": {{"root": "+8", "suffixes": ["1"]}}, "flag": "🇯🇵"}}]"#
		)
		.unwrap();

		let countries = FileCatalog::new(file.path()).fetch().expect("fetch");
		assert_eq!(countries, vec![Country::new("Japan", "+81", "🇯🇵")]);
	}

	#[test]
	fn missing_file_is_an_io_error() {
		let dir = tempfile::tempdir().unwrap();
		let err = FileCatalog::new(dir.path().join("absent.json"))
			.fetch()
			.unwrap_err();
		assert!(matches!(err, CatalogError::Io(_)));
	}

	#[test]
	fn spawn_fetch_delivers_exactly_one_result() {
		let rx = spawn_fetch(Box::new(StaticCatalog(vec![Country::new(
			"Chile", "+56", "🇨🇱",
		)])));

		let result = rx.recv_timeout(Duration::from_secs(5)).expect("result");
		assert_eq!(result.unwrap().len(), 1);
		assert!(rx.recv_timeout(Duration::from_millis(50)).is_err());
	}

	#[test]
	fn http_catalog_parses_response_body() {
		let listener = TcpListener::bind("127.0.0.1:0").unwrap();
		let addr = listener.local_addr().unwrap();
		let body = r#"[{"name": {"common": "Chile"}, "idd": {"root": "+5", "suffixes": ["6"]}, "flag": "🇨🇱"}]"#;
		let server = thread::spawn(move || {
			let (mut stream, _) = listener.accept().unwrap();
			let mut request = [0u8; 2048];
			let _ = stream.read(&mut request);
			write!(
				stream,
				"HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
				body.len(),
				body
			)
			.unwrap();
		});

		let countries = HttpCatalog::new(format!("http://{addr}/v3.1/all"))
			.with_timeout(Duration::from_secs(5))
			.fetch()
			.expect("fetch");
		server.join().unwrap();
		assert_eq!(countries, vec![Country::new("Chile", "+56", "🇨🇱")]);
	}

	#[test]
	fn http_catalog_defaults_to_public_endpoint() {
		let catalog = HttpCatalog::default().with_timeout(Duration::from_secs(1));
		assert_eq!(catalog.endpoint(), DEFAULT_ENDPOINT);
		assert_eq!(catalog.describe(), DEFAULT_ENDPOINT);
	}
}
