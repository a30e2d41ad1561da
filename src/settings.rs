use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Result, anyhow, bail, ensure};
use config::{Config, ConfigError, File};
use serde::Deserialize;

use dialpick::catalog::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT};
use dialpick::config::DEFAULT_POPULAR_COUNT;
use dialpick::filter::DEFAULT_DEBOUNCE;
use dialpick::{Country, PickerConfig, PickerLabels, app_dirs, theme};

use crate::cli::CliArgs;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct RawConfig {
	catalog: CatalogSection,
	picker: PickerSection,
	selection: SelectionSection,
	labels: LabelsSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct CatalogSection {
	endpoint: Option<String>,
	file: Option<PathBuf>,
	timeout_secs: Option<u64>,
	user_agent: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct PickerSection {
	debounce_ms: Option<u64>,
	popular_count: Option<usize>,
	theme: Option<String>,
	heading: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct SelectionSection {
	name: Option<String>,
	dial_code: Option<String>,
	flag: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct LabelsSection {
	title: Option<String>,
	placeholder: Option<String>,
	popular_heading: Option<String>,
	all_heading: Option<String>,
	empty: Option<String>,
	unavailable: Option<String>,
}

/// Where the catalog is loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogOrigin {
	Http {
		endpoint: String,
		timeout: Duration,
		user_agent: Option<String>,
	},
	File(PathBuf),
}

pub struct ResolvedConfig {
	pub origin: CatalogOrigin,
	pub selection: Country,
	pub picker: PickerConfig,
	pub theme_name: String,
	pub heading: Option<String>,
}

impl ResolvedConfig {
	pub fn print_summary(&self) {
		println!("Effective configuration:");
		match &self.origin {
			CatalogOrigin::Http {
				endpoint,
				timeout,
				user_agent,
			} => {
				println!("  Catalog endpoint: {endpoint}");
				println!("  Request timeout: {}s", timeout.as_secs());
				if let Some(agent) = user_agent {
					println!("  User agent: {agent}");
				}
			}
			CatalogOrigin::File(path) => println!("  Catalog file: {}", path.display()),
		}
		println!("  Initial selection: {}", self.selection);
		println!("  Debounce: {}ms", self.picker.debounce.as_millis());
		println!("  Popular entries: {}", self.picker.popular_count);
		println!("  Theme: {}", self.theme_name);
		if let Some(heading) = &self.heading {
			println!("  Heading: {heading}");
		}
	}
}

pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let builder = build_config(cli)?;
	let mut raw: RawConfig = builder
		.try_deserialize()
		.map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
	raw.apply_cli_overrides(cli);
	raw.resolve()
}

fn build_config(cli: &CliArgs) -> Result<Config> {
	let mut builder = Config::builder();

	if !cli.no_config {
		for path in default_config_files() {
			builder = builder.add_source(File::from(path).required(false));
		}
	}

	for path in &cli.config {
		builder = builder.add_source(File::from(path.clone()).required(true));
	}

	builder = builder.add_source(
		config::Environment::with_prefix("dialpick")
			.separator("__")
			.try_parsing(true),
	);

	builder.build().map_err(|err| match err {
		ConfigError::Frozen => anyhow!("configuration builder is frozen"),
		other => other.into(),
	})
}

fn default_config_files() -> Vec<PathBuf> {
	let mut files = Vec::new();

	if let Ok(dir) = app_dirs::get_config_dir() {
		files.push(dir.join("config.toml"));
	}

	if let Ok(current_dir) = env::current_dir() {
		files.push(current_dir.join(".dialpick.toml"));
		files.push(current_dir.join("dialpick.toml"));
	}

	files
}

impl RawConfig {
	fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(endpoint) = cli.endpoint.clone() {
			self.catalog.endpoint = Some(endpoint);
			self.catalog.file = None;
		}
		if let Some(file) = cli.catalog_file.clone() {
			self.catalog.file = Some(file);
		}
		if let Some(timeout) = cli.timeout_secs {
			self.catalog.timeout_secs = Some(timeout);
		}
		if let Some(name) = cli.country.clone() {
			self.selection.name = Some(name);
		}
		if let Some(code) = cli.dial_code.clone() {
			self.selection.dial_code = Some(code);
		}
		if let Some(flag) = cli.flag.clone() {
			self.selection.flag = Some(flag);
		}
		if let Some(theme) = cli.theme.clone() {
			self.picker.theme = Some(theme);
		}
		if let Some(ms) = cli.debounce_ms {
			self.picker.debounce_ms = Some(ms);
		}
		if let Some(count) = cli.popular_count {
			self.picker.popular_count = Some(count);
		}
	}

	fn resolve(self) -> Result<ResolvedConfig> {
		let origin = match self.catalog.file {
			Some(path) => CatalogOrigin::File(path),
			None => {
				let endpoint = self
					.catalog
					.endpoint
					.map(|endpoint| endpoint.trim().to_string())
					.filter(|endpoint| !endpoint.is_empty())
					.unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
				ensure!(
					endpoint.starts_with("http://") || endpoint.starts_with("https://"),
					"catalog endpoint must be an http(s) URL, got '{endpoint}'"
				);
				let timeout = match self.catalog.timeout_secs {
					Some(0) => bail!("catalog timeout must be at least one second"),
					Some(secs) => Duration::from_secs(secs),
					None => DEFAULT_TIMEOUT,
				};
				CatalogOrigin::Http {
					endpoint,
					timeout,
					user_agent: self.catalog.user_agent,
				}
			}
		};

		let selection = resolve_selection(self.selection)?;

		let theme_name = self
			.picker
			.theme
			.map(|name| name.trim().to_string())
			.filter(|name| !name.is_empty())
			.unwrap_or_else(|| "slate".to_string());
		let Some(theme) = theme::by_name(&theme_name) else {
			bail!(
				"unknown theme '{theme_name}' (available: {})",
				theme::names().join(", ")
			);
		};

		let debounce = self
			.picker
			.debounce_ms
			.map(Duration::from_millis)
			.unwrap_or(DEFAULT_DEBOUNCE);
		let popular_count = self.picker.popular_count.unwrap_or(DEFAULT_POPULAR_COUNT);

		let picker = PickerConfig::default()
			.with_debounce(debounce)
			.with_popular_count(popular_count)
			.with_labels(resolve_labels(self.labels))
			.with_theme(theme);

		Ok(ResolvedConfig {
			origin,
			selection,
			picker,
			theme_name,
			heading: self.picker.heading,
		})
	}
}

fn resolve_selection(section: SelectionSection) -> Result<Country> {
	let name = section
		.name
		.map(|name| name.trim().to_string())
		.unwrap_or_else(|| "United States".to_string());
	ensure!(!name.is_empty(), "selected country name must not be empty");

	let dial_code = section
		.dial_code
		.map(|code| normalize_dial_code(&code))
		.unwrap_or_else(|| "+1".to_string());
	let flag = section.flag.unwrap_or_else(|| {
		if name == "United States" { "🇺🇸".to_string() } else { String::new() }
	});

	Ok(Country::new(name, dial_code, flag))
}

/// Accept `33`, `+33` or ` +33 ` and always return `+33`.
fn normalize_dial_code(code: &str) -> String {
	let trimmed = code.trim();
	let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);
	format!("+{digits}")
}

fn resolve_labels(section: LabelsSection) -> PickerLabels {
	let mut labels = PickerLabels::default();
	let overrides = [
		(&mut labels.title, section.title),
		(&mut labels.placeholder, section.placeholder),
		(&mut labels.popular_heading, section.popular_heading),
		(&mut labels.all_heading, section.all_heading),
		(&mut labels.empty, section.empty),
		(&mut labels.unavailable, section.unavailable),
	];
	for (target, value) in overrides {
		if let Some(value) = value {
			*target = value;
		}
	}
	labels
}

#[cfg(test)]
mod tests {
	use super::*;
	use clap::Parser;
	use std::io::Write;

	fn cli(args: &[&str]) -> CliArgs {
		let mut full = vec!["dialpick", "--no-config"];
		full.extend_from_slice(args);
		CliArgs::parse_from(full)
	}

	#[test]
	fn defaults_resolve_to_public_endpoint_and_us() {
		let resolved = RawConfig::default().resolve().expect("resolve");
		assert_eq!(
			resolved.origin,
			CatalogOrigin::Http {
				endpoint: DEFAULT_ENDPOINT.to_string(),
				timeout: DEFAULT_TIMEOUT,
				user_agent: None,
			}
		);
		assert_eq!(resolved.selection, Country::new("United States", "+1", "🇺🇸"));
		assert_eq!(resolved.picker.debounce, DEFAULT_DEBOUNCE);
		assert_eq!(resolved.picker.popular_count, 3);
		assert_eq!(resolved.theme_name, "slate");
	}

	#[test]
	fn cli_overrides_win() {
		let mut raw = RawConfig::default();
		raw.picker.debounce_ms = Some(500);
		raw.apply_cli_overrides(&cli(&[
			"--debounce-ms",
			"100",
			"--country",
			"France",
			"--dial-code",
			"33",
			"--flag",
			"🇫🇷",
			"--theme",
			"light",
		]));

		let resolved = raw.resolve().expect("resolve");
		assert_eq!(resolved.picker.debounce, Duration::from_millis(100));
		assert_eq!(resolved.selection, Country::new("France", "+33", "🇫🇷"));
		assert_eq!(resolved.picker.theme, dialpick::theme::LIGHT);
	}

	#[test]
	fn catalog_file_replaces_endpoint() {
		let mut raw = RawConfig::default();
		raw.apply_cli_overrides(&cli(&["--catalog-file", "countries.json"]));
		let resolved = raw.resolve().expect("resolve");
		assert_eq!(resolved.origin, CatalogOrigin::File(PathBuf::from("countries.json")));
	}

	#[test]
	fn unknown_theme_is_rejected() {
		let mut raw = RawConfig::default();
		raw.picker.theme = Some("neon".into());
		let err = raw.resolve().err().expect("error");
		assert!(err.to_string().contains("unknown theme 'neon'"));
	}

	#[test]
	fn invalid_catalog_settings_are_rejected() {
		let mut raw = RawConfig::default();
		raw.catalog.endpoint = Some("ftp://example.com".into());
		assert!(raw.resolve().is_err());

		let mut raw = RawConfig::default();
		raw.catalog.timeout_secs = Some(0);
		assert!(raw.resolve().is_err());

		let mut raw = RawConfig::default();
		raw.selection.name = Some("  ".into());
		assert!(raw.resolve().is_err());
	}

	#[test]
	fn config_file_sections_are_merged() {
		let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
		writeln!(
			file,
			"[picker]\npopular_count = 5\n\n[labels]\ntitle = \"Choose a country\"\n\n[selection]\nname = \"Japan\"\ndial_code = \"+81\""
		)
		.unwrap();

		let path = file.path().to_string_lossy().into_owned();
		let resolved = load(&cli(&["--config", &path])).expect("load");
		assert_eq!(resolved.picker.popular_count, 5);
		assert_eq!(resolved.picker.labels.title, "Choose a country");
		assert_eq!(resolved.picker.labels.placeholder, PickerLabels::default().placeholder);
		assert_eq!(resolved.selection.name, "Japan");
		assert_eq!(resolved.selection.flag, "");
	}

	#[test]
	fn dial_codes_are_normalized() {
		assert_eq!(normalize_dial_code("44"), "+44");
		assert_eq!(normalize_dial_code(" +44 "), "+44");
	}
}
