use std::fmt::Write;
use std::path::PathBuf;

use clap::{
	ArgAction, ColorChoice, Command, CommandFactory, FromArgMatches, Parser, ValueEnum,
	builder::{
		Styles,
		styling::{AnsiColor, Effects},
	},
};
use dialpick::app_dirs;

/// Version banner including the config and data directories.
fn long_version() -> &'static str {
	let config_dir = match app_dirs::get_config_dir() {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};
	let data_dir = match app_dirs::get_data_dir() {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};

	let mut details = format!("dialpick {}", env!("CARGO_PKG_VERSION"));
	let _ = writeln!(details);
	let _ = writeln!(details, "config directory: {config_dir}");
	let _ = writeln!(details, "data directory: {data_dir}");

	Box::leak(details.into_boxed_str())
}

fn cli_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.literal(AnsiColor::Cyan.on_default())
		.placeholder(AnsiColor::Yellow.on_default())
}

/// Parse command line arguments into [`CliArgs`].
pub(crate) fn parse_cli() -> CliArgs {
	let mut matches = cli_command().get_matches();
	CliArgs::from_arg_matches_mut(&mut matches).unwrap_or_else(|err| err.exit())
}

fn cli_command() -> Command {
	CliArgs::command()
}

#[derive(Parser, Debug)]
#[command(
	name = "dialpick",
	version,
	long_version = long_version(),
	about = "Pick an international dialing code from a searchable country list",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
/// Command-line arguments accepted by the `dialpick` binary.
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "DIALPICK_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'e',
		long,
		value_name = "URL",
		help = "Country catalog endpoint (default: restcountries.com)"
	)]
	pub(crate) endpoint: Option<String>,
	#[arg(
		short = 'f',
		long = "catalog-file",
		value_name = "PATH",
		conflicts_with = "endpoint",
		help = "Load the catalog from a JSON file instead of the network (default: none)"
	)]
	pub(crate) catalog_file: Option<PathBuf>,
	#[arg(
		long = "timeout",
		value_name = "SECS",
		help = "Catalog request timeout in seconds (default: 15)"
	)]
	pub(crate) timeout_secs: Option<u64>,
	#[arg(
		long,
		value_name = "NAME",
		help = "Name of the initially selected country (default: United States)"
	)]
	pub(crate) country: Option<String>,
	#[arg(
		long = "dial-code",
		value_name = "CODE",
		help = "Dial code of the initially selected country (default: +1)"
	)]
	pub(crate) dial_code: Option<String>,
	#[arg(
		long,
		value_name = "EMOJI",
		help = "Flag of the initially selected country (default: none)"
	)]
	pub(crate) flag: Option<String>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: slate)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		long = "debounce-ms",
		value_name = "MS",
		help = "Quiet period before the list is re-filtered (default: 300)"
	)]
	pub(crate) debounce_ms: Option<u64>,
	#[arg(
		long = "popular",
		value_name = "NUM",
		help = "Number of entries in the popular section (default: 3)"
	)]
	pub(crate) popular_count: Option<usize>,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List supported themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
	#[arg(
		short = 'v',
		long,
		help = "Log at debug level unless RUST_LOG is set (default: disabled)"
	)]
	pub(crate) verbose: bool,
	#[arg(short = 'o', long = "output", value_enum, default_value_t = OutputFormat::Plain, help = "Choose how to print the result")]
	pub(crate) output: OutputFormat,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
/// Output formats supported by the CLI utility.
pub(crate) enum OutputFormat {
	Plain,
	Json,
}

#[cfg(test)]
mod tests {
	use super::*;

	fn parse(args: &[&str]) -> Result<CliArgs, clap::Error> {
		let mut matches = cli_command().try_get_matches_from(args)?;
		CliArgs::from_arg_matches_mut(&mut matches)
	}

	#[test]
	fn command_supports_custom_styles() {
		let command = cli_command();
		assert!(command.get_about().is_some());
		command.debug_assert();
	}

	#[test]
	fn defaults_parse() {
		let parsed = parse(&["dialpick"]).expect("parses");
		assert_eq!(parsed.output, OutputFormat::Plain);
		assert!(parsed.endpoint.is_none());
		assert!(!parsed.verbose);
	}

	#[test]
	fn selection_and_tuning_flags_parse() {
		let parsed = parse(&[
			"dialpick",
			"--country",
			"France",
			"--dial-code",
			"+33",
			"--debounce-ms",
			"150",
			"--popular",
			"5",
			"-o",
			"json",
		])
		.expect("parses");
		assert_eq!(parsed.country.as_deref(), Some("France"));
		assert_eq!(parsed.dial_code.as_deref(), Some("+33"));
		assert_eq!(parsed.debounce_ms, Some(150));
		assert_eq!(parsed.popular_count, Some(5));
		assert_eq!(parsed.output, OutputFormat::Json);
	}

	#[test]
	fn endpoint_and_catalog_file_conflict() {
		let err = parse(&["dialpick", "-e", "http://x", "-f", "countries.json"]).unwrap_err();
		assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
	}
}
