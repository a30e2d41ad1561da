//! File-backed `tracing` setup.
//!
//! The terminal belongs to the UI while the picker runs, so log lines go to
//! `dialpick.log` in the data directory instead of stderr.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::app_dirs;

pub const LOG_FILE_NAME: &str = "dialpick.log";

/// Filter used when `RUST_LOG` is unset.
pub fn default_directive(verbose: bool) -> &'static str {
	if verbose { "debug" } else { "info" }
}

/// Install the global subscriber, writing to `<data dir>/dialpick.log`.
///
/// Returns the path of the log file.
pub fn initialize(verbose: bool) -> Result<PathBuf> {
	let dir = app_dirs::get_data_dir()?;
	let path = dir.join(LOG_FILE_NAME);
	initialize_at(&path, verbose)?;
	Ok(path)
}

/// Install the global subscriber writing to `path`.
pub fn initialize_at(path: &Path, verbose: bool) -> Result<()> {
	let file = open_log_file(path)?;
	let filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(Mutex::new(file))
		.with_ansi(false)
		.try_init()
		.map_err(|err| anyhow::anyhow!("failed to install log subscriber: {err}"))?;

	tracing::debug!(path = %path.display(), "logging initialized");
	Ok(())
}

fn open_log_file(path: &Path) -> Result<File> {
	if let Some(parent) = path.parent() {
		fs::create_dir_all(parent)
			.with_context(|| format!("failed to create log directory {}", parent.display()))?;
	}
	OpenOptions::new()
		.create(true)
		.append(true)
		.open(path)
		.with_context(|| format!("failed to open log file {}", path.display()))
}
