//! File-backed `tracing` setup.
//!
//! The terminal belongs to the UI while the app runs, so log records go to a
//! file instead of stderr.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Default file name inside the data directory.
pub const LOG_FILE_NAME: &str = "yatra.log";

/// How the subscriber should be installed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingOptions {
	pub enabled: bool,
	/// Directive used when `RUST_LOG` is unset, e.g. `info` or `yatra=debug`.
	pub level: String,
	pub file: PathBuf,
}

impl LoggingOptions {
	/// Options writing `info` and above to `<data_dir>/yatra.log`.
	#[must_use]
	pub fn in_dir(data_dir: impl Into<PathBuf>) -> Self {
		Self {
			enabled: true,
			level: "info".to_string(),
			file: data_dir.into().join(LOG_FILE_NAME),
		}
	}
}

/// Install the global subscriber. Does nothing when logging is disabled.
///
/// Returns whether a subscriber was installed; a second call in the same
/// process keeps the first subscriber.
pub fn initialize(options: &LoggingOptions) -> Result<bool> {
	if !options.enabled {
		return Ok(false);
	}

	if let Some(parent) = options.file.parent()
		&& !parent.as_os_str().is_empty()
	{
		fs::create_dir_all(parent)
			.with_context(|| format!("failed to create log directory {}", parent.display()))?;
	}
	let file = OpenOptions::new()
		.create(true)
		.append(true)
		.open(&options.file)
		.with_context(|| format!("failed to open log file {}", options.file.display()))?;

	let filter = EnvFilter::try_from_default_env()
		.or_else(|_| EnvFilter::try_new(&options.level))
		.with_context(|| format!("invalid log level '{}'", options.level))?;

	let installed = tracing_subscriber::registry()
		.with(filter)
		.with(
			tracing_subscriber::fmt::layer()
				.with_ansi(false)
				.with_target(false)
				.with_writer(Arc::new(file)),
		)
		.try_init()
		.is_ok();
	Ok(installed)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn disabled_logging_touches_nothing() {
		let dir = tempfile::tempdir().unwrap();
		let mut options = LoggingOptions::in_dir(dir.path().join("logs"));
		options.enabled = false;

		assert!(!initialize(&options).unwrap());
		assert!(!dir.path().join("logs").exists());
	}

	#[test]
	fn default_file_lives_in_data_dir() {
		let options = LoggingOptions::in_dir("/tmp/yatra-data");
		assert_eq!(options.file, PathBuf::from("/tmp/yatra-data/yatra.log"));
		assert_eq!(options.level, "info");
	}

	#[test]
	fn enabling_creates_the_log_file() {
		let dir = tempfile::tempdir().unwrap();
		let options = LoggingOptions::in_dir(dir.path().join("nested"));

		initialize(&options).unwrap();
		assert!(options.file.exists());
	}
}
