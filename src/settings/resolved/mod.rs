use std::path::PathBuf;
use std::time::Duration;

use yatra::Tab;
use yatra::logging::LoggingOptions;

mod errors;
mod keys;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use keys::SettingKey;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
	pub initial_query: String,
	pub theme: String,
	pub start_tab: Tab,
	/// Banner period when autoplay is on.
	pub hero_autoplay: Option<Duration>,
	/// Configured period, kept even when autoplay is off so it is validated.
	pub hero_interval: Duration,
	pub reset_delay: Duration,
	pub catalog: Option<PathBuf>,
	pub logging: LoggingOptions,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		print!("{}", summary::format_summary(self));
	}
}
