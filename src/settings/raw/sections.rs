use std::path::PathBuf;

use serde::Deserialize;

use crate::cli::CliArgs;

/// `[ui]` values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
	pub(super) theme: Option<String>,
	pub(super) initial_query: Option<String>,
	pub(super) start_tab: Option<String>,
}

impl UiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(theme) = cli.theme.clone() {
			self.theme = Some(theme);
		}
		if let Some(query) = cli.initial_query.clone() {
			self.initial_query = Some(query);
		}
		if let Some(tab) = cli.start_tab {
			self.start_tab = Some(tab.as_str().to_string());
		}
	}
}

/// `[hero]` banner timing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct HeroSection {
	pub(super) autoplay: Option<bool>,
	pub(super) interval_ms: Option<u64>,
}

impl HeroSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if cli.no_autoplay {
			self.autoplay = Some(false);
		}
		if let Some(value) = cli.interval_ms {
			self.interval_ms = Some(value);
		}
	}
}

/// `[inquiry]` form timing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct InquirySection {
	pub(super) reset_delay_ms: Option<u64>,
}

impl InquirySection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(value) = cli.reset_delay_ms {
			self.reset_delay_ms = Some(value);
		}
	}
}

/// `[catalog]` override file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct CatalogSection {
	pub(super) path: Option<PathBuf>,
}

impl CatalogSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(path) = cli.catalog.clone() {
			self.path = Some(path);
		}
	}
}

/// `[logging]` destination and verbosity.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct LoggingSection {
	pub(super) enabled: Option<bool>,
	pub(super) level: Option<String>,
	pub(super) file: Option<PathBuf>,
}

impl LoggingSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if cli.verbose {
			self.level = Some("debug".to_string());
		}
	}
}
