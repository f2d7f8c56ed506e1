use std::env;
use std::time::Duration;

use anyhow::{Context, Error, Result};
use serde::Deserialize;
use yatra::Tab;
use yatra::app_dirs;
use yatra::gallery::DEFAULT_AUTOPLAY_INTERVAL;
use yatra::inquiry::DEFAULT_RESET_DELAY;
use yatra::logging::{LOG_FILE_NAME, LoggingOptions};
use yatra::ui::theme::DEFAULT_THEME;

use super::resolved::{ConfigError, ConfigSources, ResolvedConfig, SettingKey, SettingSource};
use crate::cli::CliArgs;

mod sections;

use sections::{CatalogSection, HeroSection, InquirySection, LoggingSection, UiSection};

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	ui: UiSection,
	hero: HeroSection,
	inquiry: InquirySection,
	catalog: CatalogSection,
	logging: LoggingSection,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.ui.apply_cli_overrides(cli);
		self.hero.apply_cli_overrides(cli);
		self.inquiry.apply_cli_overrides(cli);
		self.catalog.apply_cli_overrides(cli);
		self.logging.apply_cli_overrides(cli);
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let mut sources = ConfigSources::default();
		for (key, from_cli, present) in [
			(SettingKey::Theme, cli.theme.is_some(), self.ui.theme.is_some()),
			(SettingKey::StartTab, cli.start_tab.is_some(), self.ui.start_tab.is_some()),
			(
				SettingKey::HeroInterval,
				cli.interval_ms.is_some(),
				self.hero.interval_ms.is_some(),
			),
			(
				SettingKey::ResetDelay,
				cli.reset_delay_ms.is_some(),
				self.inquiry.reset_delay_ms.is_some(),
			),
		] {
			let from_env = env::var_os(key.env_var()).is_some();
			sources.record(key, SettingSource::detect(key, from_cli, from_env, present));
		}

		let start_tab = match self.ui.start_tab {
			Some(name) => name.parse::<Tab>().map_err(|reason| {
				ConfigError::invalid(
					SettingKey::StartTab,
					name.as_str(),
					sources.source_for(SettingKey::StartTab),
					reason,
				)
			})?,
			None => Tab::default(),
		};
		let hero_interval = self
			.hero
			.interval_ms
			.map_or(DEFAULT_AUTOPLAY_INTERVAL, Duration::from_millis);
		let reset_delay = self
			.inquiry
			.reset_delay_ms
			.map_or(DEFAULT_RESET_DELAY, Duration::from_millis);

		let config = ResolvedConfig {
			initial_query: self.ui.initial_query.unwrap_or_default(),
			theme: self.ui.theme.unwrap_or_else(|| DEFAULT_THEME.to_string()),
			start_tab,
			hero_autoplay: self.hero.autoplay.unwrap_or(true).then_some(hero_interval),
			hero_interval,
			reset_delay,
			catalog: self.catalog.path,
			logging: resolve_logging(self.logging)?,
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

fn resolve_logging(section: LoggingSection) -> Result<LoggingOptions> {
	let enabled = section.enabled.unwrap_or(true);
	let level = section.level.unwrap_or_else(|| "info".to_string());
	let file = match section.file {
		Some(file) => file,
		None if enabled => app_dirs::get_data_dir()
			.context("no data directory for the log file; set logging.file")?
			.join(LOG_FILE_NAME),
		None => LOG_FILE_NAME.into(),
	};
	Ok(LoggingOptions {
		enabled,
		level,
		file,
	})
}
