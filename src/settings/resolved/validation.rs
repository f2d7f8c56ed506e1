use std::time::Duration;

use yatra::ui::theme;

use super::{ConfigError, ConfigSources, ResolvedConfig, SettingKey};

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	if config.hero_interval == Duration::ZERO {
		return Err(ConfigError::invalid(
			SettingKey::HeroInterval,
			"0",
			sources.source_for(SettingKey::HeroInterval),
			"must be greater than zero",
		));
	}

	if config.reset_delay == Duration::ZERO {
		return Err(ConfigError::invalid(
			SettingKey::ResetDelay,
			"0",
			sources.source_for(SettingKey::ResetDelay),
			"must be greater than zero",
		));
	}

	if theme::by_name(&config.theme).is_none() {
		return Err(ConfigError::invalid(
			SettingKey::Theme,
			config.theme.as_str(),
			sources.source_for(SettingKey::Theme),
			format!("expected one of: {}", theme::names().join(", ")),
		));
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use yatra::Tab;
	use yatra::logging::LoggingOptions;

	use super::super::SettingSource;
	use super::*;

	fn config() -> ResolvedConfig {
		ResolvedConfig {
			initial_query: String::new(),
			theme: "saffron".into(),
			start_tab: Tab::Home,
			hero_autoplay: Some(Duration::from_secs(5)),
			hero_interval: Duration::from_secs(5),
			reset_delay: Duration::from_secs(3),
			catalog: None,
			logging: LoggingOptions::in_dir("/tmp/yatra"),
		}
	}

	#[test]
	fn defaults_are_valid() {
		assert!(validate(&config(), &ConfigSources::default()).is_ok());
	}

	#[test]
	fn validation_rejects_zero_interval() {
		let config = ResolvedConfig {
			hero_interval: Duration::ZERO,
			..config()
		};
		let mut sources = ConfigSources::default();
		sources.record(
			SettingKey::HeroInterval,
			Some(SettingSource::CliFlag("--interval-ms")),
		);

		let err = validate(&config, &sources).unwrap_err();
		assert_eq!(err.key, SettingKey::HeroInterval);
		let message = err.to_string();
		assert!(message.contains("value: 0"));
		assert!(message.contains("CLI flag"));
	}

	#[test]
	fn validation_rejects_zero_reset_delay() {
		let config = ResolvedConfig {
			reset_delay: Duration::ZERO,
			..config()
		};
		let mut sources = ConfigSources::default();
		sources.record(
			SettingKey::ResetDelay,
			Some(SettingSource::Environment("YATRA__INQUIRY__RESET_DELAY_MS")),
		);

		let err = validate(&config, &sources).unwrap_err();
		assert_eq!(err.key, SettingKey::ResetDelay);
		assert!(err.to_string().contains("environment variable"));
	}

	#[test]
	fn validation_rejects_unknown_theme() {
		let config = ResolvedConfig {
			theme: "neon".into(),
			..config()
		};

		let err = validate(&config, &ConfigSources::default()).unwrap_err();
		assert_eq!(err.key, SettingKey::Theme);
		assert!(err.to_string().contains("saffron"));
		assert!(err.to_string().contains("configuration key `ui.theme`"));
	}
}
