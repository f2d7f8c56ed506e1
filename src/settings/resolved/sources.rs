use std::collections::HashMap;
use std::fmt;

use super::SettingKey;

/// Where a validated setting came from, for error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(&'static str),
	ConfigKey(&'static str),
}

impl SettingSource {
	/// Origin of `key` given which layers supplied it. `None` means the
	/// default applies.
	pub(crate) fn detect(
		key: SettingKey,
		from_cli: bool,
		from_env: bool,
		present: bool,
	) -> Option<Self> {
		if !present {
			None
		} else if from_cli {
			Some(Self::CliFlag(key.cli_flag()))
		} else if from_env {
			Some(Self::Environment(key.env_var()))
		} else {
			Some(Self::ConfigKey(key.config_key()))
		}
	}
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
		}
	}
}

/// Recorded origins of the settings that were explicitly set.
#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	recorded: HashMap<SettingKey, SettingSource>,
}

impl ConfigSources {
	pub(crate) fn record(&mut self, key: SettingKey, source: Option<SettingSource>) {
		if let Some(source) = source {
			self.recorded.insert(key, source);
		}
	}

	/// Falls back to the configuration key when nothing was recorded.
	pub(crate) fn source_for(&self, key: SettingKey) -> SettingSource {
		self.recorded
			.get(&key)
			.cloned()
			.unwrap_or(SettingSource::ConfigKey(key.config_key()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn cli_wins_over_environment() {
		assert_eq!(
			SettingSource::detect(SettingKey::HeroInterval, true, true, true),
			Some(SettingSource::CliFlag("--interval-ms"))
		);
		assert_eq!(
			SettingSource::detect(SettingKey::ResetDelay, false, true, true),
			Some(SettingSource::Environment("YATRA__INQUIRY__RESET_DELAY_MS"))
		);
		assert_eq!(SettingSource::detect(SettingKey::Theme, true, false, false), None);
	}

	#[test]
	fn unrecorded_keys_report_their_config_key() {
		let mut sources = ConfigSources::default();
		sources.record(SettingKey::Theme, Some(SettingSource::CliFlag("--theme")));
		sources.record(SettingKey::StartTab, None);

		assert_eq!(sources.source_for(SettingKey::Theme), SettingSource::CliFlag("--theme"));
		assert_eq!(
			sources.source_for(SettingKey::StartTab),
			SettingSource::ConfigKey("ui.start_tab")
		);
	}
}
