use std::fmt;

/// Settings whose values are validated and traced back to where they were set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum SettingKey {
	Theme,
	StartTab,
	HeroInterval,
	ResetDelay,
}

impl SettingKey {
	/// Dotted key inside a configuration file.
	pub(crate) fn config_key(self) -> &'static str {
		match self {
			Self::Theme => "ui.theme",
			Self::StartTab => "ui.start_tab",
			Self::HeroInterval => "hero.interval_ms",
			Self::ResetDelay => "inquiry.reset_delay_ms",
		}
	}

	pub(crate) fn env_var(self) -> &'static str {
		match self {
			Self::Theme => "YATRA__UI__THEME",
			Self::StartTab => "YATRA__UI__START_TAB",
			Self::HeroInterval => "YATRA__HERO__INTERVAL_MS",
			Self::ResetDelay => "YATRA__INQUIRY__RESET_DELAY_MS",
		}
	}

	pub(crate) fn cli_flag(self) -> &'static str {
		match self {
			Self::Theme => "--theme",
			Self::StartTab => "--start-tab",
			Self::HeroInterval => "--interval-ms",
			Self::ResetDelay => "--reset-delay-ms",
		}
	}
}

impl fmt::Display for SettingKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.config_key())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn env_var_mirrors_config_key() {
		for key in [
			SettingKey::Theme,
			SettingKey::StartTab,
			SettingKey::HeroInterval,
			SettingKey::ResetDelay,
		] {
			let expected = format!("YATRA__{}", key.config_key().replace('.', "__")).to_uppercase();
			assert_eq!(key.env_var(), expected);
		}
	}
}
