use std::time::{Duration, Instant};

use anyhow::Result;

use super::App;
use super::config::{Tab, UiConfig};
use super::state::AppOptions;
use super::theme::{self, Theme};
use crate::catalog::CatalogSet;
use crate::outcome::SessionOutcome;

/// A small builder for configuring the interactive guide before running it.
pub struct GuideUi {
	catalogs: CatalogSet,
	options: AppOptions,
}

impl GuideUi {
	/// Create a guide over the provided catalogues with default options.
	pub fn new(catalogs: CatalogSet) -> Self {
		Self {
			catalogs,
			options: AppOptions::default(),
		}
	}

	/// Create a guide over the bundled Varanasi catalogue.
	pub fn builtin() -> Result<Self> {
		Ok(Self::new(CatalogSet::builtin()?))
	}

	pub fn with_initial_query(mut self, query: impl Into<String>) -> Self {
		self.options.initial_query = query.into();
		self
	}

	pub fn with_start_tab(mut self, tab: Tab) -> Self {
		self.options.start_tab = tab;
		self
	}

	/// Select a bundled theme. Unknown names keep the current theme.
	pub fn with_theme_name(mut self, name: &str) -> Self {
		if let Some(theme) = theme::by_name(name) {
			self.options.theme = theme;
		}
		self
	}

	pub fn with_theme(mut self, theme: Theme) -> Self {
		self.options.theme = theme;
		self
	}

	pub fn with_ui_config(mut self, config: UiConfig) -> Self {
		self.options.ui = config;
		self
	}

	/// Auto-advance period for the home banner; `None` disables autoplay.
	pub fn with_hero_autoplay(mut self, period: Option<Duration>) -> Self {
		self.options.hero_autoplay = period;
		self
	}

	/// Delay before a submitted inquiry form clears itself.
	pub fn with_reset_delay(mut self, delay: Duration) -> Self {
		self.options.reset_delay = delay;
		self
	}

	/// Build the application state without touching the terminal.
	pub fn build(self, now: Instant) -> App {
		App::new(self.catalogs, self.options, now)
	}

	/// Run the interactive guide with the configured options.
	pub fn run(self) -> Result<SessionOutcome> {
		let mut app = self.build(Instant::now());
		app.run()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::ui::theme::GANGA;

	#[test]
	fn options_flow_into_the_app() {
		let app = GuideUi::builtin()
			.unwrap()
			.with_initial_query("ghat")
			.with_start_tab(Tab::Places)
			.with_theme_name("river")
			.with_hero_autoplay(None)
			.build(Instant::now());

		assert_eq!(app.tab(), Tab::Places);
		assert_eq!(app.query(), "ghat");
		assert_eq!(app.theme, GANGA);
		assert!(!app.hero().is_playing());
		assert_eq!(app.places().visible_len(), 1);
	}

	#[test]
	fn unknown_theme_name_keeps_default() {
		let app = GuideUi::builtin()
			.unwrap()
			.with_theme_name("neon")
			.build(Instant::now());
		assert_eq!(app.theme, Theme::default());
	}
}
