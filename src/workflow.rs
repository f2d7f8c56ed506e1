use anyhow::Result;
use tracing::info;
use yatra::{CatalogSet, GuideUi, SessionOutcome};

use crate::settings::ResolvedConfig;

/// Coordinates loading the catalogue and running the interactive guide.
pub(crate) struct GuideWorkflow {
	guide: GuideUi,
}

impl GuideWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
		let ResolvedConfig {
			initial_query,
			theme,
			start_tab,
			hero_autoplay,
			reset_delay,
			catalog,
			..
		} = config;

		let catalogs = match &catalog {
			Some(path) => CatalogSet::load(path)?,
			None => CatalogSet::builtin()?,
		};
		info!(
			places = catalogs.places.len(),
			foods = catalogs.foods.len(),
			transport = catalogs.transport.len(),
			guides = catalogs.guides.len(),
			"catalogue ready"
		);

		let guide = GuideUi::new(catalogs)
			.with_initial_query(initial_query)
			.with_start_tab(start_tab)
			.with_theme_name(&theme)
			.with_hero_autoplay(hero_autoplay)
			.with_reset_delay(reset_delay);
		Ok(Self { guide })
	}

	pub(crate) fn run(self) -> Result<SessionOutcome> {
		self.guide.run()
	}
}
