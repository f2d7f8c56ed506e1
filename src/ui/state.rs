//! Composition root for the terminal front-end.
//!
//! [`App`] owns every piece of interactive state: the shared search query, the
//! two catalogue sections that read it, the home carousel, the inquiry form,
//! and the sinks that collect links and inquiries for the session summary.

use std::mem;
use std::num::NonZeroUsize;
use std::time::{Duration, Instant};

use ratatui::layout::Rect;
use throbber_widgets_tui::ThrobberState;
use tracing::debug;

use super::config::{Tab, UiConfig};
use super::content::HERO_SLIDES;
use super::theme::Theme;
use crate::catalog::{CatalogSet, Food, Guide, Place, PlaceCategory, TransportMode};
use crate::filter::CategoryFilter;
use crate::gallery::{Carousel, DEFAULT_AUTOPLAY_INTERVAL};
use crate::inquiry::{DEFAULT_RESET_DELAY, FormField, InquiryForm, LocalAcknowledgement};
use crate::links::{Link, LinkLog, LinkSink};
use crate::outcome::SessionOutcome;
use crate::search::SearchQuery;
use crate::section::CatalogSection;

/// Start-up options for [`App`].
#[derive(Debug, Clone)]
pub struct AppOptions {
	pub initial_query: String,
	pub start_tab: Tab,
	pub theme: Theme,
	/// Auto-advance period for the home banner; `None` keeps it manual.
	pub hero_autoplay: Option<Duration>,
	pub reset_delay: Duration,
	pub ui: UiConfig,
}

impl Default for AppOptions {
	fn default() -> Self {
		Self {
			initial_query: String::new(),
			start_tab: Tab::Home,
			theme: Theme::default(),
			hero_autoplay: Some(DEFAULT_AUTOPLAY_INTERVAL),
			reset_delay: DEFAULT_RESET_DELAY,
			ui: UiConfig::default(),
		}
	}
}

/// Which part of the guides tab receives key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GuidesFocus {
	#[default]
	List,
	Form,
}

/// Whether the event loop should keep running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
	Continue,
	Quit,
}

/// Clickable screen regions recorded during the last draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Target {
	Tab(Tab),
	Category(CategoryFilter<PlaceCategory>),
	Row(usize),
	HeroPrev,
	HeroNext,
	HeroSlide(usize),
	QuickLink(Tab),
	Call(usize),
	Message(usize),
	FormField(FormField),
	FormSubmit,
	ModalBody,
	ModalClose,
	ModalPrev,
	ModalNext,
	ModalImage(usize),
	ModalDirections,
}

#[derive(Debug, Default)]
pub(crate) struct HitMap {
	regions: Vec<(Rect, Target)>,
}

impl HitMap {
	pub(crate) fn clear(&mut self) {
		self.regions.clear();
	}

	pub(crate) fn push(&mut self, area: Rect, target: Target) {
		if area.width > 0 && area.height > 0 {
			self.regions.push((area, target));
		}
	}

	/// Topmost target under a cell; later regions sit above earlier ones.
	pub(crate) fn target_at(&self, column: u16, row: u16) -> Option<Target> {
		self.regions
			.iter()
			.rev()
			.find(|(area, _)| {
				column >= area.x
					&& column < area.x.saturating_add(area.width)
					&& row >= area.y
					&& row < area.y.saturating_add(area.height)
			})
			.map(|(_, target)| *target)
	}
}

/// Aggregate state shared across the terminal UI.
pub struct App {
	pub(crate) catalogs: CatalogSet,
	pub(crate) tab: Tab,
	pub(crate) query: SearchQuery,
	pub(crate) places: CatalogSection<Place>,
	pub(crate) foods: CatalogSection<Food>,
	pub(crate) transport_row: usize,
	pub(crate) guide_row: usize,
	pub(crate) guides_focus: GuidesFocus,
	pub(crate) hero: Carousel,
	pub(crate) form: InquiryForm,
	pub(crate) inquiries: LocalAcknowledgement,
	pub(crate) links: LinkLog,
	pub(crate) ui: UiConfig,
	pub theme: Theme,
	pub(crate) throbber_state: ThrobberState,
	pub(crate) hits: HitMap,
}

impl App {
	/// Build the application state; timers start counting from `now`.
	#[must_use]
	pub fn new(catalogs: CatalogSet, options: AppOptions, now: Instant) -> Self {
		let slides = NonZeroUsize::new(HERO_SLIDES.len()).unwrap_or(NonZeroUsize::MIN);
		let hero = match options.hero_autoplay {
			Some(period) => Carousel::autoplay(slides, period, now),
			None => Carousel::manual(slides),
		};
		let mut app = Self {
			places: CatalogSection::new(catalogs.places.clone()),
			foods: CatalogSection::new(catalogs.foods.clone()),
			catalogs,
			tab: options.start_tab,
			query: SearchQuery::new(options.initial_query),
			transport_row: 0,
			guide_row: 0,
			guides_focus: GuidesFocus::List,
			hero,
			form: InquiryForm::new(options.reset_delay),
			inquiries: LocalAcknowledgement::default(),
			links: LinkLog::default(),
			ui: options.ui,
			theme: options.theme,
			throbber_state: ThrobberState::default(),
			hits: HitMap::default(),
		};
		app.sync_filters();
		app
	}

	#[must_use]
	pub fn tab(&self) -> Tab {
		self.tab
	}

	pub fn set_tab(&mut self, tab: Tab) {
		if self.tab != tab {
			debug!(from = %self.tab, to = %tab, "switching tab");
			self.tab = tab;
		}
	}

	#[must_use]
	pub fn query(&self) -> &str {
		self.query.as_str()
	}

	#[must_use]
	pub fn places(&self) -> &CatalogSection<Place> {
		&self.places
	}

	#[must_use]
	pub fn foods(&self) -> &CatalogSection<Food> {
		&self.foods
	}

	#[must_use]
	pub fn hero(&self) -> &Carousel {
		&self.hero
	}

	#[must_use]
	pub fn form(&self) -> &InquiryForm {
		&self.form
	}

	#[must_use]
	pub fn guides_focus(&self) -> GuidesFocus {
		self.guides_focus
	}

	#[must_use]
	pub fn links(&self) -> &[Link] {
		self.links.opened()
	}

	#[must_use]
	pub fn inquiries(&self) -> &[crate::inquiry::Inquiry] {
		self.inquiries.received()
	}

	pub(crate) fn guides(&self) -> &[Guide] {
		&self.catalogs.guides
	}

	pub(crate) fn transport(&self) -> &[TransportMode] {
		&self.catalogs.transport
	}

	/// Re-run both catalogue filters against the shared query.
	pub(crate) fn sync_filters(&mut self) {
		let query = self.query.as_str();
		self.places.refresh(query);
		self.foods.refresh(query);
	}

	/// Whether the active tab shows a detail overlay.
	#[must_use]
	pub fn is_detail_open(&self) -> bool {
		match self.tab {
			Tab::Places => self.places.is_detail_open(),
			Tab::Food => self.foods.is_detail_open(),
			_ => false,
		}
	}

	/// Drive timers. Returns whether anything visible changed.
	pub fn tick(&mut self, now: Instant) -> bool {
		let slid = self.hero.tick(now);
		let reset = self.form.tick(now);
		if reset {
			self.guides_focus = GuidesFocus::List;
		}
		slid || reset
	}

	pub(crate) fn open_link(&mut self, link: Link) {
		self.links.open(link);
	}

	/// Stop every timer owned by the UI.
	pub fn teardown(&mut self) {
		self.hero.stop();
		self.form.teardown();
	}

	/// Tear down and collect what the session produced.
	pub fn finish(&mut self) -> SessionOutcome {
		self.teardown();
		SessionOutcome {
			query: self.query.as_str().to_string(),
			links: mem::take(&mut self.links).into_opened(),
			inquiries: mem::take(&mut self.inquiries).into_received(),
		}
	}
}

impl Drop for App {
	fn drop(&mut self) {
		self.teardown();
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn app(options: AppOptions) -> (App, Instant) {
		let now = Instant::now();
		(App::new(CatalogSet::builtin().unwrap(), options, now), now)
	}

	#[test]
	fn initial_query_filters_both_sections() {
		let (app, _) = app(AppOptions {
			initial_query: "paan".into(),
			..AppOptions::default()
		});
		assert!(app.places().is_empty());
		assert_eq!(app.foods().visible_len(), 1);
	}

	#[test]
	fn hero_advances_only_with_autoplay() {
		let (mut playing, start) = app(AppOptions::default());
		assert!(playing.tick(start + DEFAULT_AUTOPLAY_INTERVAL));
		assert_eq!(playing.hero().index(), 1);

		let (mut still, start) = app(AppOptions {
			hero_autoplay: None,
			..AppOptions::default()
		});
		assert!(!still.tick(start + DEFAULT_AUTOPLAY_INTERVAL));
		assert_eq!(still.hero().index(), 0);
	}

	#[test]
	fn finish_stops_timers_and_drains_sinks() {
		let (mut app, start) = app(AppOptions::default());
		let guide = app.guides()[0].clone();
		app.open_link(Link::dial(&guide));

		let outcome = app.finish();
		assert_eq!(outcome.links.len(), 1);
		assert!(app.links().is_empty());
		assert!(!app.hero().is_playing());
		assert!(!app.tick(start + 10 * DEFAULT_AUTOPLAY_INTERVAL));
	}

	#[test]
	fn hit_map_prefers_topmost_region() {
		let mut hits = HitMap::default();
		hits.push(Rect::new(0, 0, 10, 10), Target::ModalBody);
		hits.push(Rect::new(2, 2, 3, 1), Target::ModalClose);

		assert_eq!(hits.target_at(3, 2), Some(Target::ModalClose));
		assert_eq!(hits.target_at(0, 9), Some(Target::ModalBody));
		assert_eq!(hits.target_at(10, 0), None);
	}
}
