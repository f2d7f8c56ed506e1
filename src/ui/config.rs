use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Top-level sections of the guide, in header order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
	#[default]
	Home,
	Places,
	Food,
	Transport,
	Guides,
}

impl Tab {
	pub const ALL: [Tab; 5] = [
		Self::Home,
		Self::Places,
		Self::Food,
		Self::Transport,
		Self::Guides,
	];

	#[must_use]
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Home => "home",
			Self::Places => "places",
			Self::Food => "food",
			Self::Transport => "transport",
			Self::Guides => "guides",
		}
	}

	#[must_use]
	pub fn position(self) -> usize {
		Self::ALL
			.iter()
			.position(|tab| *tab == self)
			.unwrap_or_default()
	}

	#[must_use]
	pub fn next(self) -> Self {
		Self::ALL[(self.position() + 1) % Self::ALL.len()]
	}

	#[must_use]
	pub fn prev(self) -> Self {
		let len = Self::ALL.len();
		Self::ALL[(self.position() + len - 1) % len]
	}

	/// Whether the shared search box drives this tab.
	#[must_use]
	pub fn is_searchable(self) -> bool {
		matches!(self, Self::Places | Self::Food)
	}
}

impl fmt::Display for Tab {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Tab {
	type Err = String;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		let normalized = value.trim().to_ascii_lowercase();
		Self::ALL
			.into_iter()
			.find(|tab| tab.as_str() == normalized)
			.ok_or_else(|| {
				format!(
					"unknown tab '{value}' (expected one of: {})",
					Self::ALL.map(Tab::as_str).join(", ")
				)
			})
	}
}

/// Labels and hints for one section.
#[derive(Debug, Clone)]
pub struct PaneUiConfig {
	pub tab_label: String,
	pub title: String,
	pub hint: String,
}

impl PaneUiConfig {
	#[must_use]
	pub fn new(
		tab_label: impl Into<String>,
		title: impl Into<String>,
		hint: impl Into<String>,
	) -> Self {
		Self {
			tab_label: tab_label.into(),
			title: title.into(),
			hint: hint.into(),
		}
	}
}

/// Text used when rendering headers, titles, and empty states.
#[derive(Debug, Clone)]
pub struct UiConfig {
	pub search_label: String,
	pub places_empty: String,
	pub food_empty: String,
	panes: [PaneUiConfig; 5],
}

impl Default for UiConfig {
	fn default() -> Self {
		Self {
			search_label: "Search".to_string(),
			places_empty: "No places found. Try a different search or category.".to_string(),
			food_empty: "No food items found matching your search.".to_string(),
			panes: [
				PaneUiConfig::new(
					"Home",
					"Welcome to Varanasi",
					"←/→ slides · 1-3 jump · p/f/t/g open a section",
				),
				PaneUiConfig::new(
					"Places",
					"Must-Visit Places",
					"type to search · ↑/↓ select · Enter details · Ctrl+←/→ category · Ctrl+G directions",
				),
				PaneUiConfig::new(
					"Food",
					"Famous Food of Varanasi",
					"type to search · ↑/↓ select · Enter details",
				),
				PaneUiConfig::new(
					"Transport",
					"Getting Around Varanasi",
					"↑/↓ select a mode of transport",
				),
				PaneUiConfig::new(
					"Guides",
					"Expert Tour Guides",
					"↑/↓ select · c call · w WhatsApp · i inquiry form",
				),
			],
		}
	}
}

impl UiConfig {
	#[must_use]
	pub fn pane(&self, tab: Tab) -> &PaneUiConfig {
		&self.panes[tab.position()]
	}

	pub fn pane_mut(&mut self, tab: Tab) -> &mut PaneUiConfig {
		&mut self.panes[tab.position()]
	}

	/// Header labels in tab order.
	pub fn tab_labels(&self) -> impl Iterator<Item = (Tab, &str)> {
		Tab::ALL
			.into_iter()
			.map(|tab| (tab, self.pane(tab).tab_label.as_str()))
	}
}
