//! Colour themes for the terminal UI.

use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	pub header: Style,
	pub row_highlight: Style,
	pub prompt: Style,
	pub empty: Style,
	pub highlight: Style,
	pub accent: Style,
	pub success: Style,
}

impl Theme {
	#[must_use]
	pub fn header_style(&self) -> Style {
		self.header
	}

	#[must_use]
	pub fn row_highlight_style(&self) -> Style {
		self.row_highlight
	}

	#[must_use]
	pub fn prompt_style(&self) -> Style {
		self.prompt
	}

	#[must_use]
	pub fn empty_style(&self) -> Style {
		self.empty
	}

	#[must_use]
	pub fn highlight_style(&self) -> Style {
		self.highlight
	}

	#[must_use]
	pub fn accent_style(&self) -> Style {
		self.accent
	}

	#[must_use]
	pub fn success_style(&self) -> Style {
		self.success
	}

	#[must_use]
	pub fn header_fg(&self) -> Color {
		self.header.fg.unwrap_or(Color::Reset)
	}

	#[must_use]
	pub fn header_bg(&self) -> Color {
		self.header.bg.unwrap_or(Color::Reset)
	}

	#[must_use]
	pub fn row_highlight_bg(&self) -> Color {
		self.row_highlight.bg.unwrap_or(Color::Reset)
	}

	#[must_use]
	pub fn tab_inactive_style(&self) -> Style {
		Style::new()
			.fg(self.header_fg())
			.bg(self.row_highlight_bg())
	}
}

impl Default for Theme {
	fn default() -> Self {
		SAFFRON
	}
}

/// A named theme bundled with the application.
#[derive(Debug, Clone, Copy)]
pub struct ThemeDefinition {
	pub name: &'static str,
	pub theme: Theme,
	pub aliases: &'static [&'static str],
}

pub const SAFFRON: Theme = Theme {
	header: Style::new()
		.fg(Color::Rgb(255, 247, 237))
		.bg(Color::Rgb(194, 65, 12)),
	row_highlight: Style::new()
		.bg(Color::Rgb(67, 20, 7))
		.fg(Color::Rgb(253, 186, 116)),
	prompt: Style::new().fg(Color::Rgb(251, 146, 60)),
	empty: Style::new().fg(Color::DarkGray),
	highlight: Style::new()
		.fg(Color::Rgb(250, 204, 21))
		.add_modifier(Modifier::BOLD),
	accent: Style::new().fg(Color::Rgb(234, 179, 8)),
	success: Style::new()
		.fg(Color::Rgb(34, 197, 94))
		.add_modifier(Modifier::BOLD),
};

pub const GANGA: Theme = Theme {
	header: Style::new()
		.fg(Color::Rgb(239, 246, 255))
		.bg(Color::Rgb(30, 64, 175)),
	row_highlight: Style::new()
		.bg(Color::Rgb(23, 37, 84))
		.fg(Color::Rgb(147, 197, 253)),
	prompt: Style::new().fg(Color::LightCyan),
	empty: Style::new().fg(Color::DarkGray),
	highlight: Style::new()
		.fg(Color::Rgb(125, 211, 252))
		.add_modifier(Modifier::BOLD),
	accent: Style::new().fg(Color::Rgb(56, 189, 248)),
	success: Style::new()
		.fg(Color::Rgb(74, 222, 128))
		.add_modifier(Modifier::BOLD),
};

pub const SLATE: Theme = Theme {
	header: Style::new()
		.fg(Color::Rgb(226, 232, 240))
		.bg(Color::Rgb(15, 23, 42)),
	row_highlight: Style::new()
		.bg(Color::Rgb(30, 41, 59))
		.fg(Color::Rgb(250, 204, 21)),
	prompt: Style::new().fg(Color::LightCyan),
	empty: Style::new().fg(Color::DarkGray),
	highlight: Style::new()
		.fg(Color::Yellow)
		.add_modifier(Modifier::BOLD),
	accent: Style::new().fg(Color::LightMagenta),
	success: Style::new()
		.fg(Color::LightGreen)
		.add_modifier(Modifier::BOLD),
};

pub const LIGHT: Theme = Theme {
	header: Style::new()
		.fg(Color::Rgb(15, 23, 42))
		.bg(Color::Rgb(226, 232, 240)),
	row_highlight: Style::new()
		.bg(Color::Rgb(200, 200, 200))
		.fg(Color::Rgb(120, 120, 0)),
	prompt: Style::new().fg(Color::Rgb(0, 102, 153)),
	empty: Style::new().fg(Color::Rgb(100, 100, 100)),
	highlight: Style::new()
		.fg(Color::Rgb(120, 120, 0))
		.add_modifier(Modifier::BOLD),
	accent: Style::new().fg(Color::Rgb(154, 52, 18)),
	success: Style::new()
		.fg(Color::Rgb(21, 128, 61))
		.add_modifier(Modifier::BOLD),
};

const BUILTINS: [ThemeDefinition; 4] = [
	ThemeDefinition {
		name: "saffron",
		theme: SAFFRON,
		aliases: &["default"],
	},
	ThemeDefinition {
		name: "ganga",
		theme: GANGA,
		aliases: &["river", "blue"],
	},
	ThemeDefinition {
		name: "slate",
		theme: SLATE,
		aliases: &["dark"],
	},
	ThemeDefinition {
		name: "light",
		theme: LIGHT,
		aliases: &[],
	},
];

pub const DEFAULT_THEME: &str = "saffron";

fn normalize_name(name: &str) -> String {
	name.trim().to_ascii_lowercase()
}

/// Canonical names of the bundled themes.
#[must_use]
pub fn names() -> Vec<&'static str> {
	BUILTINS.iter().map(|definition| definition.name).collect()
}

/// Look a theme up by name or alias, ignoring case.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	let wanted = normalize_name(name);
	BUILTINS
		.iter()
		.find(|definition| {
			definition.name == wanted || definition.aliases.iter().any(|alias| *alias == wanted)
		})
		.map(|definition| definition.theme)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn names_are_listed_in_registration_order() {
		assert_eq!(names(), ["saffron", "ganga", "slate", "light"]);
	}

	#[test]
	fn lookup_accepts_aliases_and_case() {
		assert_eq!(by_name("GANGA"), Some(GANGA));
		assert_eq!(by_name("dark"), Some(SLATE));
		assert_eq!(by_name(" default "), Some(SAFFRON));
		assert_eq!(by_name("neon"), None);
	}

	#[test]
	fn default_theme_resolves() {
		assert_eq!(by_name(DEFAULT_THEME), Some(Theme::default()));
	}
}
