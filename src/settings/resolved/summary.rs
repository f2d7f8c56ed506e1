use std::fmt::Write;
use std::time::Duration;

use super::ResolvedConfig;

pub(super) fn format_summary(config: &ResolvedConfig) -> String {
	let mut text = String::new();
	let _ = writeln!(text, "Effective configuration:");
	let _ = writeln!(text, "  Theme: {}", config.theme);
	let _ = writeln!(text, "  Start tab: {}", config.start_tab);
	if !config.initial_query.is_empty() {
		let _ = writeln!(text, "  Initial query: {}", config.initial_query);
	}
	match config.hero_autoplay {
		Some(period) => {
			let _ = writeln!(text, "  Banner autoplay: every {}", millis(period));
		}
		None => {
			let _ = writeln!(text, "  Banner autoplay: {}", bool_to_word(false));
		}
	}
	let _ = writeln!(text, "  Inquiry reset delay: {}", millis(config.reset_delay));
	match &config.catalog {
		Some(path) => {
			let _ = writeln!(text, "  Catalogue: {}", path.display());
		}
		None => {
			let _ = writeln!(text, "  Catalogue: (bundled)");
		}
	}
	if config.logging.enabled {
		let _ = writeln!(
			text,
			"  Log file: {} ({})",
			config.logging.file.display(),
			config.logging.level
		);
	} else {
		let _ = writeln!(text, "  Logging: {}", bool_to_word(false));
	}
	text
}

fn millis(duration: Duration) -> String {
	format!("{} ms", duration.as_millis())
}

fn bool_to_word(value: bool) -> &'static str {
	if value { "yes" } else { "no" }
}

#[cfg(test)]
mod tests {
	use yatra::Tab;
	use yatra::logging::LoggingOptions;

	use super::*;

	#[test]
	fn bool_to_word_matches_expectations() {
		assert_eq!(bool_to_word(true), "yes");
		assert_eq!(bool_to_word(false), "no");
	}

	#[test]
	fn summary_lists_timing_and_destinations() {
		let mut logging = LoggingOptions::in_dir("/tmp/yatra");
		logging.level = "debug".into();
		let config = ResolvedConfig {
			initial_query: "ghat".into(),
			theme: "ganga".into(),
			start_tab: Tab::Places,
			hero_autoplay: None,
			hero_interval: Duration::from_secs(5),
			reset_delay: Duration::from_millis(1500),
			catalog: None,
			logging,
		};

		let text = format_summary(&config);
		assert!(text.contains("  Start tab: places\n"));
		assert!(text.contains("  Initial query: ghat\n"));
		assert!(text.contains("  Banner autoplay: no\n"));
		assert!(text.contains("  Inquiry reset delay: 1500 ms\n"));
		assert!(text.contains("  Catalogue: (bundled)\n"));
		assert!(text.contains("  Log file: /tmp/yatra/yatra.log (debug)\n"));
	}
}
