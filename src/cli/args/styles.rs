use std::fmt::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use yatra::app_dirs;
use yatra::logging::LOG_FILE_NAME;

/// Version banner listing where settings are read from and logs are written.
pub(super) fn long_version() -> &'static str {
	let mut details = env!("CARGO_PKG_VERSION").to_string();
	let _ = writeln!(details);
	let _ = writeln!(
		details,
		"config directory: {} (override with {})",
		describe(app_dirs::get_config_dir()),
		app_dirs::CONFIG_DIR_ENV
	);
	let _ = writeln!(
		details,
		"log file: {} (override with {})",
		describe(app_dirs::get_data_dir().map(|dir| dir.join(LOG_FILE_NAME))),
		app_dirs::DATA_DIR_ENV
	);

	Box::leak(details.into_boxed_str())
}

fn describe(path: Result<PathBuf>) -> String {
	match path {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	}
}

/// Saffron-and-river palette for `--help`.
pub(super) fn cli_styles() -> Styles {
	let saffron = AnsiColor::Yellow.on_default();
	Styles::styled()
		.header(saffron.effects(Effects::BOLD | Effects::UNDERLINE))
		.usage(saffron.effects(Effects::BOLD))
		.literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
		.placeholder(AnsiColor::Blue.on_default())
		.valid(AnsiColor::Green.on_default())
		.invalid(AnsiColor::Red.on_default().effects(Effects::BOLD))
}
