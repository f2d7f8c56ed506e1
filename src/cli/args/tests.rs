use clap::{CommandFactory, Parser};

use super::{CliArgs, OutputFormat, TabArg};

#[test]
fn command_has_about_and_version() {
	let command = CliArgs::command();
	assert!(command.get_about().is_some());
	assert!(command.get_version().is_some());
}

#[test]
fn defaults_print_plain_output() {
	let parsed = CliArgs::parse_from(["yatra"]);
	assert_eq!(parsed.output, OutputFormat::Plain);
	assert!(parsed.config.is_empty());
	assert!(!parsed.no_autoplay);
	assert_eq!(parsed.start_tab, None);
}

#[test]
fn timing_and_tab_flags_parse() {
	let parsed = CliArgs::parse_from([
		"yatra",
		"--start-tab",
		"guides",
		"--interval-ms",
		"2500",
		"--reset-delay-ms",
		"1000",
		"-o",
		"json",
	]);
	assert_eq!(parsed.start_tab, Some(TabArg::Guides));
	assert_eq!(parsed.interval_ms, Some(2500));
	assert_eq!(parsed.reset_delay_ms, Some(1000));
	assert_eq!(parsed.output, OutputFormat::Json);
}

#[test]
fn unknown_tab_is_rejected() {
	assert!(CliArgs::try_parse_from(["yatra", "--start-tab", "temples"]).is_err());
}

#[test]
fn tab_arg_matches_config_spelling() {
	assert_eq!(TabArg::Transport.as_str(), "transport");
}

#[test]
fn long_version_names_directory_overrides() {
	let banner = super::styles::long_version();
	assert!(banner.starts_with(env!("CARGO_PKG_VERSION")));
	assert!(banner.contains("override with YATRA_CONFIG_DIR"));
	assert!(banner.contains("log file: "));
}
