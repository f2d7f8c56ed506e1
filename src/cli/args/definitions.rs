use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::{OutputFormat, TabArg};
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `yatra` binary.
#[derive(Parser, Debug)]
#[command(
	name = "yatra",
	version,
	long_version = long_version(),
	about = "Terminal travel guide for Varanasi",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "YATRA_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'q',
		long,
		value_name = "QUERY",
		help = "Pre-fill the shared places and food search (default: empty)"
	)]
	pub(crate) initial_query: Option<String>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: saffron)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		short = 'm',
		long = "start-tab",
		value_enum,
		help = "Choose the tab shown on launch (default: home)"
	)]
	pub(crate) start_tab: Option<TabArg>,
	#[arg(
		long,
		value_name = "FILE",
		help = "Load the catalogue from a JSON file instead of the bundled data (default: bundled)"
	)]
	pub(crate) catalog: Option<PathBuf>,
	#[arg(
		long = "interval-ms",
		value_name = "MS",
		help = "Home banner auto-advance period in milliseconds (default: 5000)"
	)]
	pub(crate) interval_ms: Option<u64>,
	#[arg(
		long = "reset-delay-ms",
		value_name = "MS",
		help = "Delay before a submitted inquiry form clears (default: 3000)"
	)]
	pub(crate) reset_delay_ms: Option<u64>,
	#[arg(
		long = "no-autoplay",
		help = "Keep the home banner on manual navigation (default: disabled)"
	)]
	pub(crate) no_autoplay: bool,
	#[arg(
		short = 'v',
		long,
		help = "Log debug records to the log file (default: disabled)"
	)]
	pub(crate) verbose: bool,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List supported themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
	#[arg(
		long = "dump-catalog",
		help = "Print the bundled catalogue as JSON and exit (default: disabled)"
	)]
	pub(crate) dump_catalog: bool,
	#[arg(short = 'o', long = "output", value_enum, default_value_t = OutputFormat::Plain, help = "Choose how to print the session summary")]
	pub(crate) output: OutputFormat,
}
