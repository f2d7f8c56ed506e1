use anyhow::{Result, anyhow};

use super::raw::RawConfig;
use super::resolved::ResolvedConfig;
use super::sources::build_config;
use crate::cli::CliArgs;

/// Load configuration by combining CLI arguments, config files and environment
/// variables.
pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let builder = build_config(cli)?;
	let mut raw: RawConfig = builder
		.try_deserialize()
		.map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
	raw.apply_cli_overrides(cli);
	raw.resolve(cli)
}

#[cfg(test)]
mod tests {
	use std::io::Write;
	use std::time::Duration;

	use clap::Parser;
	use yatra::Tab;

	use super::*;

	#[test]
	fn extra_config_file_is_merged_under_cli_flags() {
		let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
		writeln!(
			file,
			"[ui]\nstart_tab = \"food\"\ninitial_query = \"paan\"\n\n[hero]\ninterval_ms = 2000\n\n[logging]\nenabled = false"
		)
		.unwrap();
		let path = file.path().to_str().unwrap().to_string();

		let cli = CliArgs::parse_from(["yatra", "-n", "-c", &path, "-q", "kachori"]);
		let resolved = load(&cli).unwrap();

		assert_eq!(resolved.start_tab, Tab::Food);
		assert_eq!(resolved.initial_query, "kachori");
		assert_eq!(resolved.hero_autoplay, Some(Duration::from_millis(2000)));
		assert!(!resolved.logging.enabled);
	}

	#[test]
	fn missing_extra_config_file_is_an_error() {
		let cli = CliArgs::parse_from(["yatra", "-n", "-c", "/definitely/missing/yatra.toml"]);
		assert!(load(&cli).is_err());
	}
}
