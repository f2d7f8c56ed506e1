use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use yatra::app_dirs;

use crate::cli::CliArgs;

/// Prefix of `YATRA__SECTION__KEY` overrides.
const ENV_PREFIX: &str = "yatra";
/// Files looked up in the working directory, lowest precedence first.
const LOCAL_CONFIG_NAMES: [&str; 2] = [".yatra.toml", "yatra.toml"];

/// Layer the configuration sources, lowest precedence first: discovered
/// files, `--config` files, then the environment. CLI flags are applied later
/// on the deserialized values.
pub(super) fn build_config(cli: &CliArgs) -> Result<Config> {
	let discovered = if cli.no_config {
		Vec::new()
	} else {
		default_config_files()
	};
	let optional = discovered
		.into_iter()
		.map(|path| File::from(path).required(false));
	let explicit = cli
		.config
		.iter()
		.map(|path| File::from(path.as_path()).required(true));

	optional
		.chain(explicit)
		.fold(Config::builder(), |builder, file| builder.add_source(file))
		.add_source(
			Environment::with_prefix(ENV_PREFIX)
				.separator("__")
				.try_parsing(true),
		)
		.build()
		.context("failed to read configuration")
}

/// Candidate configuration files: the user config directory, then the
/// working directory.
pub(super) fn default_config_files() -> Vec<PathBuf> {
	let user = app_dirs::get_config_dir()
		.ok()
		.map(|dir| dir.join("config.toml"));
	let local = env::current_dir()
		.ok()
		.into_iter()
		.flat_map(|dir| LOCAL_CONFIG_NAMES.map(|name| dir.join(name)));
	user.into_iter().chain(local).collect()
}

#[cfg(test)]
mod tests {
	use std::io::Write;

	use clap::Parser;

	use super::*;

	#[test]
	fn default_files_end_with_working_directory_names() {
		let files = default_config_files();
		let names: Vec<_> = files
			.iter()
			.rev()
			.take(2)
			.filter_map(|path| path.file_name()?.to_str())
			.collect();
		assert_eq!(names, ["yatra.toml", ".yatra.toml"]);
	}

	#[test]
	fn explicit_file_is_read_without_defaults() {
		let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
		writeln!(file, "[inquiry]\nreset_delay_ms = 1200").unwrap();
		let path = file.path().to_str().unwrap().to_string();

		let cli = CliArgs::parse_from(["yatra", "-n", "-c", &path]);
		let config = build_config(&cli).unwrap();
		assert_eq!(config.get_int("inquiry.reset_delay_ms").unwrap(), 1200);
	}
}
