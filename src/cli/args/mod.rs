mod definitions;
mod options;
mod styles;

use clap::{CommandFactory, FromArgMatches};
pub(crate) use definitions::CliArgs;
pub(crate) use options::{OutputFormat, TabArg};

/// Parse command line arguments into the strongly typed [`CliArgs`] structure.
pub(crate) fn parse_cli() -> CliArgs {
	let mut matches = CliArgs::command().get_matches();
	CliArgs::from_arg_matches_mut(&mut matches).unwrap_or_else(|err| err.exit())
}

#[cfg(test)]
mod tests;
