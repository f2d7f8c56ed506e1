mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{OutputFormat, parse_cli, print_json, print_plain};
use settings::ResolvedConfig;
use workflow::GuideWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in yatra::ui::theme::names() {
			println!("{name}");
		}
		return Ok(());
	}

	if cli.dump_catalog {
		println!(
			"{}",
			serde_json::to_string_pretty(&yatra::catalog::builtin_file())?
		);
		return Ok(());
	}

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	if let Err(err) = yatra::logging::initialize(&resolved.logging) {
		eprintln!("warning: logging disabled: {err:#}");
	}

	run_guide(cli.output, resolved)
}

/// Run the guide and print the session summary in the chosen format.
fn run_guide(format: OutputFormat, settings: ResolvedConfig) -> Result<()> {
	let workflow = GuideWorkflow::from_config(settings)?;
	let outcome = workflow.run()?;

	match format {
		OutputFormat::Plain => print_plain(&outcome),
		OutputFormat::Json => print_json(&outcome)?,
	}

	Ok(())
}
