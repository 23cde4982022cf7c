mod cli;
mod commands;
mod logging;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{OutputFormat, parse_cli, print_json, print_outcome_plain};
use logging::LogTarget;
use settings::ResolvedConfig;
use tracing::debug;
use workflow::FinderWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in icofz_tui::style::names() {
			println!("{name}");
		}
		return Ok(());
	}

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	match &cli.command {
		Some(command) => {
			logging::init(&LogTarget::Stderr, resolved.log_level.as_deref())?;
			let catalog = workflow::load_catalog(&resolved)?;
			commands::run(command, catalog, &resolved, cli.output)
		}
		None => run_finder(cli.output, &resolved),
	}
}

/// Run the interactive finder and print its outcome in the chosen format.
fn run_finder(format: OutputFormat, settings: &ResolvedConfig) -> Result<()> {
	let target = LogTarget::file(settings.log_file.as_deref())?;
	logging::init(&target, settings.log_level.as_deref())?;

	let outcome = FinderWorkflow::from_config(settings)?.run()?;
	debug!(accepted = outcome.accepted, "finder closed");

	match format {
		OutputFormat::Plain => print_outcome_plain(&outcome),
		OutputFormat::Json => print_json(&outcome)?,
	}
	Ok(())
}
