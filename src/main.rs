mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{OutputFormat, parse_cli, print_json, print_plain};
use filefind::SessionOutcome;
use filefind::logging::{self, LogSink};
use workflow::SearchWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.print {
		logging::initialize(LogSink::Stderr);
	}

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	let workflow = SearchWorkflow::from_config(resolved);
	let outcome = if cli.print {
		workflow.run_headless()?
	} else {
		workflow.run()?
	};

	print_outcome(cli.output, &outcome)
}

fn print_outcome(format: OutputFormat, outcome: &SessionOutcome) -> Result<()> {
	match format {
		OutputFormat::Plain => print_plain(outcome),
		OutputFormat::Json => print_json(outcome)?,
	}
	Ok(())
}
