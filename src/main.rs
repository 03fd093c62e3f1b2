mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{CliCommand, OutputFormat, parse_cli, print_json, print_plain};
use relaunch::SuggestionDraft;
use workflow::CatalogWorkflow;

fn main() -> Result<()> {
    let cli = parse_cli();

    relaunch::logging::initialize();

    let resolved = settings::load(&cli)?;

    if cli.print_config {
        resolved.print_summary();
    }

    if let Some(CliCommand::Suggest {
        company,
        link,
        notes,
    }) = cli.command
    {
        return workflow::submit_suggestion(
            &resolved,
            SuggestionDraft {
                company,
                link,
                notes,
            },
        );
    }

    run_catalog(cli.output, resolved)
}

/// Load the catalog and present it in the chosen format.
fn run_catalog(format: OutputFormat, settings: settings::ResolvedConfig) -> Result<()> {
    let workflow = CatalogWorkflow::from_config(settings);

    match format {
        OutputFormat::Tui => workflow.run_interactive(),
        OutputFormat::Plain => {
            let catalog = workflow.load_catalog()?;
            print_plain(&catalog);
            Ok(())
        }
        OutputFormat::Json => {
            let catalog = workflow.load_catalog()?;
            print_json(&catalog)
        }
    }
}
