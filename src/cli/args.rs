use std::path::PathBuf;

use clap::{
    ArgAction, ColorChoice, Parser, Subcommand, ValueEnum,
    builder::{
        BoolishValueParser, Styles,
        styling::{AnsiColor, Effects},
    },
};

/// Create the clap styles used for custom colour output.
fn cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Cyan.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
}

/// Parse command line arguments into the strongly typed [`CliArgs`] structure.
pub(crate) fn parse_cli() -> CliArgs {
    CliArgs::parse()
}

#[derive(Parser, Debug)]
#[command(
    name = "relaunch",
    version,
    about = "Browse career-returner programmes and support resources",
    color = ColorChoice::Auto,
    styles = cli_styles()
)]
/// Command-line arguments accepted by the `relaunch` binary.
pub(crate) struct CliArgs {
    #[arg(
        short,
        long = "config",
        value_name = "FILE",
        env = "RELAUNCH_CONFIG",
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
        short = 'a',
        long = "api-base",
        value_name = "URL",
        env = "RELAUNCH_API_BASE",
        help = "Base URL of the programmes API (default: from configuration)"
    )]
    pub(crate) api_base: Option<String>,
    #[arg(
        long = "programs-file",
        value_name = "FILE",
        help = "Local JSON dataset used when the API is unavailable (default: programs.json)"
    )]
    pub(crate) programs_file: Option<PathBuf>,
    #[arg(
        long = "resources-file",
        value_name = "FILE",
        help = "Local JSON file with support resources (default: resources.json)"
    )]
    pub(crate) resources_file: Option<PathBuf>,
    #[arg(
        short = 'q',
        long,
        value_name = "TEXT",
        help = "Initial free-text query (default: empty)"
    )]
    pub(crate) query: Option<String>,
    #[arg(
        short = 'p',
        long = "paid-only",
        value_name = "BOOL",
        value_parser = BoolishValueParser::new(),
        num_args = 0..=1,
        default_missing_value = "true",
        help = "Show paid programmes only (default: disabled)"
    )]
    pub(crate) paid_only: Option<bool>,
    #[arg(
        short = 'r',
        long,
        value_name = "REGION",
        help = "Restrict to programmes available in a region (default: all regions)"
    )]
    pub(crate) region: Option<String>,
    #[arg(
        short = 'd',
        long,
        value_enum,
        value_name = "BAND",
        help = "Restrict to a duration band (default: any)"
    )]
    pub(crate) duration: Option<DurationArg>,
    #[arg(
        short = 'P',
        long = "print-config",
        help = "Print the resolved configuration before running (default: disabled)"
    )]
    pub(crate) print_config: bool,
    #[arg(
        short = 'o',
        long = "output",
        value_enum,
        default_value_t = OutputFormat::Tui,
        help = "Choose how to present the catalog"
    )]
    pub(crate) output: OutputFormat,
    #[command(subcommand)]
    pub(crate) command: Option<CliCommand>,
}

#[derive(Subcommand, Debug)]
pub(crate) enum CliCommand {
    /// Submit a programme suggestion to the API.
    Suggest {
        #[arg(long, value_name = "NAME", help = "Company running the programme")]
        company: String,
        #[arg(long, value_name = "URL", help = "Link to the programme page")]
        link: String,
        #[arg(
            long,
            value_name = "TEXT",
            default_value = "",
            help = "Optional notes for the maintainers"
        )]
        notes: String,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
/// Duration bands accepted via the command line.
pub(crate) enum DurationArg {
    Any,
    Short,
    Mid,
    Long,
}

impl DurationArg {
    /// Return the string representation consumed by configuration loading.
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            DurationArg::Any => "any",
            DurationArg::Short => "short",
            DurationArg::Mid => "mid",
            DurationArg::Long => "long",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
/// Presentation modes supported by the binary.
pub(crate) enum OutputFormat {
    /// Interactive terminal browser.
    Tui,
    /// Print the filtered view as text.
    Plain,
    /// Print the filtered view as JSON.
    Json,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn command_definition_is_consistent() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn parse_cli_accepts_default_arguments() {
        let parsed = CliArgs::parse_from(["relaunch"]);
        assert_eq!(parsed.output, OutputFormat::Tui);
        assert!(parsed.command.is_none());
        assert_eq!(parsed.paid_only, None);
    }

    #[test]
    fn paid_only_flag_defaults_to_true_when_bare() {
        let parsed = CliArgs::parse_from(["relaunch", "--paid-only"]);
        assert_eq!(parsed.paid_only, Some(true));

        let parsed = CliArgs::parse_from(["relaunch", "--paid-only", "false"]);
        assert_eq!(parsed.paid_only, Some(false));
    }

    #[test]
    fn suggest_subcommand_collects_fields() {
        let parsed = CliArgs::parse_from([
            "relaunch",
            "suggest",
            "--company",
            "Acme",
            "--link",
            "https://acme.example/returners",
        ]);
        match parsed.command {
            Some(CliCommand::Suggest {
                company,
                link,
                notes,
            }) => {
                assert_eq!(company, "Acme");
                assert_eq!(link, "https://acme.example/returners");
                assert!(notes.is_empty());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
