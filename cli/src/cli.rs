use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mxp-changelog")]
#[command(
    author,
    version,
    about = "Show the MXP Protocol changelog, live from GitHub when available"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch the latest releases and display the changelog
    Show {
        #[clap(flatten)]
        args: ShowArgs,
    },

    /// Parse release-note text into categorized changes
    Parse {
        /// File with release notes (reads stdin when omitted)
        file: Option<PathBuf>,
    },

    /// Display the changelog bundled with this binary
    Defaults {
        /// Output format
        #[clap(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(Args, Clone, Debug)]
pub struct ShowArgs {
    /// Release-list endpoint (overrides the configuration file)
    #[clap(short, long)]
    pub endpoint: Option<String>,

    /// Loader configuration file in TOML format
    #[clap(short, long)]
    pub config: Option<PathBuf>,

    /// Skip the network and show the bundled changelog
    #[clap(long, default_value_t = false)]
    pub offline: bool,

    /// Output format
    #[clap(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Leave release links out of text and markdown output
    #[clap(long, default_value_t = false)]
    pub no_links: bool,

    /// Enable verbose output with additional information
    #[clap(short, long, default_value_t = false)]
    pub verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored terminal output
    Text,
    /// Markdown document
    Markdown,
    /// JSON with the entry source
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_defaults() {
        let cli = Cli::try_parse_from(["mxp-changelog", "show"]).unwrap();
        match cli.command {
            Commands::Show { args } => {
                assert!(!args.offline);
                assert!(!args.verbose);
                assert_eq!(args.format, OutputFormat::Text);
                assert!(args.endpoint.is_none());
                assert!(!args.no_links);
            }
            _ => panic!("expected show command"),
        }
    }

    #[test]
    fn test_show_flags() {
        let cli = Cli::try_parse_from([
            "mxp-changelog",
            "show",
            "--offline",
            "--format",
            "json",
            "--endpoint",
            "http://127.0.0.1:9000/releases",
            "--no-links",
            "-v",
        ])
        .unwrap();
        match cli.command {
            Commands::Show { args } => {
                assert!(args.offline);
                assert!(args.verbose);
                assert_eq!(args.format, OutputFormat::Json);
                assert_eq!(args.endpoint.as_deref(), Some("http://127.0.0.1:9000/releases"));
                assert!(args.no_links);
            }
            _ => panic!("expected show command"),
        }
    }

    #[test]
    fn test_parse_takes_optional_file() {
        let cli = Cli::try_parse_from(["mxp-changelog", "parse", "notes.md"]).unwrap();
        assert!(matches!(cli.command, Commands::Parse { file: Some(_) }));

        let cli = Cli::try_parse_from(["mxp-changelog", "parse"]).unwrap();
        assert!(matches!(cli.command, Commands::Parse { file: None }));
    }
}
