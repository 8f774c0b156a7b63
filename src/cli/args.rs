use crate::output::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cci")]
#[command(about = "Collaboration & Communication Intelligence assessment scoring", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score a response file and print the profile
    Score {
        /// JSON file with question responses
        responses: PathBuf,

        /// Output format (defaults to the config file setting, then terminal)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Write the report to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file (defaults to the nearest .cci.toml)
        #[arg(short, long, env = "CCI_CONFIG")]
        config: Option<PathBuf>,

        /// Plain output (no colors, no emoji)
        #[arg(long)]
        plain: bool,
    },

    /// List the question catalog
    Questions {
        /// Only show one category (communication, collaboration, contextual, coach)
        #[arg(long)]
        category: Option<String>,

        /// Output format (terminal or json)
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,
    },

    /// Check the question catalog for authoring defects
    ValidateCatalog,

    /// Write a default .cci.toml configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

pub fn parse_args() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_score_command() {
        let cli = Cli::try_parse_from([
            "cci", "-vv", "score", "answers.json", "--format", "json", "-o", "out.json",
        ])
        .unwrap();
        assert_eq!(cli.verbosity, 2);
        match cli.command {
            Commands::Score {
                responses,
                format,
                output,
                plain,
                ..
            } => {
                assert_eq!(responses, PathBuf::from("answers.json"));
                assert_eq!(format, Some(OutputFormat::Json));
                assert_eq!(output, Some(PathBuf::from("out.json")));
                assert!(!plain);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_score_requires_responses_path() {
        assert!(Cli::try_parse_from(["cci", "score"]).is_err());
    }
}
