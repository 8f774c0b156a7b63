use anyhow::Result;
use cci_assessment::cli::{self, Commands};
use cci_assessment::commands::{self, QuestionsConfig, ScoreConfig};

fn main() -> Result<()> {
    let cli = cli::parse_args();
    cli::init_logging(cli.verbosity);

    match cli.command {
        Commands::Score {
            responses,
            format,
            output,
            config,
            plain,
        } => commands::handle_score(ScoreConfig {
            responses,
            format,
            output,
            config,
            plain,
        }),
        Commands::Questions { category, format } => {
            commands::list_questions(QuestionsConfig { category, format })
        }
        Commands::ValidateCatalog => commands::validate_catalog_command(),
        Commands::Init { force } => commands::init_config(force),
    }
}
