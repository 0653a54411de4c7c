mod app;
mod cli;
mod repl;

use std::process::ExitCode;

use cli::Command;
use folio_ai::Transcript;
use folio_common::FolioError;
use folio_config::FolioConfig;
use tokio::io::BufReader;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

const DEFAULT_DIRECTIVE: &str = "folio=info";

fn init_logging(directive: &str) {
    let directive: Result<Directive, _> =
        directive.parse().or_else(|_| DEFAULT_DIRECTIVE.parse());
    let mut filter = EnvFilter::from_default_env();
    if let Ok(directive) = directive {
        filter = filter.add_directive(directive);
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    // Variables already set in the environment win over .env
    let dotenv = dotenvy::dotenv();

    let args = cli::parse();
    let loaded = folio_config::load_config(args.config.as_deref());

    let directive = match (&args.log_level, &loaded) {
        (Some(level), _) => level.clone(),
        (None, Ok(config)) => config.logging.level.directive().to_string(),
        (None, Err(_)) => DEFAULT_DIRECTIVE.to_string(),
    };
    init_logging(&directive);

    tracing::info!("Folio v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Ok(path) = &dotenv {
        tracing::debug!("Loaded environment from {}", path.display());
    }

    let config = match loaded {
        Ok(config) => config,
        Err(e) if args.config.is_some() => {
            tracing::error!("Failed to load config: {e}");
            return ExitCode::FAILURE;
        }
        Err(e) => {
            tracing::warn!("Config load failed, using defaults: {e}");
            FolioConfig::default()
        }
    };
    tracing::info!(
        "Config loaded (model: {}, owner: {})",
        config.assistant.model,
        config.portfolio.owner
    );

    match run(args.command(), &config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Folio failed: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Command, config: &FolioConfig) -> folio_common::Result<()> {
    match command {
        Command::Prompt => {
            println!("{}", folio_config::effective_instruction(config));
        }
        Command::Config => {
            println!("{}", folio_config::config_to_json(config));
        }
        Command::Ask { question } => {
            if question.trim().is_empty() {
                return Err(FolioError::Other("question is empty".into()));
            }
            let mut conversation = app::build_conversation(config);
            let mut transcript = Transcript::new(&config.portfolio.owner);
            repl::ask(&mut conversation, &mut transcript, &question, std::io::stdout()).await?;
        }
        Command::Chat => {
            let mut conversation = app::build_conversation(config);
            let mut transcript = Transcript::new(&config.portfolio.owner);
            let input = BufReader::new(tokio::io::stdin());
            repl::chat(&mut conversation, &mut transcript, input, std::io::stdout()).await?;
        }
    }
    Ok(())
}
