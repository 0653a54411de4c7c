use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Folio: ask questions about a portfolio owner's work, streamed from Gemini.
#[derive(Parser, Debug)]
#[command(name = "folio", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log filter directive override (e.g. `folio=debug`).
    #[arg(long, value_name = "DIRECTIVE")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Interactive chat (default).
    Chat,
    /// Ask a single question and print the streamed reply.
    Ask {
        /// The question to send.
        question: String,
    },
    /// Print the rendered system instruction.
    Prompt,
    /// Print the effective configuration as JSON.
    Config,
}

impl Args {
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Chat)
    }
}

pub fn parse() -> Args {
    Args::parse()
}
