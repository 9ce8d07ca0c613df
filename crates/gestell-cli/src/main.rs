use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod render;

use commands::{chat, prompt, search, version};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    gestell: GestellArgs,

    #[command(subcommand)]
    command: Option<Command>,
}

/// Credentials shared by every command
#[derive(Args, Clone, Debug)]
pub struct GestellArgs {
    /// Gestell API key (can also be set via GESTELL_API_KEY environment variable)
    #[arg(long, global = true)]
    api_key: Option<String>,

    /// Gestell collection to query (can also be set via GESTELL_COLLECTION_ID environment variable)
    #[arg(long, global = true)]
    collection_id: Option<String>,
}

#[derive(Subcommand)]
enum Command {
    /// Chat with an assistant that can search and prompt the collection
    Chat {
        /// Model to use (defaults to OPENAI_MODEL or gpt-4o-mini)
        #[arg(short, long)]
        model: Option<String>,
    },

    /// Search the collection and print the matching passages
    Search {
        /// Search query
        query: String,
    },

    /// Ask the collection a question and print the answer
    Prompt {
        /// Question or instruction
        prompt: String,
    },

    /// Display the current version
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Command::Chat { model }) => chat::execute(&cli.gestell, model).await,
        Some(Command::Search { query }) => search::execute(&cli.gestell, &query).await,
        Some(Command::Prompt { prompt }) => prompt::execute(&cli.gestell, &prompt).await,
        Some(Command::Version) => version::execute(),
        None => chat::execute(&cli.gestell, None).await,
    }
}
