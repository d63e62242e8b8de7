pub mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "modelprobe")]
#[command(about = "Inspect local hardware and suggest which LLMs it can run", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Probe hardware and print a report with model suggestions
    Probe {
        /// Print the detected facts as JSON instead of the report
        #[arg(long)]
        json: bool,
    },
    /// Show model suggestions for this machine
    Suggest {
        /// RAM in GB (auto-detected if not provided)
        #[arg(long)]
        ram: Option<f64>,
    },
    /// List models on the local service and run a test prompt against each
    TestModels {
        /// Base URL of the model service
        #[arg(long)]
        url: Option<String>,
        /// Prompt sent to every model
        #[arg(long)]
        prompt: Option<String>,
        /// Generation timeout in seconds
        #[arg(long)]
        timeout: Option<u64>,
    },
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Probe { json } => commands::probe(json),
        Commands::Suggest { ram } => commands::suggest(ram),
        Commands::TestModels {
            url,
            prompt,
            timeout,
        } => commands::test_models(url, prompt, timeout).await,
    }
}
