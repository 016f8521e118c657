use clap::{Parser, Subcommand};
use docview::commands::contributions;
use docview::preview::render_hover_json;
use docview::{DocViewConfig, Result};
use std::path::PathBuf;
use std::process::ExitCode;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "docview", version, about = "Render editor hover documentation as HTML")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render hover JSON (one LSP Hover or an array of them) to an HTML page
    Render {
        /// Read hover JSON from this file instead of stdin
        #[arg(long)]
        input: Option<PathBuf>,
        /// JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Print the editor command contributions as JSON
    Contributions,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Commands) -> Result<()> {
    let output = match command {
        Commands::Render { input, config } => {
            let config = match config {
                Some(path) => DocViewConfig::from_file(&path)?,
                None => DocViewConfig::default(),
            };
            let json = match input {
                Some(path) => tokio::fs::read_to_string(&path).await?,
                None => {
                    let mut json = String::new();
                    tokio::io::stdin().read_to_string(&mut json).await?;
                    json
                }
            };
            render_hover_json(&json, &config.highlighter)?
        }
        Commands::Contributions => serde_json::to_string_pretty(&contributions())? + "\n",
    };

    let mut stdout = tokio::io::stdout();
    stdout.write_all(output.as_bytes()).await?;
    stdout.flush().await?;
    Ok(())
}
