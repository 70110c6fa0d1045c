use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folio_site::config::FileConfig;
use folio_site::data;
use folio_site::web::{self, WebConfig};

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Personal portfolio site for GitHub repositories")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Directory holding repos.json and languages.json
    #[arg(long, env = "FOLIO_DATA_DIR")]
    data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the portfolio page
    Serve {
        /// Port to listen on
        #[arg(long, env = "FOLIO_PORT")]
        port: Option<u16>,
        /// Open the page in a browser once the server is up
        #[arg(long)]
        open: bool,
    },
    /// Verify the exported repository data
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    // Resolve with priority: CLI/env > config file > defaults
    let file_config = FileConfig::load()?;
    let data_dir = cli
        .data_dir
        .unwrap_or_else(|| file_config.data.dir.clone());

    match cli.command {
        Commands::Serve { port, open } => {
            let port = port.unwrap_or(file_config.site.port);

            if open {
                let url = format!("http://localhost:{}", port);
                tokio::spawn(async move {
                    tokio::time::sleep(std::time::Duration::from_millis(500)).await;
                    if let Err(e) = open::that(&url) {
                        tracing::warn!("Failed to open browser: {}", e);
                    }
                });
            }

            let config = WebConfig {
                port,
                data_dir,
                title: file_config.site.title.clone(),
                owner: file_config.site.owner.clone(),
                timestamp: file_config.site.timestamp,
            };
            web::serve(config).await?;
        }
        Commands::Check => {
            run_check(&data_dir)?;
        }
    }

    Ok(())
}

/// Validate the exported data and report what it contains. Missing data
/// exits non-zero with a hint to run `repo-export`.
fn run_check(data_dir: &Path) -> Result<()> {
    let repos = data::load_repositories(data_dir)?;

    let languages: BTreeSet<&String> = repos.iter().flat_map(|r| r.languages.iter()).collect();
    let topics: BTreeSet<&String> = repos.iter().flat_map(|r| r.topics.iter()).collect();

    println!("repository data at {}:", data_dir.display());
    println!(
        "  {} repositories, {} languages, {} topics",
        repos.len(),
        languages.len(),
        topics.len()
    );
    Ok(())
}
