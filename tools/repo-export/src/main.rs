use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use repo_export::export::{self, ExportOptions};

#[derive(Parser)]
#[command(name = "repo-export")]
#[command(about = "Export GitHub repository metadata via the gh CLI")]
struct Cli {
    /// Directory the JSON files are written into
    #[arg(long, env = "FOLIO_DATA_DIR", default_value = "site/data")]
    out: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    export::run(&ExportOptions { out_dir: cli.out }).await
}
