mod fetch;
mod profiles;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "socialproof")]
#[command(about = "Social statistics aggregator for storefront profiles")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch current statistics for every active profile
    Fetch {
        /// Restrict the fetch to a single platform (by id, e.g. youtube)
        #[arg(long)]
        platform: Option<String>,

        /// Print the report as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// List configured profiles and credential status
    Profiles,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = socialproof_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    match cli.command {
        Commands::Fetch { platform, json } => {
            fetch::run_fetch(&config, platform.as_deref(), json).await
        }
        Commands::Profiles => profiles::run_profiles(&config),
    }
}
