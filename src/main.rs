use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cleanfeed::app::AppContext;
use cleanfeed::cli::{commands, Cli, Commands};
use cleanfeed::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Load { url, timeout } => {
            // Config file first, then flag overrides
            let mut config = Config::load()?;
            if let Some(secs) = timeout {
                config.http.timeout_secs = secs;
            }
            let ctx = AppContext::new(config)?;
            commands::load_feed(&ctx, url.as_deref()).await?;
        }
        Commands::Config => {
            commands::show_config_path()?;
        }
    }

    Ok(())
}
