//! Binary for the book bot.

use anyhow::Result;
use bookie_bot::{config::log_file_from_env, load_config, load_dotenv, run_bot, Cli, Commands};
use clap::Parser;
use dbot_core::init_tracing;
use tracing::error;

#[tokio::main]
async fn main() -> Result<()> {
    load_dotenv();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => {
            init_tracing(&log_file_from_env())?;

            let config = match load_config(token) {
                Ok(config) => config,
                Err(e) => {
                    error!(error = %e, "Invalid configuration, not starting");
                    return Err(e.into());
                }
            };
            run_bot(config).await
        }
    }
}
