//! CLI parser and config loading.

use clap::{Parser, Subcommand};
use dbot_core::Result;

use crate::config::BotConfig;

#[derive(Parser)]
#[command(name = "bookie-bot")]
#[command(about = "Telegram bot that finds free PDFs or previews of books", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the Telegram bot (config from env; token can override BOT_TOKEN).
    Run {
        #[arg(short, long)]
        token: Option<String>,
    },
}

/// Reads `.env` from the working directory, then `config/.env`. Existing variables win.
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
    dotenvy::from_filename("config/.env").ok();
}

/// Load BotConfig from environment. If `token` is provided it overrides BOT_TOKEN.
pub fn load_config(token: Option<String>) -> Result<BotConfig> {
    BotConfig::load(token)
}
