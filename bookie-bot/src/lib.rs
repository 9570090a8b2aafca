//! # Bookie bot
//!
//! Application crate: loads [`BotConfig`] from the environment, wires the handler chain
//! (logging → `/start`/`/help` → book search) and runs the Telegram polling loop.

pub mod cli;
pub mod config;
pub mod runner;

pub use cli::{load_config, load_dotenv, Cli, Commands};
pub use config::{BotConfig, DEFAULT_LOG_FILE, DEFAULT_WEB_APP_URL};
pub use runner::{build_handler_chain, prepare_telegram, run_bot};
