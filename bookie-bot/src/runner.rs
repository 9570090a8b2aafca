use anyhow::Result;
use book_handlers::{BookSearchHandler, Command, CommandHandler, LoggingHandler};
use books_client::{BookLookup, GoogleBooksClient};
use dbot_core::Bot;
use dbot_telegram::{build_teloxide_bot, fetch_bot_username, run_repl, TelegramBotAdapter};
use handler_chain::HandlerChain;
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;
use tracing::{info, instrument, warn};

use crate::config::BotConfig;

/// Chain order: logging, then `/start` and `/help`, then the book search.
pub fn build_handler_chain(
    config: &BotConfig,
    bot: Arc<dyn Bot>,
    lookup: Arc<dyn BookLookup>,
    bot_username: Option<String>,
) -> HandlerChain {
    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(CommandHandler::new(
            bot.clone(),
            config.web_app_url.clone(),
            bot_username,
        )))
        .add_handler(Arc::new(BookSearchHandler::new(bot, lookup)))
}

/// Builds the teloxide Bot, resolves its @username and registers the command menu.
/// Failures of the two Telegram calls are logged and do not prevent startup.
#[instrument(skip(config))]
pub async fn prepare_telegram(config: &BotConfig) -> Result<(teloxide::Bot, Option<String>)> {
    let bot = build_teloxide_bot(&config.telegram)?;

    let bot_username = fetch_bot_username(&bot).await;
    if let Some(ref username) = bot_username {
        info!(username = %username, "Bot username resolved");
    }

    if let Err(e) = bot.set_my_commands(Command::bot_commands()).await {
        warn!(error = %e, "Failed to register bot commands");
    }

    Ok((bot, bot_username))
}

/// Builds the lookup client and handler chain, then polls until shutdown.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    info!(
        books_endpoint = %config.books.endpoint,
        timeout_secs = config.books.timeout.as_secs(),
        max_results = config.books.max_results,
        "Initializing bot"
    );

    let lookup: Arc<dyn BookLookup> = Arc::new(GoogleBooksClient::new(config.books.clone())?);
    let (teloxide_bot, bot_username) = prepare_telegram(&config).await?;
    let bot: Arc<dyn Bot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));
    let handler_chain = build_handler_chain(&config, bot, lookup, bot_username);

    info!("Bot started successfully");
    run_repl(teloxide_bot, handler_chain).await
}
