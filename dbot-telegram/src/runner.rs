//! REPL runner: converts teloxide messages to core::Message and hands them to the HandlerChain.
//! External calls: teloxide REPL (long polling), get_me for the bot username.

use anyhow::Result;
use dbot_core::ToCoreMessage;
use handler_chain::HandlerChain;
use teloxide::prelude::*;
use tracing::{error, info, instrument, warn};

use super::adapters::TelegramMessageWrapper;
use super::config::TelegramConfig;

/// Builds the teloxide Bot, pointing it at a custom Bot API server when configured.
pub fn build_teloxide_bot(config: &TelegramConfig) -> Result<teloxide::Bot> {
    config.validate()?;
    let bot = teloxide::Bot::new(config.bot_token.clone());
    match config.telegram_api_url {
        Some(ref url_str) => Ok(bot.set_api_url(reqwest::Url::parse(url_str)?)),
        None => Ok(bot),
    }
}

/// Returns the bot's @username via get_me, or None when the call fails.
pub async fn fetch_bot_username(bot: &teloxide::Bot) -> Option<String> {
    match bot.get_me().await {
        Ok(me) => me.user.username.clone(),
        Err(e) => {
            warn!(error = %e, "get_me failed, commands addressed to @bot will not match");
            None
        }
    }
}

/// Runs the polling REPL until shutdown. Each message is converted to core::Message and handed to `chain.handle`.
///
/// teloxide delivers updates of one chat sequentially and different chats concurrently, so the chain
/// is awaited inline: a conversation's replies keep the order of its messages.
#[instrument(skip(bot, handler_chain))]
pub async fn run_repl(bot: teloxide::Bot, handler_chain: HandlerChain) -> Result<()> {
    info!(handlers = handler_chain.len(), "Polling for updates");

    let chain = handler_chain;
    teloxide::repl(bot, move |_bot: Bot, msg: teloxide::types::Message| {
        let chain = chain.clone();

        async move {
            let core_msg = TelegramMessageWrapper(&msg).to_core();

            match msg.text() {
                Some(text) => {
                    info!(
                        user_id = core_msg.user.id,
                        chat_id = core_msg.chat.id,
                        message_content = %text,
                        "Received message"
                    );
                }
                None => {
                    info!(
                        user_id = core_msg.user.id,
                        chat_id = core_msg.chat.id,
                        "Received non-text message"
                    );
                }
            }

            if let Err(e) = chain.handle(&core_msg).await {
                error!(
                    error = %e,
                    user_id = core_msg.user.id,
                    chat_id = core_msg.chat.id,
                    "Handler chain failed"
                );
            }

            Ok(())
        }
    })
    .await;

    Ok(())
}
