//! Wraps teloxide::Bot and implements [`dbot_core::Bot`]. Production code sends messages via Telegram; tests can substitute another Bot impl.

use async_trait::async_trait;
use dbot_core::{
    Bot as CoreBot, ButtonKind, Chat, DbotError, HandlerError, Reply, ReplyButton, Result,
    TextFormat,
};
use teloxide::payloads::SendMessageSetters;
use teloxide::prelude::*;
use teloxide::types::{ChatId, InlineKeyboardButton, InlineKeyboardMarkup, ParseMode, WebAppInfo};

/// Thin wrapper around teloxide::Bot that implements dbot-core's Bot trait.
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }

    /// Returns the underlying teloxide::Bot for direct API use when needed.
    pub fn inner(&self) -> &teloxide::Bot {
        &self.bot
    }
}

/// Builds a one-button inline keyboard. Fails when the button URL does not parse.
pub fn inline_keyboard(button: &ReplyButton) -> Result<InlineKeyboardMarkup> {
    let url = reqwest::Url::parse(&button.url)
        .map_err(|e| HandlerError::InvalidUrl(format!("{}: {}", button.url, e)))?;
    let key = match button.kind {
        ButtonKind::Url => InlineKeyboardButton::url(button.label.clone(), url),
        ButtonKind::WebApp => InlineKeyboardButton::web_app(button.label.clone(), WebAppInfo { url }),
    };
    Ok(InlineKeyboardMarkup::new(vec![vec![key]]))
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .await
            .map_err(|e| DbotError::Bot(e.to_string()))?;
        Ok(())
    }

    async fn send_reply(&self, chat: &Chat, reply: &Reply) -> Result<()> {
        let mut request = self.bot.send_message(ChatId(chat.id), reply.text.clone());
        if reply.format == TextFormat::Html {
            request = request.parse_mode(ParseMode::Html);
        }
        if let Some(button) = &reply.button {
            request = request.reply_markup(inline_keyboard(button)?);
        }
        request.await.map_err(|e| DbotError::Bot(e.to_string()))?;
        Ok(())
    }
}
