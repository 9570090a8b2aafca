use async_trait::async_trait;
use dbot_core::{Bot, Handler, HandlerResponse, Message, Result};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::commands::{help_reply, parse_command, welcome_reply, Command, ParsedCommand};

/// Answers `/start` and `/help`; swallows unknown commands so they are never searched.
/// Plain text passes through with `Continue`.
pub struct CommandHandler {
    bot: Arc<dyn Bot>,
    hub_url: String,
    bot_username: Option<String>,
}

impl CommandHandler {
    pub fn new(bot: Arc<dyn Bot>, hub_url: impl Into<String>, bot_username: Option<String>) -> Self {
        Self {
            bot,
            hub_url: hub_url.into(),
            bot_username,
        }
    }
}

#[async_trait]
impl Handler for CommandHandler {
    #[instrument(skip(self, message), fields(user_id = message.user.id, chat_id = message.chat.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let reply = match parse_command(&message.content, self.bot_username.as_deref()) {
            ParsedCommand::NotCommand => return Ok(HandlerResponse::Continue),
            ParsedCommand::Unknown(command) => {
                info!(command = %command, "Ignoring unknown command");
                return Ok(HandlerResponse::Stop);
            }
            ParsedCommand::Known(Command::Start) => {
                welcome_reply(message.user.display_name(), &self.hub_url)
            }
            ParsedCommand::Known(Command::Help) => help_reply(),
        };

        self.bot.reply_to(message, &reply).await?;
        info!("step: command reply sent");
        Ok(HandlerResponse::Reply(reply.text))
    }
}
