//! Per-message search flow: notice → lookup → select → format → reply.
//!
//! Nothing is kept between messages. An unreachable book service gets the fixed "try again later"
//! reply; any other failure gets the fallback apology so the user is never left without an answer.

use async_trait::async_trait;
use books_client::{BookLookup, LookupError};
use dbot_core::{Bot, DbotError, Handler, HandlerResponse, Message, Result};
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

use crate::formatter::{fallback_reply, format_result, searching_notice, unavailable_reply};
use crate::selector::select_result;

/// Searches for the message text and replies with a download or preview link.
pub struct BookSearchHandler {
    bot: Arc<dyn Bot>,
    lookup: Arc<dyn BookLookup>,
}

impl BookSearchHandler {
    pub fn new(bot: Arc<dyn Bot>, lookup: Arc<dyn BookLookup>) -> Self {
        Self { bot, lookup }
    }

    async fn search_and_reply(&self, message: &Message, query: &str) -> Result<HandlerResponse> {
        self.bot.reply_to(message, &searching_notice(query)).await?;

        let reply = match self.lookup.search(query).await {
            Ok(candidates) => {
                let count = candidates.len();
                let result = select_result(candidates);
                info!(candidates = count, outcome = result.kind(), "step: book search result");
                format_result(&result, query)
            }
            Err(LookupError::Unavailable(detail)) => {
                warn!(error = %detail, "Book lookup unavailable");
                unavailable_reply()
            }
            Err(e) => return Err(DbotError::Unknown(e.to_string())),
        };

        self.bot.reply_to(message, &reply).await?;
        Ok(HandlerResponse::Reply(reply.text))
    }
}

#[async_trait]
impl Handler for BookSearchHandler {
    #[instrument(skip(self, message), fields(user_id = message.user.id, chat_id = message.chat.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let query = message.content.trim();
        if query.is_empty() {
            return Ok(HandlerResponse::Ignore);
        }

        info!(
            username = message.user.username.as_deref().unwrap_or(""),
            query = %query,
            "step: book search started"
        );

        match self.search_and_reply(message, query).await {
            Ok(response) => Ok(response),
            Err(e) => {
                error!(error = %e, query = %query, "Book search failed, sending fallback reply");
                let reply = fallback_reply();
                self.bot.reply_to(message, &reply).await?;
                Ok(HandlerResponse::Reply(reply.text))
            }
        }
    }
}
