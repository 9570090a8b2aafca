use async_trait::async_trait;
use dbot_core::{Handler, HandlerResponse, Message, Result};
use tracing::info;

/// Logs each incoming message and the chain's final response. Never stops the chain.
pub struct LoggingHandler;

#[async_trait]
impl Handler for LoggingHandler {
    async fn before(&self, message: &Message) -> Result<bool> {
        info!(
            user_id = message.user.id,
            chat_id = message.chat.id,
            username = message.user.username.as_deref().unwrap_or(""),
            message_type = %message.message_type,
            content_len = message.content.len(),
            "Incoming message"
        );
        Ok(true)
    }

    async fn after(&self, message: &Message, response: &HandlerResponse) -> Result<()> {
        let (response_type, reply_len) = match response {
            HandlerResponse::Continue => ("Continue", None),
            HandlerResponse::Stop => ("Stop", None),
            HandlerResponse::Ignore => ("Ignore", None),
            HandlerResponse::Reply(s) => ("Reply", Some(s.len())),
        };
        info!(
            user_id = message.user.id,
            chat_id = message.chat.id,
            response_type = %response_type,
            reply_len = ?reply_len,
            "Message handled"
        );
        Ok(())
    }
}
