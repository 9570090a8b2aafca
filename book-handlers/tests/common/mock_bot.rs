//! Mock implementation of [`dbot_core::Bot`] for handler tests.
//!
//! Records every reply so tests can assert on text and buttons without hitting Telegram.
//! Can be told to fail one specific send to exercise error paths.

use async_trait::async_trait;
use dbot_core::{Bot, Chat, DbotError, Reply, Result};
use std::sync::Mutex;

/// One recorded send.
#[derive(Debug, Clone)]
pub struct SentRecord {
    pub chat_id: i64,
    pub reply: Reply,
}

#[derive(Default)]
pub struct MockBot {
    sent: Mutex<Vec<SentRecord>>,
    /// 1-based index of the send call that fails; None means every send succeeds.
    fail_on_call: Option<usize>,
    calls: Mutex<usize>,
}

impl MockBot {
    pub fn new() -> Self {
        Self::default()
    }

    /// MockBot whose `n`-th send (1-based) returns an error and is not recorded.
    pub fn failing_on(n: usize) -> Self {
        Self {
            fail_on_call: Some(n),
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<SentRecord> {
        self.sent.lock().unwrap().clone()
    }

    pub fn last_reply(&self) -> Option<Reply> {
        self.sent.lock().unwrap().last().map(|r| r.reply.clone())
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.send_reply(chat, &Reply::plain(text)).await
    }

    async fn send_reply(&self, chat: &Chat, reply: &Reply) -> Result<()> {
        let call = {
            let mut calls = self.calls.lock().unwrap();
            *calls += 1;
            *calls
        };
        if self.fail_on_call == Some(call) {
            return Err(DbotError::Bot("simulated send failure".to_string()));
        }
        self.sent.lock().unwrap().push(SentRecord {
            chat_id: chat.id,
            reply: reply.clone(),
        });
        Ok(())
    }
}
