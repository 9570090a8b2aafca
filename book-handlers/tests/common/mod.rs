#![allow(dead_code)]

pub mod mock_bot;

use books_client::{BookCandidate, BookLookup, LookupError};
use chrono::Utc;
use dbot_core::{Chat, Message, User};
use std::sync::atomic::{AtomicUsize, Ordering};

pub fn make_message(content: &str) -> Message {
    Message {
        id: "msg_1".to_string(),
        user: User {
            id: 123,
            username: Some("lizzy".to_string()),
            first_name: Some("Elizabeth".to_string()),
            last_name: Some("Bennet".to_string()),
        },
        chat: Chat {
            id: 456,
            chat_type: "private".to_string(),
        },
        content: content.to_string(),
        message_type: "text".to_string(),
        created_at: Utc::now(),
    }
}

/// What a [`StubLookup`] answers with.
pub enum StubAnswer {
    Candidates(Vec<BookCandidate>),
    Unavailable,
}

/// BookLookup stub that counts calls and returns a fixed answer.
pub struct StubLookup {
    answer: StubAnswer,
    pub calls: AtomicUsize,
}

impl StubLookup {
    pub fn new(answer: StubAnswer) -> Self {
        Self {
            answer,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl BookLookup for StubLookup {
    async fn search(&self, _query: &str) -> Result<Vec<BookCandidate>, LookupError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.answer {
            StubAnswer::Candidates(c) => Ok(c.clone()),
            StubAnswer::Unavailable => Err(LookupError::Unavailable("connection reset".to_string())),
        }
    }
}
