//! # Book handlers
//!
//! The message flow of the book bot, in dependency order:
//!
//! 1. [`select_result`]: picks the first downloadable candidate, else the first candidate as preview-only.
//! 2. [`format_result`]: turns a [`SearchResult`] into reply text plus at most one link button.
//! 3. [`BookSearchHandler`]: per message, looks the book up, selects, formats and replies.
//!
//! [`CommandHandler`] answers `/start` and `/help` before any search; [`LoggingHandler`] logs
//! every message and its outcome.

mod book_search_handler;
mod command_handler;
mod commands;
mod formatter;
mod logging_handler;
mod selector;

pub use book_search_handler::BookSearchHandler;
pub use command_handler::CommandHandler;
pub use commands::{help_reply, parse_command, welcome_reply, Command, ParsedCommand, HUB_BUTTON_LABEL};
pub use formatter::{
    fallback_reply, format_result, searching_notice, unavailable_reply, DOWNLOAD_BUTTON_LABEL,
    FALLBACK_MESSAGE, PREVIEW_BUTTON_LABEL, UNAVAILABLE_MESSAGE,
};
pub use logging_handler::LoggingHandler;
pub use selector::{select_result, SearchResult};
