//! # dbot-core
//!
//! Core types and traits for the book bot: [`Bot`], [`Handler`], message and user types,
//! reply payloads with an optional action button, and tracing initialization.
//! Transport-agnostic; used by dbot-telegram, handler-chain and book-handlers.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::Bot;
pub use error::{DbotError, HandlerError, Result};
pub use logger::init_tracing;
pub use types::{
    ButtonKind, Chat, Handler, HandlerResponse, Message, Reply, ReplyButton, TextFormat,
    ToCoreMessage, ToCoreUser, User,
};
