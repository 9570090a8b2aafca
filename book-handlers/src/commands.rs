//! `/start` and `/help`: fixed texts, no lookups.

use dbot_core::{Reply, ReplyButton};
use teloxide::utils::command::BotCommands;
use teloxide::utils::html::{bold, code_inline, escape};

pub const HUB_BUTTON_LABEL: &str = "🎨 Open TheBookieAI Hub";

/// Commands the bot answers itself.
#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase")]
pub enum Command {
    #[command(description = "Welcome message and instructions.")]
    Start,
    #[command(description = "Shows this help message.")]
    Help,
}

/// Classification of an incoming text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedCommand {
    Known(Command),
    /// Starts with `/` but is not ours (unknown name, or addressed to another bot).
    Unknown(String),
    NotCommand,
}

/// Parses the first word of `text` as a command. Arguments after it (e.g. `/start ref42`) are ignored.
/// `bot_username` lets `/help@<bot_username>` match.
pub fn parse_command(text: &str, bot_username: Option<&str>) -> ParsedCommand {
    let text = text.trim();
    if !text.starts_with('/') {
        return ParsedCommand::NotCommand;
    }
    let head = text.split_whitespace().next().unwrap_or(text);
    match Command::parse(head, bot_username.unwrap_or("")) {
        Ok(command) => ParsedCommand::Known(command),
        Err(_) => ParsedCommand::Unknown(head.to_string()),
    }
}

/// Welcome text greeting `display_name`, with one Web App button opening the hub.
pub fn welcome_reply(display_name: &str, hub_url: &str) -> Reply {
    Reply::html(format!(
        "👋 {} 📖\n\n\
         I'm your personal AI-powered librarian. I can help you find free PDF versions of your favorite books in a flash.\n\n\
         To get started, simply type the name of the book you're looking for.\n\n\
         {} {}\n\n\
         Let the reading adventure begin! ✨",
        bold(&format!("Welcome to TheBookieAI, {}!", escape(display_name))),
        bold("For example:"),
        code_inline("Pride and Prejudice"),
    ))
    .with_button(ReplyButton::web_app(HUB_BUTTON_LABEL, hub_url))
}

/// Help text listing the commands.
pub fn help_reply() -> Reply {
    Reply::html(format!(
        "🆘 {}\n\n\
         Simply send me the name of a book, and I'll do my best to find a free PDF or a preview link for you.\n\n\
         {}\n\
         {} - Welcome message and instructions.\n\
         {} - Shows this help message.\n\n\
         If you encounter any issues, please make sure you're typing the book title correctly.",
        bold("How I Can Help You"),
        bold("Commands:"),
        code_inline("/start"),
        code_inline("/help"),
    ))
}
