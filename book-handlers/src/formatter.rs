//! Reply formatting. Pure functions: no network, no bot.
//!
//! Replies use the Telegram HTML subset; titles, authors and the user's query are escaped.

use books_client::BookCandidate;
use dbot_core::{Reply, ReplyButton};
use teloxide::utils::html::{bold, escape};

use crate::selector::SearchResult;

pub const DOWNLOAD_BUTTON_LABEL: &str = "⬇️ Download PDF";
pub const PREVIEW_BUTTON_LABEL: &str = "👀 Preview";

pub const UNAVAILABLE_MESSAGE: &str =
    "⚠️ Sorry, I can't reach the book library right now. Please try again later.";
pub const FALLBACK_MESSAGE: &str =
    "⚠️ Sorry, something went wrong while looking for your book. Please try again.";

fn book_details(book: &BookCandidate) -> String {
    format!(
        "📚 {} {}\n✒️ {} {}",
        bold("Title:"),
        escape(&book.title),
        bold("Author:"),
        escape(&book.authors_display())
    )
}

/// Builds the reply for a search outcome. `query` is the trimmed text the user sent.
pub fn format_result(result: &SearchResult, query: &str) -> Reply {
    match result {
        SearchResult::NotFound => Reply::html(format!(
            "❌ {} I couldn't find any book matching '{}'.\n\n\
             Please double-check the spelling. My library is always growing, so feel free to try again later!",
            bold("Sorry!"),
            escape(query)
        )),
        SearchResult::Downloadable(book) => {
            // Books flagged downloadable without a reader link still get their preview.
            let link = book.direct_link.as_ref().or(book.preview_link.as_ref());
            let intro = format!("✅ {} I found your book.\n\n{}", bold("Success!"), book_details(book));
            match link {
                Some(link) => Reply::html(format!(
                    "{}\n\nClick the button below to get the PDF.",
                    intro
                ))
                .with_button(ReplyButton::url(DOWNLOAD_BUTTON_LABEL, link.as_str())),
                None => Reply::html(format!(
                    "{}\n\nA free PDF exists, but the library did not share a link for it.",
                    intro
                )),
            }
        }
        SearchResult::PreviewOnly(book) => {
            let intro = format!(
                "📖 {}\n\n{}",
                bold("I found it, but there's no free version available."),
                book_details(book)
            );
            match &book.preview_link {
                Some(link) => Reply::html(format!(
                    "{}\n\nYou can take a look at the preview with the button below.",
                    intro
                ))
                .with_button(ReplyButton::url(PREVIEW_BUTTON_LABEL, link.as_str())),
                None => Reply::html(format!("{}\n\nNo preview is available either.", intro)),
            }
        }
    }
}

/// Progress notice sent before the lookup starts.
pub fn searching_notice(query: &str) -> Reply {
    Reply::plain(format!("Searching for '{}'... 🕵️‍♂️", query))
}

/// Reply for an unreachable book service.
pub fn unavailable_reply() -> Reply {
    Reply::plain(UNAVAILABLE_MESSAGE)
}

/// Reply for any other failure while handling a search.
pub fn fallback_reply() -> Reply {
    Reply::plain(FALLBACK_MESSAGE)
}
