//! Application config loaded once at startup from env and passed explicitly to the components.

use books_client::{BooksApiConfig, DEFAULT_BOOKS_API_URL, DEFAULT_MAX_RESULTS, DEFAULT_TIMEOUT_SECS};
use dbot_core::{DbotError, Result};
use dbot_telegram::TelegramConfig;
use std::env;
use std::time::Duration;

pub const DEFAULT_WEB_APP_URL: &str = "https://example.com";
pub const DEFAULT_LOG_FILE: &str = "logs/bookie-bot.log";

#[derive(Debug, Clone)]
pub struct BotConfig {
    /// BOT_TOKEN (or TELEGRAM_BOT_TOKEN), TELEGRAM_API_URL
    pub telegram: TelegramConfig,
    /// WEB_APP_URL: hub opened from the /start button
    pub web_app_url: String,
    /// LOG_FILE
    pub log_file: String,
    /// BOOKS_API_URL, BOOKS_API_KEY, BOOKS_MAX_RESULTS, BOOKS_API_TIMEOUT_SECS
    pub books: BooksApiConfig,
}

impl BotConfig {
    /// Load from environment variables. `token` overrides BOT_TOKEN if provided.
    /// A missing token or an invalid URL is a [`DbotError::Config`].
    pub fn load(token: Option<String>) -> Result<Self> {
        let telegram = TelegramConfig::from_env(token)?;
        let web_app_url =
            env::var("WEB_APP_URL").unwrap_or_else(|_| DEFAULT_WEB_APP_URL.to_string());
        let log_file = log_file_from_env();

        let books = BooksApiConfig {
            endpoint: env::var("BOOKS_API_URL")
                .unwrap_or_else(|_| DEFAULT_BOOKS_API_URL.to_string()),
            api_key: env::var("BOOKS_API_KEY").ok().filter(|k| !k.is_empty()),
            max_results: env::var("BOOKS_MAX_RESULTS")
                .ok()
                .and_then(|s| s.parse().ok())
                .filter(|n| *n > 0)
                .unwrap_or(DEFAULT_MAX_RESULTS),
            timeout: Duration::from_secs(
                env::var("BOOKS_API_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .filter(|n| *n > 0)
                    .unwrap_or(DEFAULT_TIMEOUT_SECS),
            ),
        };

        let config = Self {
            telegram,
            web_app_url,
            log_file,
            books,
        };
        config.validate()?;
        Ok(config)
    }

    /// Every configured URL must parse.
    pub fn validate(&self) -> Result<()> {
        self.telegram.validate()?;
        for (name, value) in [
            ("WEB_APP_URL", &self.web_app_url),
            ("BOOKS_API_URL", &self.books.endpoint),
        ] {
            if reqwest::Url::parse(value).is_err() {
                return Err(DbotError::Config(format!(
                    "{} is not a valid URL: {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

/// LOG_FILE or [`DEFAULT_LOG_FILE`]. Read before the rest of the config so startup errors are logged.
pub fn log_file_from_env() -> String {
    env::var("LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string())
}
