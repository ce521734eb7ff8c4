use std::{fmt, time::Duration};

use crate::{errors::Error, Result};

pub const DEFAULT_API_URL: &str = "https://api.telegram.org";

/// Connection settings for a bot.
///
/// Built in code; nothing is read from the environment.
#[derive(Clone, PartialEq, Eq)]
pub struct BotConfig {
    pub token: String,
    /// Scheme and host of the Bot API server, without a trailing slash.
    pub api_url: String,
    /// Whole-request timeout for the HTTP client. `None` leaves it unbounded,
    /// so long polls are limited only by the server-side `timeout`.
    pub timeout: Option<Duration>,
}

impl BotConfig {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            api_url: DEFAULT_API_URL.to_string(),
            timeout: None,
        }
    }

    /// Point at a different server, e.g. a local Bot API server or a test mock.
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.token.trim().is_empty() {
            return Err(Error::Config("bot token is required".to_string()));
        }
        if self
            .token
            .chars()
            .any(|c| c.is_whitespace() || c == '/')
        {
            return Err(Error::Config(
                "bot token must not contain whitespace or '/'".to_string(),
            ));
        }
        if !(self.api_url.starts_with("https://") || self.api_url.starts_with("http://")) {
            return Err(Error::Config(format!(
                "api url must start with http:// or https://, got {:?}",
                self.api_url
            )));
        }
        Ok(())
    }

    /// `<api_url>/bot<token>/<operation>`.
    pub fn endpoint(&self, operation: &str) -> String {
        format!("{}/bot{}/{}", self.api_url, self.token, operation)
    }
}

impl fmt::Debug for BotConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BotConfig")
            .field("token", &redact(&self.token))
            .field("api_url", &self.api_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Keep the bot id (the part before ':') and hide the secret.
fn redact(token: &str) -> String {
    match token.split_once(':') {
        Some((id, _)) => format!("{id}:***"),
        None => "***".to_string(),
    }
}
