//! `reqwest`-backed Telegram Bot API client.
//!
//! Each operation is one HTTP round trip: encode the typed request, send it,
//! decode the response envelope. Nothing is retried, queued or cached.

use std::sync::Arc;

use tgb_core::{errors::Error, BotConfig, Result};

mod methods;
mod multipart;
mod transport;

pub use tgb_core::{port::BotApi, requests, types};
pub use transport::Payload;

/// A bot client. Cheap to clone and safe to share between tasks.
#[derive(Clone, Debug)]
pub struct Bot {
    http: reqwest::Client,
    config: Arc<BotConfig>,
}

impl Bot {
    /// Client for the public Bot API server.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Self::with_config(BotConfig::new(token))
    }

    pub fn with_config(config: BotConfig) -> Result<Self> {
        config.validate()?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| Error::Config(format!("failed to build http client: {e}")))?;

        Ok(Self {
            http,
            config: Arc::new(config),
        })
    }

    pub fn config(&self) -> &BotConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn invalid_config_is_rejected_before_any_request() {
        let err = Bot::new("").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn clones_share_config() {
        let bot = Bot::with_config(
            BotConfig::new("123:abc")
                .with_api_url("http://127.0.0.1:8081")
                .with_timeout(Duration::from_secs(40)),
        )
        .unwrap();
        let copy = bot.clone();
        assert_eq!(copy.config().api_url, "http://127.0.0.1:8081");
        assert_eq!(copy.config().timeout, Some(Duration::from_secs(40)));
    }
}
