//! Webhook status and the secret-token header contract.

use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Header carrying the secret token on every webhook request Telegram makes,
/// and on our own `setWebhook` call when a token is configured.
pub const SECRET_TOKEN_HEADER: &str = "X-Telegram-Bot-Api-Secret-Token";

/// Current webhook status.
///
/// See <https://core.telegram.org/bots/api#webhookinfo>.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookInfo {
    /// Empty if no webhook is set up.
    pub url: String,
    pub has_custom_certificate: bool,
    /// Number of updates awaiting delivery.
    pub pending_update_count: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    /// Unix time of the most recent delivery error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_error_date: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_error_message: Option<String>,
    /// Unix time of the most recent error synchronizing with Telegram datacenters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_synchronization_error_date: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_connections: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_updates: Option<Vec<String>>,
}

impl WebhookInfo {
    pub fn is_set(&self) -> bool {
        !self.url.is_empty()
    }

    pub fn last_error_at(&self) -> Option<DateTime<Utc>> {
        self.last_error_date
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
    }
}

fn secret_token_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Za-z0-9_-]{1,256}$").expect("valid regex"))
}

/// 1-256 characters, only `A-Z`, `a-z`, `0-9`, `_` and `-`.
pub fn is_valid_secret_token(token: &str) -> bool {
    secret_token_regex().is_match(token)
}
