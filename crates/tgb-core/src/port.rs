use async_trait::async_trait;

use crate::{
    requests::{DeleteWebhookRequest, GetUpdatesRequest, SetWebhookRequest},
    types::{Update, WebhookInfo},
    Result,
};

/// The Bot API operations this workspace implements.
///
/// `tgb_http::Bot` is the real implementation; tests and callers can swap in
/// their own. Every call is a single request/response round trip.
#[async_trait]
pub trait BotApi: Send + Sync {
    /// Long-poll for updates. The caller owns the offset.
    async fn get_updates(&self, request: &GetUpdatesRequest) -> Result<Vec<Update>>;

    async fn set_webhook(&self, request: &SetWebhookRequest) -> Result<bool>;

    async fn delete_webhook(&self, request: &DeleteWebhookRequest) -> Result<bool>;

    async fn get_webhook_info(&self) -> Result<WebhookInfo>;
}
