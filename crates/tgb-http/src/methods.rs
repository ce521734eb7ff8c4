use async_trait::async_trait;
use reqwest::Method;
use serde::de::DeserializeOwned;
use tgb_core::{
    errors::Error,
    port::BotApi,
    requests::{DeleteWebhookRequest, FormPart, GetUpdatesRequest, SetWebhookRequest},
    response::decode_response,
    types::{Update, WebhookInfo, SECRET_TOKEN_HEADER},
    Result,
};

use crate::{multipart::into_form, transport::transport_error, Bot, Payload};

impl Bot {
    /// `getUpdates`: long-poll for incoming updates.
    ///
    /// The server holds the request for up to `request.timeout` seconds. Pass
    /// the last update's [`Update::next_offset`] on the next call to confirm it.
    pub async fn get_updates(&self, request: &GetUpdatesRequest) -> Result<Vec<Update>> {
        let body = serde_json::to_vec(request)?;
        self.call(Method::POST, "getUpdates", Payload::Json(body), &[])
            .await
    }

    /// `setWebhook`: register an HTTPS endpoint for update delivery.
    ///
    /// Sent as multipart so a certificate can ride along. A configured secret
    /// token goes out both as a form field and as the
    /// `X-Telegram-Bot-Api-Secret-Token` header.
    pub async fn set_webhook(&self, request: &SetWebhookRequest) -> Result<bool> {
        let parts = request.form_parts().await?;
        // Already checked against the header charset by `form_parts`.
        let secret_token = parts.iter().find_map(|part| match part {
            FormPart::Text { name, value } if name == "secret_token" => Some(value.clone()),
            _ => None,
        });
        let form = into_form(parts)?;

        let headers: Vec<(&str, &str)> = secret_token
            .as_deref()
            .map(|token| (SECRET_TOKEN_HEADER, token))
            .into_iter()
            .collect();

        self.call(
            Method::POST,
            "setWebhook",
            Payload::Multipart(form),
            &headers,
        )
        .await
    }

    /// `deleteWebhook`: switch back to `getUpdates`.
    pub async fn delete_webhook(&self, request: &DeleteWebhookRequest) -> Result<bool> {
        let body = serde_json::to_vec(request)?;
        self.call(Method::POST, "deleteWebhook", Payload::Json(body), &[])
            .await
    }

    /// `getWebhookInfo`: current webhook status. `url` is empty when using
    /// `getUpdates`.
    pub async fn get_webhook_info(&self) -> Result<WebhookInfo> {
        self.call(Method::GET, "getWebhookInfo", Payload::Empty, &[])
            .await
    }

    async fn call<T: DeserializeOwned>(
        &self,
        method: Method,
        operation: &str,
        payload: Payload,
        headers: &[(&str, &str)],
    ) -> Result<T> {
        let resp = self
            .send_request(method.clone(), operation, payload, headers)
            .await?;
        let status = resp.status().as_u16();
        let body = resp
            .bytes()
            .await
            .map_err(|e| transport_error(&method, operation, e))?;

        tracing::debug!(operation, status, bytes = body.len(), "bot api response");

        decode_response(status, &body).map_err(|err| {
            if let Error::Api {
                error_code,
                description,
                ..
            } = &err
            {
                tracing::warn!(
                    operation,
                    status,
                    error_code = ?error_code,
                    description = %description,
                    "bot api call failed"
                );
            }
            err
        })
    }
}

#[async_trait]
impl BotApi for Bot {
    async fn get_updates(&self, request: &GetUpdatesRequest) -> Result<Vec<Update>> {
        Bot::get_updates(self, request).await
    }

    async fn set_webhook(&self, request: &SetWebhookRequest) -> Result<bool> {
        Bot::set_webhook(self, request).await
    }

    async fn delete_webhook(&self, request: &DeleteWebhookRequest) -> Result<bool> {
        Bot::delete_webhook(self, request).await
    }

    async fn get_webhook_info(&self) -> Result<WebhookInfo> {
        Bot::get_webhook_info(self).await
    }
}
