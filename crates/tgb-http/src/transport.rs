use reqwest::{header::CONTENT_TYPE, multipart::Form, Method, Response};
use tgb_core::{errors::Error, Result};

use crate::Bot;

/// Request body for [`Bot::send_request`].
pub enum Payload {
    Empty,
    /// Pre-encoded JSON.
    Json(Vec<u8>),
    /// Sets its own `multipart/form-data; boundary=...` content type.
    Multipart(Form),
}

impl Bot {
    /// Send one request to `<api_url>/bot<token>/<operation>` and hand back
    /// the raw response.
    ///
    /// The body is not read and the status is not checked here. Failing to
    /// build or send the request is an [`Error::Transport`].
    pub async fn send_request(
        &self,
        method: Method,
        operation: &str,
        payload: Payload,
        headers: &[(&str, &str)],
    ) -> Result<Response> {
        let mut req = self
            .http
            .request(method.clone(), self.config.endpoint(operation));

        req = match payload {
            Payload::Empty => req.header(CONTENT_TYPE, "application/json"),
            Payload::Json(body) => req.header(CONTENT_TYPE, "application/json").body(body),
            Payload::Multipart(form) => req.multipart(form),
        };
        for (name, value) in headers {
            req = req.header(*name, *value);
        }

        tracing::debug!(%method, operation, "bot api request");

        req.send()
            .await
            .map_err(|e| transport_error(&method, operation, e))
    }
}

/// The request URL embeds the bot token, so it is stripped from the cause.
pub(crate) fn transport_error(method: &Method, operation: &str, err: reqwest::Error) -> Error {
    Error::Transport {
        method: method.to_string(),
        operation: operation.to_string(),
        source: Box::new(err.without_url()),
    }
}
