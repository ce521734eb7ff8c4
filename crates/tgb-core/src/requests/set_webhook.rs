use super::FormPart;
use crate::{
    errors::Error,
    types::{webhook::is_valid_secret_token, InputFile, UpdateKind},
    Result,
};

/// Parameters for `setWebhook`, sent as `multipart/form-data` so a
/// self-signed certificate can be uploaded alongside.
///
/// See <https://core.telegram.org/bots/api#setwebhook>.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SetWebhookRequest {
    /// HTTPS URL to send updates to. Empty removes the webhook.
    pub url: String,
    /// Public key certificate, so the root certificate in use can be checked.
    pub certificate: Option<InputFile>,
    /// Fixed IP to deliver to instead of the one resolved through DNS.
    pub ip_address: Option<String>,
    /// 1-100, defaults to 40 on the server.
    pub max_connections: Option<i64>,
    pub allowed_updates: Option<Vec<String>>,
    pub drop_pending_updates: Option<bool>,
    /// Echoed back in the `X-Telegram-Bot-Api-Secret-Token` header of every
    /// webhook request.
    pub secret_token: Option<String>,
}

impl SetWebhookRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn certificate(mut self, file: InputFile) -> Self {
        self.certificate = Some(file);
        self
    }

    pub fn ip_address(mut self, ip: impl Into<String>) -> Self {
        self.ip_address = Some(ip.into());
        self
    }

    pub fn max_connections(mut self, n: i64) -> Self {
        self.max_connections = Some(n);
        self
    }

    pub fn allowed_updates(mut self, kinds: impl IntoIterator<Item = UpdateKind>) -> Self {
        self.allowed_updates = Some(kinds.into_iter().map(String::from).collect());
        self
    }

    pub fn drop_pending_updates(mut self, drop: bool) -> Self {
        self.drop_pending_updates = Some(drop);
        self
    }

    pub fn secret_token(mut self, token: impl Into<String>) -> Self {
        self.secret_token = Some(token.into());
        self
    }

    /// The secret token, checked against the allowed header charset.
    fn validated_secret_token(&self) -> Result<Option<&str>> {
        match self.secret_token.as_deref() {
            Some(token) if !is_valid_secret_token(token) => Err(Error::Encode(
                "secret_token must be 1-256 characters of A-Z, a-z, 0-9, _ and -".to_string(),
            )),
            other => Ok(other),
        }
    }

    /// Encode the request as multipart fields, reading the certificate if any.
    ///
    /// Only fields that are set produce a part; `url` is always present.
    pub async fn form_parts(&self) -> Result<Vec<FormPart>> {
        let secret_token = self.validated_secret_token()?;

        let mut parts = vec![FormPart::text("url", self.url.as_str())];

        if let Some(cert) = &self.certificate {
            parts.push(FormPart::File {
                name: "certificate".to_string(),
                file_name: cert.file_name(),
                bytes: cert.read().await?,
            });
        }
        if let Some(ip) = &self.ip_address {
            parts.push(FormPart::text("ip_address", ip.as_str()));
        }
        if let Some(n) = self.max_connections {
            parts.push(FormPart::text("max_connections", n.to_string()));
        }
        if let Some(kinds) = &self.allowed_updates {
            parts.push(FormPart::text(
                "allowed_updates",
                serde_json::to_string(kinds)?,
            ));
        }
        if let Some(drop) = self.drop_pending_updates {
            parts.push(FormPart::text("drop_pending_updates", drop.to_string()));
        }
        if let Some(token) = secret_token {
            parts.push(FormPart::text("secret_token", token));
        }

        Ok(parts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn url_only_yields_a_single_url_field() {
        let parts = SetWebhookRequest::new("https://example.com/hook")
            .form_parts()
            .await
            .unwrap();
        assert_eq!(parts, vec![FormPart::text("url", "https://example.com/hook")]);
    }

    #[tokio::test]
    async fn every_field_is_encoded() {
        let req = SetWebhookRequest::new("https://example.com/hook")
            .certificate(InputFile::memory("public.pem", b"PEM".to_vec()))
            .ip_address("203.0.113.7")
            .max_connections(40)
            .allowed_updates([UpdateKind::Message, UpdateKind::EditedChannelPost])
            .drop_pending_updates(true)
            .secret_token("abc_DEF-123");
        let parts = req.form_parts().await.unwrap();

        let names: Vec<&str> = parts.iter().map(FormPart::name).collect();
        assert_eq!(
            names,
            [
                "url",
                "certificate",
                "ip_address",
                "max_connections",
                "allowed_updates",
                "drop_pending_updates",
                "secret_token"
            ]
        );
        assert_eq!(
            parts[1],
            FormPart::File {
                name: "certificate".to_string(),
                file_name: "public.pem".to_string(),
                bytes: b"PEM".to_vec(),
            }
        );
        assert_eq!(
            parts[4],
            FormPart::text("allowed_updates", r#"["message","edited_channel_post"]"#)
        );
        assert_eq!(parts[5], FormPart::text("drop_pending_updates", "true"));
    }

    #[tokio::test]
    async fn invalid_secret_token_is_rejected_locally() {
        let err = SetWebhookRequest::new("https://example.com/hook")
            .secret_token("not allowed!")
            .form_parts()
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Encode(_)));
        assert_eq!(err.provenance(), crate::Provenance::Local);
    }

    #[tokio::test]
    async fn unreadable_certificate_is_a_local_error() {
        let err = SetWebhookRequest::new("https://example.com/hook")
            .certificate(InputFile::path("/nonexistent/tgb/public.pem"))
            .form_parts()
            .await
            .unwrap_err();
        assert_eq!(err.provenance(), crate::Provenance::Local);
    }
}
