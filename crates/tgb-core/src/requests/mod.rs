//! Typed request bodies for each Bot API operation.

mod delete_webhook;
mod get_updates;
mod set_webhook;

pub use delete_webhook::DeleteWebhookRequest;
pub use get_updates::GetUpdatesRequest;
pub use set_webhook::SetWebhookRequest;

/// One field of a `multipart/form-data` body, independent of any HTTP client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormPart {
    Text {
        name: String,
        value: String,
    },
    File {
        name: String,
        file_name: String,
        bytes: Vec<u8>,
    },
}

impl FormPart {
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Text {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            FormPart::Text { name, .. } | FormPart::File { name, .. } => name,
        }
    }
}
