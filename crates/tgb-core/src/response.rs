//! The envelope every Bot API response is wrapped in.

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::{errors::Error, Result};

/// Longest slice of a non-JSON error body kept in the error message.
const RAW_BODY_PREVIEW_CHARS: usize = 200;

/// Extra information the Bot API attaches to some failures.
///
/// See <https://core.telegram.org/bots/api#responseparameters>.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseParameters {
    /// The group has been migrated to a supergroup with this identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub migrate_to_chat_id: Option<i64>,

    /// Seconds left to wait before the request can be repeated (flood control).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retry_after: Option<i64>,
}

/// `{ "ok", "result", "description", "error_code", "parameters" }`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub ok: bool,

    #[serde(default = "none", skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<ResponseParameters>,
}

// `#[serde(default)]` on a generic field would require `T: Default`.
fn none<T>() -> Option<T> {
    None
}

impl<T> ApiResponse<T> {
    /// Turn the envelope into the typed result, or into an [`Error::Api`]
    /// when the status is not 200 or `ok` is false.
    pub fn into_result(self, status: u16) -> Result<T> {
        if status != 200 || !self.ok {
            return Err(Error::Api {
                status,
                error_code: self.error_code,
                description: self.description.unwrap_or_default(),
                parameters: self.parameters,
            });
        }

        self.result
            .ok_or_else(|| Error::Decode("response is ok but has no result".to_string()))
    }
}

/// Decode a raw response body for a call that returned `status`.
///
/// The body is decoded before the status is looked at: anything that is not
/// an envelope is a decode error whatever the status, with a preview of the
/// body in the message.
pub fn decode_response<T: DeserializeOwned>(status: u16, body: &[u8]) -> Result<T> {
    match serde_json::from_slice::<ApiResponse<T>>(body) {
        Ok(envelope) => envelope.into_result(status),
        Err(e) => {
            let preview: String = String::from_utf8_lossy(body)
                .chars()
                .take(RAW_BODY_PREVIEW_CHARS)
                .collect();
            Err(Error::Decode(format!(
                "error decoding response (HTTP status {status}): {e}; body: {preview}"
            )))
        }
    }
}
