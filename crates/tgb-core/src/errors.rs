use crate::response::ResponseParameters;

/// Where a failure originated.
///
/// Callers use this to decide what to do next; the library itself never
/// retries based on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Provenance {
    /// Bad local input or a response body that could not be decoded.
    Local,
    /// The request could not be built or the network exchange failed.
    Transport,
    /// The Bot API answered with a non-OK status or `ok: false`.
    Remote,
}

/// Error type shared by every crate in the workspace.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(String),

    #[error("encode error: {0}")]
    Encode(String),

    #[error("decode error: {0}")]
    Decode(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("error sending {method} request to {operation}: {source}")]
    Transport {
        method: String,
        operation: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error(
        "HTTP status {status}, Telegram code {}, Telegram API error: {description}",
        display_code(.error_code)
    )]
    Api {
        status: u16,
        error_code: Option<i64>,
        description: String,
        parameters: Option<ResponseParameters>,
    },
}

fn display_code(code: &Option<i64>) -> String {
    code.map(|c| c.to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

impl Error {
    pub fn provenance(&self) -> Provenance {
        match self {
            Error::Config(_)
            | Error::Encode(_)
            | Error::Decode(_)
            | Error::Json(_)
            | Error::Io(_) => Provenance::Local,
            Error::Transport { .. } => Provenance::Transport,
            Error::Api { .. } => Provenance::Remote,
        }
    }

    /// Seconds the Bot API asked us to wait, if it did (flood control).
    pub fn retry_after(&self) -> Option<i64> {
        match self {
            Error::Api {
                parameters: Some(p),
                ..
            } => p.retry_after,
            _ => None,
        }
    }

    /// New supergroup id when the target group was migrated.
    pub fn migrate_to_chat_id(&self) -> Option<i64> {
        match self {
            Error::Api {
                parameters: Some(p),
                ..
            } => p.migrate_to_chat_id,
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_message_carries_status_code_and_description() {
        let err = Error::Api {
            status: 200,
            error_code: Some(401),
            description: "Unauthorized".to_string(),
            parameters: None,
        };
        assert_eq!(
            err.to_string(),
            "HTTP status 200, Telegram code 401, Telegram API error: Unauthorized"
        );
        assert_eq!(err.provenance(), Provenance::Remote);
    }

    #[test]
    fn missing_error_code_is_reported_as_unknown() {
        let err = Error::Api {
            status: 502,
            error_code: None,
            description: "Bad Gateway".to_string(),
            parameters: None,
        };
        assert!(err.to_string().contains("Telegram code unknown"));
    }

    #[test]
    fn retry_after_is_exposed_but_not_acted_on() {
        let err = Error::Api {
            status: 429,
            error_code: Some(429),
            description: "Too Many Requests: retry after 7".to_string(),
            parameters: Some(ResponseParameters {
                retry_after: Some(7),
                migrate_to_chat_id: None,
            }),
        };
        assert_eq!(err.retry_after(), Some(7));
        assert_eq!(err.migrate_to_chat_id(), None);
        assert_eq!(Error::Decode("x".into()).retry_after(), None);
    }

    #[test]
    fn provenance_of_local_and_transport_errors() {
        assert_eq!(Error::Encode("x".into()).provenance(), Provenance::Local);
        let transport = Error::Transport {
            method: "POST".to_string(),
            operation: "getUpdates".to_string(),
            source: "connection refused".into(),
        };
        assert_eq!(transport.provenance(), Provenance::Transport);
        assert_eq!(
            transport.to_string(),
            "error sending POST request to getUpdates: connection refused"
        );
    }
}
