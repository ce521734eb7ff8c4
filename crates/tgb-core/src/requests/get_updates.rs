use serde::{Deserialize, Serialize};

use crate::types::UpdateKind;

/// Parameters for `getUpdates` (long polling).
///
/// See <https://core.telegram.org/bots/api#getupdates>.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetUpdatesRequest {
    /// First update to return; confirms every update before it. Negative
    /// values count from the end of the queue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
    /// 1-100, defaults to 100 on the server.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    /// Long-poll timeout in seconds, enforced by the server. 0 means short polling.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_updates: Option<Vec<String>>,
}

impl GetUpdatesRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(mut self, offset: i64) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn timeout(mut self, timeout: i64) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn allowed_updates(mut self, kinds: impl IntoIterator<Item = UpdateKind>) -> Self {
        self.allowed_updates = Some(kinds.into_iter().map(String::from).collect());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_only_set_fields_in_order() {
        let req = GetUpdatesRequest::new().offset(100).limit(10).timeout(0);
        assert_eq!(
            serde_json::to_string(&req).unwrap(),
            r#"{"offset":100,"limit":10,"timeout":0}"#
        );
    }

    #[test]
    fn empty_request_is_an_empty_object() {
        assert_eq!(
            serde_json::to_string(&GetUpdatesRequest::default()).unwrap(),
            "{}"
        );
    }

    #[test]
    fn allowed_updates_use_wire_names_and_round_trip() {
        let req = GetUpdatesRequest::new()
            .offset(-1)
            .allowed_updates([UpdateKind::Message, UpdateKind::CallbackQuery]);
        let v = serde_json::to_value(&req).unwrap();
        assert_eq!(
            v,
            json!({"offset": -1, "allowed_updates": ["message", "callback_query"]})
        );
        let back: GetUpdatesRequest = serde_json::from_value(v).unwrap();
        assert_eq!(back, req);
    }
}
