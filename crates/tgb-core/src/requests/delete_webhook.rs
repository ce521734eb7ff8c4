use serde::{Deserialize, Serialize};

/// Parameters for `deleteWebhook`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteWebhookRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drop_pending_updates: Option<bool>,
}

impl DeleteWebhookRequest {
    pub fn drop_pending_updates(drop: bool) -> Self {
        Self {
            drop_pending_updates: Some(drop),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_flag_only_when_set() {
        assert_eq!(
            serde_json::to_string(&DeleteWebhookRequest::default()).unwrap(),
            "{}"
        );
        let req = DeleteWebhookRequest::drop_pending_updates(true);
        let s = serde_json::to_string(&req).unwrap();
        assert_eq!(s, r#"{"drop_pending_updates":true}"#);
        assert_eq!(serde_json::from_str::<DeleteWebhookRequest>(&s).unwrap(), req);
    }
}
