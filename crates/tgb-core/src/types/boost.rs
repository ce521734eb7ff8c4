use serde::{Deserialize, Serialize};

use super::{chat::Chat, user::User};

/// Where a chat boost came from, selected by `source`.
///
/// See <https://core.telegram.org/bots/api#chatboostsource>.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum ChatBoostSource {
    /// A user subscribed to Telegram Premium or gifted one to another user.
    Premium { user: User },
    /// A Premium subscription created by the chat administrators.
    GiftCode { user: User },
    Giveaway {
        giveaway_message_id: i64,
        /// Absent while the prize is unclaimed.
        #[serde(skip_serializing_if = "Option::is_none")]
        user: Option<User>,
        #[serde(skip_serializing_if = "Option::is_none")]
        prize_star_count: Option<i64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        is_unclaimed: Option<bool>,
    },
    #[serde(other)]
    Unknown,
}

impl ChatBoostSource {
    pub fn user(&self) -> Option<&User> {
        match self {
            ChatBoostSource::Premium { user } | ChatBoostSource::GiftCode { user } => Some(user),
            ChatBoostSource::Giveaway { user, .. } => user.as_ref(),
            ChatBoostSource::Unknown => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatBoost {
    pub boost_id: String,
    pub add_date: i64,
    pub expiration_date: i64,
    pub source: ChatBoostSource,
}

/// A chat boost was added or changed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatBoostUpdated {
    pub chat: Chat,
    pub boost: ChatBoost,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatBoostRemoved {
    pub chat: Chat,
    pub boost_id: String,
    pub remove_date: i64,
    pub source: ChatBoostSource,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn source_discriminator_selects_variant() {
        let boost: ChatBoost = serde_json::from_value(json!({
            "boost_id": "b1",
            "add_date": 1,
            "expiration_date": 2,
            "source": {"source": "giveaway", "giveaway_message_id": 77, "is_unclaimed": true}
        }))
        .unwrap();
        match &boost.source {
            ChatBoostSource::Giveaway {
                giveaway_message_id,
                user,
                is_unclaimed,
                ..
            } => {
                assert_eq!(*giveaway_message_id, 77);
                assert!(user.is_none());
                assert_eq!(*is_unclaimed, Some(true));
            }
            other => panic!("unexpected source: {other:?}"),
        }
        assert!(boost.source.user().is_none());
    }

    #[test]
    fn premium_source_has_user() {
        let src: ChatBoostSource = serde_json::from_value(json!({
            "source": "premium",
            "user": {"id": 3, "is_bot": false, "first_name": "P"}
        }))
        .unwrap();
        assert_eq!(src.user().map(|u| u.id), Some(3));
    }

    #[test]
    fn unknown_source_decodes() {
        let src: ChatBoostSource =
            serde_json::from_value(json!({"source": "stars_purchase", "amount": 5})).unwrap();
        assert_eq!(src, ChatBoostSource::Unknown);
    }
}
