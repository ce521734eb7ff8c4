use serde::{Deserialize, Serialize};

use super::media::PhotoSize;

/// A Telegram user or bot.
///
/// See <https://core.telegram.org/bots/api#user>.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// May have more than 32 significant bits; at most 52.
    pub id: i64,
    pub is_bot: bool,
    pub first_name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// IETF language tag of the user's language.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_premium: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub added_to_attachment_menu: Option<bool>,

    // Only returned in getMe.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_join_groups: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_read_all_group_messages: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supports_inline_queries: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_connect_to_business: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_main_web_app: Option<bool>,
}

impl User {
    /// First and last name joined with a space.
    pub fn full_name(&self) -> String {
        match &self.last_name {
            Some(last) => format!("{} {last}", self.first_name),
            None => self.first_name.clone(),
        }
    }
}

/// A user shared with the bot through a `KeyboardButtonRequestUsers` button.
///
/// The name and photo fields are only present when the bot asked for them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharedUser {
    pub user_id: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<Vec<PhotoSize>>,
}

/// Service message: users were shared with the bot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsersShared {
    pub request_id: i64,
    pub users: Vec<SharedUser>,
}

/// Service message: a chat was shared with the bot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatShared {
    pub request_id: i64,
    pub chat_id: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<Vec<PhotoSize>>,
}

/// Service message: the user allowed the bot to write messages.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriteAccessAllowed {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_request: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web_app_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_attachment_menu: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_optionals_stay_absent() {
        let user: User =
            serde_json::from_str(r#"{"id":1,"is_bot":false,"first_name":"Ann"}"#).unwrap();
        assert_eq!(user.last_name, None);
        assert_eq!(user.is_premium, None);
        assert_eq!(user.can_join_groups, None);
        assert_eq!(user.full_name(), "Ann");
    }

    #[test]
    fn large_user_id_survives_round_trip() {
        let id = (1i64 << 40) + 12345;
        let raw = format!(r#"{{"id":{id},"is_bot":false,"first_name":"Big","last_name":"Id"}}"#);
        let user: User = serde_json::from_str(&raw).unwrap();
        assert_eq!(user.id, id);
        assert_eq!(user.full_name(), "Big Id");

        let back: User = serde_json::from_str(&serde_json::to_string(&user).unwrap()).unwrap();
        assert_eq!(back, user);
    }

    #[test]
    fn shared_users_decode_with_and_without_names() {
        let raw = r#"{
            "request_id": 7,
            "users": [
                {"user_id": 5000000000, "first_name": "Bo"},
                {"user_id": 42}
            ]
        }"#;
        let shared: UsersShared = serde_json::from_str(raw).unwrap();
        assert_eq!(shared.request_id, 7);
        assert_eq!(shared.users[0].user_id, 5_000_000_000);
        assert_eq!(shared.users[0].first_name.as_deref(), Some("Bo"));
        assert_eq!(shared.users[1].first_name, None);
        assert_eq!(shared.users[1].photo, None);
    }
}
