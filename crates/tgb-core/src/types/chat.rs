use serde::{Deserialize, Serialize};

use super::{media::Document, user::User};

/// A chat.
///
/// See <https://core.telegram.org/bots/api#chat>.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chat {
    /// May have more than 32 significant bits; at most 52.
    pub id: i64,

    #[serde(rename = "type")]
    pub kind: ChatType,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// True, if the supergroup chat is a forum.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_forum: Option<bool>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatType {
    Private,
    Group,
    Supergroup,
    Channel,
    #[serde(other)]
    Unknown,
}

/// Target chat: a numeric id or a `@channelusername`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChatId {
    Id(i64),
    Username(String),
}

impl From<i64> for ChatId {
    fn from(id: i64) -> Self {
        Self::Id(id)
    }
}

impl From<&str> for ChatId {
    fn from(username: &str) -> Self {
        Self::Username(username.to_string())
    }
}

/// Service message: chat background set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatBackground {
    #[serde(rename = "type")]
    pub kind: BackgroundType,
}

/// See <https://core.telegram.org/bots/api#backgroundtype>.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BackgroundType {
    /// Automatically filled based on the selected colors.
    Fill(BackgroundTypeFill),
    /// A wallpaper in JPEG format.
    Wallpaper(BackgroundTypeWallpaper),
    /// A PNG or TGV pattern combined with a fill.
    Pattern(BackgroundTypePattern),
    /// Taken directly from a built-in chat theme.
    ChatTheme(BackgroundTypeChatTheme),
    #[serde(other)]
    Unknown,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackgroundTypeFill {
    pub fill: BackgroundFill,

    /// Dimming in dark themes, as a percentage; 0-100.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dark_theme_dimming: Option<i64>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackgroundTypeWallpaper {
    pub document: Document,
    pub dark_theme_dimming: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_blurred: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_moving: Option<bool>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackgroundTypePattern {
    pub document: Document,
    pub fill: BackgroundFill,
    /// Intensity of the pattern when shown above the filled background; 0-100.
    pub intensity: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_inverted: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_moving: Option<bool>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackgroundTypeChatTheme {
    pub theme_name: String,
}

/// The way a background is filled. Colors are RGB24.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BackgroundFill {
    Solid {
        color: i64,
    },
    Gradient {
        top_color: i64,
        bottom_color: i64,
        /// Clockwise rotation angle in degrees; 0-359.
        rotation_angle: i64,
    },
    FreeformGradient {
        /// 3 or 4 base colors.
        colors: Vec<i64>,
    },
    #[serde(other)]
    Unknown,
}

/// Information about one member of a chat, selected by `status`.
///
/// See <https://core.telegram.org/bots/api#chatmember>.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ChatMember {
    #[serde(rename = "creator")]
    Owner(ChatMemberOwner),
    Administrator(ChatMemberAdministrator),
    Member(ChatMemberMember),
    Restricted(ChatMemberRestricted),
    Left(ChatMemberLeft),
    #[serde(rename = "kicked")]
    Banned(ChatMemberBanned),
    #[serde(other)]
    Unknown,
}

impl ChatMember {
    pub fn user(&self) -> Option<&User> {
        match self {
            ChatMember::Owner(m) => Some(&m.user),
            ChatMember::Administrator(m) => Some(&m.user),
            ChatMember::Member(m) => Some(&m.user),
            ChatMember::Restricted(m) => Some(&m.user),
            ChatMember::Left(m) => Some(&m.user),
            ChatMember::Banned(m) => Some(&m.user),
            ChatMember::Unknown => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMemberOwner {
    pub user: User,
    pub is_anonymous: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_title: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMemberAdministrator {
    pub user: User,
    pub can_be_edited: bool,
    pub is_anonymous: bool,
    pub can_manage_chat: bool,
    pub can_delete_messages: bool,
    pub can_manage_video_chats: bool,
    pub can_restrict_members: bool,
    pub can_promote_members: bool,
    pub can_change_info: bool,
    pub can_invite_users: bool,
    pub can_post_stories: bool,
    pub can_edit_stories: bool,
    pub can_delete_stories: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_post_messages: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_edit_messages: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_pin_messages: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_manage_topics: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_title: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMemberMember {
    pub user: User,
    /// Unix time when the user's subscription will expire.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub until_date: Option<i64>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMemberRestricted {
    pub user: User,
    pub is_member: bool,
    pub can_send_messages: bool,
    pub can_send_audios: bool,
    pub can_send_documents: bool,
    pub can_send_photos: bool,
    pub can_send_videos: bool,
    pub can_send_video_notes: bool,
    pub can_send_voice_notes: bool,
    pub can_send_polls: bool,
    pub can_send_other_messages: bool,
    pub can_add_web_page_previews: bool,
    pub can_change_info: bool,
    pub can_invite_users: bool,
    pub can_pin_messages: bool,
    pub can_manage_topics: bool,
    /// 0 means restricted forever.
    pub until_date: i64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMemberLeft {
    pub user: User,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMemberBanned {
    pub user: User,
    /// 0 means banned forever.
    pub until_date: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn chat_type_unknown_value_does_not_fail() {
        let chat: Chat = serde_json::from_value(json!({
            "id": -1001234567890i64,
            "type": "megagroup",
            "title": "t"
        }))
        .unwrap();
        assert_eq!(chat.kind, ChatType::Unknown);
        assert_eq!(chat.id, -1_001_234_567_890);
    }

    #[test]
    fn background_fill_variants_decode() {
        let bg: ChatBackground = serde_json::from_value(json!({
            "type": {
                "type": "fill",
                "fill": {"type": "gradient", "top_color": 1, "bottom_color": 2, "rotation_angle": 45},
                "dark_theme_dimming": 30
            }
        }))
        .unwrap();
        match bg.kind {
            BackgroundType::Fill(fill) => {
                assert_eq!(fill.dark_theme_dimming, Some(30));
                assert_eq!(
                    fill.fill,
                    BackgroundFill::Gradient {
                        top_color: 1,
                        bottom_color: 2,
                        rotation_angle: 45
                    }
                );
            }
            other => panic!("unexpected background: {other:?}"),
        }
    }

    #[test]
    fn unknown_background_and_fill_types_decode_to_unknown() {
        let bg: BackgroundType =
            serde_json::from_value(json!({"type": "hologram", "shimmer": true})).unwrap();
        assert_eq!(bg, BackgroundType::Unknown);

        let fill: BackgroundFill =
            serde_json::from_value(json!({"type": "plaid", "colors": [1, 2]})).unwrap();
        assert_eq!(fill, BackgroundFill::Unknown);
    }

    #[test]
    fn chat_theme_background_decodes() {
        let bg: BackgroundType =
            serde_json::from_value(json!({"type": "chat_theme", "theme_name": "🌷"})).unwrap();
        assert_eq!(
            bg,
            BackgroundType::ChatTheme(BackgroundTypeChatTheme {
                theme_name: "🌷".to_string()
            })
        );
    }

    #[test]
    fn chat_member_status_selects_variant() {
        let user = json!({"id": 9, "is_bot": false, "first_name": "Z"});
        let banned: ChatMember = serde_json::from_value(json!({
            "status": "kicked",
            "user": user,
            "until_date": 0
        }))
        .unwrap();
        assert!(matches!(banned, ChatMember::Banned(ref b) if b.until_date == 0));
        assert_eq!(banned.user().map(|u| u.id), Some(9));

        let odd: ChatMember =
            serde_json::from_value(json!({"status": "ghost", "user": user})).unwrap();
        assert_eq!(odd, ChatMember::Unknown);
        assert!(odd.user().is_none());
    }

    #[test]
    fn chat_id_accepts_number_or_username() {
        assert_eq!(
            serde_json::to_value(ChatId::from(-100i64)).unwrap(),
            json!(-100)
        );
        assert_eq!(
            serde_json::to_value(ChatId::from("@chan")).unwrap(),
            json!("@chan")
        );
    }
}
