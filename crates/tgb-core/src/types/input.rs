//! Outgoing media and file uploads.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::message::MessageEntity;
use crate::{errors::Error, Result};

/// A file to upload as a multipart part.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputFile {
    /// Read from disk when the request is encoded.
    Path(PathBuf),
    Memory { file_name: String, bytes: Vec<u8> },
}

impl InputFile {
    pub fn path(path: impl Into<PathBuf>) -> Self {
        Self::Path(path.into())
    }

    pub fn memory(file_name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self::Memory {
            file_name: file_name.into(),
            bytes: bytes.into(),
        }
    }

    /// File name sent in the part's `Content-Disposition`.
    pub fn file_name(&self) -> String {
        match self {
            InputFile::Path(path) => file_name_of(path),
            InputFile::Memory { file_name, .. } => file_name.clone(),
        }
    }

    /// Load the file contents.
    pub async fn read(&self) -> Result<Vec<u8>> {
        match self {
            InputFile::Path(path) => tokio::fs::read(path).await.map_err(Error::Io),
            InputFile::Memory { bytes, .. } => Ok(bytes.clone()),
        }
    }
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("file")
        .to_string()
}

/// Content of a media message to be sent.
///
/// `media` is a `file_id`, an HTTP URL, or `attach://<part name>`.
///
/// See <https://core.telegram.org/bots/api#inputmedia>.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputMedia {
    Photo(InputMediaPhoto),
    Video(InputMediaVideo),
    Animation(InputMediaAnimation),
    Audio(InputMediaAudio),
    Document(InputMediaDocument),
    #[serde(other)]
    Unknown,
}

impl InputMedia {
    pub fn photo(media: impl Into<String>) -> Self {
        Self::Photo(InputMediaPhoto {
            media: media.into(),
            caption: InputCaption::default(),
            has_spoiler: None,
        })
    }

    pub fn document(media: impl Into<String>) -> Self {
        Self::Document(InputMediaDocument {
            media: media.into(),
            thumbnail: None,
            caption: InputCaption::default(),
            disable_content_type_detection: None,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputMediaPhoto {
    pub media: String,
    #[serde(flatten)]
    pub caption: InputCaption,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_spoiler: Option<bool>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputMediaVideo {
    pub media: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(flatten)]
    pub caption: InputCaption,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supports_streaming: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_spoiler: Option<bool>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputMediaAnimation {
    pub media: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(flatten)]
    pub caption: InputCaption,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_spoiler: Option<bool>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputMediaAudio {
    pub media: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(flatten)]
    pub caption: InputCaption,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputMediaDocument {
    pub media: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(flatten)]
    pub caption: InputCaption,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_content_type_detection: Option<bool>,
}

/// Caption fields shared by every [`InputMedia`] variant.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputCaption {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption_entities: Option<Vec<MessageEntity>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_caption_above_media: Option<bool>,
}

/// Paid media to send.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputPaidMedia {
    Photo {
        media: String,
    },
    Video {
        media: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        thumbnail: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        width: Option<i64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        height: Option<i64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        duration: Option<i64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        supports_streaming: Option<bool>,
    },
    #[serde(other)]
    Unknown,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn photo_media_flattens_caption() {
        let media = InputMedia::Photo(InputMediaPhoto {
            media: "attach://pic".to_string(),
            caption: InputCaption {
                caption: Some("look".to_string()),
                parse_mode: Some("HTML".to_string()),
                ..Default::default()
            },
            has_spoiler: None,
        });
        let v = serde_json::to_value(&media).unwrap();
        assert_eq!(
            v,
            json!({"type": "photo", "media": "attach://pic", "caption": "look", "parse_mode": "HTML"})
        );
        let back: InputMedia = serde_json::from_value(v).unwrap();
        assert_eq!(back, media);
    }

    #[test]
    fn bare_document_has_only_type_and_media() {
        assert_eq!(
            serde_json::to_value(InputMedia::document("file-id")).unwrap(),
            json!({"type": "document", "media": "file-id"})
        );
    }

    #[test]
    fn paid_video_and_unknown() {
        let media: Vec<InputPaidMedia> = serde_json::from_value(json!([
            {"type": "video", "media": "v", "supports_streaming": true},
            {"type": "hologram", "media": "h"}
        ]))
        .unwrap();
        assert!(matches!(
            media[0],
            InputPaidMedia::Video {
                supports_streaming: Some(true),
                ..
            }
        ));
        assert_eq!(media[1], InputPaidMedia::Unknown);
    }

    #[test]
    fn memory_file_name_and_bytes() {
        let f = InputFile::memory("cert.pem", b"-----BEGIN".to_vec());
        assert_eq!(f.file_name(), "cert.pem");
        assert_eq!(InputFile::path("/etc/ssl/public.pem").file_name(), "public.pem");
    }

    #[tokio::test]
    async fn missing_path_is_an_io_error() {
        let f = InputFile::path("/nonexistent/tgb-core/cert.pem");
        let err = f.read().await.unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
