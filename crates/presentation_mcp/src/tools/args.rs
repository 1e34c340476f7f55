//! Arguments of the four media tools
//!
//! Each tool names its URL field after the media kind; all of them collapse
//! into one [`MediaMessageRequest`].

use application::{MediaMessageRequest, null_as_default};
use domain::MediaKind;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ImageArgs {
    pub to: String,
    pub image_url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub caption: String,
    #[serde(default)]
    pub phone_number_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VideoArgs {
    pub to: String,
    pub video_url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub caption: String,
    #[serde(default)]
    pub phone_number_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DocumentArgs {
    pub to: String,
    pub document_url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub caption: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub filename: String,
    #[serde(default)]
    pub phone_number_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AudioArgs {
    pub to: String,
    pub audio_url: String,
    #[serde(default)]
    pub phone_number_id: Option<String>,
}

impl From<ImageArgs> for MediaMessageRequest {
    fn from(args: ImageArgs) -> Self {
        Self {
            kind: MediaKind::Image,
            to: args.to,
            url: args.image_url,
            caption: args.caption,
            filename: String::new(),
            phone_number_id: args.phone_number_id,
        }
    }
}

impl From<VideoArgs> for MediaMessageRequest {
    fn from(args: VideoArgs) -> Self {
        Self {
            kind: MediaKind::Video,
            to: args.to,
            url: args.video_url,
            caption: args.caption,
            filename: String::new(),
            phone_number_id: args.phone_number_id,
        }
    }
}

impl From<DocumentArgs> for MediaMessageRequest {
    fn from(args: DocumentArgs) -> Self {
        Self {
            kind: MediaKind::Document,
            to: args.to,
            url: args.document_url,
            caption: args.caption,
            filename: args.filename,
            phone_number_id: args.phone_number_id,
        }
    }
}

impl From<AudioArgs> for MediaMessageRequest {
    fn from(args: AudioArgs) -> Self {
        Self {
            kind: MediaKind::Audio,
            to: args.to,
            url: args.audio_url,
            caption: String::new(),
            filename: String::new(),
            phone_number_id: args.phone_number_id,
        }
    }
}
