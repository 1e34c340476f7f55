//! Media message kinds

use std::fmt;

use serde::{Deserialize, Serialize};

/// The four link-based media message types
///
/// They share one payload shape and differ only in the type tag and in which
/// optional fields the API accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
    Document,
    Audio,
}

impl MediaKind {
    /// Type tag and payload key
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
            Self::Document => "document",
            Self::Audio => "audio",
        }
    }

    /// Capitalized name for user-facing messages
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Image => "Image",
            Self::Video => "Video",
            Self::Document => "Document",
            Self::Audio => "Audio",
        }
    }

    #[must_use]
    pub const fn supports_caption(self) -> bool {
        !matches!(self, Self::Audio)
    }

    #[must_use]
    pub const fn supports_filename(self) -> bool {
        matches!(self, Self::Document)
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
