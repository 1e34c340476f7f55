//! Template language value object

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Languages accepted for template messages
///
/// Unknown codes are not an error for callers sending templates: they fall
/// back to [`TemplateLanguage::English`] via [`TemplateLanguage::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TemplateLanguage {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "es")]
    Spanish,
    #[serde(rename = "fr")]
    French,
    #[serde(rename = "de")]
    German,
    #[serde(rename = "it")]
    Italian,
    #[serde(rename = "pt")]
    Portuguese,
    #[serde(rename = "ar")]
    Arabic,
    #[serde(rename = "hi")]
    Hindi,
}

impl TemplateLanguage {
    /// The language code sent to the API
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Spanish => "es",
            Self::French => "fr",
            Self::German => "de",
            Self::Italian => "it",
            Self::Portuguese => "pt",
            Self::Arabic => "ar",
            Self::Hindi => "hi",
        }
    }

    /// All supported languages
    #[must_use]
    pub const fn all() -> [Self; 8] {
        [
            Self::English,
            Self::Spanish,
            Self::French,
            Self::German,
            Self::Italian,
            Self::Portuguese,
            Self::Arabic,
            Self::Hindi,
        ]
    }

    /// Parse a code, substituting English for anything unrecognized
    ///
    /// Returns the language and whether the fallback was applied.
    #[must_use]
    pub fn resolve(code: &str) -> (Self, bool) {
        code.parse().map_or((Self::English, true), |lang| (lang, false))
    }
}

impl fmt::Display for TemplateLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for TemplateLanguage {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|lang| lang.code() == s)
            .ok_or_else(|| DomainError::unknown_value("template language", s))
    }
}
