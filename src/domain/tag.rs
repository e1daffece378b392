//! Tag value object and helpers for tags embedded in free text.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

static TAG_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_]{1,30}$").expect("Failed to compile tag regex"));

static INLINE_TAG_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"#(\w+)").expect("Failed to compile inline tag regex"));

/// A note tag: lower-case, 1-30 letters, digits or underscores.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tag(String);

impl Tag {
    /// Normalize and validate a tag.
    ///
    /// Leading `#` characters are stripped and the rest lower-cased before
    /// the pattern check, so `##Urgent` and `urgent` are the same tag.
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        let clean = Self::normalize(raw);
        if !TAG_REGEX.is_match(&clean) {
            return Err(ValidationError::InvalidTag(raw.to_string()));
        }
        Ok(Self(clean))
    }

    /// Strip leading `#` characters and lower-case, without validating.
    pub fn normalize(raw: &str) -> String {
        raw.trim_start_matches('#').to_lowercase()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Serialize for Tag {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Tag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Tag::new(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Collect the `#word` tags written inline in a piece of text, lower-cased.
pub fn extract_tags(text: &str) -> Vec<String> {
    INLINE_TAG_REGEX
        .captures_iter(text)
        .map(|cap| cap[1].to_lowercase())
        .collect()
}

/// First inline `#word` tag of a piece of text, if any.
pub fn first_tag(text: &str) -> Option<String> {
    INLINE_TAG_REGEX
        .captures(text)
        .map(|cap| cap[1].to_lowercase())
}

/// Remove inline `#word` tags and collapse the remaining whitespace.
pub fn strip_tags(text: &str) -> String {
    INLINE_TAG_REGEX
        .replace_all(text, "")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
