//! Note model: a free-text note attached to a contact, with tags.

use crate::domain::{Tag, ValidationError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// A note attached to a contact.
///
/// Two notes are equal when both their text and their tag sets are equal.
/// Duplicate detection inside a contact only looks at the text, see
/// [`Note::same_text`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Note {
    /// Trimmed, whitespace-normalized body
    text: String,

    /// Unique lower-case tags, kept sorted
    tags: BTreeSet<Tag>,
}

/// Collapse runs of whitespace and trim.
pub(crate) fn normalize_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

impl Note {
    /// Create a note, validating every tag.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidTag` for the first tag that fails.
    pub fn new<I, S>(text: &str, tags: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut note = Self {
            text: normalize_text(text),
            tags: BTreeSet::new(),
        };
        for tag in tags {
            note.add_tag(tag.as_ref())?;
        }
        Ok(note)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    /// Case-insensitive comparison of the note body against `text`.
    pub fn same_text(&self, text: &str) -> bool {
        self.text.to_lowercase() == normalize_text(text).to_lowercase()
    }

    /// Add a tag; returns `false` when the note already carries it.
    pub fn add_tag(&mut self, raw: &str) -> Result<bool, ValidationError> {
        let tag = Tag::new(raw)?;
        Ok(self.tags.insert(tag))
    }

    /// Remove a tag; returns `false` when the note did not carry it.
    pub fn remove_tag(&mut self, raw: &str) -> bool {
        let wanted = Tag::normalize(raw);
        let before = self.tags.len();
        self.tags.retain(|tag| tag.as_str() != wanted);
        self.tags.len() != before
    }

    /// Remove every tag; returns `false` when there was nothing to remove.
    pub fn clear_tags(&mut self) -> bool {
        let had_tags = !self.tags.is_empty();
        self.tags.clear();
        had_tags
    }

    pub fn has_tag(&self, raw: &str) -> bool {
        let wanted = Tag::normalize(raw);
        self.tags.iter().any(|tag| tag.as_str() == wanted)
    }

    /// Tags joined as `a, b` without the `#` prefix, or `none`.
    pub fn tag_list(&self) -> String {
        if self.tags.is_empty() {
            return "none".to_string();
        }
        self.tags
            .iter()
            .map(Tag::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub(crate) fn replace(&mut self, text: &str, tags: BTreeSet<Tag>) {
        self.text = normalize_text(text);
        self.tags = tags;
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)?;
        if !self.tags.is_empty() {
            let tags = self
                .tags
                .iter()
                .map(Tag::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            write!(f, " [{}]", tags)?;
        }
        Ok(())
    }
}
