use indexmap::IndexMap;

use crate::error::CompileError;

/// Invisible codepoint forcing emoji-style presentation
pub const VARIATION_16: char = '\u{FE0F}';

/// Fully-resolved emoji keyed by its rendered form
pub type DataByEmoji = IndexMap<String, EmojiRecord>;

/// Slugified component description to the component's rendered form
pub type ComponentMap = IndexMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmojiRecord {
    pub name: String,
    pub slug: String,
    pub group: String,
    pub unicode_version: String,
    pub skin_tone_support: bool,
    pub emoji_version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skin_tone_support_unicode_version: Option<String>,
}

/// Subset of [`EmojiRecord`] listed under its owning group
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmojiSummary {
    pub name: String,
    pub slug: String,
    pub emoji: String,
    pub emoji_version: String,
    pub unicode_version: String,
    pub skin_tone_support: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skin_tone_support_unicode_version: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupRecord {
    pub name: String,
    pub slug: String,
    pub emojis: Vec<EmojiSummary>,
}

/// Record as it exists between the group parse and reconciliation.
///
/// Only `group` and `emoji_version` are known after the grouped source is read,
/// everything else is filled in from the ordered source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingEmoji {
    pub group: String,
    pub emoji_version: String,
    pub name: Option<String>,
    pub slug: Option<String>,
    pub unicode_version: Option<String>,
    pub skin_tone_support: Option<bool>,
    pub skin_tone_support_unicode_version: Option<String>,
}

impl PendingEmoji {
    pub fn new(group: impl Into<String>, emoji_version: impl Into<String>) -> Self {
        PendingEmoji {
            group: group.into(),
            emoji_version: emoji_version.into(),
            ..PendingEmoji::default()
        }
    }

    #[cfg(test)]
    pub fn is_resolved(&self) -> bool {
        self.name.is_some() && self.slug.is_some() && self.unicode_version.is_some() && self.skin_tone_support.is_some()
    }

    /// Freezes the record, failing if reconciliation never reached it
    pub fn resolve(self, emoji: &str) -> Result<EmojiRecord, CompileError> {
        let PendingEmoji {
            group,
            emoji_version,
            name: Some(name),
            slug: Some(slug),
            unicode_version: Some(unicode_version),
            skin_tone_support: Some(skin_tone_support),
            skin_tone_support_unicode_version,
        } = self
        else {
            return Err(CompileError::Unresolved { emoji: emoji.to_owned() });
        };

        Ok(EmojiRecord {
            name,
            slug,
            group,
            unicode_version,
            skin_tone_support,
            emoji_version,
            // a stray version without support would contradict the flag
            skin_tone_support_unicode_version: skin_tone_support_unicode_version.filter(|_| skin_tone_support),
        })
    }
}

impl EmojiRecord {
    pub fn summary(&self, emoji: &str) -> EmojiSummary {
        EmojiSummary {
            name: self.name.clone(),
            slug: self.slug.clone(),
            emoji: emoji.to_owned(),
            emoji_version: self.emoji_version.clone(),
            unicode_version: self.unicode_version.clone(),
            skin_tone_support: self.skin_tone_support,
            skin_tone_support_unicode_version: self.skin_tone_support_unicode_version.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_incomplete() {
        let pending = PendingEmoji::new("Smileys & Emotion", "1.0");

        assert!(!pending.is_resolved());

        match pending.resolve("😀") {
            Err(CompileError::Unresolved { emoji }) => assert_eq!(emoji, "😀"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_resolve_complete() {
        let pending = PendingEmoji {
            name: Some("waving hand".into()),
            slug: Some("waving_hand".into()),
            unicode_version: Some("6.0".into()),
            skin_tone_support: Some(true),
            skin_tone_support_unicode_version: Some("8.0".into()),
            ..PendingEmoji::new("People & Body", "0.6")
        };

        assert!(pending.is_resolved());

        let record = pending.resolve("👋").unwrap();

        assert_eq!(record.group, "People & Body");
        assert_eq!(record.skin_tone_support_unicode_version.as_deref(), Some("8.0"));

        let summary = record.summary("👋");
        assert_eq!(summary.emoji, "👋");
        assert_eq!(summary.emoji_version, "0.6");
    }
}
