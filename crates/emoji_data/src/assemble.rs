use crate::model::{DataByEmoji, GroupRecord};
use crate::slug::slugify;

/// Lists each group's emojis in canonical order.
///
/// Groups are created on first occurrence while walking `ordered`, so their order can differ
/// from the header order of the grouped source when groups interleave canonically.
pub fn assemble_groups(by_emoji: &DataByEmoji, ordered: &[String]) -> Vec<GroupRecord> {
    let mut groups: Vec<GroupRecord> = Vec::new();

    for emoji in ordered {
        let Some(record) = by_emoji.get(emoji) else {
            tracing::warn!("Ordered emoji {emoji} missing from emoji table");
            continue;
        };

        let idx = match groups.iter().position(|g| g.name == record.group) {
            Some(idx) => idx,
            None => {
                tracing::trace!("Creating group {}", record.group);

                groups.push(GroupRecord {
                    name: record.group.clone(),
                    slug: slugify(&record.group),
                    emojis: Vec::new(),
                });

                groups.len() - 1
            }
        };

        groups[idx].emojis.push(record.summary(emoji));
    }

    tracing::debug!("Assembled {} groups", groups.len());

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EmojiRecord;

    fn record(group: &str, name: &str) -> EmojiRecord {
        EmojiRecord {
            name: name.to_owned(),
            slug: slugify(name),
            group: group.to_owned(),
            unicode_version: "6.0".to_owned(),
            skin_tone_support: false,
            emoji_version: "0.6".to_owned(),
            skin_tone_support_unicode_version: None,
        }
    }

    #[test]
    fn test_assemble_canonical_order() {
        let mut by_emoji = DataByEmoji::new();
        by_emoji.insert("😀".into(), record("Smileys & Emotion", "grinning face"));
        by_emoji.insert("👋".into(), record("People & Body", "waving hand"));
        by_emoji.insert("😃".into(), record("Smileys & Emotion", "grinning face with big eyes"));

        let ordered = vec!["👋".to_owned(), "😃".to_owned(), "😀".to_owned()];

        let groups = assemble_groups(&by_emoji, &ordered);

        // first occurrence in canonical order decides group order
        assert_eq!(groups.iter().map(|g| g.name.as_str()).collect::<Vec<_>>(), ["People & Body", "Smileys & Emotion"]);
        assert_eq!(groups[1].slug, "smileys_emotion");

        let smileys = groups[1].emojis.iter().map(|e| e.emoji.as_str()).collect::<Vec<_>>();
        assert_eq!(smileys, ["😃", "😀"]);

        let total: usize = groups.iter().map(|g| g.emojis.len()).sum();
        assert_eq!(total, ordered.len());
    }
}
