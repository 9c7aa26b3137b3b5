//! Reconciles the grouped table against the canonical ordering
//!
//! ```text
//! U+1F44B ; 6.0 # 👋 waving hand
//!          |1--| |2-|3----------|
//!
//! U+1F442 U+1F3FB ; 8.0 # 👂🏻 ear: light skin tone
//!                  |1--| |2-|3--||4--------------|
//!
//! U+1F469 U+200D U+1F467 U+200D U+1F467 ; 6.0 # 👩‍👧‍👧 family: woman, girl, girl
//!                                        |1--| |2-|3-----||4----------------|
//! ```

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::CompileError;
use crate::group::{is_skin_tone_variant, GroupedSource};
use crate::model::{ComponentMap, DataByEmoji, PendingEmoji, VARIATION_16};
use crate::slug::slugify;

static ORDERED_EMOJI_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r".+\s;\s(?P<version>[0-9.]+)\s#\s(?P<emoji>\S+)\s(?P<name>[^:]+)(?::\s)?(?P<desc>.+)?").unwrap()
});

/// Output of reconciliation, every record fully resolved
#[derive(Debug, Default)]
pub struct Reconciled {
    pub by_emoji: DataByEmoji,
    pub ordered: Vec<String>,
    pub components: ComponentMap,
}

#[derive(Debug, Default, Clone, Copy)]
struct Stats {
    resolved: usize,
    variants: usize,
    components: usize,
    with_selector: usize,
}

pub struct Reconciler {
    emojis: IndexMap<String, PendingEmoji>,
    components: ComponentMap,
    ordered: Vec<String>,

    /// Most recently resolved base emoji, target of any following variant lines
    current: Option<String>,
    stats: Stats,
}

impl Reconciler {
    pub fn new(grouped: GroupedSource) -> Self {
        Reconciler {
            emojis: grouped.emojis,
            components: grouped.components,
            ordered: Vec::new(),
            current: None,
            stats: Stats::default(),
        }
    }

    /// Runs the whole ordered source through a fresh reconciler
    pub fn reconcile(grouped: GroupedSource, src: &str) -> Result<Reconciled, CompileError> {
        let mut reconciler = Reconciler::new(grouped);

        for (idx, line) in src.lines().enumerate() {
            reconciler.line(idx + 1, line)?;
        }

        reconciler.finish()
    }

    fn is_component(&self, emoji: &str) -> bool {
        self.components.values().any(|c| c == emoji)
    }

    /// Looks up the table key for an emoji, retrying with `U+FE0F` appended
    /// since the ordered source omits it for some entries.
    fn resolve_key(&self, emoji: &str) -> Option<String> {
        if self.emojis.contains_key(emoji) {
            return Some(emoji.to_owned());
        }

        let mut with_selector = String::with_capacity(emoji.len() + VARIATION_16.len_utf8());
        with_selector.push_str(emoji);
        with_selector.push(VARIATION_16);

        self.emojis.contains_key(&with_selector).then_some(with_selector)
    }

    pub fn line(&mut self, line_no: usize, line: &str) -> Result<(), CompileError> {
        if line.is_empty() {
            return Ok(());
        }

        let Some(m) = ORDERED_EMOJI_RE.captures(line) else {
            return Ok(());
        };

        let version = &m["version"];
        let emoji = &m["emoji"];
        let name = &m["name"];
        let desc = m.name("desc").map(|d| d.as_str());

        if let Some(desc) = desc.filter(|d| is_skin_tone_variant(d)) {
            let Some(base) = self.current.as_ref().and_then(|key| self.emojis.get_mut(key)) else {
                return Err(CompileError::OrphanVariant {
                    line: line_no,
                    emoji: emoji.to_owned(),
                });
            };

            tracing::trace!("Folding {emoji} ({desc}) into base");

            base.skin_tone_support = Some(true);
            base.skin_tone_support_unicode_version = Some(version.to_owned());

            self.stats.variants += 1;
            return Ok(());
        }

        let full_name = match desc {
            Some(desc) => format!("{name} {desc}"),
            None => name.to_owned(),
        };

        let Some(key) = self.resolve_key(emoji) else {
            // components are never part of the emoji table
            if self.is_component(emoji) {
                tracing::trace!("Skipping component {emoji} on line {line_no}");
                self.stats.components += 1;
                return Ok(());
            }

            return Err(CompileError::UnresolvedReference {
                line: line_no,
                emoji: emoji.to_owned(),
            });
        };

        if key != emoji {
            self.stats.with_selector += 1;
        }

        if let Some(record) = self.emojis.get_mut(&key) {
            if record.name.is_some() {
                tracing::warn!("{key} listed more than once in ordered source");
            }

            record.slug = Some(slugify(&full_name));
            record.name = Some(full_name);
            record.unicode_version = Some(version.to_owned());
            record.skin_tone_support = Some(false);
            record.skin_tone_support_unicode_version = None;
        }

        self.ordered.push(key.clone());
        self.stats.resolved += 1;
        self.current = Some(key);

        Ok(())
    }

    /// Freezes every record, failing on the first one never resolved
    pub fn finish(self) -> Result<Reconciled, CompileError> {
        let Stats {
            resolved,
            variants,
            components,
            with_selector,
        } = self.stats;

        tracing::debug!(
            "Reconciled ordered source: {resolved} resolved ({with_selector} via U+FE0F fallback), \
            {variants} skin tone variants folded, {components} components skipped"
        );

        let by_emoji = self
            .emojis
            .into_iter()
            .map(|(emoji, pending)| pending.resolve(&emoji).map(|record| (emoji, record)))
            .collect::<Result<DataByEmoji, _>>()?;

        Ok(Reconciled {
            by_emoji,
            ordered: self.ordered,
            components: self.components,
        })
    }
}
