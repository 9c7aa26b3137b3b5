//! Parser for the grouped source (`emoji-test.txt` layout)
//!
//! ```text
//! # group: Smileys & Emotion
//! 1F646 200D 2640 FE0F    ; fully-qualified     # 🙆‍♀️ E4.0 woman gesturing OK
//! 1F3FB                   ; component           # 🏻 E1.0 light skin tone
//! ```

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::CompileError;
use crate::model::{ComponentMap, PendingEmoji};
use crate::slug::slugify;

static GROUP_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#\sgroup:\s(?P<name>.+)").unwrap());

static EMOJI_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^#]+;\s(?P<kind>[\w-]+)\s+#\s(?P<emoji>\S+)\sE(?P<version>\d+\.\d)\s(?P<desc>.+)").unwrap()
});

/// Trailing "skin tone" phrase, optionally followed by more modifiers
static SKIN_TONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\sskin\stone(?:,|$)").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Qualified {
    Fully,
    Minimal,
    None,
    Component,
}

impl Qualified {
    pub const fn as_str(self) -> &'static str {
        match self {
            Qualified::Fully => "fully-qualified",
            Qualified::Minimal => "minimally-qualified",
            Qualified::None => "unqualified",
            Qualified::Component => "component",
        }
    }

    pub fn parse(token: &str) -> Option<Qualified> {
        [Qualified::Fully, Qualified::Minimal, Qualified::None, Qualified::Component]
            .into_iter()
            .find(|q| q.as_str() == token)
    }
}

pub fn is_skin_tone_variant(desc: &str) -> bool {
    SKIN_TONE_RE.is_match(desc)
}

/// Everything extracted from the grouped source, in file order
#[derive(Debug, Default)]
pub struct GroupedSource {
    pub emojis: IndexMap<String, PendingEmoji>,
    pub components: ComponentMap,
}

/// Single pass over the grouped source, carrying the current group header
#[derive(Default)]
pub struct GroupParser {
    current_group: Option<String>,
    out: GroupedSource,
}

impl GroupParser {
    pub fn new() -> Self {
        GroupParser::default()
    }

    pub fn parse(src: &str) -> Result<GroupedSource, CompileError> {
        let mut parser = GroupParser::new();

        for (idx, line) in src.lines().enumerate() {
            parser.line(idx + 1, line)?;
        }

        Ok(parser.finish())
    }

    pub fn line(&mut self, line_no: usize, line: &str) -> Result<(), CompileError> {
        if let Some(m) = GROUP_RE.captures(line) {
            self.current_group = Some(m["name"].to_owned());
            return Ok(());
        }

        let Some(m) = EMOJI_RE.captures(line) else {
            return Ok(());
        };

        let emoji = &m["emoji"];
        let desc = &m["desc"];

        match Qualified::parse(&m["kind"]) {
            Some(Qualified::Fully) => {
                // variants are folded into their base from the ordered source
                if is_skin_tone_variant(desc) {
                    return Ok(());
                }

                let Some(ref group) = self.current_group else {
                    return Err(CompileError::UngroupedEntry {
                        line: line_no,
                        emoji: emoji.to_owned(),
                    });
                };

                self.out.emojis.insert(emoji.to_owned(), PendingEmoji::new(group.as_str(), &m["version"]));
            }
            Some(Qualified::Component) => {
                self.out.components.insert(slugify(desc), emoji.to_owned());
            }
            _ => {}
        }

        Ok(())
    }

    pub fn finish(self) -> GroupedSource {
        tracing::debug!(
            "Parsed grouped source: {} emojis, {} components",
            self.out.emojis.len(),
            self.out.components.len()
        );

        self.out
    }
}
