//! Compiles the Unicode emoji annotation files into the data consumed by the emoji picker.
//!
//! Two sources are combined: the grouped source (`emoji-test.txt` layout) provides groups,
//! emoji versions and components, while the ordered source (`emoji-ordering.txt` layout)
//! provides canonical order, names and unicode versions. Skin tone variants are folded
//! into their base emoji rather than listed separately.

#[macro_use]
extern crate serde;

pub mod assemble;
pub mod emit;
pub mod error;
pub mod group;
pub mod model;
pub mod order;
pub mod slug;

pub use emit::{Artifact, ArtifactKind, OutputLayout};
pub use error::CompileError;
pub use model::{ComponentMap, DataByEmoji, EmojiRecord, EmojiSummary, GroupRecord};
pub use slug::slugify;

use group::GroupParser;
use order::{Reconciled, Reconciler};

/// The four emitted structures of a single run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EmojiData {
    pub by_emoji: DataByEmoji,
    pub by_group: Vec<GroupRecord>,
    pub ordered: Vec<String>,
    pub components: ComponentMap,
}

/// Runs the grouped source, then the ordered source, through the full pipeline
pub fn compile(grouped_src: &str, ordered_src: &str) -> Result<EmojiData, CompileError> {
    let grouped = GroupParser::parse(grouped_src)?;

    let Reconciled {
        by_emoji,
        ordered,
        components,
    } = Reconciler::reconcile(grouped, ordered_src)?;

    let by_group = assemble::assemble_groups(&by_emoji, &ordered);

    Ok(EmojiData {
        by_emoji,
        by_group,
        ordered,
        components,
    })
}
