use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::error::CompileError;
use crate::EmojiData;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    ByEmoji,
    ByGroup,
    Ordered,
    Components,
}

impl ArtifactKind {
    /// Write order
    pub const ALL: [ArtifactKind; 4] = [
        ArtifactKind::ByEmoji,
        ArtifactKind::ByGroup,
        ArtifactKind::Ordered,
        ArtifactKind::Components,
    ];
}

/// File names and formatting of the emitted JSON documents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    pub by_emoji: String,
    pub by_group: String,
    pub ordered: String,
    pub components: String,

    /// Spaces per indentation level
    pub indent: usize,
}

impl Default for OutputLayout {
    fn default() -> Self {
        OutputLayout {
            by_emoji: "data-by-emoji.json".to_owned(),
            by_group: "data-by-group.json".to_owned(),
            ordered: "data-ordered-emoji.json".to_owned(),
            components: "data-emoji-components.json".to_owned(),
            indent: 4,
        }
    }
}

impl OutputLayout {
    pub fn file_name(&self, kind: ArtifactKind) -> &str {
        match kind {
            ArtifactKind::ByEmoji => &self.by_emoji,
            ArtifactKind::ByGroup => &self.by_group,
            ArtifactKind::Ordered => &self.ordered,
            ArtifactKind::Components => &self.components,
        }
    }
}

/// A fully rendered document, ready to be written
#[derive(Debug, Clone)]
pub struct Artifact {
    pub kind: ArtifactKind,
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl Artifact {
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf, CompileError> {
        let path = dir.join(&self.file_name);

        match std::fs::write(&path, &self.bytes) {
            Ok(()) => Ok(path),
            Err(source) => Err(CompileError::Io { path, source }),
        }
    }
}

fn to_json<T: Serialize>(value: &T, indent: &[u8]) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(indent));
    value.serialize(&mut ser)?;

    Ok(buf)
}

/// Renders all four documents in memory, in write order
pub fn render(data: &EmojiData, layout: &OutputLayout) -> Result<Vec<Artifact>, CompileError> {
    let indent = vec![b' '; layout.indent];

    ArtifactKind::ALL
        .into_iter()
        .map(|kind| {
            let bytes = match kind {
                ArtifactKind::ByEmoji => to_json(&data.by_emoji, &indent),
                ArtifactKind::ByGroup => to_json(&data.by_group, &indent),
                ArtifactKind::Ordered => to_json(&data.ordered, &indent),
                ArtifactKind::Components => to_json(&data.components, &indent),
            };

            match bytes {
                Ok(bytes) => Ok(Artifact {
                    kind,
                    file_name: layout.file_name(kind).to_owned(),
                    bytes,
                }),
                Err(source) => Err(CompileError::Serialize { artifact: kind, source }),
            }
        })
        .collect()
}

/// Writes every artifact into `dir`, creating it if needed. Stops at the first failure.
pub fn write_all(artifacts: &[Artifact], dir: &Path) -> Result<Vec<PathBuf>, CompileError> {
    if let Err(source) = std::fs::create_dir_all(dir) {
        return Err(CompileError::Io {
            path: dir.to_owned(),
            source,
        });
    }

    artifacts.iter().map(|artifact| artifact.write_to(dir)).collect()
}
