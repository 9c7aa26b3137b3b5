use std::path::PathBuf;

use crate::emit::ArtifactKind;

#[derive(Debug, thiserror::Error)]
pub enum CompileError {
    #[error("{emoji} entry from ordered source (line {line}) match not found in grouped source")]
    UnresolvedReference { line: usize, emoji: String },

    #[error("{emoji} on line {line} of grouped source appears before any group header")]
    UngroupedEntry { line: usize, emoji: String },

    #[error("Skin tone variant {emoji} on line {line} of ordered source has no preceding base emoji")]
    OrphanVariant { line: usize, emoji: String },

    #[error("{emoji} from grouped source was never resolved by the ordered source")]
    Unresolved { emoji: String },

    #[error("Unable to serialize {artifact:?}: {source}")]
    Serialize {
        artifact: ArtifactKind,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO Error writing {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CompileError {
    /// The emoji string at fault, if the error came from the source data
    pub fn emoji(&self) -> Option<&str> {
        match self {
            CompileError::UnresolvedReference { emoji, .. }
            | CompileError::OrphanVariant { emoji, .. }
            | CompileError::UngroupedEntry { emoji, .. }
            | CompileError::Unresolved { emoji } => Some(emoji),
            _ => None,
        }
    }
}
