use serde::Serialize;

/// An access widener pulled out of a mod archive.
///
/// Only built once the artifact bytes have been read, so a value of this type
/// always carries real content. Equality and hashing cover all three fields,
/// content compared by value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ResolvedArtifact {
    declared_path: String,
    owner_id: String,
    content: Vec<u8>,
}

impl ResolvedArtifact {
    pub fn new(declared_path: String, owner_id: String, content: Vec<u8>) -> Self {
        Self {
            declared_path,
            owner_id,
            content,
        }
    }

    /// Path of the artifact inside its archive, as written in the descriptor.
    pub fn declared_path(&self) -> &str {
        &self.declared_path
    }

    /// Mod id from the descriptor, or the archive file name for schemas without one.
    pub fn owner_id(&self) -> &str {
        &self.owner_id
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Content as text, when it is valid UTF-8.
    pub fn content_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.content).ok()
    }

    /// BLAKE3 hex digest of the content.
    pub fn fingerprint(&self) -> String {
        blake3::hash(&self.content).to_hex().to_string()
    }
}
