use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default cap on the uncompressed size of a single archive entry (16 MiB).
pub const DEFAULT_MAX_ENTRY_BYTES: u64 = 16 * 1024 * 1024;

/// Settings for resolving access wideners out of mod archives.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResolverConfig {
    /// Entries larger than this (uncompressed) are rejected instead of read.
    #[serde(default = "default_max_entry_bytes")]
    pub max_entry_bytes: u64,
    /// Extensions (without the dot) that mark a file as a mod archive.
    #[serde(default = "default_archive_extensions")]
    pub archive_extensions: Vec<String>,
}

fn default_max_entry_bytes() -> u64 {
    DEFAULT_MAX_ENTRY_BYTES
}
fn default_archive_extensions() -> Vec<String> {
    vec!["jar".to_string(), "zip".to_string()]
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            max_entry_bytes: default_max_entry_bytes(),
            archive_extensions: default_archive_extensions(),
        }
    }
}

impl ResolverConfig {
    /// Parse settings from JSON. Keys that are not present keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Whether `path` has one of the configured archive extensions (case-insensitive).
    pub fn is_archive_path(&self, path: &Path) -> bool {
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            return false;
        };
        self.archive_extensions
            .iter()
            .any(|candidate| candidate.eq_ignore_ascii_case(ext))
    }
}
