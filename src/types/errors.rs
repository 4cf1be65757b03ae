use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Coarse classification of a [`ResolveError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorKind {
    Io,
    InvalidMetadata,
    UnsupportedDeclaration,
}

/// Why an archive read failed.
#[derive(Debug, Error)]
pub enum IoReason {
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Zip(#[from] zip::result::ZipError),
    #[error("missing entry '{0}'")]
    MissingEntry(String),
    #[error("could not find access widener file ({entry}) defined in the {descriptor} file")]
    MissingArtifact {
        entry: String,
        descriptor: &'static str,
    },
    #[error("entry '{entry}' is {size} bytes, over the {limit} byte limit")]
    EntryTooLarge { entry: String, size: u64, limit: u64 },
}

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("I/O error on {}: {reason}", .archive.display())]
    Io {
        archive: PathBuf,
        #[source]
        reason: IoReason,
    },
    #[error("Invalid {descriptor} in {}: {message}", .archive.display())]
    InvalidMetadata {
        archive: PathBuf,
        descriptor: &'static str,
        message: String,
    },
    #[error("Unsupported declaration in {descriptor} of {}: {message}", .archive.display())]
    UnsupportedDeclaration {
        archive: PathBuf,
        descriptor: &'static str,
        message: String,
    },
}

impl ResolveError {
    pub fn io(archive: &Path, reason: impl Into<IoReason>) -> Self {
        ResolveError::Io {
            archive: archive.to_path_buf(),
            reason: reason.into(),
        }
    }

    pub fn missing_entry(archive: &Path, entry: &str) -> Self {
        Self::io(archive, IoReason::MissingEntry(entry.to_string()))
    }

    pub fn invalid_metadata(
        archive: &Path,
        descriptor: &'static str,
        message: impl Into<String>,
    ) -> Self {
        ResolveError::InvalidMetadata {
            archive: archive.to_path_buf(),
            descriptor,
            message: message.into(),
        }
    }

    pub fn unsupported(
        archive: &Path,
        descriptor: &'static str,
        message: impl Into<String>,
    ) -> Self {
        ResolveError::UnsupportedDeclaration {
            archive: archive.to_path_buf(),
            descriptor,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ResolveError::Io { .. } => ErrorKind::Io,
            ResolveError::InvalidMetadata { .. } => ErrorKind::InvalidMetadata,
            ResolveError::UnsupportedDeclaration { .. } => ErrorKind::UnsupportedDeclaration,
        }
    }

    /// The archive the failure belongs to.
    pub fn archive(&self) -> &Path {
        match self {
            ResolveError::Io { archive, .. }
            | ResolveError::InvalidMetadata { archive, .. }
            | ResolveError::UnsupportedDeclaration { archive, .. } => archive,
        }
    }

    /// True when the failure is a declared or expected entry that is not in the archive.
    pub fn is_missing_entry(&self) -> bool {
        matches!(
            self,
            ResolveError::Io {
                reason: IoReason::MissingEntry(_) | IoReason::MissingArtifact { .. },
                ..
            }
        )
    }
}

impl Serialize for ResolveError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.to_string().as_ref())
    }
}

pub type ResolveResult<T> = Result<T, ResolveError>;

#[cfg(test)]
#[path = "tests/errors_tests.rs"]
mod tests;
