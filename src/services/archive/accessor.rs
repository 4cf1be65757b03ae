use crate::types::errors::{ResolveError, ResolveResult};
use std::path::Path;

/// Entry-level reads against an archive on disk.
///
/// Implementations must be read-only so the same accessor can serve many
/// archives at once.
pub trait ArchiveAccessor {
    /// Whether `entry` exists. Only an unreadable archive is an error.
    fn entry_exists(&self, archive: &Path, entry: &str) -> ResolveResult<bool>;

    /// Read `entry`, or `None` if the archive has no such entry.
    fn read_entry_optional(&self, archive: &Path, entry: &str) -> ResolveResult<Option<Vec<u8>>>;

    /// Read `entry`; a missing entry is an I/O error.
    fn read_entry_required(&self, archive: &Path, entry: &str) -> ResolveResult<Vec<u8>> {
        self.read_entry_optional(archive, entry)?
            .ok_or_else(|| ResolveError::missing_entry(archive, entry))
    }
}
