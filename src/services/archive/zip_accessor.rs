use super::accessor::ArchiveAccessor;
use crate::services::config::ResolverConfig;
use crate::types::errors::{IoReason, ResolveError, ResolveResult};
use std::fs;
use std::io::Read;
use std::path::Path;
use zip::result::ZipError;
use zip::ZipArchive;

/// [`ArchiveAccessor`] over zip-format archives (`.jar`, `.zip`).
///
/// Every call opens the archive afresh; no handle outlives a single read.
#[derive(Debug, Clone)]
pub struct ZipAccessor {
    max_entry_bytes: u64,
}

impl Default for ZipAccessor {
    fn default() -> Self {
        Self::new(&ResolverConfig::default())
    }
}

impl ZipAccessor {
    pub fn new(config: &ResolverConfig) -> Self {
        Self {
            max_entry_bytes: config.max_entry_bytes,
        }
    }

    fn open(archive_path: &Path) -> ResolveResult<ZipArchive<fs::File>> {
        let file = fs::File::open(archive_path).map_err(|e| ResolveError::io(archive_path, e))?;
        ZipArchive::new(file).map_err(|e| ResolveError::io(archive_path, e))
    }
}

impl ArchiveAccessor for ZipAccessor {
    fn entry_exists(&self, archive_path: &Path, entry: &str) -> ResolveResult<bool> {
        let archive = Self::open(archive_path)?;
        let exists = archive.file_names().any(|name| name == entry);
        Ok(exists)
    }

    fn read_entry_optional(
        &self,
        archive_path: &Path,
        entry: &str,
    ) -> ResolveResult<Option<Vec<u8>>> {
        let mut archive = Self::open(archive_path)?;
        let file = match archive.by_name(entry) {
            Ok(file) => file,
            Err(ZipError::FileNotFound) => return Ok(None),
            Err(e) => return Err(ResolveError::io(archive_path, e)),
        };

        let too_large = |size: u64| {
            ResolveError::io(
                archive_path,
                IoReason::EntryTooLarge {
                    entry: entry.to_string(),
                    size,
                    limit: self.max_entry_bytes,
                },
            )
        };

        let declared_size = file.size();
        if declared_size > self.max_entry_bytes {
            return Err(too_large(declared_size));
        }

        // The header size is not trusted; cap the actual read as well.
        let mut buf = Vec::with_capacity(declared_size as usize);
        file.take(self.max_entry_bytes.saturating_add(1))
            .read_to_end(&mut buf)
            .map_err(|e| ResolveError::io(archive_path, e))?;
        if buf.len() as u64 > self.max_entry_bytes {
            return Err(too_large(buf.len() as u64));
        }

        log::debug!(
            "Read {} ({} bytes) from {}",
            entry,
            buf.len(),
            archive_path.display()
        );
        Ok(Some(buf))
    }
}
