//! Resolving access wideners across a whole set of mod archives.

use super::artifact::ResolvedArtifact;
use super::resolver::AccessWidenerResolver;
use crate::services::archive::ArchiveAccessor;
use crate::services::config::ResolverConfig;
use crate::types::errors::{ResolveError, ResolveResult};
use rayon::prelude::*;
use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Outcome for one archive of a batch.
#[derive(Debug)]
pub struct ArchiveResolution {
    pub archive: PathBuf,
    pub result: ResolveResult<Option<ResolvedArtifact>>,
}

/// Recursively collect mod archives under `dir`, sorted by path.
pub fn find_mod_archives(dir: &Path, config: &ResolverConfig) -> ResolveResult<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(ResolveError::io(
            dir,
            io::Error::new(io::ErrorKind::NotFound, "mods directory does not exist"),
        ));
    }

    let mut archives: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(e) => Some(e),
            Err(e) => {
                log::warn!("Skipping unreadable entry: {e}");
                None
            }
        })
        .filter(|e| e.file_type().is_file() && config.is_archive_path(e.path()))
        .map(|e| e.into_path())
        .collect();

    archives.sort();
    Ok(archives)
}

/// Resolve every archive in parallel. Results keep the input order and a
/// failure in one archive does not affect the others.
pub fn resolve_all<A>(
    resolver: &AccessWidenerResolver<A>,
    archives: &[PathBuf],
) -> Vec<ArchiveResolution>
where
    A: ArchiveAccessor + Sync,
{
    archives
        .par_iter()
        .map(|archive| {
            let result = resolver.resolve(archive);
            if let Err(e) = &result {
                log::warn!("Failed to resolve access widener: {e}");
            }
            ArchiveResolution {
                archive: archive.clone(),
                result,
            }
        })
        .collect()
}

/// Successfully resolved artifacts, duplicates removed, first occurrence kept.
pub fn unique_artifacts(resolutions: &[ArchiveResolution]) -> Vec<ResolvedArtifact> {
    let mut seen = HashSet::new();
    resolutions
        .iter()
        .filter_map(|r| r.result.as_ref().ok().and_then(Option::as_ref))
        .filter(|artifact| seen.insert(*artifact))
        .cloned()
        .collect()
}

#[cfg(test)]
#[path = "tests/batch_tests.rs"]
mod tests;
