use super::artifact::ResolvedArtifact;
use super::probe::{ProbeOutcome, SchemeProbe, SCHEME_PROBES};
use crate::services::archive::{ArchiveAccessor, ZipAccessor};
use crate::services::config::ResolverConfig;
use crate::types::errors::{IoReason, ResolveError, ResolveResult};
use std::path::Path;

/// Finds the access widener a mod archive declares, if any.
///
/// Holds no state besides the accessor, so one resolver can be shared across
/// threads and used for any number of archives.
#[derive(Debug, Clone)]
pub struct AccessWidenerResolver<A = ZipAccessor> {
    accessor: A,
}

impl AccessWidenerResolver<ZipAccessor> {
    pub fn new(config: &ResolverConfig) -> Self {
        Self::with_accessor(ZipAccessor::new(config))
    }
}

impl<A: ArchiveAccessor> AccessWidenerResolver<A> {
    pub fn with_accessor(accessor: A) -> Self {
        Self { accessor }
    }

    pub fn accessor(&self) -> &A {
        &self.accessor
    }

    /// Resolve the access widener declared by `archive`.
    ///
    /// Descriptors are tried in [`SCHEME_PROBES`] order. The first descriptor
    /// present in the archive decides: either it declares an artifact, which
    /// is then read, or it declares none and `Ok(None)` is returned without
    /// looking at the remaining descriptors. An archive with none of the
    /// descriptors also yields `Ok(None)`.
    pub fn resolve(&self, archive: &Path) -> ResolveResult<Option<ResolvedArtifact>> {
        for probe in &SCHEME_PROBES {
            match probe.probe(&self.accessor, archive)? {
                ProbeOutcome::NotApplicable => {
                    log::debug!("{}: no {}", archive.display(), probe.descriptor);
                }
                ProbeOutcome::DeclaredAbsent => {
                    log::debug!(
                        "{}: {} declares no access widener",
                        archive.display(),
                        probe.descriptor
                    );
                    return Ok(None);
                }
                ProbeOutcome::Declared {
                    declared_path,
                    owner_id,
                } => {
                    let content = self.read_artifact(probe, archive, &declared_path)?;
                    let artifact = ResolvedArtifact::new(declared_path, owner_id, content);
                    log::info!(
                        "Resolved access widener {} for '{}' from {} ({} bytes, {})",
                        artifact.declared_path(),
                        artifact.owner_id(),
                        archive.display(),
                        artifact.content().len(),
                        artifact.fingerprint()
                    );
                    return Ok(Some(artifact));
                }
            }
        }

        log::debug!("{}: no access widener descriptor", archive.display());
        Ok(None)
    }

    fn read_artifact(
        &self,
        probe: &SchemeProbe,
        archive: &Path,
        declared_path: &str,
    ) -> ResolveResult<Vec<u8>> {
        self.accessor
            .read_entry_required(archive, declared_path)
            .map_err(|e| {
                if e.is_missing_entry() {
                    ResolveError::io(
                        archive,
                        IoReason::MissingArtifact {
                            entry: declared_path.to_string(),
                            descriptor: probe.descriptor,
                        },
                    )
                } else {
                    e
                }
            })
    }
}

/// Resolve `archive` with the default zip-backed resolver.
pub fn resolve_access_widener(
    archive: impl AsRef<Path>,
) -> ResolveResult<Option<ResolvedArtifact>> {
    AccessWidenerResolver::new(&ResolverConfig::default()).resolve(archive.as_ref())
}

#[cfg(test)]
#[path = "tests/resolver_tests.rs"]
mod tests;
