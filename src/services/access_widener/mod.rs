//! Locating and extracting the access widener declared by a mod archive.
//!
//! Three descriptor schemas are understood, tried in priority order:
//! `fabric.mod.json`, `architectury.common.json`, `quilt.mod.json`.

mod artifact;
pub mod batch;
pub mod probe;
mod resolver;

// Re-export public API
pub use artifact::ResolvedArtifact;
pub use batch::{find_mod_archives, resolve_all, unique_artifacts, ArchiveResolution};
pub use probe::{OwnerIdPolicy, ProbeOutcome, SchemeProbe, SCHEME_PROBES};
pub use resolver::{resolve_access_widener, AccessWidenerResolver};
