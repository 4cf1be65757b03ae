//! Resolves the access widener a packaged mod archive declares.
//!
//! ```no_run
//! use aw_resolver::resolve_access_widener;
//!
//! if let Some(aw) = resolve_access_widener("mods/examplemod-1.0.jar")? {
//!     println!("{} owns {}", aw.owner_id(), aw.declared_path());
//! }
//! # Ok::<(), aw_resolver::ResolveError>(())
//! ```

pub mod services;
pub mod types;
#[cfg(test)]
pub mod test_utils;

pub use services::access_widener::{
    resolve_access_widener, AccessWidenerResolver, ProbeOutcome, ResolvedArtifact,
};
pub use services::archive::{ArchiveAccessor, ZipAccessor};
pub use services::config::ResolverConfig;
pub use types::errors::{ErrorKind, IoReason, ResolveError, ResolveResult};
