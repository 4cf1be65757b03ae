//! Read-only access to entries inside mod archives.

mod accessor;
mod zip_accessor;

pub use accessor::ArchiveAccessor;
pub use zip_accessor::ZipAccessor;

#[cfg(test)]
#[path = "tests/zip_accessor_tests.rs"]
mod tests;
