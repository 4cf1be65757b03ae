//! Descriptor schemas that can declare an access widener.
//!
//! Each loader ecosystem names the artifact in its own metadata file. A
//! [`SchemeProbe`] knows one such file, the field to read, the shape that
//! field may take and where the owning mod id comes from.

use crate::services::archive::ArchiveAccessor;
use crate::types::errors::{ResolveError, ResolveResult};
use serde_json::{Map, Value};
use std::path::Path;

/// Where a probe takes the owning mod id from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OwnerIdPolicy {
    /// A required string field of the descriptor, read when a declaration is present.
    DescriptorField(&'static str),
    /// The archive's own file name.
    ArchiveFileName,
}

/// Allowed JSON shapes of the declaration field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationShape {
    Scalar,
    /// A string, or a list holding exactly one string.
    ScalarOrSingleton,
}

/// How the descriptor is looked up in the archive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptorLookup {
    /// Read it directly; a missing entry means the probe does not apply.
    ReadIfPresent,
    /// Check for it first; once the check matched, failing to read it is an error.
    CheckThenRead,
}

/// Result of running one probe against an archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The descriptor is not in the archive.
    NotApplicable,
    /// The descriptor declares an artifact.
    Declared {
        declared_path: String,
        owner_id: String,
    },
    /// The descriptor is present and declares nothing.
    DeclaredAbsent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemeProbe {
    pub descriptor: &'static str,
    pub field: &'static str,
    pub shape: DeclarationShape,
    pub owner: OwnerIdPolicy,
    pub lookup: DescriptorLookup,
}

/// `fabric.mod.json`: the canonical per-mod descriptor.
pub const FABRIC: SchemeProbe = SchemeProbe {
    descriptor: "fabric.mod.json",
    field: "accessWidener",
    shape: DeclarationShape::Scalar,
    owner: OwnerIdPolicy::DescriptorField("id"),
    lookup: DescriptorLookup::ReadIfPresent,
};

/// `architectury.common.json`: generated for the common half of multi-loader builds.
pub const ARCHITECTURY: SchemeProbe = SchemeProbe {
    descriptor: "architectury.common.json",
    field: "accessWidener",
    shape: DeclarationShape::Scalar,
    owner: OwnerIdPolicy::ArchiveFileName,
    lookup: DescriptorLookup::CheckThenRead,
};

/// `quilt.mod.json`: the Quilt loader descriptor; the field may be a one-element list.
pub const QUILT: SchemeProbe = SchemeProbe {
    descriptor: "quilt.mod.json",
    field: "access_widener",
    shape: DeclarationShape::ScalarOrSingleton,
    owner: OwnerIdPolicy::ArchiveFileName,
    lookup: DescriptorLookup::CheckThenRead,
};

/// Probes in priority order.
pub const SCHEME_PROBES: [SchemeProbe; 3] = [FABRIC, ARCHITECTURY, QUILT];

impl SchemeProbe {
    pub fn probe<A>(&self, accessor: &A, archive: &Path) -> ResolveResult<ProbeOutcome>
    where
        A: ArchiveAccessor + ?Sized,
    {
        let Some(bytes) = self.read_descriptor(accessor, archive)? else {
            return Ok(ProbeOutcome::NotApplicable);
        };

        let document = self.parse_document(archive, &bytes)?;

        let Some(declared_path) = self.declared_path(archive, &document)? else {
            return Ok(ProbeOutcome::DeclaredAbsent);
        };

        let owner_id = self.owner_id(archive, &document)?;

        Ok(ProbeOutcome::Declared {
            declared_path,
            owner_id,
        })
    }

    fn read_descriptor<A>(&self, accessor: &A, archive: &Path) -> ResolveResult<Option<Vec<u8>>>
    where
        A: ArchiveAccessor + ?Sized,
    {
        match self.lookup {
            DescriptorLookup::ReadIfPresent => {
                accessor.read_entry_optional(archive, self.descriptor)
            }
            DescriptorLookup::CheckThenRead => {
                if !accessor.entry_exists(archive, self.descriptor)? {
                    return Ok(None);
                }
                // Existence was confirmed, so a vanished entry is not "absent".
                accessor
                    .read_entry_optional(archive, self.descriptor)?
                    .map(Some)
                    .ok_or_else(|| ResolveError::missing_entry(archive, self.descriptor))
            }
        }
    }

    fn parse_document(&self, archive: &Path, bytes: &[u8]) -> ResolveResult<Map<String, Value>> {
        let value: Value = serde_json::from_slice(bytes)
            .map_err(|e| self.invalid(archive, format!("Failed to parse: {e}")))?;

        match value {
            Value::Object(map) => Ok(map),
            other => Err(self.invalid(
                archive,
                format!("expected a JSON object, found {}", json_type_name(&other)),
            )),
        }
    }

    fn declared_path(
        &self,
        archive: &Path,
        document: &Map<String, Value>,
    ) -> ResolveResult<Option<String>> {
        let declared = match (document.get(self.field), self.shape) {
            (None, _) => return Ok(None),
            (Some(Value::String(path)), _) => path,
            (Some(Value::Array(items)), DeclarationShape::ScalarOrSingleton) => {
                match items.as_slice() {
                    [Value::String(path)] => path,
                    [other] => {
                        return Err(self.invalid(
                            archive,
                            format!(
                                "'{}' must list a string, found {}",
                                self.field,
                                json_type_name(other)
                            ),
                        ))
                    }
                    _ => {
                        return Err(ResolveError::unsupported(
                            archive,
                            self.descriptor,
                            format!(
                                "'{}' lists {} access wideners, exactly one per mod is supported",
                                self.field,
                                items.len()
                            ),
                        ))
                    }
                }
            }
            (Some(other), _) => {
                return Err(self.invalid(
                    archive,
                    format!(
                        "'{}' must be a string, found {}",
                        self.field,
                        json_type_name(other)
                    ),
                ))
            }
        };

        if declared.is_empty() {
            return Err(self.invalid(archive, format!("'{}' is empty", self.field)));
        }
        Ok(Some(declared.clone()))
    }

    fn owner_id(&self, archive: &Path, document: &Map<String, Value>) -> ResolveResult<String> {
        match self.owner {
            OwnerIdPolicy::DescriptorField(key) => match document.get(key) {
                Some(Value::String(id)) => Ok(id.clone()),
                Some(other) => Err(self.invalid(
                    archive,
                    format!("'{key}' must be a string, found {}", json_type_name(other)),
                )),
                None => Err(self.invalid(
                    archive,
                    format!("'{key}' is required when '{}' is set", self.field),
                )),
            },
            OwnerIdPolicy::ArchiveFileName => Ok(archive_file_name(archive)),
        }
    }

    fn invalid(&self, archive: &Path, message: String) -> ResolveError {
        ResolveError::invalid_metadata(archive, self.descriptor, message)
    }
}

/// File name of the archive, used as a stand-in mod id.
pub fn archive_file_name(archive: &Path) -> String {
    archive
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| archive.display().to_string())
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
#[path = "tests/probe_tests.rs"]
mod tests;
