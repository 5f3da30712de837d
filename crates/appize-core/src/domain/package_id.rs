//! Dotted package identifiers (e.g. `com.example.app`).
//!
//! A [`PackageId`] has two representations that must stay consistent: the
//! dotted form used in source declarations and the slash-delimited directory
//! form used in paths. `dir_path(id) == id.replace('.', "/")` always holds.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::domain::error::DomainError;

/// A validated dotted package identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackageId(String);

impl PackageId {
    /// Parse and validate a dotted identifier.
    ///
    /// Rules: at least one segment, every segment non-empty, segments start
    /// with a letter or underscore and continue with alphanumerics or
    /// underscores. This is the common denominator accepted by both the
    /// Gradle namespace and the bundle-identifier fields.
    pub fn parse(id: &str) -> Result<Self, DomainError> {
        if id.is_empty() {
            return Err(DomainError::InvalidPackageId {
                id: id.into(),
                reason: "identifier is empty".into(),
            });
        }

        for segment in id.split('.') {
            if segment.is_empty() {
                return Err(DomainError::InvalidPackageId {
                    id: id.into(),
                    reason: "empty segment (consecutive or leading/trailing dots)".into(),
                });
            }
            let mut chars = segment.chars();
            // split on '.' never yields an empty iterator here
            let first = chars.next().unwrap_or('.');
            if !(first.is_ascii_alphabetic() || first == '_') {
                return Err(DomainError::InvalidPackageId {
                    id: id.into(),
                    reason: format!("segment '{segment}' must start with a letter or '_'"),
                });
            }
            if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
                return Err(DomainError::InvalidPackageId {
                    id: id.into(),
                    reason: format!("segment '{segment}' contains invalid characters"),
                });
            }
        }

        Ok(Self(id.to_string()))
    }

    /// The dotted form, as it appears in declarations.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The slash-delimited directory form.
    pub fn dir_path(&self) -> PathBuf {
        self.0.split('.').collect()
    }

    /// The source-level namespace declaration line for this identifier.
    pub fn declaration(&self) -> String {
        format!("package {};", self.0)
    }
}

impl FromStr for PackageId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for PackageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
