//! Labels identifying declarations and the nodes built from them.
//!
//! Full label semantics (repository mapping, relative resolution) belong to
//! the loading layer; this module carries the identity form the pairing
//! kernel compares and displays: a package path plus a simple name, rendered
//! as `//package/path:name`.

use regex_lite::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// Error type for label parsing.
#[derive(Debug, Clone, thiserror::Error)]
pub enum LabelError {
    /// Input did not match the `//package/path:name` form.
    #[error("Malformed label: {0}")]
    Malformed(String),
}

/// Identifier of the package a declaration lives in.
///
/// Wraps the package path without the leading `//`. Implements `Ord` for
/// deterministic ordering of graph keys.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PackageId(String);

impl PackageId {
    /// Create a package id from a path such as `tools/build`.
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Get the package path.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PackageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "//{}", self.0)
    }
}

/// Label of a declaration: its containing package plus a simple name.
///
/// Implements `Ord` and `Hash` so labels can key deterministic collections.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Label {
    package: PackageId,
    name: String,
}

fn label_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^//[A-Za-z0-9_./-]*:[A-Za-z0-9_.+=,@~-]+$").expect("label pattern is valid")
    })
}

impl Label {
    /// Create a label from an already-normalized package id and name.
    pub fn new(package: PackageId, name: impl Into<String>) -> Self {
        Self {
            package,
            name: name.into(),
        }
    }

    /// Parse a label of the form `//package/path:name`.
    pub fn parse(s: &str) -> Result<Self, LabelError> {
        if !label_pattern().is_match(s) {
            return Err(LabelError::Malformed(s.to_string()));
        }
        // The pattern guarantees the `//` prefix and exactly the final colon
        // separates package from name.
        let rest = &s[2..];
        let (package, name) = rest
            .rsplit_once(':')
            .ok_or_else(|| LabelError::Malformed(s.to_string()))?;
        Ok(Self {
            package: PackageId::new(package),
            name: name.to_string(),
        })
    }

    /// The containing package.
    pub fn package_id(&self) -> &PackageId {
        &self.package
    }

    /// The simple name within the package.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.package, self.name)
    }
}
