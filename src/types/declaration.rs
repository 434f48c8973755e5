//! Source-level declarations.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::label::Label;

/// The source-level entity a configured node was built from.
///
/// Logically owned by the package it was loaded from; the label's package id
/// is the back-reference. The `kind` string names the rule kind for
/// diagnostics and has no bearing on pairing consistency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceDeclaration {
    label: Label,
    kind: String,
}

impl SourceDeclaration {
    /// Create a declaration.
    pub fn new(label: Label, kind: impl Into<String>) -> Self {
        Self {
            label,
            kind: kind.into(),
        }
    }

    /// The declaration's label.
    pub fn label(&self) -> &Label {
        &self.label
    }

    /// The rule kind, e.g. `library` or `binary`.
    pub fn kind(&self) -> &str {
        &self.kind
    }
}

impl fmt::Display for SourceDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.label)
    }
}
