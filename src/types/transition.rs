//! Transition provenance.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of one configuration-transition step.
///
/// Opaque to the pairing kernel; the configuration-resolution subsystem
/// assigns them. An ordered `Vec<TransitionId>` records the chain of steps
/// that produced a configuration from its parent context. Order is
/// provenance, not a set.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TransitionId(String);

impl TransitionId {
    /// Create a transition id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TransitionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
