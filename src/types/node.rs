//! Configured nodes: graph-resident build outputs.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::configuration::ConfigurationKey;
use super::label::Label;

/// A graph-resident build output identity.
///
/// Carries the label of the declaration it was built from and, when the node
/// is configurable, a reference to the key of the configuration it was built
/// under. Nodes are produced by the host engine; the pairing kernel consumes
/// them read-only and compares them member-wise.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConfiguredNode {
    label: Label,
    configuration_key: Option<ConfigurationKey>,
}

impl ConfiguredNode {
    /// Create a node built under the configuration identified by `key`.
    pub fn configured(label: Label, key: ConfigurationKey) -> Self {
        Self {
            label,
            configuration_key: Some(key),
        }
    }

    /// Create a node with no configuration reference (not configurable).
    pub fn unconfigured(label: Label) -> Self {
        Self {
            label,
            configuration_key: None,
        }
    }

    /// The label of the declaration this node was built from.
    pub fn label(&self) -> &Label {
        &self.label
    }

    /// The key of the configuration this node was built under, if any.
    pub fn configuration_key(&self) -> Option<&ConfigurationKey> {
        self.configuration_key.as_ref()
    }
}

impl fmt::Display for ConfiguredNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.configuration_key {
            Some(key) => write!(f, "{} ({})", self.label, key),
            None => write!(f, "{} (unconfigured)", self.label),
        }
    }
}
