//! Short-lived pairing of a configured node with the context that produced it.
//!
//! A [`NodePairing`] bundles a node with its source declaration and resolved
//! configuration, plus the transition provenance that led to that
//! configuration. The three referents are heavyweight and shared with the
//! rest of the engine, so pairings are built per evaluation step and
//! discarded with it: they are never stored in the graph and do not
//! serialize.
//!
//! ## Structural Rules
//!
//! Checked construction enforces:
//!
//! 1. The node and declaration agree on the label
//! 2. A node without a configuration key takes no configuration
//! 3. A node with a configuration key takes the configuration with exactly
//!    that key
//!
//! The only way to bypass the rules is [`NodePairing::rebind_no_check`],
//! for replacement nodes whose configuration intentionally diverges
//! (configuration trimming).

use std::sync::Arc;

use crate::types::{
    Configuration, ConfigurationKey, ConfiguredNode, Label, SourceDeclaration, TransitionId,
};

/// Error type for pairing construction.
///
/// Each variant names the structural rule that failed and the offending
/// values. Construction failures are fatal: they mean the engine produced an
/// internally inconsistent node/declaration/configuration triple. They are
/// never retried or recovered locally.
#[derive(Debug, Clone, thiserror::Error)]
pub enum InvariantViolation {
    /// Node and declaration disagree on the label.
    #[error("Node label {node_label} does not match declaration label {declaration_label}")]
    LabelMismatch {
        /// Label carried by the node.
        node_label: Label,
        /// Label carried by the declaration.
        declaration_label: Label,
    },

    /// Node carries no configuration key but a configuration was supplied.
    #[error("Node {label} has no configuration key but was paired with configuration {supplied}")]
    UnexpectedConfiguration {
        /// Label of the offending node.
        label: Label,
        /// Key of the configuration that was supplied.
        supplied: ConfigurationKey,
    },

    /// Node carries a configuration key but no configuration was supplied.
    #[error("Node {label} references configuration {expected} but none was supplied")]
    MissingConfiguration {
        /// Label of the offending node.
        label: Label,
        /// Configuration key the node references.
        expected: ConfigurationKey,
    },

    /// Node and supplied configuration disagree on the configuration key.
    #[error("Configuration keys for {label} do not match: node references {expected}, configuration is keyed {actual}")]
    ConfigurationKeyMismatch {
        /// Label of the offending node.
        label: Label,
        /// Configuration key the node references.
        expected: ConfigurationKey,
        /// Key of the configuration that was supplied.
        actual: ConfigurationKey,
    },
}

/// A configured node paired with its source declaration, its configuration,
/// and the transition provenance that produced that configuration.
///
/// Valid for the duration of one evaluation step. The pairing owns its four
/// slots but not the referents behind them; node, declaration, and
/// configuration live as long as the graph does and are never mutated here.
#[derive(Debug, Clone)]
pub struct NodePairing {
    node: Arc<ConfiguredNode>,
    declaration: Arc<SourceDeclaration>,
    configuration: Option<Arc<Configuration>>,
    transitions: Option<Vec<TransitionId>>,
}

impl NodePairing {
    /// Construct a pairing, validating the structural rules.
    ///
    /// `transitions` is the ordered chain of transition steps that produced
    /// `configuration`, or `None` when the caller has no provenance (the
    /// graph resolver never does).
    pub fn new(
        node: Arc<ConfiguredNode>,
        declaration: Arc<SourceDeclaration>,
        configuration: Option<Arc<Configuration>>,
        transitions: Option<Vec<TransitionId>>,
    ) -> Result<Self, InvariantViolation> {
        check_consistent(&node, &declaration, configuration.as_deref())?;
        Ok(Self {
            node,
            declaration,
            configuration,
            transitions,
        })
    }

    /// Construct without validating. Reachable from outside the crate only
    /// through [`rebind_no_check`](Self::rebind_no_check).
    pub(crate) fn new_unchecked(
        node: Arc<ConfiguredNode>,
        declaration: Arc<SourceDeclaration>,
        configuration: Option<Arc<Configuration>>,
        transitions: Option<Vec<TransitionId>>,
    ) -> Self {
        Self {
            node,
            declaration,
            configuration,
            transitions,
        }
    }

    /// The graph-resident node.
    pub fn node(&self) -> &Arc<ConfiguredNode> {
        &self.node
    }

    /// The source declaration the node was built from.
    pub fn declaration(&self) -> &Arc<SourceDeclaration> {
        &self.declaration
    }

    /// The configuration the node was built under, if it is configurable.
    pub fn configuration(&self) -> Option<&Arc<Configuration>> {
        self.configuration.as_ref()
    }

    /// Transition steps applied to reach the configuration, in application
    /// order. Absent when the pairing came from graph resolution.
    pub fn transitions(&self) -> Option<&[TransitionId]> {
        self.transitions.as_deref()
    }

    /// Derive a pairing with `node` in place of the current node, keeping
    /// declaration, configuration, and transitions.
    ///
    /// Returns `self` unchanged when `node` equals the current node, so
    /// callers comparing by reference keep a stable pairing. Otherwise the
    /// replacement is validated like direct construction. Use this when a
    /// synthesized or merged node stands in for the same declaration under
    /// the same configuration.
    pub fn rebind(self, node: Arc<ConfiguredNode>) -> Result<Self, InvariantViolation> {
        if *self.node == *node {
            return Ok(self);
        }
        Self::new(node, self.declaration, self.configuration, self.transitions)
    }

    /// Variant of [`rebind`](Self::rebind) that skips validation.
    ///
    /// For configuration trimming, where the replacement node's
    /// configuration key intentionally diverges from the paired
    /// configuration and the structural rules would rightly fail.
    pub fn rebind_no_check(self, node: Arc<ConfiguredNode>) -> Self {
        if *self.node == *node {
            return self;
        }
        Self::new_unchecked(node, self.declaration, self.configuration, self.transitions)
    }
}

/// Check the structural rules for one node/declaration/configuration triple.
fn check_consistent(
    node: &ConfiguredNode,
    declaration: &SourceDeclaration,
    configuration: Option<&Configuration>,
) -> Result<(), InvariantViolation> {
    if node.label() != declaration.label() {
        return Err(InvariantViolation::LabelMismatch {
            node_label: node.label().clone(),
            declaration_label: declaration.label().clone(),
        });
    }
    match (node.configuration_key(), configuration) {
        (None, None) => Ok(()),
        (None, Some(configuration)) => Err(InvariantViolation::UnexpectedConfiguration {
            label: node.label().clone(),
            supplied: configuration.key().clone(),
        }),
        (Some(expected), None) => Err(InvariantViolation::MissingConfiguration {
            label: node.label().clone(),
            expected: expected.clone(),
        }),
        (Some(expected), Some(configuration)) => {
            if configuration.key() == expected {
                Ok(())
            } else {
                Err(InvariantViolation::ConfigurationKeyMismatch {
                    label: node.label().clone(),
                    expected: expected.clone(),
                    actual: configuration.key().clone(),
                })
            }
        }
    }
}
