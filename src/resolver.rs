//! Pairing resolution against the host engine's graph.
//!
//! Resolution derives the graph keys a node needs, issues exactly one
//! batched fetch, and either returns a validated pairing or reports that a
//! required value is not yet computed this round. Not-ready is a normal
//! step of incremental evaluation: the host engine re-runs the resolution in
//! a later scheduling pass once the missing dependencies resolve.

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::graph::{GraphEnvironment, GraphKey, GraphValue, Interrupted};
use crate::pairing::{InvariantViolation, NodePairing};
use crate::types::{ConfiguredNode, DeclarationNotFound, Label};

/// Error type for pairing resolution.
///
/// Every variant is fatal to the resolution. A dependency that is merely
/// not yet computed is reported through [`Resolution::NotReady`] instead.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// The fetched package no longer contains the node's declaration.
    ///
    /// The node's existence implies the declaration existed when the node
    /// was built, and the engine invalidates nodes before re-evaluating them
    /// against a changed package. Hitting this means that engine-level
    /// contract was broken elsewhere; it is never retried.
    #[error("Declaration for {node} missing from its fetched package: {source}")]
    DeclarationMissing {
        /// Label of the node being resolved.
        node: Label,
        /// The underlying package lookup failure.
        source: DeclarationNotFound,
    },

    /// The fetched triple failed consistency validation.
    #[error(transparent)]
    Inconsistent(#[from] InvariantViolation),

    /// The host engine interrupted the fetch.
    #[error(transparent)]
    Interrupted(#[from] Interrupted),
}

/// Outcome of a resolution attempt.
#[derive(Debug)]
pub enum Resolution {
    /// Every required value was computed; the validated pairing.
    Ready(NodePairing),
    /// A required graph value is not yet computed this round.
    NotReady,
}

impl Resolution {
    /// The pairing, if resolution completed.
    pub fn ready(self) -> Option<NodePairing> {
        match self {
            Self::Ready(pairing) => Some(pairing),
            Self::NotReady => None,
        }
    }

    /// Whether a required value was still missing.
    pub fn is_not_ready(&self) -> bool {
        matches!(self, Self::NotReady)
    }
}

/// Resolve the pairing for `node` against the graph environment.
///
/// Issues exactly one batched fetch covering the node's package and, when
/// the node is configurable, its configuration. The package result is
/// consulted first: a missing package answers [`Resolution::NotReady`]
/// without touching the configuration result, since the engine reschedules
/// the whole resolution anyway once dependencies land. Missing values are
/// never diagnosed here; they may be missing for unrelated reasons
/// elsewhere in the same evaluation batch.
///
/// The resolver has no transition provenance, so the pairing's transitions
/// are absent; only direct construction and rebinding carry them.
pub async fn resolve_from_node<E>(
    node: Arc<ConfiguredNode>,
    env: &E,
) -> Result<Resolution, ResolveError>
where
    E: GraphEnvironment + ?Sized,
{
    let package_key = GraphKey::package_of(node.label());
    let configuration_key = node
        .configuration_key()
        .cloned()
        .map(GraphKey::Configuration);

    let mut keys = BTreeSet::new();
    keys.insert(package_key.clone());
    if let Some(key) = &configuration_key {
        keys.insert(key.clone());
    }

    let fetched = env.fetch(keys).await?;

    let package = match fetched.get(&package_key).and_then(GraphValue::into_package) {
        Some(package) => package,
        None => {
            tracing::trace!(node = %node.label(), "package not yet computed");
            return Ok(Resolution::NotReady);
        }
    };

    let configuration = match &configuration_key {
        None => None,
        Some(key) => match fetched.get(key).and_then(GraphValue::into_configuration) {
            Some(configuration) => Some(configuration),
            None => {
                tracing::trace!(node = %node.label(), "configuration not yet computed");
                return Ok(Resolution::NotReady);
            }
        },
    };

    let declaration = package.declaration(node.label().name()).map_err(|source| {
        ResolveError::DeclarationMissing {
            node: node.label().clone(),
            source,
        }
    })?;

    let pairing = NodePairing::new(node, declaration, configuration, None)?;
    Ok(Resolution::Ready(pairing))
}
