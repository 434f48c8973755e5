//! # pairing-kernel
//!
//! Short-lived pairing of configured nodes with the context that produced
//! them, for incremental build graph evaluation.
//!
//! The pairing kernel answers one question:
//!
//! > Given a graph-resident build output, which source declaration and
//! > which resolved configuration does it belong with, and is that triple
//! > structurally consistent?
//!
//! ## Core Contract
//!
//! 1. Pair a node with its source declaration, configuration, and transition
//!    provenance, validating the triple at construction
//! 2. Resolve such a pairing from the host engine's graph with one batched
//!    fetch, answering `NotReady` while dependencies are still computing
//! 3. Rebind the node member of an existing pairing, checked or
//!    deliberately unchecked
//!
//! ## Architecture
//!
//! ```text
//! ConfiguredNode → resolve_from_node → {package, configuration} batch
//!                         ↓
//!                  GraphEnvironment (host engine)
//!                         ↓
//!           Ready(NodePairing) | NotReady
//! ```
//!
//! ## Lifetime Guarantees
//!
//! - Pairings are valid for one evaluation step and never stored in the graph
//! - Node, declaration, configuration, and package are shared with the
//!   engine and never mutated here
//! - Every resolution starts from nothing; nothing is cached across calls

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod canonical;
pub mod graph;
pub mod pairing;
pub mod resolver;
pub mod types;

// Re-exports
pub use types::{Configuration, ConfigurationKey};
pub use types::{ConfiguredNode, SourceDeclaration};
pub use types::{DeclarationNotFound, Package};
pub use types::{Label, LabelError, PackageId};
pub use types::TransitionId;
pub use pairing::{InvariantViolation, NodePairing};
pub use resolver::{resolve_from_node, Resolution, ResolveError};
pub use graph::{FetchedValues, GraphEnvironment, GraphKey, GraphValue, Interrupted};
pub use graph::InMemoryGraphEnvironment;
pub use canonical::{canonical_checksum, to_canonical_bytes};
