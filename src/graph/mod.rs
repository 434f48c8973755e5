//! Graph environment: the host engine's batched lookup capability.
//!
//! The pairing kernel never owns or mutates the engine's key/value graph. It
//! consumes one capability: a batched fetch over the keys a resolution
//! needs, valid for the current evaluation step. A value absent from a fetch
//! result means "not yet computed this round" and is informative, never an
//! error; only interruption surfaces through the error channel.

pub mod memory;

use async_trait::async_trait;
use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use crate::types::{Configuration, ConfigurationKey, Label, Package, PackageId};

pub use memory::InMemoryGraphEnvironment;

/// Key for a value in the host engine's graph.
///
/// Implements `Ord` so batched key sets iterate deterministically.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GraphKey {
    /// Package-loading result for a package id.
    Package(PackageId),
    /// Configuration-resolution result for a configuration key.
    Configuration(ConfigurationKey),
}

impl GraphKey {
    /// Key for the package containing `label`.
    pub fn package_of(label: &Label) -> Self {
        Self::Package(label.package_id().clone())
    }
}

impl fmt::Display for GraphKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Package(id) => write!(f, "package {id}"),
            Self::Configuration(key) => write!(f, "configuration {key}"),
        }
    }
}

/// Value fetched from the graph.
///
/// Values hand out as `Arc` clones; the graph retains ownership.
#[derive(Debug, Clone)]
pub enum GraphValue {
    /// A loaded package.
    Package(Arc<Package>),
    /// A resolved configuration.
    Configuration(Arc<Configuration>),
}

impl GraphValue {
    /// The package, if this is a package value.
    pub fn into_package(self) -> Option<Arc<Package>> {
        match self {
            Self::Package(package) => Some(package),
            Self::Configuration(_) => None,
        }
    }

    /// The configuration, if this is a configuration value.
    pub fn into_configuration(self) -> Option<Arc<Configuration>> {
        match self {
            Self::Configuration(configuration) => Some(configuration),
            Self::Package(_) => None,
        }
    }
}

/// Interruption signal from the host engine.
///
/// Passed through uncaught: the engine abandons the resolution and there is
/// no partial state to clean up.
#[derive(Debug, Clone, thiserror::Error)]
#[error("Graph fetch interrupted by host engine")]
pub struct Interrupted;

/// Result of one batched fetch.
///
/// Absence of a requested key means its value is not yet computed this
/// round, possibly for reasons elsewhere in the same evaluation batch, so
/// callers must not diagnose it, only retry later.
pub trait FetchedValues: Send {
    /// Look up one requested key in the fetch result.
    fn get(&self, key: &GraphKey) -> Option<GraphValue>;
}

/// The host engine's read-only batched lookup capability for the current
/// evaluation step.
///
/// Implementations must answer every requested key in one batch so the
/// engine can parallelize and deduplicate the lookups and register a single
/// incremental-dependency edge set for all of them.
#[async_trait]
pub trait GraphEnvironment: Send + Sync {
    /// Issue one batched fetch for `keys`.
    ///
    /// Missing values are reported per key through the result, never as an
    /// error; only an interruption signal fails the fetch.
    async fn fetch(&self, keys: BTreeSet<GraphKey>) -> Result<Box<dyn FetchedValues>, Interrupted>;
}
