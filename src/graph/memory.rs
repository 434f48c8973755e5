//! In-memory graph environment for testing.

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use super::{FetchedValues, GraphEnvironment, GraphKey, GraphValue, Interrupted};
use crate::types::{Configuration, ConfigurationKey, Package, PackageId};

/// In-memory graph environment backed by maps of already-computed values.
///
/// Uses `BTreeMap` for deterministic iteration. Records every issued batch
/// and every per-key retrieval from a fetch result, so tests can assert
/// which lookups a resolution actually performed, in particular that a
/// missing package short-circuits before the configuration result is
/// touched.
#[derive(Debug, Default)]
pub struct InMemoryGraphEnvironment {
    /// Computed package values by id.
    packages: BTreeMap<PackageId, Arc<Package>>,
    /// Computed configuration values by key.
    configurations: BTreeMap<ConfigurationKey, Arc<Configuration>>,
    /// Key sets of issued batches, in issue order.
    batches: Arc<Mutex<Vec<BTreeSet<GraphKey>>>>,
    /// Keys retrieved from fetch results, in retrieval order.
    retrieved: Arc<Mutex<Vec<GraphKey>>>,
    /// When set, every fetch reports interruption.
    interrupted: bool,
}

impl InMemoryGraphEnvironment {
    /// Create an empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a package value as computed.
    pub fn add_package(&mut self, package: Package) {
        self.packages
            .insert(package.id().clone(), Arc::new(package));
    }

    /// Mark a configuration value as computed.
    pub fn add_configuration(&mut self, configuration: Configuration) {
        self.configurations
            .insert(configuration.key().clone(), Arc::new(configuration));
    }

    /// Make every subsequent fetch report interruption.
    pub fn interrupt(&mut self) {
        self.interrupted = true;
    }

    /// Key sets of the batches issued so far.
    pub fn batches(&self) -> Vec<BTreeSet<GraphKey>> {
        self.batches.lock().clone()
    }

    /// Keys retrieved from fetch results so far, in retrieval order.
    pub fn retrieved_keys(&self) -> Vec<GraphKey> {
        self.retrieved.lock().clone()
    }
}

/// Fetch result that records per-key retrievals back into the environment.
struct RecordingFetch {
    values: BTreeMap<GraphKey, GraphValue>,
    retrieved: Arc<Mutex<Vec<GraphKey>>>,
}

impl FetchedValues for RecordingFetch {
    fn get(&self, key: &GraphKey) -> Option<GraphValue> {
        self.retrieved.lock().push(key.clone());
        self.values.get(key).cloned()
    }
}

#[async_trait]
impl GraphEnvironment for InMemoryGraphEnvironment {
    async fn fetch(&self, keys: BTreeSet<GraphKey>) -> Result<Box<dyn FetchedValues>, Interrupted> {
        if self.interrupted {
            return Err(Interrupted);
        }
        self.batches.lock().push(keys.clone());

        let mut values = BTreeMap::new();
        for key in keys {
            let value = match &key {
                GraphKey::Package(id) => {
                    self.packages.get(id).cloned().map(GraphValue::Package)
                }
                GraphKey::Configuration(configuration_key) => self
                    .configurations
                    .get(configuration_key)
                    .cloned()
                    .map(GraphValue::Configuration),
            };
            if let Some(value) = value {
                values.insert(key, value);
            }
        }

        Ok(Box::new(RecordingFetch {
            values,
            retrieved: Arc::clone(&self.retrieved),
        }))
    }
}
