//! Build configurations and their identifying keys.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::canonical::canonical_checksum;

/// Key identifying a resolved build configuration.
///
/// The key is the checksum of the configuration's canonical option bytes,
/// so two configurations resolved from identical options share a key.
/// Implements `Ord` for deterministic ordering of graph keys.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ConfigurationKey(String);

impl ConfigurationKey {
    /// Create a configuration key from a checksum string.
    pub fn new(checksum: impl Into<String>) -> Self {
        Self(checksum.into())
    }

    /// Get the checksum string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigurationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Resolved build-parameter context for configured nodes.
///
/// Options are kept in a `BTreeMap` so the derived key is stable regardless
/// of construction order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    key: ConfigurationKey,
    options: BTreeMap<String, String>,
}

impl Configuration {
    /// Build a configuration from resolved options, deriving its key from
    /// the canonical option bytes.
    pub fn from_options(options: BTreeMap<String, String>) -> Self {
        let key = ConfigurationKey::new(canonical_checksum(&options));
        Self { key, options }
    }

    /// The configuration's identifying key.
    pub fn key(&self) -> &ConfigurationKey {
        &self.key
    }

    /// Look up a single option value.
    pub fn option(&self, name: &str) -> Option<&str> {
        self.options.get(name).map(String::as_str)
    }

    /// All resolved options.
    pub fn options(&self) -> &BTreeMap<String, String> {
        &self.options
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "configuration {}", self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_same_options_same_key() {
        let a = Configuration::from_options(options(&[("platform", "linux"), ("mode", "opt")]));
        let b = Configuration::from_options(options(&[("mode", "opt"), ("platform", "linux")]));
        assert_eq!(a.key(), b.key());
    }

    #[test]
    fn test_different_options_different_key() {
        let a = Configuration::from_options(options(&[("mode", "opt")]));
        let b = Configuration::from_options(options(&[("mode", "dbg")]));
        assert_ne!(a.key(), b.key());
    }

    #[test]
    fn test_option_lookup() {
        let configuration = Configuration::from_options(options(&[("platform", "linux")]));
        assert_eq!(configuration.option("platform"), Some("linux"));
        assert_eq!(configuration.option("missing"), None);
    }
}
