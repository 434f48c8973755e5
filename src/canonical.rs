//! Canonical serialization for deterministic checksums.
//!
//! Configuration keys are checksums over canonical option bytes. The rules
//! here keep those checksums stable across platforms and construction order.
//!
//! ## Determinism Guarantees
//!
//! - Stable field order: Struct fields serialize in declaration order
//! - Stable Vec order: Vectors serialize in index order
//! - No HashMap allowed: Use BTreeMap for maps in checksummed data

use serde::Serialize;
use sha2::{Digest, Sha256};

/// Serialize a value to canonical JSON bytes for checksumming.
///
/// This function produces deterministic output for the same input,
/// suitable for checksum computation and cross-language comparison.
pub fn to_canonical_bytes<T: Serialize>(value: &T) -> Vec<u8> {
    serde_json::to_vec(value).expect("Canonical serialization failed")
}

/// Compute the SHA-256 checksum of a value's canonical bytes, hex-encoded.
pub fn canonical_checksum<T: Serialize>(value: &T) -> String {
    let bytes = to_canonical_bytes(value);
    let mut hasher = Sha256::new();
    hasher.update(&bytes);
    hex::encode(hasher.finalize())
}
