//! SHA-256 hashing primitives.
//!
//! Provides one-shot hashing, a streaming hasher, and the domain-separated
//! "module hash" (`SHA-256(SHA-256(typ) || key)`) that Cosmos chains use to
//! derive module and synthetic account addresses.

use sha2::{Digest, Sha256};

/// Compute the SHA-256 hash of the given data.
#[must_use]
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Compute the domain-separated hash of `key` under the label `typ`.
///
/// `module_hash = SHA-256(SHA-256(typ) || key)`
#[must_use]
pub fn module_hash(typ: &str, key: &[u8]) -> [u8; 32] {
    let type_hash = sha256(typ.as_bytes());
    let mut hasher = Sha256Hasher::new();
    hasher.update(&type_hash);
    hasher.update(key);
    hasher.finalize()
}

/// A streaming SHA-256 hasher that allows incremental feeding of data.
pub struct Sha256Hasher {
    inner: Sha256,
}

impl Sha256Hasher {
    /// Create a new streaming SHA-256 hasher.
    pub fn new() -> Self {
        Self {
            inner: Sha256::new(),
        }
    }

    /// Feed more data into the hasher.
    pub fn update(&mut self, data: &[u8]) {
        self.inner.update(data);
    }

    /// Consume the hasher and return the final SHA-256 digest.
    #[must_use]
    pub fn finalize(self) -> [u8; 32] {
        self.inner.finalize().into()
    }
}

impl Default for Sha256Hasher {
    fn default() -> Self {
        Self::new()
    }
}
