//! Hashing primitives for autocctp.
//!
//! Provides the SHA-256 building blocks and the domain-separated module hash
//! used to derive synthetic account addresses.

pub mod sha;

pub use sha::{module_hash, sha256};
