//! Test vector loading for autocctp.
//!
//! Each module corresponds to a single JSON file under `.test-vectors/` and
//! provides typed structs matching its schema plus a `load()` function that
//! deserializes the embedded JSON via `include_str!`.
//!
//! # Usage
//!
//! ```rust
//! let vectors = autocctp_test_vectors::hashed_addresses::load();
//! for v in &vectors.vectors {
//!     assert!(v.hashed_address.starts_with(&vectors.bech32_prefix));
//! }
//! ```

#[cfg(feature = "helpers")]
pub mod helpers;

pub mod hashed_addresses;
pub mod memos;

pub use hashed_addresses::HashedAddressVectors;
pub use memos::MemoVectors;
