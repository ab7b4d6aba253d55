//! Test vector types for hashed_addresses.json
//!
//! Hashed receiver derivation: module hash of `channel/sender`, truncated to
//! 20 bytes and bech32 encoded.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct HashedAddressVector {
    pub description: String,
    pub channel_id: String,
    pub original_sender: String,
    pub preimage: String,
    pub module_hash: String,
    pub address_bytes: String,
    pub hashed_address: String,
}

#[derive(Debug, Deserialize)]
pub struct HashedAddressVectors {
    pub description: String,
    pub source: String,
    pub domain_tag: String,
    pub bech32_prefix: String,
    pub vectors: Vec<HashedAddressVector>,
}

pub fn load() -> HashedAddressVectors {
    let json = include_str!("../../../.test-vectors/hashed_addresses.json");
    serde_json::from_str(json).expect("Failed to deserialize hashed_addresses.json")
}
