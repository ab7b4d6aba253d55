//! Test vector types for memos.json
//!
//! Each vector is a raw memo string and the expected parser outcome:
//! `none`, `directive`, or the snake_case name of the parse error.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ExpectedDirective {
    pub receiver: String,
    pub destination_domain: u32,
    /// Hex of the decoded 32-byte mint recipient.
    pub mint_recipient: String,
    pub transfer_channel: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct MemoVector {
    pub index: u64,
    pub description: String,
    pub memo: String,
    pub expected: String,
    pub directive: Option<ExpectedDirective>,
}

#[derive(Debug, Deserialize)]
pub struct MemoVectors {
    pub description: String,
    pub bech32_prefix: String,
    pub vectors: Vec<MemoVector>,
}

pub fn load() -> MemoVectors {
    let json = include_str!("../../../.test-vectors/memos.json");
    serde_json::from_str(json).expect("Failed to deserialize memos.json")
}
