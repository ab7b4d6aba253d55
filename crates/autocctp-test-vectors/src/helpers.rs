//! Shared fixtures for tests that drive full packets.
//! Enable the `helpers` feature to use them.

/// Bech32 prefix every vector file is generated with.
pub const PREFIX: &str = "noble";

/// `noble` account for the bytes `0x01..=0x14`.
pub const NOBLE_ADDR_A: &str = "noble1qypqxpq9qcrsszg2pvxq6rs0zqg3yyc5hpek7j";

/// `noble` account for twenty `0xab` bytes.
pub const NOBLE_ADDR_B: &str = "noble14w46h2at4w46h2at4w46h2at4w46h2at5d0afn";

/// `cosmos` account for the bytes `0x01..=0x14`; a typical remote sender.
pub const COSMOS_SENDER: &str = "cosmos1qypqxpq9qcrsszg2pvxq6rs0zqg3yyc5lzv7xu";

/// 32-byte CCTP mint recipient (left-padded EVM address) as bare hex.
pub const MINT_RECIPIENT_HEX: &str =
    "000000000000000000000000d8da6bf26964af9d7eed9e03e53415d37aa96045";

/// Decode a hex string into a `Vec<u8>`.
pub fn hex_to_bytes(hex: &str) -> Vec<u8> {
    hex::decode(hex).expect("invalid hex")
}
