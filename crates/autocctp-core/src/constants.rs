//! Module constants and registered error codes.

// Module identity
pub const MODULE_NAME: &str = "autocctp";
pub const STORE_KEY: &str = MODULE_NAME;
pub const PORT_ID: &str = MODULE_NAME;
pub const VERSION: &str = "autocctp-1";

/// Version of the wrapped fungible token transfer application.
pub const TRANSFER_VERSION: &str = "ics20-1";

pub const DEFAULT_BECH32_PREFIX: &str = "noble";

// Address sizes
pub const ADDRESS_LEN: usize = 20;
pub const MAX_ADDR_LEN: usize = 255;
pub const MINT_RECIPIENT_LEN: usize = 32;

/// Longest memo or receiver accepted on an inbound transfer, in bytes.
pub const MAX_MEMO_LENGTH: usize = 2000;

// Registered error codes (codespace = MODULE_NAME)
pub const CODE_INVALID_PACKET_METADATA: u32 = 1501;
pub const CODE_AUTOCCTP_INACTIVE: u32 = 1507;
pub const CODE_INVALID_MEMO_SIZE: u32 = 1508;
pub const CODE_INVALID_PACKET_DATA: u32 = 1509;
pub const CODE_UNPARSABLE_AMOUNT: u32 = 1510;
pub const CODE_INVALID_BURN_REQUEST: u32 = 1511;
pub const CODE_BURN_FAILED: u32 = 1512;
pub const CODE_HASHED_ADDRESS: u32 = 1513;
