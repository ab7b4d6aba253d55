//! Error types for the autocctp-core crate.

use crate::ack::CodedError;
use crate::constants::{CODE_INVALID_PACKET_DATA, CODE_INVALID_PACKET_METADATA};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddressError {
    #[error("empty address string is not allowed")]
    Empty,

    #[error("decoding bech32 failed: {0}")]
    Bech32(String),

    #[error("invalid bech32 prefix; expected {expected}, got {actual}")]
    WrongPrefix { expected: String, actual: String },

    #[error("address length must be between 1 and 255 bytes, got {0}")]
    InvalidLength(usize),

    #[error("invalid bech32 prefix {prefix:?}: {reason}")]
    InvalidPrefix { prefix: String, reason: String },

    #[error("encoding bech32 failed: {0}")]
    Encode(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PacketDataError {
    #[error("cannot unmarshal transfer packet data: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("cannot marshal transfer packet data: {0}")]
    Encode(#[source] serde_json::Error),
}

impl CodedError for PacketDataError {
    fn code(&self) -> u32 {
        CODE_INVALID_PACKET_DATA
    }
}

/// Validation failures of the CCTP routing parameters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteParamsError {
    #[error("invalid target account: {0}")]
    TargetAccount(#[from] AddressError),

    #[error("destination domain must be specified")]
    MissingDestinationDomain,

    #[error("mint recipient must be specified")]
    MissingMintRecipient,

    #[error("mint recipient is neither hex nor base64")]
    UndecodableMintRecipient,

    #[error("mint recipient must be 32 bytes, got {0}")]
    MintRecipientLength(usize),

    #[error("mint recipient must not be the zero address")]
    ZeroMintRecipient,
}

/// Failures of memo parsing. A memo that is not autocctp JSON at all is not
/// an error; see [`crate::metadata::parse_autocctp_metadata`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("invalid packet metadata: autocctp and pfm cannot both be used in the same packet")]
    ConflictingDirectives,

    #[error(
        "invalid packet metadata: receiver address must be specified when using autocctp: {0}"
    )]
    InvalidReceiver(#[source] AddressError),

    #[error(
        "invalid packet metadata: invalid number of module routes, only 1 module is allowed at a time"
    )]
    NoRouteSpecified,

    #[error("invalid packet metadata: {0}")]
    InvalidRoutingParameters(#[source] RouteParamsError),
}

impl CodedError for ParseError {
    /// Every metadata failure is reported under the packet metadata code;
    /// the variant only shapes the message.
    fn code(&self) -> u32 {
        CODE_INVALID_PACKET_METADATA
    }
}
