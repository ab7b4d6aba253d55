//! Error types for the transfer middleware.

use autocctp_cctp::RouteError;
use autocctp_core::constants::{CODE_HASHED_ADDRESS, CODE_INVALID_MEMO_SIZE};
use autocctp_core::{AddressError, CodedError, PacketDataError, ParseError};

/// Errors surfaced by the middleware outside packet receipt.
#[derive(Debug, thiserror::Error)]
pub enum MiddlewareError {
    #[error("configuration error: {0}")]
    Config(String),
    #[error("channel error: {0}")]
    Channel(#[from] ChannelError),
    #[error("invalid request: UNIMPLEMENTED ({0})")]
    Unimplemented(&'static str),
}

/// Channel handshake and callback failures reported by the wrapped app.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChannelError {
    #[error("invalid channel version: expected {expected}, got {actual}")]
    InvalidVersion { expected: String, actual: String },
    #[error("invalid channel ordering: {0}")]
    InvalidOrdering(String),
    #[error("channel callback failed: {0}")]
    App(String),
}

/// Reasons a received packet is answered with an error acknowledgement.
#[derive(Debug, thiserror::Error)]
pub enum RecvError {
    #[error(transparent)]
    PacketData(#[from] PacketDataError),

    #[error("{field} length {length} exceeds maximum of {max}")]
    MemoTooLarge {
        field: &'static str,
        length: usize,
        max: usize,
    },

    #[error(transparent)]
    Metadata(#[from] ParseError),

    #[error("failed to derive hashed receiver: {0}")]
    HashedAddress(#[source] AddressError),

    #[error(transparent)]
    Route(#[from] RouteError),
}

impl CodedError for RecvError {
    fn code(&self) -> u32 {
        match self {
            RecvError::PacketData(e) => e.code(),
            RecvError::MemoTooLarge { .. } => CODE_INVALID_MEMO_SIZE,
            RecvError::Metadata(e) => e.code(),
            RecvError::HashedAddress(_) => CODE_HASHED_ADDRESS,
            RecvError::Route(e) => e.code(),
        }
    }
}
