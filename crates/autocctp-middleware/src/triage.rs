//! Pure receipt triage: size limits, metadata selection and bypass.
//!
//! Extracted from the interceptor so these decisions can be tested without
//! an inner app or a bridge.

use autocctp_core::{AddressCodec, FungibleTokenPacketData};

use crate::error::RecvError;

/// How a decoded transfer is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Plain deposit to a valid account with no memo. Passed to the inner
    /// app untouched, without parsing.
    Bypass,
    /// Memo or receiver may carry routing metadata.
    Structured,
}

/// Reject a memo or receiver longer than `max` bytes.
pub fn check_size(data: &FungibleTokenPacketData, max: usize) -> Result<(), RecvError> {
    for (field, value) in [("memo", &data.memo), ("receiver", &data.receiver)] {
        let length = value.len();
        if length > max {
            return Err(RecvError::MemoTooLarge { field, length, max });
        }
    }
    Ok(())
}

/// The text routing metadata is read from: the memo when present, else the
/// receiver (senders without memo support put the JSON there).
pub fn select_metadata(data: &FungibleTokenPacketData) -> &str {
    if data.memo.is_empty() {
        &data.receiver
    } else {
        &data.memo
    }
}

/// Classify a decoded transfer.
pub fn classify(data: &FungibleTokenPacketData, codec: &AddressCodec) -> Classification {
    if data.memo.is_empty() && codec.is_valid(&data.receiver) {
        Classification::Bypass
    } else {
        Classification::Structured
    }
}
