//! Error types for CCTP routing.

use autocctp_core::constants::{
    CODE_AUTOCCTP_INACTIVE, CODE_BURN_FAILED, CODE_INVALID_BURN_REQUEST, CODE_UNPARSABLE_AMOUNT,
};
use autocctp_core::{AddressError, CodedError};

use crate::bridge::BridgeError;

/// Reasons a [`crate::BurnRequest`] is refused before reaching the bridge.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BurnValidationError {
    #[error("invalid burn sender: {0}")]
    InvalidFrom(#[source] AddressError),

    #[error("burn amount must be positive")]
    ZeroAmount,

    #[error("burn amount exceeds 256 bits ({0} bits)")]
    AmountTooLarge(u64),

    #[error("mint recipient must be 32 bytes, got {0}")]
    MintRecipientLength(usize),

    #[error("mint recipient must not be the zero address")]
    ZeroMintRecipient,
}

/// Failures after the inner transfer has been applied.
#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    #[error("autocctp packet forwarding is disabled")]
    RoutingInactive,

    #[error("error parsing amount: {0:?}")]
    UnparsableAmount(String),

    #[error("invalid burn request: {0}")]
    InvalidBurnRequest(#[from] BurnValidationError),

    #[error("error depositing for burn: {0}")]
    BurnFailed(#[from] BridgeError),
}

impl CodedError for RouteError {
    fn code(&self) -> u32 {
        match self {
            RouteError::RoutingInactive => CODE_AUTOCCTP_INACTIVE,
            RouteError::UnparsableAmount(_) => CODE_UNPARSABLE_AMOUNT,
            RouteError::InvalidBurnRequest(_) => CODE_INVALID_BURN_REQUEST,
            RouteError::BurnFailed(_) => CODE_BURN_FAILED,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_error_display() {
        assert_eq!(
            RouteError::RoutingInactive.to_string(),
            "autocctp packet forwarding is disabled"
        );
        assert_eq!(
            RouteError::UnparsableAmount("1.5".into()).to_string(),
            "error parsing amount: \"1.5\""
        );
        assert_eq!(
            RouteError::from(BurnValidationError::ZeroAmount).to_string(),
            "invalid burn request: burn amount must be positive"
        );
    }

    #[test]
    fn test_route_error_codes() {
        assert_eq!(RouteError::RoutingInactive.code(), 1507);
        assert_eq!(RouteError::UnparsableAmount(String::new()).code(), 1510);
        assert_eq!(
            RouteError::InvalidBurnRequest(BurnValidationError::ZeroMintRecipient).code(),
            1511
        );
        assert_eq!(
            RouteError::BurnFailed(BridgeError::BurningPaused).code(),
            1512
        );
    }

    #[test]
    fn test_burn_failed_keeps_cause() {
        let err = RouteError::from(BridgeError::Rejected("no allowance".into()));
        let source = std::error::Error::source(&err).expect("cause is kept");
        assert_eq!(source.to_string(), "burn rejected: no allowance");
    }
}
