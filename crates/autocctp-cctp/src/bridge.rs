//! Interface of the burn-for-mint bridge.

use crate::burn::BurnRequest;

/// Result of a burn the bridge accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BurnReceipt {
    /// Bridge message nonce assigned to the burn.
    pub nonce: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BridgeError {
    #[error("burning and minting are paused")]
    BurningPaused,

    #[error("burn rejected: {0}")]
    Rejected(String),
}

/// Burns tokens on this chain for a mint on a destination domain.
///
/// Called at most once per packet. A failure is final; nothing retries it.
pub trait BurnBridge {
    fn deposit_for_burn(&mut self, request: &BurnRequest) -> Result<BurnReceipt, BridgeError>;
}

impl<B: BurnBridge + ?Sized> BurnBridge for &mut B {
    fn deposit_for_burn(&mut self, request: &BurnRequest) -> Result<BurnReceipt, BridgeError> {
        (**self).deposit_for_burn(request)
    }
}

impl<B: BurnBridge + ?Sized> BurnBridge for Box<B> {
    fn deposit_for_burn(&mut self, request: &BurnRequest) -> Result<BurnReceipt, BridgeError> {
        (**self).deposit_for_burn(request)
    }
}
