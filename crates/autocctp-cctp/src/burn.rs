//! The burn a CCTP route produces.

use num_bigint::BigUint;
use num_traits::Zero;

use autocctp_core::AddressCodec;
use autocctp_core::constants::MINT_RECIPIENT_LEN;

use crate::error::BurnValidationError;

/// Largest amount the bridge accepts, in bits.
pub const MAX_AMOUNT_BITS: u64 = 256;

/// Request to burn `amount` of `burn_token` held by `from` and mint it to
/// `mint_recipient` on `destination_domain`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BurnRequest {
    pub from: String,
    pub amount: BigUint,
    pub destination_domain: u32,
    pub mint_recipient: Vec<u8>,
    /// Denom to burn. Left empty: received denoms are not yet mapped to a
    /// burnable token.
    pub burn_token: String,
}

impl BurnRequest {
    /// Stateless checks before handing the request to the bridge.
    pub fn validate(&self, codec: &AddressCodec) -> Result<(), BurnValidationError> {
        codec
            .decode(&self.from)
            .map_err(BurnValidationError::InvalidFrom)?;

        if self.amount.is_zero() {
            return Err(BurnValidationError::ZeroAmount);
        }
        if self.amount.bits() > MAX_AMOUNT_BITS {
            return Err(BurnValidationError::AmountTooLarge(self.amount.bits()));
        }

        if self.mint_recipient.len() != MINT_RECIPIENT_LEN {
            return Err(BurnValidationError::MintRecipientLength(
                self.mint_recipient.len(),
            ));
        }
        if self.mint_recipient.iter().all(|b| *b == 0) {
            return Err(BurnValidationError::ZeroMintRecipient);
        }

        // TODO: check burn_token against the bridge's burnable token list once
        // received denoms are mapped to it.
        Ok(())
    }
}
