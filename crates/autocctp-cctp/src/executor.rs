//! Executes a CCTP route after the inner transfer has credited the funds.
//!
//! The transfer is already committed when this runs. Every failure here is
//! reported through the acknowledgement; nothing is refunded or retried.

use num_bigint::BigUint;
use tracing::{debug, info};

use autocctp_core::{AddressCodec, CctpRoute, FungibleTokenPacketData};

use crate::bridge::{BurnBridge, BurnReceipt};
use crate::burn::BurnRequest;
use crate::error::RouteError;
use crate::params::RoutingConfig;

/// Parse a non-negative base-10 amount. Signs, separators and whitespace
/// are rejected.
pub fn parse_amount(amount: &str) -> Result<BigUint, RouteError> {
    if amount.is_empty() || !amount.bytes().all(|b| b.is_ascii_digit()) {
        return Err(RouteError::UnparsableAmount(amount.to_string()));
    }
    BigUint::parse_bytes(amount.as_bytes(), 10)
        .ok_or_else(|| RouteError::UnparsableAmount(amount.to_string()))
}

/// Turns a validated route into a burn.
#[derive(Debug, Clone)]
pub struct RouteExecutor {
    codec: AddressCodec,
}

impl RouteExecutor {
    pub fn new(codec: AddressCodec) -> Self {
        Self { codec }
    }

    /// Burn the received funds for a mint on the route's destination domain.
    ///
    /// `transfer` is the payload as the inner app applied it, so its
    /// receiver is the account holding the funds.
    pub fn execute<B: BurnBridge + ?Sized>(
        &self,
        config: &RoutingConfig,
        transfer: &FungibleTokenPacketData,
        route: &CctpRoute,
        bridge: &mut B,
    ) -> Result<BurnReceipt, RouteError> {
        if !config.cctp_active {
            return Err(RouteError::RoutingInactive);
        }

        let amount = parse_amount(&transfer.amount)?;

        let request = BurnRequest {
            from: transfer.receiver.clone(),
            amount,
            destination_domain: route.destination_domain,
            mint_recipient: route.mint_recipient.clone(),
            burn_token: String::new(),
        };
        debug!(
            from = %request.from,
            amount = %request.amount,
            destination_domain = request.destination_domain,
            "built burn request"
        );

        request.validate(&self.codec)?;

        let receipt = bridge.deposit_for_burn(&request)?;
        info!(
            from = %request.from,
            destination_domain = request.destination_domain,
            nonce = receipt.nonce,
            "deposited for burn"
        );
        Ok(receipt)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]

        #[test]
        fn parse_amount_matches_u128(n in any::<u128>()) {
            prop_assert_eq!(parse_amount(&n.to_string()).unwrap(), BigUint::from(n));
        }

        #[test]
        fn parse_amount_rejects_non_digits(s in ".*[^0-9].*") {
            prop_assert!(parse_amount(&s).is_err());
        }
    }
}
