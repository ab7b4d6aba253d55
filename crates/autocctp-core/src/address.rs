//! Hashed receiver derivation.
//!
//! When a packet is routed onward, the receiver of this hop becomes the
//! sender of the next one. Instead of trusting a receiver named in the memo,
//! funds land on an account derived from the inbound channel and the
//! original sender, so a relayed packet can never act as an arbitrary
//! downstream account.

use autocctp_crypto::module_hash;

use crate::constants::ADDRESS_LEN;
use crate::error::AddressError;
use crate::types::{AccAddress, AddressCodec};

/// Derive the raw hashed account for `(channel_id, original_sender)`.
///
/// `account = module_hash(domain_tag, "channel_id/original_sender")[:20]`
pub fn hashed_account(domain_tag: &str, channel_id: &str, original_sender: &str) -> AccAddress {
    let preimage = format!("{channel_id}/{original_sender}");
    let hash = module_hash(domain_tag, preimage.as_bytes());
    let mut account = [0u8; ADDRESS_LEN];
    account.copy_from_slice(&hash[..ADDRESS_LEN]);
    AccAddress::from(account)
}

/// Derive the hashed account for `(channel_id, original_sender)` and encode
/// it with the chain's bech32 prefix.
pub fn hashed_address(
    domain_tag: &str,
    channel_id: &str,
    original_sender: &str,
    codec: &AddressCodec,
) -> Result<String, AddressError> {
    codec.encode(&hashed_account(domain_tag, channel_id, original_sender))
}
