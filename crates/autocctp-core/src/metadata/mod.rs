//! Memo grammar for autocctp routing directives.
//!
//! ```json
//! {
//!   "autocctp": {
//!     "receiver": "noble1...",
//!     "cctp": {
//!       "destination_domain": 0,
//!       "mint_recipient": "0x000000000000000000000000d8da6bf26964af9d7eed9e03e53415d37aa96045",
//!       "transfer_channel": "channel-2"
//!     }
//!   }
//! }
//! ```
//!
//! A memo carries at most one of `autocctp` and the packet-forward `forward`
//! key. Parsing goes through the loosely typed [`raw`] layer first and then
//! validates into a [`RoutingDirective`].

mod parser;
pub mod raw;
mod route;

pub use parser::parse_autocctp_metadata;
pub use route::{CctpRoute, RoutingInfo};

/// A validated instruction to route the received funds onward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutingDirective {
    /// Account on this chain named by the memo; a valid bech32 address with
    /// the chain prefix.
    pub receiver: String,
    pub routing_info: RoutingInfo,
}
