//! Core types for the autocctp transfer middleware.
//!
//! This crate defines the module constants, account addresses and their
//! bech32 codec, the transfer packet and its payload codec,
//! acknowledgements, hashed receiver derivation, and the memo grammar that
//! carries autocctp routing directives.

pub mod ack;
pub mod address;
pub mod constants;
pub mod error;
pub mod metadata;
pub mod packet;
pub mod types;

pub use ack::{Acknowledgement, CodedError};
pub use address::{hashed_account, hashed_address};
pub use error::{AddressError, PacketDataError, ParseError, RouteParamsError};
pub use metadata::{CctpRoute, RoutingDirective, RoutingInfo, parse_autocctp_metadata};
pub use packet::{FungibleTokenPacketData, Height, Packet};
pub use types::{AccAddress, AddressCodec};
