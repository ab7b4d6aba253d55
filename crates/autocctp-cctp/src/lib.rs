//! CCTP routing for autocctp.
//!
//! Holds the persisted routing params and their genesis, the burn request a
//! route produces, the interface of the burn-for-mint bridge, and the
//! executor that turns a validated [`autocctp_core::CctpRoute`] into a
//! burn.

pub mod bridge;
pub mod burn;
pub mod error;
pub mod executor;
pub mod params;

pub use bridge::{BridgeError, BurnBridge, BurnReceipt};
pub use burn::BurnRequest;
pub use error::{BurnValidationError, RouteError};
pub use executor::RouteExecutor;
pub use params::{GenesisState, ParamStore, ParamsSource, RoutingConfig};
