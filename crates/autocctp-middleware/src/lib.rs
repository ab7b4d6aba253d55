//! Transfer packet middleware for autocctp.
//!
//! [`AutoCctpMiddleware`] wraps a fungible token transfer application. It
//! inspects every received transfer and, when the memo carries an autocctp
//! directive, credits the funds to an account derived from the inbound
//! channel and original sender and burns them through the CCTP bridge.
//! Everything else passes through to the wrapped app unchanged.
//!
//! # Usage
//!
//! ```rust,ignore
//! let config = MiddlewareConfig::load(Path::new("autocctp.toml"))?;
//! logging::init_from_config(&config.logging);
//!
//! let mut params = ParamStore::default();
//! config.genesis_state().init_genesis(&mut params);
//!
//! let mut middleware = AutoCctpMiddleware::from_config(&config, transfer_app, bridge, params)?;
//! let ack = middleware.on_recv_packet(&packet, relayer);
//! ```

pub mod config;
pub mod error;
pub mod ibc_module;
pub mod interceptor;
pub mod logging;
pub mod testing;
pub mod triage;

pub use config::MiddlewareConfig;
pub use error::{ChannelError, MiddlewareError, RecvError};
pub use ibc_module::{ChannelOpen, Counterparty, Order, TransferApp};
pub use interceptor::AutoCctpMiddleware;
