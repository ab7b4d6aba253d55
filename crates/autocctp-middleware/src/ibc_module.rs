//! Callback interface of a channel-bound application.
//!
//! The inner fungible token transfer application implements
//! [`TransferApp`]; [`crate::AutoCctpMiddleware`] wraps one and implements
//! it too, so middleware can be stacked.

use autocctp_core::{Acknowledgement, Packet};

use crate::error::MiddlewareError;

/// Channel ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Unordered,
    Ordered,
}

/// Port and channel on the other end of a channel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Counterparty {
    pub port_id: String,
    /// Empty until the counterparty channel exists.
    pub channel_id: String,
}

/// Parameters common to the opening steps of a channel handshake.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelOpen {
    pub order: Order,
    pub connection_hops: Vec<String>,
    pub port_id: String,
    pub channel_id: String,
    pub counterparty: Counterparty,
}

pub trait TransferApp {
    /// Returns the negotiated channel version.
    fn on_chan_open_init(
        &mut self,
        channel: &ChannelOpen,
        version: &str,
    ) -> Result<String, MiddlewareError>;

    /// Returns the negotiated channel version.
    fn on_chan_open_try(
        &mut self,
        channel: &ChannelOpen,
        counterparty_version: &str,
    ) -> Result<String, MiddlewareError>;

    fn on_chan_open_ack(
        &mut self,
        port_id: &str,
        channel_id: &str,
        counterparty_channel_id: &str,
        counterparty_version: &str,
    ) -> Result<(), MiddlewareError>;

    fn on_chan_open_confirm(&mut self, port_id: &str, channel_id: &str)
    -> Result<(), MiddlewareError>;

    fn on_chan_close_init(&mut self, port_id: &str, channel_id: &str)
    -> Result<(), MiddlewareError>;

    fn on_chan_close_confirm(
        &mut self,
        port_id: &str,
        channel_id: &str,
    ) -> Result<(), MiddlewareError>;

    /// Handle a received packet. Failures are reported in the returned
    /// acknowledgement, never as an `Err`.
    fn on_recv_packet(&mut self, packet: &Packet, relayer: &str) -> Acknowledgement;

    fn on_acknowledgement_packet(
        &mut self,
        packet: &Packet,
        acknowledgement: &[u8],
        relayer: &str,
    ) -> Result<(), MiddlewareError>;

    fn on_timeout_packet(&mut self, packet: &Packet, relayer: &str) -> Result<(), MiddlewareError>;
}
