//! In-memory collaborators for exercising the middleware.
//!
//! [`MockTransferApp`] behaves like an ICS-20 app that accepts every packet
//! and records what reached it. [`RecordingBridge`] records burn requests
//! and can be told to fail.
//!
//! # Usage
//!
//! ```rust,ignore
//! use autocctp_middleware::testing::{MockTransferApp, RecordingBridge};
//!
//! let mut mw = AutoCctpMiddleware::new(
//!     MockTransferApp::default(),
//!     RecordingBridge::default(),
//!     ParamStore::new(RoutingConfig { cctp_active: true }),
//!     AddressCodec::new("noble")?,
//! );
//! let ack = mw.on_recv_packet(&packet, "relayer");
//! assert_eq!(mw.bridge().requests().len(), 1);
//! ```

use autocctp_cctp::{BridgeError, BurnBridge, BurnReceipt, BurnRequest};
use autocctp_core::constants::TRANSFER_VERSION;
use autocctp_core::{Acknowledgement, Packet};

use crate::error::{ChannelError, MiddlewareError};
use crate::ibc_module::{ChannelOpen, Order, TransferApp};

/// Inner transfer app stand-in.
#[derive(Debug, Default)]
pub struct MockTransferApp {
    received: Vec<Packet>,
    channel_calls: Vec<&'static str>,
    acknowledged: usize,
    timed_out: usize,
    /// Acknowledgement returned for every packet; a transfer success when
    /// unset.
    ack: Option<Acknowledgement>,
}

impl MockTransferApp {
    /// An app that answers every packet with `ack`.
    pub fn with_ack(ack: Acknowledgement) -> Self {
        Self {
            ack: Some(ack),
            ..Self::default()
        }
    }

    /// Packets delivered to the app, as it saw them.
    pub fn received(&self) -> &[Packet] {
        &self.received
    }

    pub fn channel_calls(&self) -> &[&'static str] {
        &self.channel_calls
    }

    pub fn acknowledged(&self) -> usize {
        self.acknowledged
    }

    pub fn timed_out(&self) -> usize {
        self.timed_out
    }

    fn check_open(channel: &ChannelOpen, version: &str) -> Result<String, MiddlewareError> {
        if channel.order != Order::Unordered {
            return Err(ChannelError::InvalidOrdering(format!("{:?}", channel.order)).into());
        }
        if !version.is_empty() && version != TRANSFER_VERSION {
            return Err(ChannelError::InvalidVersion {
                expected: TRANSFER_VERSION.to_string(),
                actual: version.to_string(),
            }
            .into());
        }
        Ok(TRANSFER_VERSION.to_string())
    }
}

impl TransferApp for MockTransferApp {
    fn on_chan_open_init(
        &mut self,
        channel: &ChannelOpen,
        version: &str,
    ) -> Result<String, MiddlewareError> {
        self.channel_calls.push("open_init");
        Self::check_open(channel, version)
    }

    fn on_chan_open_try(
        &mut self,
        channel: &ChannelOpen,
        counterparty_version: &str,
    ) -> Result<String, MiddlewareError> {
        self.channel_calls.push("open_try");
        Self::check_open(channel, counterparty_version)
    }

    fn on_chan_open_ack(
        &mut self,
        _port_id: &str,
        _channel_id: &str,
        _counterparty_channel_id: &str,
        counterparty_version: &str,
    ) -> Result<(), MiddlewareError> {
        self.channel_calls.push("open_ack");
        if counterparty_version != TRANSFER_VERSION {
            return Err(ChannelError::InvalidVersion {
                expected: TRANSFER_VERSION.to_string(),
                actual: counterparty_version.to_string(),
            }
            .into());
        }
        Ok(())
    }

    fn on_chan_open_confirm(
        &mut self,
        _port_id: &str,
        _channel_id: &str,
    ) -> Result<(), MiddlewareError> {
        self.channel_calls.push("open_confirm");
        Ok(())
    }

    fn on_chan_close_init(&mut self, _port_id: &str, _channel_id: &str) -> Result<(), MiddlewareError> {
        self.channel_calls.push("close_init");
        Ok(())
    }

    fn on_chan_close_confirm(
        &mut self,
        _port_id: &str,
        _channel_id: &str,
    ) -> Result<(), MiddlewareError> {
        self.channel_calls.push("close_confirm");
        Ok(())
    }

    fn on_recv_packet(&mut self, packet: &Packet, _relayer: &str) -> Acknowledgement {
        self.received.push(packet.clone());
        self.ack
            .clone()
            .unwrap_or_else(Acknowledgement::transfer_success)
    }

    fn on_acknowledgement_packet(
        &mut self,
        _packet: &Packet,
        _acknowledgement: &[u8],
        _relayer: &str,
    ) -> Result<(), MiddlewareError> {
        self.acknowledged += 1;
        Ok(())
    }

    fn on_timeout_packet(&mut self, _packet: &Packet, _relayer: &str) -> Result<(), MiddlewareError> {
        self.timed_out += 1;
        Ok(())
    }
}

/// Burn bridge stand-in that records every request.
#[derive(Debug, Default)]
pub struct RecordingBridge {
    requests: Vec<BurnRequest>,
    failure: Option<BridgeError>,
}

impl RecordingBridge {
    /// A bridge that records and then rejects every request with `err`.
    pub fn failing(err: BridgeError) -> Self {
        Self {
            requests: Vec::new(),
            failure: Some(err),
        }
    }

    pub fn requests(&self) -> &[BurnRequest] {
        &self.requests
    }
}

impl BurnBridge for RecordingBridge {
    fn deposit_for_burn(&mut self, request: &BurnRequest) -> Result<BurnReceipt, BridgeError> {
        self.requests.push(request.clone());
        if let Some(err) = &self.failure {
            return Err(err.clone());
        }
        Ok(BurnReceipt {
            nonce: self.requests.len() as u64,
        })
    }
}
