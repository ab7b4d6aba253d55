//! The receive-side interceptor wrapping the transfer application.
//!
//! Packet receipt runs in a fixed order:
//!
//! 1. decode the transfer payload and enforce the memo/receiver size limit;
//! 2. pass plain deposits straight to the inner app;
//! 3. parse routing metadata from the memo (or the receiver);
//! 4. rewrite the receiver to the hashed account for the route;
//! 5. let the inner app apply the transfer;
//! 6. execute the route.
//!
//! Steps 1 to 4 reject before anything is committed. Once step 5 succeeds
//! the credit to the hashed account stands: a failure in step 6 yields an
//! error acknowledgement but does not unwind the inner transfer.

use tracing::{error, info, warn};

use autocctp_cctp::{BurnBridge, ParamsSource, RouteError, RouteExecutor};
use autocctp_core::constants::{MAX_MEMO_LENGTH, MODULE_NAME, TRANSFER_VERSION};
use autocctp_core::{
    Acknowledgement, AddressCodec, FungibleTokenPacketData, Packet, RoutingInfo, hashed_address,
    parse_autocctp_metadata,
};

use crate::config::MiddlewareConfig;
use crate::error::{MiddlewareError, RecvError};
use crate::ibc_module::{ChannelOpen, TransferApp};
use crate::triage::{self, Classification};

/// Transfer middleware that routes received funds into a CCTP burn.
pub struct AutoCctpMiddleware<A, B, P> {
    app: A,
    bridge: B,
    params: P,
    codec: AddressCodec,
    executor: RouteExecutor,
    max_memo_length: usize,
}

impl<A, B, P> AutoCctpMiddleware<A, B, P>
where
    A: TransferApp,
    B: BurnBridge,
    P: ParamsSource,
{
    pub fn new(app: A, bridge: B, params: P, codec: AddressCodec) -> Self {
        Self {
            app,
            bridge,
            params,
            executor: RouteExecutor::new(codec.clone()),
            codec,
            max_memo_length: MAX_MEMO_LENGTH,
        }
    }

    /// Build from a loaded config. Genesis params are not applied here; the
    /// caller seeds `params` from [`MiddlewareConfig::genesis_state`].
    pub fn from_config(
        config: &MiddlewareConfig,
        app: A,
        bridge: B,
        params: P,
    ) -> Result<Self, MiddlewareError> {
        let codec = config.address_codec()?;
        Ok(Self::new(app, bridge, params, codec).with_max_memo_length(config.limits.max_memo_length))
    }

    #[must_use]
    pub fn with_max_memo_length(mut self, max: usize) -> Self {
        self.max_memo_length = max;
        self
    }

    pub fn app(&self) -> &A {
        &self.app
    }

    pub fn bridge(&self) -> &B {
        &self.bridge
    }

    pub fn params(&self) -> &P {
        &self.params
    }

    pub fn params_mut(&mut self) -> &mut P {
        &mut self.params
    }

    /// Version of the wrapped transfer application.
    pub fn app_version(&self, _port_id: &str, _channel_id: &str) -> &'static str {
        TRANSFER_VERSION
    }

    fn receive(&mut self, packet: &Packet, relayer: &str) -> Result<Acknowledgement, RecvError> {
        let mut data = FungibleTokenPacketData::decode(&packet.data)?;
        triage::check_size(&data, self.max_memo_length)?;

        if triage::classify(&data, &self.codec) == Classification::Bypass {
            return Ok(self.app.on_recv_packet(packet, relayer));
        }

        let Some(directive) = parse_autocctp_metadata(triage::select_metadata(&data), &self.codec)?
        else {
            return Ok(self.app.on_recv_packet(packet, relayer));
        };

        // The receiver may have held the whole memo; replace it first.
        data.receiver = directive.receiver.clone();
        match &directive.routing_info {
            RoutingInfo::Cctp(_) => {
                data.receiver = hashed_address(
                    MODULE_NAME,
                    &packet.destination_channel,
                    &data.sender,
                    &self.codec,
                )
                .map_err(RecvError::HashedAddress)?;
            }
        }

        let forwarded = packet.with_data(data.encode()?);
        let ack = self.app.on_recv_packet(&forwarded, relayer);
        if !ack.is_success() {
            return Ok(ack);
        }

        let config = self.params.routing_config();
        if !config.cctp_active {
            error!(
                sender = %data.sender,
                "packet had cctp routing info but cctp routing is disabled"
            );
            return Err(RouteError::RoutingInactive.into());
        }

        match &directive.routing_info {
            RoutingInfo::Cctp(route) => {
                info!(
                    sender = %data.sender,
                    route = directive.routing_info.name(),
                    destination_domain = route.destination_domain,
                    "forwarding packet to cctp route"
                );
                if let Err(e) = self
                    .executor
                    .execute(&config, &data, route, &mut self.bridge)
                {
                    error!(sender = %data.sender, error = %e, "cctp transfer failed");
                    return Err(e.into());
                }
            }
        }

        Ok(ack)
    }
}

impl<A, B, P> TransferApp for AutoCctpMiddleware<A, B, P>
where
    A: TransferApp,
    B: BurnBridge,
    P: ParamsSource,
{
    fn on_chan_open_init(
        &mut self,
        channel: &ChannelOpen,
        version: &str,
    ) -> Result<String, MiddlewareError> {
        self.app.on_chan_open_init(channel, version)
    }

    fn on_chan_open_try(
        &mut self,
        channel: &ChannelOpen,
        counterparty_version: &str,
    ) -> Result<String, MiddlewareError> {
        self.app.on_chan_open_try(channel, counterparty_version)
    }

    fn on_chan_open_ack(
        &mut self,
        port_id: &str,
        channel_id: &str,
        counterparty_channel_id: &str,
        counterparty_version: &str,
    ) -> Result<(), MiddlewareError> {
        self.app.on_chan_open_ack(
            port_id,
            channel_id,
            counterparty_channel_id,
            counterparty_version,
        )
    }

    fn on_chan_open_confirm(
        &mut self,
        port_id: &str,
        channel_id: &str,
    ) -> Result<(), MiddlewareError> {
        self.app.on_chan_open_confirm(port_id, channel_id)
    }

    fn on_chan_close_init(&mut self, port_id: &str, channel_id: &str) -> Result<(), MiddlewareError> {
        self.app.on_chan_close_init(port_id, channel_id)
    }

    fn on_chan_close_confirm(
        &mut self,
        port_id: &str,
        channel_id: &str,
    ) -> Result<(), MiddlewareError> {
        self.app.on_chan_close_confirm(port_id, channel_id)
    }

    fn on_recv_packet(&mut self, packet: &Packet, relayer: &str) -> Acknowledgement {
        info!(
            sequence = packet.sequence,
            source_port = %packet.source_port,
            source_channel = %packet.source_channel,
            destination_port = %packet.destination_port,
            destination_channel = %packet.destination_channel,
            "received packet"
        );

        match self.receive(packet, relayer) {
            Ok(ack) => ack,
            Err(e) => {
                if !matches!(e, RecvError::Route(_)) {
                    warn!(sequence = packet.sequence, error = %e, "rejected packet");
                }
                Acknowledgement::from_error(&e)
            }
        }
    }

    /// Refunds on a failed outbound hop are not implemented.
    fn on_acknowledgement_packet(
        &mut self,
        _packet: &Packet,
        _acknowledgement: &[u8],
        _relayer: &str,
    ) -> Result<(), MiddlewareError> {
        Err(MiddlewareError::Unimplemented("acknowledgement handling"))
    }

    /// Retries after a timed-out outbound hop are not implemented.
    fn on_timeout_packet(&mut self, _packet: &Packet, _relayer: &str) -> Result<(), MiddlewareError> {
        Err(MiddlewareError::Unimplemented("timeout handling"))
    }
}
