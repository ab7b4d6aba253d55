//! End-to-end packet receipt against the mock transfer app and bridge.

use autocctp_cctp::{BridgeError, ParamStore, RoutingConfig};
use autocctp_core::{Acknowledgement, AddressCodec, FungibleTokenPacketData, Height, Packet};
use autocctp_middleware::testing::{MockTransferApp, RecordingBridge};
use autocctp_middleware::{AutoCctpMiddleware, TransferApp, logging};
use autocctp_test_vectors::hashed_addresses;
use autocctp_test_vectors::helpers::{
    COSMOS_SENDER, MINT_RECIPIENT_HEX, NOBLE_ADDR_A, NOBLE_ADDR_B, PREFIX, hex_to_bytes,
};

type Middleware = AutoCctpMiddleware<MockTransferApp, RecordingBridge, ParamStore>;

fn build(app: MockTransferApp, bridge: RecordingBridge, active: bool) -> Middleware {
    logging::init_for_tests();
    AutoCctpMiddleware::new(
        app,
        bridge,
        ParamStore::new(RoutingConfig {
            cctp_active: active,
        }),
        AddressCodec::new(PREFIX).unwrap(),
    )
}

fn middleware(active: bool) -> Middleware {
    build(MockTransferApp::default(), RecordingBridge::default(), active)
}

fn transfer(receiver: &str, memo: &str) -> FungibleTokenPacketData {
    FungibleTokenPacketData {
        amount: "2500000".into(),
        denom: "transfer/channel-9/uusdc".into(),
        memo: memo.into(),
        receiver: receiver.into(),
        sender: COSMOS_SENDER.into(),
    }
}

fn packet_on(channel: &str, data: &FungibleTokenPacketData) -> Packet {
    Packet {
        sequence: 12,
        source_port: "transfer".into(),
        source_channel: "channel-9".into(),
        destination_port: "transfer".into(),
        destination_channel: channel.into(),
        data: data.encode().unwrap(),
        timeout_height: Height {
            revision_number: 1,
            revision_height: 5_000,
        },
        timeout_timestamp: 0,
    }
}

fn packet(data: &FungibleTokenPacketData) -> Packet {
    packet_on("channel-0", data)
}

fn route_memo(domain: u32) -> String {
    format!(
        r#"{{"autocctp":{{"receiver":"{NOBLE_ADDR_A}","cctp":{{"destination_domain":{domain},"mint_recipient":"{MINT_RECIPIENT_HEX}"}}}}}}"#
    )
}

fn expected_hashed(channel: &str) -> String {
    hashed_addresses::load()
        .vectors
        .into_iter()
        .find(|v| v.channel_id == channel && v.original_sender == COSMOS_SENDER)
        .map(|v| v.hashed_address)
        .expect("vector for channel and sender")
}

#[test]
fn scenario_a_missing_route_is_rejected_before_transfer() {
    let mut mw = middleware(true);
    let memo = format!(r#"{{"autocctp":{{"receiver":"{NOBLE_ADDR_A}"}}}}"#);
    let ack = mw.on_recv_packet(&packet(&transfer(NOBLE_ADDR_A, &memo)), "relayer");

    assert_eq!(ack.code(), Some(1501));
    assert!(mw.app().received().is_empty());
    assert!(mw.bridge().requests().is_empty());
}

#[test]
fn scenario_b_route_burns_from_hashed_address() {
    let mut mw = middleware(true);
    let ack = mw.on_recv_packet(&packet(&transfer(NOBLE_ADDR_A, &route_memo(0))), "relayer");

    assert_eq!(ack, Acknowledgement::transfer_success());
    assert_eq!(ack.to_bytes(), br#"{"result":"AQ=="}"#);

    let hashed = expected_hashed("channel-0");
    let applied = FungibleTokenPacketData::decode(&mw.app().received()[0].data).unwrap();
    assert_eq!(applied.receiver, hashed);
    assert_eq!(applied.sender, COSMOS_SENDER);
    assert_eq!(applied.amount, "2500000");

    let burns = mw.bridge().requests();
    assert_eq!(burns.len(), 1);
    assert_eq!(burns[0].from, hashed);
    assert_eq!(burns[0].amount.to_string(), "2500000");
    assert_eq!(burns[0].destination_domain, 0);
    assert_eq!(burns[0].mint_recipient, hex_to_bytes(MINT_RECIPIENT_HEX));
    assert!(burns[0].burn_token.is_empty());
}

#[test]
fn scenario_c_inactive_routing_commits_transfer_but_errors() {
    let mut mw = middleware(false);
    let ack = mw.on_recv_packet(&packet(&transfer(NOBLE_ADDR_A, &route_memo(0))), "relayer");

    assert_eq!(ack.code(), Some(1507));
    assert_eq!(
        ack.to_bytes(),
        br#"{"error":"ABCI code: 1507: error handling packet: see events for details"}"#
    );
    assert_eq!(mw.app().received().len(), 1);
    assert!(mw.bridge().requests().is_empty());
}

#[test]
fn scenario_d_forward_conflict_is_rejected_before_transfer() {
    let mut mw = middleware(true);
    let memo = format!(
        r#"{{"autocctp":{{"receiver":"{NOBLE_ADDR_A}"}},"forward":{{"receiver":"{NOBLE_ADDR_B}","port":"transfer","channel":"channel-1"}}}}"#
    );
    let ack = mw.on_recv_packet(&packet(&transfer(NOBLE_ADDR_A, &memo)), "relayer");

    assert_eq!(ack.code(), Some(1501));
    assert!(mw.app().received().is_empty());
}

#[test]
fn scenario_e_plain_address_bypasses_parsing() {
    let mut mw = middleware(true);
    let p = packet(&transfer(NOBLE_ADDR_B, ""));
    let ack = mw.on_recv_packet(&p, "relayer");

    assert!(ack.is_success());
    assert_eq!(mw.app().received(), &[p]);
    assert!(mw.bridge().requests().is_empty());
}

#[test]
fn directive_in_receiver_field_is_routed() {
    let mut mw = middleware(true);
    let memo = route_memo(1);
    let ack = mw.on_recv_packet(&packet(&transfer(&memo, "")), "relayer");

    assert!(ack.is_success());
    let applied = FungibleTokenPacketData::decode(&mw.app().received()[0].data).unwrap();
    assert_eq!(applied.receiver, expected_hashed("channel-0"));
    assert_eq!(mw.bridge().requests()[0].destination_domain, 1);
}

#[test]
fn hashed_address_follows_destination_channel() {
    let mut mw = middleware(true);
    let data = transfer(NOBLE_ADDR_A, &route_memo(0));
    mw.on_recv_packet(&packet_on("channel-0", &data), "relayer");
    mw.on_recv_packet(&packet_on("channel-1", &data), "relayer");

    let burns = mw.bridge().requests();
    assert_eq!(burns[0].from, expected_hashed("channel-0"));
    assert_eq!(burns[1].from, expected_hashed("channel-1"));
    assert_ne!(burns[0].from, burns[1].from);
}

#[test]
fn forward_only_memo_passes_through_unchanged() {
    let mut mw = middleware(true);
    let memo = format!(
        r#"{{"forward":{{"receiver":"{NOBLE_ADDR_B}","port":"transfer","channel":"channel-1"}}}}"#
    );
    let p = packet(&transfer(NOBLE_ADDR_A, &memo));
    assert!(mw.on_recv_packet(&p, "relayer").is_success());
    assert_eq!(mw.app().received(), &[p]);
    assert!(mw.bridge().requests().is_empty());
}

#[test]
fn free_text_memo_passes_through_unchanged() {
    let mut mw = middleware(true);
    let p = packet(&transfer(NOBLE_ADDR_A, "gm"));
    assert!(mw.on_recv_packet(&p, "relayer").is_success());
    assert_eq!(mw.app().received(), &[p]);
}

#[test]
fn inner_failure_ack_is_returned_and_nothing_burns() {
    let failed = Acknowledgement::error(5, "insufficient funds");
    let mut mw = build(
        MockTransferApp::with_ack(failed.clone()),
        RecordingBridge::default(),
        true,
    );
    let ack = mw.on_recv_packet(&packet(&transfer(NOBLE_ADDR_A, &route_memo(0))), "relayer");

    assert_eq!(ack, failed);
    assert!(mw.bridge().requests().is_empty());
}

#[test]
fn bridge_failure_yields_error_ack_after_commit() {
    let mut mw = build(
        MockTransferApp::default(),
        RecordingBridge::failing(BridgeError::Rejected("token not burnable".into())),
        true,
    );
    let ack = mw.on_recv_packet(&packet(&transfer(NOBLE_ADDR_A, &route_memo(0))), "relayer");

    let Acknowledgement::Error { code, message } = ack else {
        panic!("expected error ack");
    };
    assert_eq!(code, 1512);
    assert!(message.contains("token not burnable"));
    assert_eq!(mw.app().received().len(), 1);
    assert_eq!(mw.bridge().requests().len(), 1);
}

#[test]
fn zero_amount_fails_burn_validation() {
    let mut mw = middleware(true);
    let mut data = transfer(NOBLE_ADDR_A, &route_memo(0));
    data.amount = "0".into();
    let ack = mw.on_recv_packet(&packet(&data), "relayer");

    assert_eq!(ack.code(), Some(1511));
    assert_eq!(mw.app().received().len(), 1);
    assert!(mw.bridge().requests().is_empty());
}

#[test]
fn invalid_directive_receiver_is_rejected() {
    let mut mw = middleware(true);
    let memo = format!(
        r#"{{"autocctp":{{"receiver":"{COSMOS_SENDER}","cctp":{{"destination_domain":0,"mint_recipient":"{MINT_RECIPIENT_HEX}"}}}}}}"#
    );
    let ack = mw.on_recv_packet(&packet(&transfer(NOBLE_ADDR_A, &memo)), "relayer");
    assert_eq!(ack.code(), Some(1501));
    assert!(mw.app().received().is_empty());
}

#[test]
fn oversized_receiver_is_rejected() {
    let mut mw = middleware(true);
    let receiver = "x".repeat(2001);
    let ack = mw.on_recv_packet(&packet(&transfer(&receiver, "")), "relayer");
    assert_eq!(ack.code(), Some(1508));
    assert!(mw.app().received().is_empty());
}

#[test]
fn transfer_channel_is_carried_without_validation() {
    let mut mw = middleware(true);
    let memo = format!(
        r#"{{"autocctp":{{"receiver":"{NOBLE_ADDR_A}","cctp":{{"destination_domain":0,"mint_recipient":"{MINT_RECIPIENT_HEX}","transfer_channel":"transfer/channel-1"}}}}}}"#
    );
    let ack = mw.on_recv_packet(&packet(&transfer(NOBLE_ADDR_A, &memo)), "relayer");
    assert_eq!(ack, Acknowledgement::transfer_success());
    assert_eq!(mw.app().received().len(), 1);
    assert_eq!(mw.bridge().requests().len(), 1);
}

#[test]
fn multibyte_memo_is_measured_in_bytes() {
    let mut mw = middleware(true);
    let ack = mw.on_recv_packet(&packet(&transfer(NOBLE_ADDR_A, &"é".repeat(1001))), "relayer");
    assert_eq!(ack.code(), Some(1508));
    assert!(mw.app().received().is_empty());
}
