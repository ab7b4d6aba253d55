//! A parsed memo driven through the executor against a recording bridge.

use autocctp_cctp::{
    BridgeError, BurnBridge, BurnReceipt, BurnRequest, GenesisState, ParamStore, ParamsSource,
    RouteError, RouteExecutor,
};
use autocctp_core::constants::MODULE_NAME;
use autocctp_core::{
    AddressCodec, CodedError, FungibleTokenPacketData, RoutingInfo, hashed_address,
    parse_autocctp_metadata,
};

struct Recorder(Vec<BurnRequest>);

impl BurnBridge for Recorder {
    fn deposit_for_burn(&mut self, request: &BurnRequest) -> Result<BurnReceipt, BridgeError> {
        self.0.push(request.clone());
        Ok(BurnReceipt { nonce: 42 })
    }
}

const MEMO: &str = r#"{"autocctp":{"receiver":"noble14w46h2at4w46h2at4w46h2at4w46h2at5d0afn","cctp":{"destination_domain":3,"mint_recipient":"AAAAAAAAAAAAAAAA2Npr8mlkr51+7Z4D5TQV03qpYEU=","transfer_channel":"channel-2"}}}"#;

fn received(codec: &AddressCodec) -> (FungibleTokenPacketData, RoutingInfo) {
    let sender = "cosmos1qypqxpq9qcrsszg2pvxq6rs0zqg3yyc5lzv7xu";
    let directive = parse_autocctp_metadata(MEMO, codec).unwrap().unwrap();
    let transfer = FungibleTokenPacketData {
        amount: "5000000".into(),
        denom: "uusdc".into(),
        memo: MEMO.into(),
        receiver: hashed_address(MODULE_NAME, "channel-1", sender, codec).unwrap(),
        sender: sender.into(),
    };
    (transfer, directive.routing_info)
}

#[test]
fn genesis_controls_routing() {
    let codec = AddressCodec::new("noble").unwrap();
    let executor = RouteExecutor::new(codec.clone());
    let (transfer, RoutingInfo::Cctp(route)) = received(&codec);
    let mut bridge = Recorder(Vec::new());

    let mut store = ParamStore::default();
    GenesisState::default_genesis().init_genesis(&mut store);
    let err = executor
        .execute(&store.routing_config(), &transfer, &route, &mut bridge)
        .unwrap_err();
    assert!(matches!(err, RouteError::RoutingInactive));
    assert_eq!(err.code(), 1507);
    assert!(bridge.0.is_empty());

    store.set_cctp_active(true);
    let receipt = executor
        .execute(&store.routing_config(), &transfer, &route, &mut bridge)
        .unwrap();
    assert_eq!(receipt.nonce, 42);

    let burn = &bridge.0[0];
    assert_eq!(burn.from, "noble1tkc9934plqwgl9jk5gtmm2n85mpq0qa820695z");
    assert_eq!(burn.destination_domain, 3);
    assert_eq!(
        hex::encode(&burn.mint_recipient),
        "000000000000000000000000d8da6bf26964af9d7eed9e03e53415d37aa96045"
    );
}

#[test]
fn boxed_bridge_is_a_bridge() {
    let codec = AddressCodec::new("noble").unwrap();
    let (transfer, RoutingInfo::Cctp(route)) = received(&codec);
    let mut bridge: Box<dyn BurnBridge> = Box::new(Recorder(Vec::new()));
    let active = autocctp_cctp::RoutingConfig { cctp_active: true };
    assert!(
        RouteExecutor::new(codec)
            .execute(&active, &transfer, &route, &mut bridge)
            .is_ok()
    );
}
