/// Where the received funds go next. Exactly one variant is resolved per
/// directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoutingInfo {
    /// Burn on this chain and mint on a CCTP destination domain.
    Cctp(CctpRoute),
}

impl RoutingInfo {
    /// Short route name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            RoutingInfo::Cctp(_) => "cctp",
        }
    }
}

/// Validated burn-for-mint routing parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CctpRoute {
    /// Account the burn is made from; always the directive's receiver.
    pub target_account: String,
    pub destination_domain: u32,
    /// 32-byte recipient on the destination domain.
    pub mint_recipient: Vec<u8>,
    /// Channel a later outbound hop would use. Carried unvalidated and unused
    /// on receipt.
    pub transfer_channel: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(mint: Vec<u8>) -> CctpRoute {
        CctpRoute {
            target_account: "noble1qypqxpq9qcrsszg2pvxq6rs0zqg3yyc5hpek7j".into(),
            destination_domain: 0,
            mint_recipient: mint,
            transfer_channel: None,
        }
    }

    #[test]
    fn route_name() {
        assert_eq!(RoutingInfo::Cctp(route(vec![1; 32])).name(), "cctp");
    }
}
