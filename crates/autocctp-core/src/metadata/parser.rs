use tracing::{debug, trace};

use super::raw::RawPacketMetadata;
use super::{RoutingDirective, RoutingInfo};
use crate::error::ParseError;
use crate::types::AddressCodec;

/// Extract an autocctp routing directive from a memo (or from a receiver
/// field used as metadata).
///
/// * `Ok(None)`: the text is not autocctp metadata at all. Non-JSON text,
///   JSON of another shape, and memos that only carry `forward` land here.
/// * `Err(_)`: the memo claims autocctp but is unusable.
/// * `Ok(Some(_))`: a validated directive.
///
/// Pure; the same input always yields the same result.
pub fn parse_autocctp_metadata(
    metadata: &str,
    codec: &AddressCodec,
) -> Result<Option<RoutingDirective>, ParseError> {
    let value: serde_json::Value = match serde_json::from_str(metadata) {
        Ok(value) => value,
        Err(e) => {
            trace!(error = %e, "metadata is not json");
            return Ok(None);
        }
    };
    if !value.is_object() {
        return Ok(None);
    }
    let raw: RawPacketMetadata = match serde_json::from_value(value) {
        Ok(raw) => raw,
        Err(e) => {
            trace!(error = %e, "metadata does not match the autocctp shape");
            return Ok(None);
        }
    };

    if raw.autocctp.is_some() && raw.forward.is_some() {
        return Err(ParseError::ConflictingDirectives);
    }

    let Some(autocctp) = raw.autocctp else {
        return Ok(None);
    };

    codec
        .decode(&autocctp.receiver)
        .map_err(ParseError::InvalidReceiver)?;

    let Some(mut cctp) = autocctp.cctp else {
        return Err(ParseError::NoRouteSpecified);
    };

    cctp.target_account = autocctp.receiver.clone();
    let route = cctp
        .validate(codec)
        .map_err(ParseError::InvalidRoutingParameters)?;

    debug!(
        receiver = %autocctp.receiver,
        destination_domain = route.destination_domain,
        "parsed autocctp directive"
    );

    Ok(Some(RoutingDirective {
        receiver: autocctp.receiver,
        routing_info: RoutingInfo::Cctp(route),
    }))
}
