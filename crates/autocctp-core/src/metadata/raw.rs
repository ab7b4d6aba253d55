//! Loosely typed memo layer.
//!
//! These structs accept whatever shape the memo JSON has and leave every
//! semantic check to [`RawCctpMetadata::validate`] and the parser. Unknown
//! keys are ignored.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::Deserialize;

use super::CctpRoute;
use crate::constants::MINT_RECIPIENT_LEN;
use crate::error::RouteParamsError;
use crate::types::AddressCodec;

/// Top level of a memo.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawPacketMetadata {
    #[serde(default)]
    pub autocctp: Option<RawAutoCctp>,
    /// Packet-forward middleware directive. Only its presence matters; a JSON
    /// `null` deserializes to `None`.
    #[serde(default)]
    pub forward: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawAutoCctp {
    #[serde(default)]
    pub receiver: String,
    #[serde(default)]
    pub cctp: Option<RawCctpMetadata>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawCctpMetadata {
    /// Never read from the memo; overwritten with the directive receiver.
    #[serde(skip)]
    pub target_account: String,
    #[serde(default)]
    pub transfer_channel: Option<String>,
    #[serde(default)]
    pub destination_domain: Option<u32>,
    #[serde(default)]
    pub mint_recipient: Option<String>,
}

impl RawCctpMetadata {
    /// Check every field and produce the typed route.
    ///
    /// `target_account` must already hold the directive receiver.
    pub fn validate(self, codec: &AddressCodec) -> Result<CctpRoute, RouteParamsError> {
        codec.decode(&self.target_account)?;

        let destination_domain = self
            .destination_domain
            .ok_or(RouteParamsError::MissingDestinationDomain)?;

        let mint_recipient = match self.mint_recipient.as_deref() {
            None | Some("") => return Err(RouteParamsError::MissingMintRecipient),
            Some(text) => decode_mint_recipient(text)?,
        };

        let transfer_channel = self.transfer_channel.filter(|c| !c.is_empty());

        Ok(CctpRoute {
            target_account: self.target_account,
            destination_domain,
            mint_recipient,
            transfer_channel,
        })
    }
}

/// Decode a mint recipient written as `0x`-prefixed hex, bare 64-char hex,
/// or standard base64, and check it is a non-zero `bytes32`.
pub fn decode_mint_recipient(text: &str) -> Result<Vec<u8>, RouteParamsError> {
    let bytes = if let Some(hex_body) = text.strip_prefix("0x") {
        hex::decode(hex_body).map_err(|_| RouteParamsError::UndecodableMintRecipient)?
    } else if text.len() == 2 * MINT_RECIPIENT_LEN && text.bytes().all(|b| b.is_ascii_hexdigit())
    {
        hex::decode(text).map_err(|_| RouteParamsError::UndecodableMintRecipient)?
    } else {
        STANDARD
            .decode(text)
            .map_err(|_| RouteParamsError::UndecodableMintRecipient)?
    };

    if bytes.len() != MINT_RECIPIENT_LEN {
        return Err(RouteParamsError::MintRecipientLength(bytes.len()));
    }
    if bytes.iter().all(|b| *b == 0) {
        return Err(RouteParamsError::ZeroMintRecipient);
    }
    Ok(bytes)
}
