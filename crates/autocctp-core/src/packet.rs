//! Inbound transfer packets and the fungible token payload they carry.

use serde::{Deserialize, Serialize};

use crate::error::PacketDataError;

/// Block height on the counterparty chain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Height {
    pub revision_number: u64,
    pub revision_height: u64,
}

/// A packet delivered by the channel layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Packet {
    pub sequence: u64,
    pub source_port: String,
    pub source_channel: String,
    pub destination_port: String,
    /// Channel on this chain the packet arrived on.
    pub destination_channel: String,
    pub data: Vec<u8>,
    pub timeout_height: Height,
    pub timeout_timestamp: u64,
}

impl Packet {
    /// Copy of this packet with its payload replaced.
    pub fn with_data(&self, data: Vec<u8>) -> Self {
        Self {
            data,
            ..self.clone()
        }
    }
}

/// ICS-20 fungible token transfer payload.
///
/// Fields are declared in key order so the JSON encoding matches the sorted
/// form other chains emit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FungibleTokenPacketData {
    /// Base-10 token amount as a string.
    pub amount: String,
    pub denom: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub memo: String,
    pub receiver: String,
    pub sender: String,
}

impl FungibleTokenPacketData {
    pub fn decode(bytes: &[u8]) -> Result<Self, PacketDataError> {
        serde_json::from_slice(bytes).map_err(PacketDataError::Decode)
    }

    pub fn encode(&self) -> Result<Vec<u8>, PacketDataError> {
        serde_json::to_vec(self).map_err(PacketDataError::Encode)
    }
}
