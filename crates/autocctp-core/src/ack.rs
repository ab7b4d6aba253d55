//! Packet acknowledgements.
//!
//! The wire form follows the ICS-20 JSON acknowledgement: a success carries
//! base64 result bytes, an error carries a deterministic string built only
//! from the error code. The full error message is kept on the value for
//! logging but never written to the wire, so every validator produces the
//! same acknowledgement bytes.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

/// An error that maps to a registered module error code.
pub trait CodedError: std::error::Error {
    fn code(&self) -> u32;
}

/// Outcome of receiving a packet, returned to the sending chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Acknowledgement {
    /// Successful receipt with opaque result bytes.
    Result(Vec<u8>),
    /// Failed receipt.
    Error { code: u32, message: String },
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
enum WireAck {
    Result(String),
    Error(String),
}

impl Acknowledgement {
    pub fn success(result: Vec<u8>) -> Self {
        Acknowledgement::Result(result)
    }

    /// The success acknowledgement written by the fungible token transfer
    /// application (`result` = `[0x01]`).
    pub fn transfer_success() -> Self {
        Acknowledgement::Result(vec![1])
    }

    pub fn error(code: u32, message: impl Into<String>) -> Self {
        Acknowledgement::Error {
            code,
            message: message.into(),
        }
    }

    /// Error acknowledgement for a coded error; the message is the error's
    /// full display chain.
    pub fn from_error<E: CodedError + ?Sized>(err: &E) -> Self {
        let mut message = err.to_string();
        let mut source = err.source();
        while let Some(cause) = source {
            let text = cause.to_string();
            if !message.contains(&text) {
                message.push_str(": ");
                message.push_str(&text);
            }
            source = cause.source();
        }
        Acknowledgement::Error {
            code: err.code(),
            message,
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Acknowledgement::Result(_))
    }

    /// Error code, or `None` for a success.
    #[must_use]
    pub fn code(&self) -> Option<u32> {
        match self {
            Acknowledgement::Result(_) => None,
            Acknowledgement::Error { code, .. } => Some(*code),
        }
    }

    /// Deterministic JSON wire encoding.
    pub fn to_bytes(&self) -> Vec<u8> {
        let wire = match self {
            Acknowledgement::Result(bytes) => WireAck::Result(STANDARD.encode(bytes)),
            Acknowledgement::Error { code, .. } => WireAck::Error(format!(
                "ABCI code: {code}: error handling packet: see events for details"
            )),
        };
        // A two-variant enum of strings always serializes.
        serde_json::to_vec(&wire).unwrap_or_default()
    }

    /// Decode a wire acknowledgement. Error acknowledgements come back with
    /// the code recovered from the wire string and an empty message; returns
    /// `None` for anything that is not an acknowledgement.
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        match serde_json::from_slice::<WireAck>(bytes).ok()? {
            WireAck::Result(encoded) => STANDARD.decode(encoded).ok().map(Acknowledgement::Result),
            WireAck::Error(text) => {
                let code = text
                    .strip_prefix("ABCI code: ")?
                    .split(':')
                    .next()?
                    .parse()
                    .ok()?;
                Some(Acknowledgement::Error {
                    code,
                    message: String::new(),
                })
            }
        }
    }
}
