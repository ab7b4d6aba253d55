//! Account addresses and their bech32 text form.
//!
//! An [`AccAddress`] is the raw byte form of an account. [`AddressCodec`]
//! binds the chain's human-readable prefix and converts between the raw
//! form and the bech32 strings that appear in packets and memos.

use core::fmt;

use bech32::{Bech32, Hrp};

use crate::constants::{ADDRESS_LEN, MAX_ADDR_LEN};
use crate::error::AddressError;

fn fmt_hex(bytes: &[u8], f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for byte in bytes {
        write!(f, "{:02x}", byte)?;
    }
    Ok(())
}

/// Raw account address bytes (1 to 255 bytes, 20 for hashed accounts).
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct AccAddress(Vec<u8>);

impl AccAddress {
    pub fn new(bytes: Vec<u8>) -> Result<Self, AddressError> {
        if bytes.is_empty() || bytes.len() > MAX_ADDR_LEN {
            return Err(AddressError::InvalidLength(bytes.len()));
        }
        Ok(Self(bytes))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<[u8; ADDRESS_LEN]> for AccAddress {
    fn from(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes.to_vec())
    }
}

impl AsRef<[u8]> for AccAddress {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for AccAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_hex(&self.0, f)
    }
}

impl fmt::Debug for AccAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AccAddress(")?;
        fmt_hex(&self.0[..self.0.len().min(4)], f)?;
        write!(f, "..)")
    }
}

/// Bech32 codec bound to the chain's account prefix.
#[derive(Debug, Clone)]
pub struct AddressCodec {
    prefix: String,
    hrp: Hrp,
}

impl AddressCodec {
    /// Build a codec for a lowercase bech32 human-readable prefix.
    pub fn new(prefix: &str) -> Result<Self, AddressError> {
        if prefix != prefix.to_ascii_lowercase() {
            return Err(AddressError::InvalidPrefix {
                prefix: prefix.to_string(),
                reason: "prefix must be lowercase".to_string(),
            });
        }
        let hrp = Hrp::parse(prefix).map_err(|e| AddressError::InvalidPrefix {
            prefix: prefix.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            prefix: prefix.to_string(),
            hrp,
        })
    }

    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Decode a bech32 account string, checking checksum, prefix and length.
    pub fn decode(&self, address: &str) -> Result<AccAddress, AddressError> {
        if address.trim().is_empty() {
            return Err(AddressError::Empty);
        }
        let (hrp, data) =
            bech32::decode(address).map_err(|e| AddressError::Bech32(e.to_string()))?;
        if hrp != self.hrp {
            return Err(AddressError::WrongPrefix {
                expected: self.prefix.clone(),
                actual: hrp.to_string(),
            });
        }
        AccAddress::new(data)
    }

    /// Encode raw account bytes as a bech32 string with this codec's prefix.
    pub fn encode(&self, address: &AccAddress) -> Result<String, AddressError> {
        bech32::encode::<Bech32>(self.hrp, address.as_ref())
            .map_err(|e| AddressError::Encode(e.to_string()))
    }

    /// Whether `address` is a well-formed account for this chain.
    #[must_use]
    pub fn is_valid(&self, address: &str) -> bool {
        self.decode(address).is_ok()
    }
}

impl PartialEq for AddressCodec {
    fn eq(&self, other: &Self) -> bool {
        self.prefix == other.prefix
    }
}

impl Eq for AddressCodec {}
