//! The 32-byte Solana address type.
//!
//! Solana addresses are Base58-encoded 32-byte values. Most are Ed25519 public
//! keys; program-derived addresses are deliberately off the curve. Both share
//! this representation, the distinction only matters during derivation (see
//! [`crate::pda`]).

use std::fmt;
use std::str::FromStr;

use crate::error::PrimitivesError;

/// Number of bytes in an address.
pub const ADDRESS_BYTES: usize = 32;

/// Longest Base58 string that can decode to 32 bytes.
const MAX_BASE58_LEN: usize = 44;

/// A fixed-size 32-byte account address.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address([u8; ADDRESS_BYTES]);

impl Address {
    /// Wrap raw bytes. Usable in `const` items for compiled-in program IDs.
    pub const fn new_from_array(bytes: [u8; ADDRESS_BYTES]) -> Self {
        Self(bytes)
    }

    pub const fn to_bytes(self) -> [u8; ADDRESS_BYTES] {
        self.0
    }

    pub const fn as_array(&self) -> &[u8; ADDRESS_BYTES] {
        &self.0
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; ADDRESS_BYTES]> for Address {
    fn from(bytes: [u8; ADDRESS_BYTES]) -> Self {
        Self(bytes)
    }
}

impl From<Address> for [u8; ADDRESS_BYTES] {
    fn from(address: Address) -> Self {
        address.0
    }
}

impl TryFrom<&[u8]> for Address {
    type Error = PrimitivesError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let arr: [u8; ADDRESS_BYTES] = bytes.try_into().map_err(|_| {
            PrimitivesError::InvalidAddress(format!(
                "expected {ADDRESS_BYTES} bytes, got {}",
                bytes.len()
            ))
        })?;
        Ok(Self(arr))
    }
}

impl FromStr for Address {
    type Err = PrimitivesError;

    /// Decode a Base58 address string. The decoded value must be exactly
    /// 32 bytes.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() > MAX_BASE58_LEN {
            return Err(PrimitivesError::InvalidAddress(format!(
                "base58 string too long: {} characters",
                s.len()
            )));
        }

        let bytes = bs58::decode(s)
            .into_vec()
            .map_err(|e| PrimitivesError::InvalidAddress(format!("base58 decode failed: {e}")))?;

        Self::try_from(bytes.as_slice())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&bs58::encode(self.0).into_string())
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({self})")
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Address {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Address {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
