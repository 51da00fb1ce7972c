//! # Core Primitive Entities
//!
//! Address, hash and amount types used by every crate in the workspace,
//! plus the reserved addresses a genesis record must treat specially.
//!
//! ## Clusters
//!
//! - **Identity**: `Address`, `Hash`
//! - **Amounts**: `U256`
//! - **Code**: `Bytes`

use std::fmt;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

// Re-export fixed-size types from primitive-types for use across all crates
pub use primitive_types::{H160, H256, U256};

// =============================================================================
// CLUSTER A: IDENTITY
// =============================================================================

/// A 20-byte Ethereum-style account address.
pub type Address = H160;

/// A 32-byte hash (Keccak-256 digests, trie roots, mix digests).
pub type Hash = H256;

/// The reserve account. Must always be premined.
pub const ZERO_ADDRESS: Address = H160([0u8; 20]);

/// Address used by the protocol itself when invoking system contracts.
///
/// No operator-controlled role may be assigned to it.
pub const SYSTEM_CALLER: Address = H160([
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xfe,
]);

/// Build an address whose only non-zero bytes are the trailing two.
///
/// System contracts live in this low range.
#[must_use]
pub const fn low_address(low: u16) -> Address {
    let mut bytes = [0u8; 20];
    bytes[18] = (low >> 8) as u8;
    bytes[19] = (low & 0xff) as u8;
    H160(bytes)
}

// =============================================================================
// CLUSTER B: CODE
// =============================================================================

/// Opaque byte blob (contract bytecode, extra data).
///
/// Serializes as a `0x`-prefixed lowercase hex string.
#[derive(Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Bytes(pub Vec<u8>);

impl Bytes {
    /// Wrap raw bytes.
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Number of bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrow the raw bytes.
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for Bytes {
    fn from(v: Vec<u8>) -> Self {
        Self(v)
    }
}

impl From<&[u8]> for Bytes {
    fn from(v: &[u8]) -> Self {
        Self(v.to_vec())
    }
}

impl fmt::Debug for Bytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bytes(0x{})", hex::encode(&self.0))
    }
}

impl fmt::Display for Bytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(&self.0))
    }
}

impl Serialize for Bytes {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Bytes {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        crate::parsing::parse_hex_bytes(&s)
            .map_err(|e| de::Error::custom(format!("invalid hex bytes: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_low_address() {
        let addr = low_address(0x1001);
        assert_eq!(
            format!("{addr:?}"),
            "0x0000000000000000000000000000000000001001"
        );
    }

    #[test]
    fn test_system_caller_is_not_zero() {
        assert_ne!(SYSTEM_CALLER, ZERO_ADDRESS);
        assert_eq!(SYSTEM_CALLER.as_bytes()[19], 0xfe);
    }

    #[test]
    fn test_bytes_serialize_as_hex() {
        let bytes = Bytes::new(vec![0x60, 0x80]);
        let json = serde_json::to_string(&bytes).unwrap();
        assert_eq!(json, "\"0x6080\"");

        let back: Bytes = serde_json::from_str(&json).unwrap();
        assert_eq!(back, bytes);
    }
}
