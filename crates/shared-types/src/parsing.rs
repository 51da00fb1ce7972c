//! # Primitive Parsing
//!
//! Strict parsers for the string forms operators type on the command line.
//! Every parser rejects rather than guesses: a malformed address must never
//! silently become the zero address.

use crate::entities::{Address, Bytes, U256};
use crate::errors::ParseError;

/// Number of hex characters in an address.
pub const ADDRESS_HEX_LENGTH: usize = 40;

/// Strip an optional `0x`/`0X` prefix.
pub fn strip_hex_prefix(s: &str) -> &str {
    s.strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s)
}

/// Parse a 20-byte address from exactly 40 hex characters (optional `0x`).
pub fn parse_address(s: &str) -> Result<Address, ParseError> {
    let trimmed = strip_hex_prefix(s.trim());
    if trimmed.is_empty() {
        return Err(ParseError::Empty);
    }
    if trimmed.len() != ADDRESS_HEX_LENGTH {
        return Err(ParseError::InvalidLength {
            expected: ADDRESS_HEX_LENGTH,
            actual: trimmed.len(),
        });
    }

    let raw = hex::decode(trimmed).map_err(|e| ParseError::InvalidHex(e.to_string()))?;
    Ok(Address::from_slice(&raw))
}

/// Parse an arbitrary-length hex blob (optional `0x`). Empty input is an empty blob.
pub fn parse_hex_bytes(s: &str) -> Result<Bytes, ParseError> {
    let trimmed = strip_hex_prefix(s.trim());
    hex::decode(trimmed)
        .map(Bytes::new)
        .map_err(|e| ParseError::InvalidHex(e.to_string()))
}

/// Parse a 256-bit unsigned integer, either decimal or `0x`-prefixed hex.
pub fn parse_uint256_or_hex(s: &str) -> Result<U256, ParseError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(ParseError::Empty);
    }

    let parsed = if s.starts_with("0x") || s.starts_with("0X") {
        U256::from_str_radix(strip_hex_prefix(s), 16).ok()
    } else {
        U256::from_dec_str(s).ok()
    };

    parsed.ok_or_else(|| ParseError::InvalidInteger(s.to_string()))
}

/// An `<address>:<amount>` pair used for premine, stake and reward wallet inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PremineInfo {
    pub address: Address,
    pub amount: U256,
}

impl PremineInfo {
    /// Parse `<address>[:<amount>]`; an omitted amount falls back to `default_amount`.
    pub fn parse(raw: &str, default_amount: U256) -> Result<Self, ParseError> {
        let mut parts = raw.trim().split(':');
        let address = parts.next().unwrap_or_default();
        let amount = parts.next();

        if parts.next().is_some() {
            return Err(ParseError::InvalidShape {
                expected: "<address>[:<amount>]",
                value: raw.to_string(),
            });
        }

        let address = parse_address(address)?;
        let amount = match amount {
            Some(a) => parse_uint256_or_hex(a)?,
            None => default_amount,
        };

        Ok(Self { address, amount })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::ZERO_ADDRESS;

    #[test]
    fn test_parse_address_with_and_without_prefix() {
        let a = parse_address("0x00000000000000000000000000000000000000aa").unwrap();
        let b = parse_address("00000000000000000000000000000000000000AA").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.as_bytes()[19], 0xaa);
    }

    #[test]
    fn test_parse_address_rejects_short_and_non_hex() {
        assert_eq!(
            parse_address("0x1234"),
            Err(ParseError::InvalidLength {
                expected: 40,
                actual: 4
            })
        );
        assert!(matches!(
            parse_address("zz00000000000000000000000000000000000000"),
            Err(ParseError::InvalidHex(_))
        ));
        assert_eq!(parse_address("  "), Err(ParseError::Empty));
    }

    #[test]
    fn test_parse_uint256_decimal_and_hex() {
        assert_eq!(parse_uint256_or_hex("1000").unwrap(), U256::from(1000u64));
        assert_eq!(parse_uint256_or_hex("0x3e8").unwrap(), U256::from(1000u64));
        assert!(parse_uint256_or_hex("ten").is_err());
        assert!(parse_uint256_or_hex("-1").is_err());
    }

    #[test]
    fn test_premine_info_default_amount() {
        let info = PremineInfo::parse(
            "0x0000000000000000000000000000000000000000",
            U256::from(7u64),
        )
        .unwrap();
        assert_eq!(info.address, ZERO_ADDRESS);
        assert_eq!(info.amount, U256::from(7u64));
    }

    #[test]
    fn test_premine_info_rejects_extra_parts() {
        let err = PremineInfo::parse(
            "0x0000000000000000000000000000000000000000:1:2",
            U256::zero(),
        )
        .unwrap_err();
        assert!(matches!(err, ParseError::InvalidShape { .. }));
    }
}
