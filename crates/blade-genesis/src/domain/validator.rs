//! Validator domain entities

use std::fmt;

use serde::{Deserialize, Serialize};
use shared_types::{Address, U256};

use super::error::{GenesisError, GenesisResult};

/// Hex characters in an ECDSA account address (without `0x`).
pub const ECDSA_ADDRESS_LENGTH: usize = 40;

/// Hex characters in a BLS public key (without `0x`).
pub const BLS_KEY_LENGTH: usize = 256;

/// Header of the validator listing printed after a successful run.
pub const VALIDATOR_LISTING_HEADER: &str = "[GENESIS VALIDATORS]";

/// Key material for one validator, before stake resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorKeys {
    pub multi_addr: String,
    pub address: Address,
    /// BLS public key hex, `0x` already stripped.
    pub bls_key: String,
}

/// A validator in the initial validator set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenesisValidator {
    pub multi_addr: String,
    pub address: Address,
    pub bls_key: String,
    pub stake: U256,
}

impl GenesisValidator {
    pub fn new(keys: ValidatorKeys, stake: U256) -> Self {
        Self {
            multi_addr: keys.multi_addr,
            address: keys.address,
            bls_key: keys.bls_key,
            stake,
        }
    }

    /// Raw BLS public key bytes.
    pub fn bls_key_bytes(&self) -> GenesisResult<Vec<u8>> {
        hex::decode(&self.bls_key)
            .map_err(|e| GenesisError::malformed("bls key", self.bls_key.clone(), e.to_string()))
    }
}

impl fmt::Display for GenesisValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Multiaddr: {}, Address: {:?}, BLS key: 0x{}, Stake: {}",
            self.multi_addr, self.address, self.bls_key, self.stake
        )
    }
}

/// Render the labeled validator section written to the command output.
pub fn render_validator_listing(validators: &[GenesisValidator]) -> String {
    let mut out = String::from(VALIDATOR_LISTING_HEADER);
    out.push('\n');
    for validator in validators {
        out.push_str(&validator.to_string());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> GenesisValidator {
        GenesisValidator::new(
            ValidatorKeys {
                multi_addr: "/ip4/127.0.0.1/tcp/30301".to_string(),
                address: Address::repeat_byte(0x11),
                bls_key: "ab".repeat(128),
            },
            U256::from(5u64),
        )
    }

    #[test]
    fn test_bls_key_bytes() {
        let bytes = sample().bls_key_bytes().unwrap();
        assert_eq!(bytes.len(), 128);
        assert!(bytes.iter().all(|b| *b == 0xab));
    }

    #[test]
    fn test_listing_has_header_and_one_line_per_validator() {
        let listing = render_validator_listing(&[sample(), sample()]);
        let lines: Vec<&str> = listing.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], VALIDATOR_LISTING_HEADER);
        assert!(lines[1].contains("/ip4/127.0.0.1/tcp/30301"));
        assert!(lines[1].contains("0x1111111111111111111111111111111111111111"));
    }
}
