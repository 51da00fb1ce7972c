//! Native token metadata

use serde::{Deserialize, Serialize};

use super::error::{GenesisError, GenesisResult};

const FIELD: &str = "native-token-config";
const EXPECTED_SHAPE: &str = "expected <name>:<symbol>:<decimals>:<mintable>";

/// Name, symbol, decimals and mintability of the chain's native token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NativeTokenConfig {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    pub is_mintable: bool,
}

impl NativeTokenConfig {
    /// Parse `<name>:<symbol>:<decimals>:<mintable>`.
    pub fn parse(raw: &str) -> GenesisResult<Self> {
        let parts: Vec<&str> = raw.trim().split(':').collect();
        if parts.len() != 4 {
            return Err(GenesisError::malformed(FIELD, raw, EXPECTED_SHAPE));
        }

        let name = parts[0].trim();
        let symbol = parts[1].trim();
        if name.is_empty() || symbol.is_empty() {
            return Err(GenesisError::malformed(
                FIELD,
                raw,
                "token name and symbol must not be empty",
            ));
        }

        let decimals = parts[2]
            .trim()
            .parse::<u8>()
            .map_err(|e| GenesisError::malformed(FIELD, raw, format!("decimals: {e}")))?;

        let is_mintable = parts[3]
            .trim()
            .parse::<bool>()
            .map_err(|e| GenesisError::malformed(FIELD, raw, format!("mintable flag: {e}")))?;

        Ok(Self {
            name: name.to_string(),
            symbol: symbol.to_string(),
            decimals,
            is_mintable,
        })
    }
}
