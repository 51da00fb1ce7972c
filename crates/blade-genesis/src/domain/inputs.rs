//! Validated inputs
//!
//! `GenesisInputs` is produced once by the parameter validator and threaded
//! explicitly, by reference, through the resolver, planner and assembler.

use std::collections::BTreeMap;

use shared_types::{parse_address, parse_uint256_or_hex, Address, Bytes, Hash, PremineInfo, U256};

use super::chain::AddressListConfig;
use super::error::{GenesisError, GenesisResult};
use super::token::NativeTokenConfig;

/// Parsed `<blockNumber>:<address>[:<destinationAddress>]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BurnContractInfo {
    pub block_number: u64,
    pub address: Address,
    /// Zero address when omitted.
    pub destination: Address,
}

impl BurnContractInfo {
    const FIELD: &'static str = "burn-contract";

    pub fn parse(raw: &str) -> GenesisResult<Self> {
        let parts: Vec<&str> = raw.trim().split(':').collect();
        if parts.len() < 2 || parts.len() > 3 {
            return Err(GenesisError::malformed(
                Self::FIELD,
                raw,
                "expected <block>:<address>[:<destination>]",
            ));
        }

        let block_number = parts[0]
            .trim()
            .parse::<u64>()
            .map_err(|e| GenesisError::malformed(Self::FIELD, raw, format!("block number: {e}")))?;
        let address =
            parse_address(parts[1]).map_err(|e| GenesisError::invalid(Self::FIELD, raw, e))?;
        let destination = match parts.get(2) {
            Some(dest) => parse_burn_destination(dest)
                .map_err(|e| GenesisError::invalid(Self::FIELD, raw, e))?,
            None => Address::zero(),
        };

        Ok(Self {
            block_number,
            address,
            destination,
        })
    }
}

/// `0x0` is accepted as shorthand for the zero address.
fn parse_burn_destination(raw: &str) -> Result<Address, shared_types::ParseError> {
    let digits = shared_types::strip_hex_prefix(raw.trim());
    if !digits.is_empty() && digits.len() < 40 && digits.chars().all(|c| c == '0') {
        return Ok(Address::zero());
    }
    parse_address(raw)
}

/// EIP-1559 base fee parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaseFeeConfig {
    pub base_fee: u64,
    pub elasticity_multiplier: u64,
    pub change_denominator: u64,
}

impl BaseFeeConfig {
    pub const DEFAULT_BASE_FEE: u64 = 1_000_000_000;
    pub const DEFAULT_ELASTICITY_MULTIPLIER: u64 = 2;
    pub const DEFAULT_CHANGE_DENOMINATOR: u64 = 8;

    const FIELD: &'static str = "base-fee-config";

    /// Parse `<baseFee>[:<elasticityMultiplier>[:<changeDenominator>]]`.
    pub fn parse(raw: &str) -> GenesisResult<Self> {
        let parts: Vec<&str> = raw.trim().split(':').collect();
        if parts.len() > 3 || parts[0].trim().is_empty() {
            return Err(GenesisError::malformed(
                Self::FIELD,
                raw,
                "expected <baseFee>[:<elasticityMultiplier>[:<changeDenominator>]]",
            ));
        }

        let number = |idx: usize, default: u64| -> GenesisResult<u64> {
            match parts.get(idx) {
                Some(p) => parse_uint256_or_hex(p)
                    .map_err(|e| GenesisError::invalid(Self::FIELD, raw, e))
                    .and_then(|v| {
                        if v > U256::from(u64::MAX) {
                            Err(GenesisError::malformed(Self::FIELD, raw, "value exceeds u64"))
                        } else {
                            Ok(v.as_u64())
                        }
                    }),
                None => Ok(default),
            }
        };

        let config = Self {
            base_fee: number(0, Self::DEFAULT_BASE_FEE)?,
            elasticity_multiplier: number(1, Self::DEFAULT_ELASTICITY_MULTIPLIER)?,
            change_denominator: number(2, Self::DEFAULT_CHANGE_DENOMINATOR)?,
        };

        if config.elasticity_multiplier == 0 || config.change_denominator == 0 {
            return Err(GenesisError::malformed(
                Self::FIELD,
                raw,
                "elasticity multiplier and change denominator must be non-zero",
            ));
        }

        Ok(config)
    }
}

/// Governance parameters after big-integer parsing and quorum clamping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GovernanceInputs {
    pub voting_delay: U256,
    pub voting_period: U256,
    pub proposal_threshold: U256,
    /// Always within [0, 100].
    pub proposal_quorum: u64,
}

/// Parsed admin/enabled address lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccessListInputs {
    pub admin: Vec<Address>,
    pub enabled: Vec<Address>,
}

impl AccessListInputs {
    pub fn has_admins(&self) -> bool {
        !self.admin.is_empty()
    }

    /// `None` when the list has no admin.
    pub fn to_config(&self) -> Option<AddressListConfig> {
        AddressListConfig::new(self.admin.clone(), self.enabled.clone())
    }
}

/// The six allow/block lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccessLists {
    pub contract_deployer_allow: AccessListInputs,
    pub contract_deployer_block: AccessListInputs,
    pub transactions_allow: AccessListInputs,
    pub transactions_block: AccessListInputs,
    pub bridge_allow: AccessListInputs,
    pub bridge_block: AccessListInputs,
}

/// Everything the later compilation steps need, already validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenesisInputs {
    pub native_token: NativeTokenConfig,
    pub reward_wallet: PremineInfo,
    pub reward_token_code: Option<Bytes>,
    /// Explicit premine in input order; a later duplicate overrides an earlier one.
    pub premine: Vec<PremineInfo>,
    pub stake: BTreeMap<Address, U256>,
    pub burn_contract: Option<BurnContractInfo>,
    pub base_fee: BaseFeeConfig,
    pub proxy_contracts_admin: Address,
    pub blade_admin: Address,
    pub governance: GovernanceInputs,
    pub access_lists: AccessLists,
    pub stake_token: Address,
    pub initial_trie_root: Hash,
}

impl GenesisInputs {
    pub fn is_mintable(&self) -> bool {
        self.native_token.is_mintable
    }

    pub fn is_burn_contract_enabled(&self) -> bool {
        self.burn_contract.is_some()
    }

    /// Any bridge allow- or block-list admin configured.
    pub fn is_bridge_access_list_enabled(&self) -> bool {
        self.access_lists.bridge_allow.has_admins() || self.access_lists.bridge_block.has_admins()
    }

    pub fn has_reward_token_code(&self) -> bool {
        self.reward_token_code.is_some()
    }
}
