//! Chain configuration record
//!
//! The single output of a compilation pass. Every map is a `BTreeMap` so the
//! serialized form is byte-identical for identical inputs.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DurationMilliSeconds};
use shared_types::{Address, Bytes, Hash, H256, U256};

use super::token::NativeTokenConfig;
use super::validator::GenesisValidator;

/// Mix digest stamped into every PolyBFT genesis header.
pub const POLYBFT_MIX_DIGEST: Hash = H256([
    0xad, 0xce, 0x6e, 0x52, 0x30, 0xab, 0xe0, 0x12, 0x34, 0x2a, 0x44, 0xe4, 0xe9, 0xb6, 0xd0, 0x59,
    0x97, 0xd6, 0xf0, 0x15, 0x38, 0x7a, 0xe0, 0xe5, 0x9b, 0xe9, 0x24, 0xaf, 0xc7, 0xec, 0x70, 0xc1,
]);

/// Hard forks known to the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Fork {
    Homestead,
    Byzantium,
    Constantinople,
    Petersburg,
    Istanbul,
    /// EIP-1559 base fee. Requires a burn contract.
    London,
    LondonFix,
    Eip150,
    Eip158,
    Eip155,
    Governance,
    QuorumCalcAlignment,
    TxHashWithType,
}

impl Fork {
    pub const ALL: [Fork; 13] = [
        Fork::Homestead,
        Fork::Byzantium,
        Fork::Constantinople,
        Fork::Petersburg,
        Fork::Istanbul,
        Fork::London,
        Fork::LondonFix,
        Fork::Eip150,
        Fork::Eip158,
        Fork::Eip155,
        Fork::Governance,
        Fork::QuorumCalcAlignment,
        Fork::TxHashWithType,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Fork::Homestead => "homestead",
            Fork::Byzantium => "byzantium",
            Fork::Constantinople => "constantinople",
            Fork::Petersburg => "petersburg",
            Fork::Istanbul => "istanbul",
            Fork::London => "london",
            Fork::LondonFix => "londonfix",
            Fork::Eip150 => "EIP150",
            Fork::Eip158 => "EIP158",
            Fork::Eip155 => "EIP155",
            Fork::Governance => "governance",
            Fork::QuorumCalcAlignment => "quorumcalcalignment",
            Fork::TxHashWithType => "txHashWithType",
        }
    }
}

/// Activation parameters of one fork.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForkParams {
    pub block: u64,
}

/// Enabled forks keyed by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ForkSet(BTreeMap<String, ForkParams>);

impl ForkSet {
    /// Every known fork, active from genesis.
    pub fn all_enabled() -> Self {
        Self(
            Fork::ALL
                .iter()
                .map(|f| (f.name().to_string(), ForkParams { block: 0 }))
                .collect(),
        )
    }

    pub fn remove(&mut self, fork: Fork) {
        self.0.remove(fork.name());
    }

    pub fn is_enabled(&self, fork: Fork) -> bool {
        self.0.contains_key(fork.name())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Admin and enabled addresses of one allow or block list.
///
/// Only constructed with at least one admin: a list nobody can administer
/// could never be updated, so the feature stays absent instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressListConfig {
    pub admin_addresses: Vec<Address>,
    pub enabled_addresses: Vec<Address>,
}

impl AddressListConfig {
    /// Returns `None` when `admin_addresses` is empty.
    pub fn new(admin_addresses: Vec<Address>, enabled_addresses: Vec<Address>) -> Option<Self> {
        if admin_addresses.is_empty() {
            return None;
        }
        Some(Self {
            admin_addresses,
            enabled_addresses,
        })
    }
}

/// An account in the genesis allocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenesisAccount {
    pub balance: U256,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<Bytes>,
}

impl GenesisAccount {
    /// A predeployed contract; always zero balance.
    pub fn contract(code: Bytes) -> Self {
        Self {
            balance: U256::zero(),
            code: Some(code),
        }
    }

    /// A plain premined account.
    pub fn premine(balance: U256) -> Self {
        Self {
            balance,
            code: None,
        }
    }
}

/// Reward distribution settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardsConfig {
    pub token_address: Address,
    pub wallet_address: Address,
    pub wallet_amount: U256,
}

/// On-chain governance settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GovernanceConfig {
    pub voting_delay: U256,
    pub voting_period: U256,
    pub proposal_threshold: U256,
    pub proposal_quorum_percentage: u64,
    pub child_governor_addr: Address,
    pub child_timelock_addr: Address,
    pub network_params_addr: Address,
    pub fork_params_addr: Address,
}

/// PolyBFT consensus engine parameters.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolyBftConfig {
    pub initial_validator_set: Vec<GenesisValidator>,
    #[serde_as(as = "DurationMilliSeconds<u64>")]
    pub block_time: Duration,
    pub epoch_size: u64,
    pub sprint_size: u64,
    pub epoch_reward: u64,
    pub governance: Address,
    pub initial_trie_root: Hash,
    pub native_token_config: NativeTokenConfig,
    pub min_validator_set_size: u64,
    pub max_validator_set_size: u64,
    pub checkpoint_interval: u64,
    pub withdrawal_wait_period: u64,
    pub reward_config: RewardsConfig,
    pub block_time_drift: u64,
    #[serde_as(as = "DurationMilliSeconds<u64>")]
    pub block_tracker_poll_interval: Duration,
    pub proxy_contracts_admin: Address,
    pub blade_admin: Address,
    pub governance_config: GovernanceConfig,
    pub stake_token_addr: Address,
}

/// Consensus engine section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub polybft: PolyBftConfig,
}

/// Chain-wide parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainParams {
    #[serde(rename = "chainID")]
    pub chain_id: u64,
    pub forks: ForkSet,
    pub engine: EngineConfig,
    /// Activation block → burn contract address.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub burn_contract: BTreeMap<u64, Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub burn_contract_destination_address: Option<Address>,
    #[serde(rename = "baseFeeEM")]
    pub base_fee_em: u64,
    pub base_fee_change_denom: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_deployer_allow_list: Option<AddressListConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_deployer_block_list: Option<AddressListConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transactions_allow_list: Option<AddressListConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transactions_block_list: Option<AddressListConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bridge_allow_list: Option<AddressListConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bridge_block_list: Option<AddressListConfig>,
}

/// Genesis block fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenesisBlock {
    pub gas_limit: u64,
    pub difficulty: u64,
    pub alloc: BTreeMap<Address, GenesisAccount>,
    pub extra_data: Bytes,
    pub gas_used: u64,
    pub mix_hash: Hash,
    pub base_fee: u64,
}

/// The complete chain-initialization record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainConfiguration {
    pub name: String,
    pub genesis: GenesisBlock,
    pub params: ChainParams,
    pub bootnodes: Vec<String>,
}
