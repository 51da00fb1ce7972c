//! Raw operator parameters
//!
//! `GenesisParams` is the flat input surface exactly as an operator supplies
//! it (command-line flags or a TOML file). Nothing here is validated; the
//! `validation` module turns it into `GenesisInputs`.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DurationMilliSeconds};
use shared_types::U256;

use super::contracts::addresses;

pub const DEFAULT_GENESIS_PATH: &str = "./genesis.json";
pub const DEFAULT_CHAIN_NAME: &str = "blade";
pub const DEFAULT_CHAIN_ID: u64 = 100;
pub const DEFAULT_SPRINT_SIZE: u64 = 5; // in blocks
pub const DEFAULT_EPOCH_SIZE: u64 = 10; // in blocks
pub const DEFAULT_EPOCH_REWARD: u64 = 1;
pub const DEFAULT_BLOCK_TIME: Duration = Duration::from_secs(2);
pub const DEFAULT_BLOCK_TIME_DRIFT: u64 = 10; // in seconds
pub const DEFAULT_BLOCK_TRACKER_POLL_INTERVAL: Duration = Duration::from_secs(1);
pub const DEFAULT_CHECKPOINT_INTERVAL: u64 = 900; // in blocks
pub const DEFAULT_WITHDRAWAL_WAIT_PERIOD: u64 = 1; // in epochs
pub const DEFAULT_MIN_VALIDATORS: u64 = 1;
pub const DEFAULT_MAX_VALIDATORS: u64 = 100;
pub const DEFAULT_BLOCK_GAS_LIMIT: u64 = 5_242_880;
pub const DEFAULT_VOTING_DELAY: &str = "10"; // in blocks
pub const DEFAULT_VOTING_PERIOD: &str = "10000"; // in blocks
pub const DEFAULT_PROPOSAL_THRESHOLD: &str = "1000";
pub const DEFAULT_PROPOSAL_QUORUM: u64 = 67; // percentage
pub const DEFAULT_NATIVE_TOKEN_CONFIG: &str = "Blade:BLADE:18:true";
pub const DEFAULT_BASE_FEE_CONFIG: &str = "1000000000:2:8";
pub const DEFAULT_VALIDATOR_PREFIX: &str = "test-chain-";
pub const DEFAULT_INITIAL_STATE_ROOT: &str =
    "0x0000000000000000000000000000000000000000000000000000000000000000";

/// Gas used recorded in the genesis block header.
pub const DEFAULT_GENESIS_GAS_USED: u64 = 458_752; // 0x70000

/// 1,000,000 tokens with 18 decimals.
pub fn default_premine_balance() -> U256 {
    U256::from(1_000_000u64) * U256::exp10(18)
}

/// 1,000,000 tokens with 18 decimals.
pub fn default_stake() -> U256 {
    U256::from(1_000_000u64) * U256::exp10(18)
}

/// Admin and enabled address lists for one allow or block list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessListParams {
    pub admin: Vec<String>,
    pub enabled: Vec<String>,
}

/// Every raw input the genesis command accepts.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct GenesisParams {
    /// Output path of the genesis file.
    pub genesis_path: PathBuf,
    pub name: String,
    pub chain_id: u64,

    #[serde_as(as = "DurationMilliSeconds<u64>")]
    #[serde(rename = "block-time-ms")]
    pub block_time: Duration,
    pub block_time_drift: u64,
    #[serde_as(as = "DurationMilliSeconds<u64>")]
    #[serde(rename = "block-tracker-poll-interval-ms")]
    pub block_tracker_poll_interval: Duration,
    pub epoch_size: u64,
    pub sprint_size: u64,
    pub epoch_reward: u64,
    pub min_validators: u64,
    pub max_validators: u64,
    pub checkpoint_interval: u64,
    pub withdrawal_wait_period: u64,
    pub initial_state_root: String,
    pub block_gas_limit: u64,

    /// `<name>:<symbol>:<decimals>:<mintable>`
    pub native_token_config: String,
    /// `<address>:<amount>`
    pub reward_wallet: String,
    /// Hex-encoded deployed bytecode of an external reward token.
    pub reward_token_code: String,
    /// `<blockNumber>:<address>[:<destinationAddress>]`
    pub burn_contract: String,
    /// `<baseFee>[:<elasticityMultiplier>[:<changeDenominator>]]`
    pub base_fee_config: String,

    pub proxy_contracts_admin: String,
    pub blade_admin: String,

    pub contract_deployer_allow_list: AccessListParams,
    pub contract_deployer_block_list: AccessListParams,
    pub transactions_allow_list: AccessListParams,
    pub transactions_block_list: AccessListParams,
    pub bridge_allow_list: AccessListParams,
    pub bridge_block_list: AccessListParams,

    /// `<address>[:<amount>]` entries.
    pub premine: Vec<String>,
    /// `<address>[:<amount>]` entries.
    pub stake: Vec<String>,

    /// `<multiaddr>:<ecdsaAddress>:<blsKey>` descriptors.
    pub validators: Vec<String>,
    /// Key-store directory; defaults to the genesis file's parent.
    pub validators_path: Option<PathBuf>,
    pub validators_prefix: String,

    pub bootnodes: Vec<String>,

    pub vote_delay: String,
    pub vote_period: String,
    pub vote_proposal_threshold: String,
    pub proposal_quorum: u64,

    /// Address of the token validators stake with.
    pub stake_token: String,
}

impl Default for GenesisParams {
    fn default() -> Self {
        Self {
            genesis_path: PathBuf::from(DEFAULT_GENESIS_PATH),
            name: DEFAULT_CHAIN_NAME.to_string(),
            chain_id: DEFAULT_CHAIN_ID,
            block_time: DEFAULT_BLOCK_TIME,
            block_time_drift: DEFAULT_BLOCK_TIME_DRIFT,
            block_tracker_poll_interval: DEFAULT_BLOCK_TRACKER_POLL_INTERVAL,
            epoch_size: DEFAULT_EPOCH_SIZE,
            sprint_size: DEFAULT_SPRINT_SIZE,
            epoch_reward: DEFAULT_EPOCH_REWARD,
            min_validators: DEFAULT_MIN_VALIDATORS,
            max_validators: DEFAULT_MAX_VALIDATORS,
            checkpoint_interval: DEFAULT_CHECKPOINT_INTERVAL,
            withdrawal_wait_period: DEFAULT_WITHDRAWAL_WAIT_PERIOD,
            initial_state_root: DEFAULT_INITIAL_STATE_ROOT.to_string(),
            block_gas_limit: DEFAULT_BLOCK_GAS_LIMIT,
            native_token_config: DEFAULT_NATIVE_TOKEN_CONFIG.to_string(),
            reward_wallet: String::new(),
            reward_token_code: String::new(),
            burn_contract: String::new(),
            base_fee_config: DEFAULT_BASE_FEE_CONFIG.to_string(),
            proxy_contracts_admin: String::new(),
            blade_admin: String::new(),
            contract_deployer_allow_list: AccessListParams::default(),
            contract_deployer_block_list: AccessListParams::default(),
            transactions_allow_list: AccessListParams::default(),
            transactions_block_list: AccessListParams::default(),
            bridge_allow_list: AccessListParams::default(),
            bridge_block_list: AccessListParams::default(),
            premine: Vec::new(),
            stake: Vec::new(),
            validators: Vec::new(),
            validators_path: None,
            validators_prefix: DEFAULT_VALIDATOR_PREFIX.to_string(),
            bootnodes: Vec::new(),
            vote_delay: DEFAULT_VOTING_DELAY.to_string(),
            vote_period: DEFAULT_VOTING_PERIOD.to_string(),
            vote_proposal_threshold: DEFAULT_PROPOSAL_THRESHOLD.to_string(),
            proposal_quorum: DEFAULT_PROPOSAL_QUORUM,
            stake_token: format!("{:?}", addresses::NATIVE_ERC20_TOKEN),
        }
    }
}

impl GenesisParams {
    /// Directory scanned for validator keys when no descriptors are given.
    pub fn validators_dir(&self) -> PathBuf {
        if let Some(path) = &self.validators_path {
            return path.clone();
        }

        match self.genesis_path.parent() {
            Some(parent) if parent != Path::new("") => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }
}
