//! `blade genesis`
//!
//! Collects the operator inputs (an optional TOML file overlaid with explicit
//! flags), runs the compiler with file-based adapters and reports the
//! resulting validator set.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use blade_genesis::domain::AccessListParams;
use blade_genesis::{
    DirectoryArtifactProvider, FileGenesisCompiler, GenesisCompilerApi, GenesisParams,
    GenesisValidator,
};
use clap::Args;
use serde::Serialize;
use shared_types::Hash;

use crate::output::OutputFormat;

#[derive(Args, Debug, Clone)]
pub struct GenesisArgs {
    /// TOML file with genesis parameters; flags override its values
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory holding `<ArtifactName>.hex` deployed bytecode files
    #[arg(long, value_name = "DIR", default_value = "./artifacts")]
    pub artifacts_dir: PathBuf,

    /// Path of the genesis file to write
    #[arg(long = "dir", value_name = "PATH")]
    pub genesis_path: Option<PathBuf>,

    /// Name of the chain
    #[arg(long)]
    pub name: Option<String>,

    /// Chain ID used for replay protection
    #[arg(long)]
    pub chain_id: Option<u64>,

    /// Predefined block time (e.g. `2s`, `500ms`)
    #[arg(long, value_parser = parse_duration)]
    pub block_time: Option<Duration>,

    /// Accepted block timestamp drift, in seconds
    #[arg(long)]
    pub block_time_drift: Option<u64>,

    /// Block tracker poll interval (e.g. `1s`)
    #[arg(long, value_parser = parse_duration)]
    pub block_tracker_poll_interval: Option<Duration>,

    /// Epoch size, in blocks
    #[arg(long)]
    pub epoch_size: Option<u64>,

    /// Sprint size, in blocks
    #[arg(long)]
    pub sprint_size: Option<u64>,

    /// Reward paid per block of an epoch
    #[arg(long)]
    pub epoch_reward: Option<u64>,

    #[arg(long)]
    pub min_validators: Option<u64>,

    #[arg(long)]
    pub max_validators: Option<u64>,

    /// Checkpoint submission interval, in blocks
    #[arg(long)]
    pub checkpoint_interval: Option<u64>,

    /// Withdrawal wait period, in epochs
    #[arg(long)]
    pub withdrawal_wait_period: Option<u64>,

    /// Trie root of the initial state
    #[arg(long)]
    pub initial_state_root: Option<String>,

    #[arg(long)]
    pub block_gas_limit: Option<u64>,

    /// `<name>:<symbol>:<decimals>:<mintable>`
    #[arg(long)]
    pub native_token_config: Option<String>,

    /// `<address>:<amount>`
    #[arg(long)]
    pub reward_wallet: Option<String>,

    /// Hex-encoded deployed bytecode of the reward token
    #[arg(long)]
    pub reward_token_code: Option<String>,

    /// `<blockNumber>:<address>[:<destinationAddress>]`
    #[arg(long)]
    pub burn_contract: Option<String>,

    /// `<baseFee>[:<elasticityMultiplier>[:<changeDenominator>]]`
    #[arg(long)]
    pub base_fee_config: Option<String>,

    /// Admin of every proxy contract
    #[arg(long)]
    pub proxy_contracts_admin: Option<String>,

    /// Owner of the governance and access-list contracts
    #[arg(long)]
    pub blade_admin: Option<String>,

    #[arg(long)]
    pub contract_deployer_allow_list_admin: Vec<String>,
    #[arg(long)]
    pub contract_deployer_allow_list_enabled: Vec<String>,
    #[arg(long)]
    pub contract_deployer_block_list_admin: Vec<String>,
    #[arg(long)]
    pub contract_deployer_block_list_enabled: Vec<String>,
    #[arg(long)]
    pub transactions_allow_list_admin: Vec<String>,
    #[arg(long)]
    pub transactions_allow_list_enabled: Vec<String>,
    #[arg(long)]
    pub transactions_block_list_admin: Vec<String>,
    #[arg(long)]
    pub transactions_block_list_enabled: Vec<String>,
    #[arg(long)]
    pub bridge_allow_list_admin: Vec<String>,
    #[arg(long)]
    pub bridge_allow_list_enabled: Vec<String>,
    #[arg(long)]
    pub bridge_block_list_admin: Vec<String>,
    #[arg(long)]
    pub bridge_block_list_enabled: Vec<String>,

    /// `<address>[:<amount>]`, repeatable
    #[arg(long)]
    pub premine: Vec<String>,

    /// `<address>[:<amount>]`, repeatable
    #[arg(long)]
    pub stake: Vec<String>,

    /// `<multiaddr>:<ecdsaAddress>:<blsKey>`, repeatable
    #[arg(long)]
    pub validators: Vec<String>,

    /// Root of the local validator key directories
    #[arg(long)]
    pub validators_path: Option<PathBuf>,

    /// Prefix of the local validator key directories
    #[arg(long)]
    pub validators_prefix: Option<String>,

    /// Bootnode multiaddress, repeatable
    #[arg(long = "bootnode")]
    pub bootnodes: Vec<String>,

    /// Blocks between proposal creation and the start of voting
    #[arg(long)]
    pub vote_delay: Option<String>,

    /// Voting period, in blocks
    #[arg(long)]
    pub vote_period: Option<String>,

    /// Votes needed to create a proposal
    #[arg(long)]
    pub vote_proposal_threshold: Option<String>,

    /// Quorum percentage, clamped to 100
    #[arg(long)]
    pub proposal_quorum: Option<u64>,

    /// Address of the token validators stake with
    #[arg(long)]
    pub stake_token: Option<String>,
}

impl GenesisArgs {
    /// Defaults, then the config file, then explicit flags.
    pub fn to_params(&self) -> anyhow::Result<GenesisParams> {
        let mut params = match &self.config {
            Some(path) => load_config(path)?,
            None => GenesisParams::default(),
        };

        set(&mut params.genesis_path, &self.genesis_path);
        set(&mut params.name, &self.name);
        set(&mut params.chain_id, &self.chain_id);
        set(&mut params.block_time, &self.block_time);
        set(&mut params.block_time_drift, &self.block_time_drift);
        set(
            &mut params.block_tracker_poll_interval,
            &self.block_tracker_poll_interval,
        );
        set(&mut params.epoch_size, &self.epoch_size);
        set(&mut params.sprint_size, &self.sprint_size);
        set(&mut params.epoch_reward, &self.epoch_reward);
        set(&mut params.min_validators, &self.min_validators);
        set(&mut params.max_validators, &self.max_validators);
        set(&mut params.checkpoint_interval, &self.checkpoint_interval);
        set(&mut params.withdrawal_wait_period, &self.withdrawal_wait_period);
        set(&mut params.initial_state_root, &self.initial_state_root);
        set(&mut params.block_gas_limit, &self.block_gas_limit);

        set(&mut params.native_token_config, &self.native_token_config);
        set(&mut params.reward_wallet, &self.reward_wallet);
        set(&mut params.reward_token_code, &self.reward_token_code);
        set(&mut params.burn_contract, &self.burn_contract);
        set(&mut params.base_fee_config, &self.base_fee_config);
        set(&mut params.proxy_contracts_admin, &self.proxy_contracts_admin);
        set(&mut params.blade_admin, &self.blade_admin);

        set_access_list(
            &mut params.contract_deployer_allow_list,
            &self.contract_deployer_allow_list_admin,
            &self.contract_deployer_allow_list_enabled,
        );
        set_access_list(
            &mut params.contract_deployer_block_list,
            &self.contract_deployer_block_list_admin,
            &self.contract_deployer_block_list_enabled,
        );
        set_access_list(
            &mut params.transactions_allow_list,
            &self.transactions_allow_list_admin,
            &self.transactions_allow_list_enabled,
        );
        set_access_list(
            &mut params.transactions_block_list,
            &self.transactions_block_list_admin,
            &self.transactions_block_list_enabled,
        );
        set_access_list(
            &mut params.bridge_allow_list,
            &self.bridge_allow_list_admin,
            &self.bridge_allow_list_enabled,
        );
        set_access_list(
            &mut params.bridge_block_list,
            &self.bridge_block_list_admin,
            &self.bridge_block_list_enabled,
        );

        set_list(&mut params.premine, &self.premine);
        set_list(&mut params.stake, &self.stake);
        set_list(&mut params.validators, &self.validators);
        if self.validators_path.is_some() {
            params.validators_path = self.validators_path.clone();
        }
        set(&mut params.validators_prefix, &self.validators_prefix);
        set_list(&mut params.bootnodes, &self.bootnodes);

        set(&mut params.vote_delay, &self.vote_delay);
        set(&mut params.vote_period, &self.vote_period);
        set(&mut params.vote_proposal_threshold, &self.vote_proposal_threshold);
        set(&mut params.proposal_quorum, &self.proposal_quorum);
        set(&mut params.stake_token, &self.stake_token);

        Ok(params)
    }
}

fn set<T: Clone>(slot: &mut T, value: &Option<T>) {
    if let Some(value) = value {
        *slot = value.clone();
    }
}

// A non-empty flag list replaces the file's list rather than extending it
fn set_list(slot: &mut Vec<String>, values: &[String]) {
    if !values.is_empty() {
        *slot = values.to_vec();
    }
}

fn set_access_list(slot: &mut AccessListParams, admin: &[String], enabled: &[String]) {
    set_list(&mut slot.admin, admin);
    set_list(&mut slot.enabled, enabled);
}

/// Load `GenesisParams` from a TOML file; absent keys keep their defaults.
pub fn load_config(path: &Path) -> anyhow::Result<GenesisParams> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    toml::from_str(&raw).with_context(|| format!("invalid config file {}", path.display()))
}

/// Parse `500ms`, `2s`, `1m` or a bare number of seconds.
pub fn parse_duration(raw: &str) -> Result<Duration, String> {
    let raw = raw.trim();
    let (digits, unit) = match raw.find(|c: char| !c.is_ascii_digit()) {
        Some(split) => raw.split_at(split),
        None => (raw, "s"),
    };

    let value: u64 = digits
        .parse()
        .map_err(|_| format!("invalid duration '{raw}'"))?;

    match unit {
        "ms" => Ok(Duration::from_millis(value)),
        "s" => Ok(Duration::from_secs(value)),
        "m" => value
            .checked_mul(60)
            .map(Duration::from_secs)
            .ok_or_else(|| format!("duration '{raw}' out of range")),
        _ => Err(format!("unknown duration unit '{unit}' in '{raw}'")),
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenesisReport<'a> {
    path: &'a Path,
    chain_id: u64,
    digest: Hash,
    validators: &'a [GenesisValidator],
}

pub fn run(args: GenesisArgs, format: OutputFormat) -> anyhow::Result<String> {
    let params = args.to_params()?;
    let compiler = FileGenesisCompiler::with_file_adapters(DirectoryArtifactProvider::new(
        args.artifacts_dir.clone(),
    ));

    let compiled = compiler
        .compile_and_write(&params)
        .with_context(|| format!("failed to generate {}", params.genesis_path.display()))?;

    let report = GenesisReport {
        path: &params.genesis_path,
        chain_id: compiled.chain.params.chain_id,
        digest: compiled.digest,
        validators: &compiled.validators,
    };
    format.render(&report, |report| {
        format!(
            "{}\nGenesis written to {}\n",
            compiled.validator_listing(),
            report.path.display()
        )
    })
}
