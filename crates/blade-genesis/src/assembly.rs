//! # Genesis State Assembly
//!
//! Merges the planned contract allocations with premine balances and builds
//! the complete `ChainConfiguration`.
//!
//! Balance precedence, highest first:
//!
//! 1. Planner allocations (never overwritten)
//! 2. Explicit premine entries
//! 3. Reward wallet premine (no reward token code, epoch reward on a
//!    mintable token)
//! 4. Default premine for each validator on a mintable token

use std::collections::BTreeMap;

use rlp::RlpStream;
use shared_types::{Address, Bytes, ZERO_ADDRESS};
use tracing::{debug, warn};

use crate::allocation::ContractAllocation;
use crate::domain::{
    addresses, default_premine_balance, ChainConfiguration, ChainParams, EngineConfig, Fork,
    ForkSet, GenesisAccount, GenesisBlock, GenesisInputs, GenesisParams, GenesisResult,
    GenesisValidator, GovernanceConfig, PolyBftConfig, RewardsConfig, DEFAULT_GENESIS_GAS_USED,
    POLYBFT_MIX_DIGEST,
};

/// Zero bytes prefixed to the genesis extra data.
pub const EXTRA_VANITY_LENGTH: usize = 32;

/// 32 zero vanity bytes followed by `rlp([[address, blsKey, stake], ...])`.
pub fn genesis_extra_data(validators: &[GenesisValidator]) -> GenesisResult<Bytes> {
    let mut stream = RlpStream::new_list(validators.len());
    for validator in validators {
        stream.begin_list(3);
        stream.append(&validator.address);
        stream.append(&validator.bls_key_bytes()?);
        stream.append(&validator.stake);
    }

    let mut extra = vec![0u8; EXTRA_VANITY_LENGTH];
    extra.extend_from_slice(&stream.out());
    Ok(Bytes::new(extra))
}

/// GenesisStateAssembler
#[derive(Debug, Default, Clone, Copy)]
pub struct GenesisStateAssembler;

impl GenesisStateAssembler {
    pub fn new() -> Self {
        Self
    }

    /// Build the chain configuration record.
    pub fn assemble(
        &self,
        params: &GenesisParams,
        inputs: &GenesisInputs,
        validators: &[GenesisValidator],
        allocation: ContractAllocation,
    ) -> GenesisResult<ChainConfiguration> {
        let alloc = self.merge_balances(params, inputs, validators, allocation.allocations);

        let bootnodes = if params.bootnodes.is_empty() {
            warn!(
                count = validators.len(),
                "No bootnodes supplied, using validator multiaddresses"
            );
            validators.iter().map(|v| v.multi_addr.clone()).collect()
        } else {
            params.bootnodes.clone()
        };

        let mut forks = ForkSet::all_enabled();
        if !inputs.is_burn_contract_enabled() {
            debug!("No burn contract configured, london fork disabled");
            forks.remove(Fork::London);
        }

        let (burn_contract, burn_contract_destination_address) = burn_contract_params(inputs);

        let (base_fee, base_fee_em, base_fee_change_denom) = match inputs.burn_contract {
            Some(_) => (
                inputs.base_fee.base_fee,
                inputs.base_fee.elasticity_multiplier,
                inputs.base_fee.change_denominator,
            ),
            None => (0, 0, 0),
        };

        let lists = &inputs.access_lists;
        let chain_params = ChainParams {
            chain_id: params.chain_id,
            forks,
            engine: EngineConfig {
                polybft: self.polybft_config(params, inputs, validators),
            },
            burn_contract,
            burn_contract_destination_address,
            base_fee_em,
            base_fee_change_denom,
            contract_deployer_allow_list: lists.contract_deployer_allow.to_config(),
            contract_deployer_block_list: lists.contract_deployer_block.to_config(),
            transactions_allow_list: lists.transactions_allow.to_config(),
            transactions_block_list: lists.transactions_block.to_config(),
            bridge_allow_list: lists.bridge_allow.to_config(),
            bridge_block_list: lists.bridge_block.to_config(),
        };

        let genesis = GenesisBlock {
            gas_limit: params.block_gas_limit,
            difficulty: 0,
            alloc,
            extra_data: genesis_extra_data(validators)?,
            gas_used: DEFAULT_GENESIS_GAS_USED,
            mix_hash: POLYBFT_MIX_DIGEST,
            base_fee,
        };

        Ok(ChainConfiguration {
            name: params.name.clone(),
            genesis,
            params: chain_params,
            bootnodes,
        })
    }

    fn merge_balances(
        &self,
        params: &GenesisParams,
        inputs: &GenesisInputs,
        validators: &[GenesisValidator],
        mut alloc: BTreeMap<Address, GenesisAccount>,
    ) -> BTreeMap<Address, GenesisAccount> {
        let contracts: Vec<Address> = alloc.keys().copied().collect();
        let is_contract = |address: &Address| contracts.binary_search(address).is_ok();

        for info in &inputs.premine {
            if is_contract(&info.address) {
                warn!(address = ?info.address, "Premine ignored for contract address");
                continue;
            }
            alloc.insert(info.address, GenesisAccount::premine(info.amount));
        }

        if !inputs.has_reward_token_code() && params.epoch_reward > 0 && inputs.is_mintable() {
            let wallet = inputs.reward_wallet;
            if !is_contract(&wallet.address) {
                alloc
                    .entry(wallet.address)
                    .or_insert_with(|| GenesisAccount::premine(wallet.amount));
            }
        }

        if inputs.is_mintable() {
            for validator in validators {
                alloc
                    .entry(validator.address)
                    .or_insert_with(|| GenesisAccount::premine(default_premine_balance()));
            }
        }

        alloc
    }

    fn polybft_config(
        &self,
        params: &GenesisParams,
        inputs: &GenesisInputs,
        validators: &[GenesisValidator],
    ) -> PolyBftConfig {
        let reward_token = if inputs.has_reward_token_code() {
            addresses::REWARD_TOKEN
        } else {
            addresses::NATIVE_ERC20_TOKEN
        };

        PolyBftConfig {
            initial_validator_set: validators.to_vec(),
            block_time: params.block_time,
            epoch_size: params.epoch_size,
            sprint_size: params.sprint_size,
            epoch_reward: params.epoch_reward,
            governance: ZERO_ADDRESS,
            initial_trie_root: inputs.initial_trie_root,
            native_token_config: inputs.native_token.clone(),
            min_validator_set_size: params.min_validators,
            max_validator_set_size: params.max_validators,
            checkpoint_interval: params.checkpoint_interval,
            withdrawal_wait_period: params.withdrawal_wait_period,
            reward_config: RewardsConfig {
                token_address: reward_token,
                wallet_address: inputs.reward_wallet.address,
                wallet_amount: inputs.reward_wallet.amount,
            },
            block_time_drift: params.block_time_drift,
            block_tracker_poll_interval: params.block_tracker_poll_interval,
            proxy_contracts_admin: inputs.proxy_contracts_admin,
            blade_admin: inputs.blade_admin,
            governance_config: GovernanceConfig {
                voting_delay: inputs.governance.voting_delay,
                voting_period: inputs.governance.voting_period,
                proposal_threshold: inputs.governance.proposal_threshold,
                proposal_quorum_percentage: inputs.governance.proposal_quorum,
                child_governor_addr: addresses::CHILD_GOVERNOR,
                child_timelock_addr: addresses::CHILD_TIMELOCK,
                network_params_addr: addresses::NETWORK_PARAMS,
                fork_params_addr: addresses::FORK_PARAMS,
            },
            stake_token_addr: inputs.stake_token,
        }
    }
}

/// Burnt fees go to the operator contract on a bridged token and to the
/// zero address on a mintable one.
fn burn_contract_params(inputs: &GenesisInputs) -> (BTreeMap<u64, Address>, Option<Address>) {
    let Some(burn) = inputs.burn_contract else {
        return (BTreeMap::new(), None);
    };

    if inputs.is_mintable() {
        (BTreeMap::from([(burn.block_number, ZERO_ADDRESS)]), None)
    } else {
        (
            BTreeMap::from([(burn.block_number, burn.address)]),
            Some(burn.destination),
        )
    }
}
