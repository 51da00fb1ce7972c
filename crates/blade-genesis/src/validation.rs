//! # Parameter Validation
//!
//! Checks each configuration axis of `GenesisParams` independently against
//! the mintability-dependent policy and produces the immutable
//! `GenesisInputs` every later step consumes.
//!
//! Checks run in a fixed order and the first failure wins, so an operator
//! always sees the same error for the same input.

use std::collections::BTreeMap;

use shared_types::{
    parse_address, parse_hex_bytes, parse_uint256_or_hex, strip_hex_prefix, Address, Hash,
    ParseError, PremineInfo, SYSTEM_CALLER, U256, ZERO_ADDRESS,
};
use tracing::debug;

use crate::domain::{
    default_premine_balance, default_stake, policy, AccessListInputs, AccessListParams,
    AccessLists, BaseFeeConfig, BurnContractInfo, GenesisError, GenesisInputs, GenesisParams,
    GenesisResult, GovernanceInputs, NativeTokenConfig, ReservedAddress,
};

/// Upper bound of the proposal quorum percentage.
pub const PROPOSAL_QUORUM_MAX: u64 = 100;

/// Validate every raw parameter and build the inputs for compilation.
pub fn validate_params(params: &GenesisParams) -> GenesisResult<GenesisInputs> {
    let native_token = NativeTokenConfig::parse(&params.native_token_config)?;
    debug!(
        name = %native_token.name,
        symbol = %native_token.symbol,
        mintable = native_token.is_mintable,
        "Native token config parsed"
    );

    let reward_wallet = validate_reward_wallet(&params.reward_wallet, params.epoch_reward)?;
    let reward_token_code = validate_reward_token_code(&params.reward_token_code)?;
    let proxy_contracts_admin =
        validate_admin("proxy-contracts-admin", &params.proxy_contracts_admin)?;
    let blade_admin = validate_admin("blade-admin", &params.blade_admin)?;
    let premine = validate_premine(&params.premine, &native_token)?;
    let burn_contract = validate_burn_contract(&params.burn_contract, &native_token)?;
    let stake = validate_stake(&params.stake, &native_token)?;
    let base_fee = BaseFeeConfig::parse(&params.base_fee_config)?;
    let governance = validate_governance(params)?;
    let access_lists = validate_access_lists(params)?;
    let stake_token = validate_stake_token(&params.stake_token)?;
    let initial_trie_root = parse_state_root(&params.initial_state_root)?;

    Ok(GenesisInputs {
        native_token,
        reward_wallet,
        reward_token_code,
        premine,
        stake,
        burn_contract,
        base_fee,
        proxy_contracts_admin,
        blade_admin,
        governance,
        access_lists,
        stake_token,
        initial_trie_root,
    })
}

/// Reward wallet: required, not the zero address, positive amount when
/// epoch rewards are enabled.
pub fn validate_reward_wallet(raw: &str, epoch_reward: u64) -> GenesisResult<PremineInfo> {
    const FIELD: &str = "reward-wallet";

    if raw.trim().is_empty() {
        return Err(GenesisError::MissingField { field: FIELD });
    }

    let wallet = PremineInfo::parse(raw, default_premine_balance())
        .map_err(|e| GenesisError::invalid(FIELD, raw, e))?;

    if wallet.address == ZERO_ADDRESS {
        return Err(GenesisError::ReservedAddressConflict {
            field: FIELD,
            reserved: ReservedAddress::Zero,
        });
    }

    if epoch_reward > 0 && wallet.amount.is_zero() {
        return Err(GenesisError::policy(FIELD, policy::REWARD_WALLET_AMOUNT_ZERO));
    }

    Ok(wallet)
}

/// Optional externally compiled reward token bytecode.
pub fn validate_reward_token_code(raw: &str) -> GenesisResult<Option<shared_types::Bytes>> {
    if raw.trim().is_empty() {
        return Ok(None);
    }

    parse_hex_bytes(raw)
        .map(Some)
        .map_err(|e| GenesisError::invalid("reward-token-code", raw, e))
}

/// Proxy-contracts admin and blade admin share one rule set.
pub fn validate_admin(field: &'static str, raw: &str) -> GenesisResult<Address> {
    if raw.trim().is_empty() {
        return Err(GenesisError::MissingField { field });
    }

    let address = parse_address(raw).map_err(|e| GenesisError::invalid(field, raw, e))?;

    if address == ZERO_ADDRESS {
        return Err(GenesisError::ReservedAddressConflict {
            field,
            reserved: ReservedAddress::Zero,
        });
    }
    if address == SYSTEM_CALLER {
        return Err(GenesisError::ReservedAddressConflict {
            field,
            reserved: ReservedAddress::SystemCaller,
        });
    }

    Ok(address)
}

/// Premine must include the reserve account; a non-mintable token allows
/// nothing else.
pub fn validate_premine(
    raw: &[String],
    native_token: &NativeTokenConfig,
) -> GenesisResult<Vec<PremineInfo>> {
    const FIELD: &str = "premine";

    let mut premine = Vec::with_capacity(raw.len());
    let mut reserve_premined = false;

    for entry in raw {
        let info = PremineInfo::parse(entry, default_premine_balance())
            .map_err(|e| GenesisError::invalid(FIELD, entry.as_str(), e))?;

        if info.address == ZERO_ADDRESS {
            reserve_premined = true;
        } else if !native_token.is_mintable {
            return Err(GenesisError::policy(FIELD, policy::NO_PREMINE_ALLOWED));
        }

        premine.push(info);
    }

    if !reserve_premined {
        return Err(GenesisError::policy(FIELD, policy::RESERVE_NOT_PREMINED));
    }

    Ok(premine)
}

/// Burn destination must be zero for a mintable token and non-zero otherwise.
/// A non-mintable token also needs a non-zero contract address, since the
/// zero address holds the reserve premine.
pub fn validate_burn_contract(
    raw: &str,
    native_token: &NativeTokenConfig,
) -> GenesisResult<Option<BurnContractInfo>> {
    const FIELD: &str = "burn-contract";

    if raw.trim().is_empty() {
        return Ok(None);
    }

    let info = BurnContractInfo::parse(raw)?;

    if native_token.is_mintable {
        if !info.destination.is_zero() {
            return Err(GenesisError::policy(FIELD, policy::BURN_DESTINATION_MUST_BE_ZERO));
        }
    } else if info.address.is_zero() {
        return Err(GenesisError::policy(FIELD, policy::BURN_CONTRACT_ZERO_ADDRESS));
    } else if info.destination.is_zero() {
        return Err(GenesisError::policy(
            FIELD,
            policy::BURN_DESTINATION_MUST_NOT_BE_ZERO,
        ));
    }

    Ok(Some(info))
}

/// Stake entries; a later duplicate overwrites an earlier one.
pub fn validate_stake(
    raw: &[String],
    native_token: &NativeTokenConfig,
) -> GenesisResult<BTreeMap<Address, U256>> {
    const FIELD: &str = "stake";

    if !native_token.is_mintable && !raw.is_empty() {
        return Err(GenesisError::policy(FIELD, policy::NO_STAKE_ALLOWED));
    }

    let mut stake = BTreeMap::new();
    for entry in raw {
        let info = PremineInfo::parse(entry, default_stake())
            .map_err(|e| GenesisError::invalid(FIELD, entry.as_str(), e))?;
        stake.insert(info.address, info.amount);
    }

    Ok(stake)
}

/// Governance big integers; the quorum is clamped rather than rejected.
pub fn validate_governance(params: &GenesisParams) -> GenesisResult<GovernanceInputs> {
    let voting_delay = parse_uint256_or_hex(&params.vote_delay)
        .map_err(|e| GenesisError::invalid("vote-delay", params.vote_delay.as_str(), e))?;
    let voting_period = parse_uint256_or_hex(&params.vote_period)
        .map_err(|e| GenesisError::invalid("vote-period", params.vote_period.as_str(), e))?;
    if voting_period.is_zero() {
        return Err(GenesisError::malformed(
            "vote-period",
            params.vote_period.as_str(),
            "voting period can not be zero",
        ));
    }
    let proposal_threshold = parse_uint256_or_hex(&params.vote_proposal_threshold).map_err(|e| {
        GenesisError::invalid(
            "vote-proposal-threshold",
            params.vote_proposal_threshold.as_str(),
            e,
        )
    })?;

    Ok(GovernanceInputs {
        voting_delay,
        voting_period,
        proposal_threshold,
        proposal_quorum: params.proposal_quorum.min(PROPOSAL_QUORUM_MAX),
    })
}

/// Parse all six allow/block lists.
pub fn validate_access_lists(params: &GenesisParams) -> GenesisResult<AccessLists> {
    Ok(AccessLists {
        contract_deployer_allow: parse_access_list(
            "contract-deployer-allow-list",
            &params.contract_deployer_allow_list,
        )?,
        contract_deployer_block: parse_access_list(
            "contract-deployer-block-list",
            &params.contract_deployer_block_list,
        )?,
        transactions_allow: parse_access_list(
            "transactions-allow-list",
            &params.transactions_allow_list,
        )?,
        transactions_block: parse_access_list(
            "transactions-block-list",
            &params.transactions_block_list,
        )?,
        bridge_allow: parse_access_list("bridge-allow-list", &params.bridge_allow_list)?,
        bridge_block: parse_access_list("bridge-block-list", &params.bridge_block_list)?,
    })
}

fn parse_access_list(
    field: &'static str,
    raw: &AccessListParams,
) -> GenesisResult<AccessListInputs> {
    let parse_all = |entries: &[String]| -> GenesisResult<Vec<Address>> {
        entries
            .iter()
            .map(|s| parse_address(s).map_err(|e| GenesisError::invalid(field, s.as_str(), e)))
            .collect()
    };

    Ok(AccessListInputs {
        admin: parse_all(&raw.admin)?,
        enabled: parse_all(&raw.enabled)?,
    })
}

pub fn validate_stake_token(raw: &str) -> GenesisResult<Address> {
    const FIELD: &str = "stake-token";

    if raw.trim().is_empty() {
        return Err(GenesisError::MissingField { field: FIELD });
    }
    parse_address(raw).map_err(|e| GenesisError::invalid(FIELD, raw, e))
}

fn parse_state_root(raw: &str) -> GenesisResult<Hash> {
    const FIELD: &str = "initial-state-root";

    let digits = strip_hex_prefix(raw.trim());
    if digits.len() != 64 {
        return Err(GenesisError::invalid(
            FIELD,
            raw,
            ParseError::InvalidLength {
                expected: 64,
                actual: digits.len(),
            },
        ));
    }

    let bytes = hex::decode(digits)
        .map_err(|e| GenesisError::invalid(FIELD, raw, ParseError::InvalidHex(e.to_string())))?;
    Ok(Hash::from_slice(&bytes))
}
