//! # Validator Set Resolution
//!
//! Builds the ordered initial validator set from either explicit
//! `<multiaddr>:<ecdsaAddress>:<blsKey>` descriptors or a key-store directory
//! scan. The two modes are mutually exclusive: descriptors win when present.
//!
//! Order feeds bootnode assignment and the genesis extra data, so it is
//! always deterministic: input order for descriptors, the key store's
//! enumeration order otherwise.

use shared_types::{parse_address, strip_hex_prefix, Address, U256};
use tracing::debug;

use crate::domain::{
    default_stake, is_native_stake_token, GenesisError, GenesisInputs, GenesisParams,
    GenesisResult, GenesisValidator, ValidatorKeys, BLS_KEY_LENGTH, ECDSA_ADDRESS_LENGTH,
};
use crate::ports::{MultiaddrValidator, ValidatorKeyStore};

const FIELD: &str = "validators";

/// Stake of one validator.
///
/// Zero only when validators stake with the native token and that token is
/// bridged (non-mintable); stake then lives on the root chain. Otherwise the
/// explicit stake entry, falling back to `default_stake()`.
pub fn resolve_stake(inputs: &GenesisInputs, address: &Address) -> U256 {
    if is_native_stake_token(&inputs.stake_token) && !inputs.is_mintable() {
        return U256::zero();
    }

    inputs
        .stake
        .get(address)
        .copied()
        .unwrap_or_else(default_stake)
}

/// Parse one explicit validator descriptor.
pub fn parse_validator_descriptor<M: MultiaddrValidator>(
    raw: &str,
    multiaddr: &M,
) -> GenesisResult<ValidatorKeys> {
    let parts: Vec<&str> = raw.split(':').collect();
    if parts.len() != 3 {
        return Err(GenesisError::malformed(
            FIELD,
            raw,
            format!(
                "expected 3 parts in the format <P2P multi address:ECDSA address:public BLS key>, got {}",
                parts.len()
            ),
        ));
    }

    multiaddr.validate(parts[0]).map_err(|reason| {
        GenesisError::malformed(FIELD, raw, format!("invalid P2P multi address '{}': {reason}", parts[0]))
    })?;

    let address_hex = strip_hex_prefix(parts[1]);
    if address_hex.len() != ECDSA_ADDRESS_LENGTH {
        return Err(GenesisError::malformed(
            FIELD,
            raw,
            format!("invalid ECDSA address: {}", parts[1]),
        ));
    }
    let address = parse_address(address_hex).map_err(|e| GenesisError::invalid(FIELD, raw, e))?;

    let bls_key = strip_hex_prefix(parts[2]);
    if bls_key.len() != BLS_KEY_LENGTH || hex::decode(bls_key).is_err() {
        return Err(GenesisError::malformed(
            FIELD,
            raw,
            format!("invalid BLS key: {}", parts[2]),
        ));
    }

    Ok(ValidatorKeys {
        multi_addr: parts[0].to_string(),
        address,
        bls_key: bls_key.to_lowercase(),
    })
}

/// ValidatorSetResolver
pub struct ValidatorSetResolver<'a, M, K> {
    multiaddr: &'a M,
    key_store: &'a K,
}

impl<'a, M: MultiaddrValidator, K: ValidatorKeyStore> ValidatorSetResolver<'a, M, K> {
    pub fn new(multiaddr: &'a M, key_store: &'a K) -> Self {
        Self {
            multiaddr,
            key_store,
        }
    }

    /// Resolve the initial validator set.
    ///
    /// Fails with `EmptyResult` when neither mode yields a validator.
    pub fn resolve(
        &self,
        params: &GenesisParams,
        inputs: &GenesisInputs,
    ) -> GenesisResult<Vec<GenesisValidator>> {
        let keys = if params.validators.is_empty() {
            let dir = params.validators_dir();
            debug!(dir = %dir.display(), prefix = %params.validators_prefix, "Scanning validator key store");
            self.key_store
                .read_validators(&dir, &params.validators_prefix)?
        } else {
            params
                .validators
                .iter()
                .map(|raw| parse_validator_descriptor(raw, self.multiaddr))
                .collect::<GenesisResult<Vec<_>>>()?
        };

        if keys.is_empty() {
            return Err(GenesisError::EmptyResult { what: FIELD });
        }

        let validators: Vec<GenesisValidator> = keys
            .into_iter()
            .map(|k| {
                let stake = resolve_stake(inputs, &k.address);
                GenesisValidator::new(k, stake)
            })
            .collect();

        debug!(count = validators.len(), "Validator set resolved");
        Ok(validators)
    }
}
