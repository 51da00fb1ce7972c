//! # Integration Tests
//!
//! Every test drives the full compiler through `GenesisCompilerApi`, with
//! placeholder artifacts and in-memory collaborators from
//! `blade_genesis::test_utils`.

use blade_genesis::domain::GenesisAccount;
use blade_genesis::test_utils::{sample_keys, sample_params, SAMPLE_BLS_KEY};
use blade_genesis::{ChainConfiguration, GenesisParams};
use shared_types::{Address, ZERO_ADDRESS};

pub mod properties;
pub mod scenarios;

/// Native token config string for the given mintability.
pub fn native_token(mintable: bool) -> String {
    format!("Blade:BLADE:18:{mintable}")
}

/// Explicit validator descriptor for sample validator `index`.
pub fn validator_descriptor(index: usize) -> String {
    let keys = sample_keys(index);
    format!("{}:{:?}:{}", keys.multi_addr, keys.address, SAMPLE_BLS_KEY)
}

/// `<reserve>:<amount>` premine entry.
pub fn reserve_premine(amount: u64) -> String {
    format!("{ZERO_ADDRESS:?}:{amount}")
}

/// Parameters that compile with a non-mintable token.
pub fn non_mintable_params() -> GenesisParams {
    GenesisParams {
        native_token_config: native_token(false),
        premine: vec![reserve_premine(1000)],
        ..sample_params()
    }
}

/// Addresses whose final balance is non-zero.
pub fn funded_addresses(chain: &ChainConfiguration) -> Vec<Address> {
    chain
        .genesis
        .alloc
        .iter()
        .filter(|(_, account)| !account.balance.is_zero())
        .map(|(address, _)| *address)
        .collect()
}

pub fn account<'a>(chain: &'a ChainConfiguration, address: &Address) -> &'a GenesisAccount {
    match chain.genesis.alloc.get(address) {
        Some(account) => account,
        None => panic!("no account at {address:?}"),
    }
}
