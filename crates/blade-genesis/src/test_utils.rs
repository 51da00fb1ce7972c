//! Test utilities for the genesis compiler.
//!
//! In-memory fakes for every outbound port plus sample inputs that compile
//! cleanly. Enable with the `test-utils` feature flag.

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use shared_types::{Address, Bytes, Hash, PremineInfo, H160, U256, ZERO_ADDRESS};

use crate::adapters::BasicMultiaddrValidator;
use crate::domain::{
    addresses, AccessLists, Artifact, BaseFeeConfig, ChainConfiguration, GenesisInputs,
    GenesisParams, GenesisResult, GenesisValidator, GovernanceInputs, NativeTokenConfig,
    ValidatorKeys, DEFAULT_PROPOSAL_QUORUM,
};
use crate::ports::{ArtifactProvider, GenesisCompilerApi, GenesisWriter, ValidatorKeyStore};
use crate::service::GenesisCompiler;
use crate::validators::resolve_stake;

/// A well-formed 128-byte BLS public key, hex without `0x`.
pub const SAMPLE_BLS_KEY: &str = "6e340b9cffb37a989ca544e6bb780a2c78901d3fb33738768511a30617afa01d\
4bf5122f344554c53bde2ebb8cd2b7e3d1600ad631c385a5d7cce23c7785459a\
dbc1b4c900ffe48d575b5da5c638040125f65db0fe3e24494b76ea986457d986\
084fed08b978af4d7d196a7446a86b58009e636b611db16211b65a9aadff29c5";

pub const SAMPLE_REWARD_WALLET: Address = H160([0x55; 20]);
pub const SAMPLE_PROXY_ADMIN: Address = H160([0x0a; 20]);
pub const SAMPLE_BLADE_ADMIN: Address = H160([0x0b; 20]);

/// Distinct, recognizable bytecode for `artifact`.
pub fn placeholder_bytecode(artifact: Artifact) -> Bytes {
    let mut code = vec![0x60, 0x80];
    code.extend_from_slice(artifact.name().as_bytes());
    Bytes::new(code)
}

/// Serves `placeholder_bytecode` for every artifact.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlaceholderArtifacts;

impl ArtifactProvider for PlaceholderArtifacts {
    fn deployed_bytecode(&self, artifact: Artifact) -> GenesisResult<Bytes> {
        Ok(placeholder_bytecode(artifact))
    }
}

/// Validator `index` of the sample set.
pub fn sample_keys(index: usize) -> ValidatorKeys {
    ValidatorKeys {
        multi_addr: format!("/ip4/127.0.0.1/tcp/{}/p2p/16Uiu2HAmSample{index}", 30301 + index),
        address: Address::from_low_u64_be(0xa000 + index as u64),
        bls_key: SAMPLE_BLS_KEY.to_string(),
    }
}

/// Key store returning a fixed list regardless of directory and prefix.
#[derive(Debug, Default, Clone)]
pub struct FixedKeyStore {
    keys: Vec<ValidatorKeys>,
}

impl FixedKeyStore {
    pub fn with_validators(count: usize) -> Self {
        Self {
            keys: (0..count).map(sample_keys).collect(),
        }
    }
}

impl ValidatorKeyStore for FixedKeyStore {
    fn read_validators(&self, _dir: &Path, _prefix: &str) -> GenesisResult<Vec<ValidatorKeys>> {
        Ok(self.keys.clone())
    }
}

/// Writer that keeps every record in memory.
#[derive(Debug, Default)]
pub struct RecordingWriter {
    written: RefCell<Vec<(ChainConfiguration, PathBuf)>>,
}

impl RecordingWriter {
    pub fn written(&self) -> Vec<(ChainConfiguration, PathBuf)> {
        self.written.borrow().clone()
    }
}

impl GenesisWriter for RecordingWriter {
    fn write(&self, chain: &ChainConfiguration, path: &Path) -> GenesisResult<()> {
        self.written
            .borrow_mut()
            .push((chain.clone(), path.to_path_buf()));
        Ok(())
    }
}

/// Compiler over placeholder artifacts, `validators` fixed key-store
/// entries and an in-memory writer.
pub fn test_compiler(
    validators: usize,
) -> GenesisCompiler<PlaceholderArtifacts, BasicMultiaddrValidator, FixedKeyStore, RecordingWriter>
{
    GenesisCompiler::new(
        PlaceholderArtifacts,
        BasicMultiaddrValidator,
        FixedKeyStore::with_validators(validators),
        RecordingWriter::default(),
    )
}

/// Parameters that compile with a mintable token and the reserve premined.
pub fn sample_params() -> GenesisParams {
    GenesisParams {
        reward_wallet: format!("{SAMPLE_REWARD_WALLET:?}:1000"),
        proxy_contracts_admin: format!("{SAMPLE_PROXY_ADMIN:?}"),
        blade_admin: format!("{SAMPLE_BLADE_ADMIN:?}"),
        premine: vec![format!("{ZERO_ADDRESS:?}:1000")],
        ..Default::default()
    }
}

/// Validated inputs equivalent to `sample_params` with the given mintability.
pub fn sample_inputs(mintable: bool) -> GenesisInputs {
    GenesisInputs {
        native_token: NativeTokenConfig {
            name: "Blade".to_string(),
            symbol: "BLADE".to_string(),
            decimals: 18,
            is_mintable: mintable,
        },
        reward_wallet: PremineInfo {
            address: SAMPLE_REWARD_WALLET,
            amount: U256::from(1000u64),
        },
        reward_token_code: None,
        premine: vec![PremineInfo {
            address: ZERO_ADDRESS,
            amount: U256::from(1000u64),
        }],
        stake: Default::default(),
        burn_contract: None,
        base_fee: BaseFeeConfig {
            base_fee: BaseFeeConfig::DEFAULT_BASE_FEE,
            elasticity_multiplier: BaseFeeConfig::DEFAULT_ELASTICITY_MULTIPLIER,
            change_denominator: BaseFeeConfig::DEFAULT_CHANGE_DENOMINATOR,
        },
        proxy_contracts_admin: SAMPLE_PROXY_ADMIN,
        blade_admin: SAMPLE_BLADE_ADMIN,
        governance: GovernanceInputs {
            voting_delay: U256::from(10u64),
            voting_period: U256::from(10_000u64),
            proposal_threshold: U256::from(1000u64),
            proposal_quorum: DEFAULT_PROPOSAL_QUORUM,
        },
        access_lists: AccessLists::default(),
        stake_token: addresses::NATIVE_ERC20_TOKEN,
        initial_trie_root: Hash::zero(),
    }
}

/// `count` sample validators with stake resolved against `inputs`.
pub fn sample_validators(count: usize, inputs: &GenesisInputs) -> Vec<GenesisValidator> {
    (0..count)
        .map(|i| {
            let keys = sample_keys(i);
            let stake = resolve_stake(inputs, &keys.address);
            GenesisValidator::new(keys, stake)
        })
        .collect()
}

/// A compiled record for writer and serialization tests.
pub fn sample_chain() -> ChainConfiguration {
    match test_compiler(1).compile(&sample_params()) {
        Ok(compiled) => compiled.chain,
        Err(e) => panic!("sample params must compile: {e}"),
    }
}
