//! # Genesis Compiler Service
//!
//! Runs the single synchronous compilation pass:
//!
//! ```text
//! GenesisParams → validate → resolve validators ─┐
//!                          └→ plan allocations ──┴→ assemble → ChainConfiguration
//! ```
//!
//! and optionally hands the record to the writer. Nothing is written unless
//! every step succeeded.

use sha3::{Digest, Keccak256};
use shared_types::Hash;
use tracing::{debug, info};

use crate::adapters::{
    to_genesis_json, BasicMultiaddrValidator, FileValidatorKeyStore, JsonGenesisWriter,
};
use crate::allocation::ContractAllocationPlanner;
use crate::assembly::GenesisStateAssembler;
use crate::domain::{ChainConfiguration, GenesisParams, GenesisResult};
use crate::ports::{
    ArtifactProvider, CompiledGenesis, GenesisCompilerApi, GenesisWriter, MultiaddrValidator,
    ValidatorKeyStore,
};
use crate::validation::validate_params;
use crate::validators::ValidatorSetResolver;

/// Keccak-256 of the record exactly as it is written to disk.
pub fn record_digest(chain: &ChainConfiguration) -> GenesisResult<Hash> {
    let bytes = to_genesis_json(chain)?;
    Ok(Hash::from_slice(&Keccak256::digest(&bytes)))
}

/// Compiler wired with the file-based adapters.
pub type FileGenesisCompiler<A> =
    GenesisCompiler<A, BasicMultiaddrValidator, FileValidatorKeyStore, JsonGenesisWriter>;

/// The genesis compiler.
pub struct GenesisCompiler<A, M, K, W> {
    artifacts: A,
    multiaddr: M,
    key_store: K,
    writer: W,
}

impl<A: ArtifactProvider> FileGenesisCompiler<A> {
    /// Compiler reading validator keys from disk and writing JSON.
    pub fn with_file_adapters(artifacts: A) -> Self {
        Self::new(
            artifacts,
            BasicMultiaddrValidator,
            FileValidatorKeyStore,
            JsonGenesisWriter,
        )
    }
}

impl<A, M, K, W> GenesisCompiler<A, M, K, W>
where
    A: ArtifactProvider,
    M: MultiaddrValidator,
    K: ValidatorKeyStore,
    W: GenesisWriter,
{
    pub fn new(artifacts: A, multiaddr: M, key_store: K, writer: W) -> Self {
        Self {
            artifacts,
            multiaddr,
            key_store,
            writer,
        }
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }
}

impl<A, M, K, W> GenesisCompilerApi for GenesisCompiler<A, M, K, W>
where
    A: ArtifactProvider,
    M: MultiaddrValidator,
    K: ValidatorKeyStore,
    W: GenesisWriter,
{
    fn compile(&self, params: &GenesisParams) -> GenesisResult<CompiledGenesis> {
        let inputs = validate_params(params)?;
        debug!("Parameters validated");

        let validators =
            ValidatorSetResolver::new(&self.multiaddr, &self.key_store).resolve(params, &inputs)?;

        let allocation = ContractAllocationPlanner::new(&self.artifacts).plan(&inputs)?;
        debug!(
            contracts = allocation.len(),
            proxied = allocation.proxied.len(),
            "Contract allocations planned"
        );

        let chain =
            GenesisStateAssembler::new().assemble(params, &inputs, &validators, allocation)?;
        let digest = record_digest(&chain)?;

        info!(
            chain = %chain.name,
            chain_id = chain.params.chain_id,
            validators = validators.len(),
            accounts = chain.genesis.alloc.len(),
            digest = ?digest,
            "Genesis compiled"
        );

        Ok(CompiledGenesis {
            chain,
            validators,
            digest,
        })
    }

    fn compile_and_write(&self, params: &GenesisParams) -> GenesisResult<CompiledGenesis> {
        let compiled = self.compile(params)?;
        self.writer.write(&compiled.chain, &params.genesis_path)?;

        info!(path = %params.genesis_path.display(), "Genesis written");
        Ok(compiled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::GenesisError;
    use crate::test_utils::{sample_params, test_compiler};

    #[test]
    fn test_compile_and_write_records_once() {
        let compiler = test_compiler(2);
        let compiled = compiler.compile_and_write(&sample_params()).unwrap();

        let written = compiler.writer().written();
        assert_eq!(written.len(), 1);
        assert_eq!(written[0].0, compiled.chain);
        assert_eq!(compiled.validators.len(), 2);
    }

    #[test]
    fn test_failure_writes_nothing() {
        let compiler = test_compiler(2);
        let params = GenesisParams {
            blade_admin: String::new(),
            ..sample_params()
        };

        let err = compiler.compile_and_write(&params).unwrap_err();
        assert!(matches!(err, GenesisError::MissingField { field: "blade-admin" }));
        assert!(compiler.writer().written().is_empty());
    }

    #[test]
    fn test_digest_is_stable() {
        let compiler = test_compiler(3);
        let first = compiler.compile(&sample_params()).unwrap();
        let second = compiler.compile(&sample_params()).unwrap();

        assert_eq!(first.digest, second.digest);
        assert_eq!(first.digest, record_digest(&first.chain).unwrap());
    }

    #[test]
    fn test_listing_covers_validators() {
        let compiled = test_compiler(2).compile(&sample_params()).unwrap();
        let listing = compiled.validator_listing();
        assert_eq!(listing.lines().count(), 3);
    }
}
