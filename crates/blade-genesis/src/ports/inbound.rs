//! # Driving Ports (API - Inbound)
//!
//! The public API of the genesis compiler. The CLI `genesis` command is the
//! only driver today.

use shared_types::Hash;

use crate::domain::{
    render_validator_listing, ChainConfiguration, GenesisParams, GenesisResult, GenesisValidator,
};

/// Result of one compilation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledGenesis {
    /// The complete chain-initialization record.
    pub chain: ChainConfiguration,
    /// Resolved validators, in genesis order.
    pub validators: Vec<GenesisValidator>,
    /// Keccak-256 of the serialized record.
    pub digest: Hash,
}

impl CompiledGenesis {
    /// The `[GENESIS VALIDATORS]` section shown to the operator.
    pub fn validator_listing(&self) -> String {
        render_validator_listing(&self.validators)
    }
}

/// Genesis compiler API.
pub trait GenesisCompilerApi {
    /// Validate `params` and build the record. Nothing is written.
    fn compile(&self, params: &GenesisParams) -> GenesisResult<CompiledGenesis>;

    /// Compile, then persist the record at `params.genesis_path`.
    ///
    /// On any error no file is produced.
    fn compile_and_write(&self, params: &GenesisParams) -> GenesisResult<CompiledGenesis>;
}
