//! # Blade Genesis - Chain Configuration Compiler
//!
//! Turns operator inputs into one deterministic chain-initialization record:
//! account balances, predeployed contract bytecode, consensus and governance
//! parameters. Two nodes compiling the same inputs must produce byte-identical
//! records, so every step is total, ordered and validated up front.
//!
//! ## Pipeline
//!
//! | Step | Component | Location |
//! |------|-----------|----------|
//! | 1 | ParameterValidator | `validation.rs` - `validate_params()` |
//! | 2 | ValidatorSetResolver | `validators.rs` |
//! | 3 | ContractAllocationPlanner | `allocation/` |
//! | 4 | GenesisStateAssembler | `assembly.rs` |
//! | 5 | GenesisWriter | `adapters/writer.rs` |
//!
//! ## Invariants
//!
//! | Invariant | Enforcement Location |
//! |-----------|---------------------|
//! | Reserve (zero) account always premined | `validation.rs` - `validate_premine()` |
//! | Non-mintable token premines only the reserve | `validation.rs` - `validate_premine()` |
//! | Admins are neither zero nor the system caller | `validation.rs` - `validate_admin()` |
//! | Burn destination follows mintability | `validation.rs` - `validate_burn_contract()` |
//! | Proxied addresses end with proxy bytecode only | `allocation/mod.rs` - phase 2 |
//! | No address gets two implementation bytecodes | `allocation/mod.rs` - phase 1 |
//! | Contract accounts never overwritten by premine | `assembly.rs` - `merge_balances()` |
//!
//! ## Usage
//!
//! ```rust,ignore
//! use blade_genesis::{DirectoryArtifactProvider, FileGenesisCompiler, GenesisCompilerApi};
//!
//! let compiler = FileGenesisCompiler::with_file_adapters(DirectoryArtifactProvider::new("artifacts"));
//! let compiled = compiler.compile_and_write(&params)?;
//! println!("{}", compiled.validator_listing());
//! ```

pub mod adapters;
pub mod allocation;
pub mod assembly;
pub mod domain;
pub mod ports;
pub mod service;
pub mod validation;
pub mod validators;

/// Requires feature: `test-utils`
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

// Re-exports
pub use adapters::{
    BasicMultiaddrValidator, DirectoryArtifactProvider, FileValidatorKeyStore, JsonGenesisWriter,
    StaticArtifactProvider,
};
pub use allocation::{ContractAllocation, ContractAllocationPlanner, RuleSet};
pub use assembly::GenesisStateAssembler;
pub use domain::{
    ChainConfiguration, GenesisError, GenesisParams, GenesisResult, GenesisValidator,
    NativeTokenConfig,
};
pub use ports::{
    ArtifactProvider, CompiledGenesis, GenesisCompilerApi, GenesisWriter, MultiaddrValidator,
    ValidatorKeyStore,
};
pub use service::{record_digest, FileGenesisCompiler, GenesisCompiler};
pub use validation::validate_params;
pub use validators::ValidatorSetResolver;
