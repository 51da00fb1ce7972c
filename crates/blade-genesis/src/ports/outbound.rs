//! # Driven Ports (SPI - Outbound)
//!
//! Collaborators the compiler depends on. Adapters in `crate::adapters`
//! implement these; tests substitute in-memory fakes.
//!
//! - Contract bytecode by artifact name
//! - Multiaddress syntax validation
//! - Validator key-store directory reading
//! - Persisting the finished record

use std::path::Path;

use shared_types::Bytes;

use crate::domain::{Artifact, ChainConfiguration, GenesisResult, ValidatorKeys};

// =============================================================================
// CONTRACT ARTIFACTS
// =============================================================================

/// Source of precompiled contract bytecode.
pub trait ArtifactProvider {
    /// Deployed (runtime) bytecode of `artifact`.
    ///
    /// Returns `GenesisError::Artifact` when the artifact is unknown.
    fn deployed_bytecode(&self, artifact: Artifact) -> GenesisResult<Bytes>;
}

// =============================================================================
// VALIDATOR DISCOVERY
// =============================================================================

/// Syntax check for p2p multiaddresses.
pub trait MultiaddrValidator {
    /// `Err` carries a human-readable reason.
    fn validate(&self, multiaddr: &str) -> Result<(), String>;
}

/// Reader over a directory of locally generated validator secrets.
pub trait ValidatorKeyStore {
    /// Validators whose directory name starts with `prefix`.
    ///
    /// Implementations must return them in a deterministic order.
    fn read_validators(&self, dir: &Path, prefix: &str) -> GenesisResult<Vec<ValidatorKeys>>;
}

// =============================================================================
// PERSISTENCE
// =============================================================================

/// Persists a compiled chain configuration.
pub trait GenesisWriter {
    /// Write `chain` to `path`. Either the full record lands or nothing does.
    fn write(&self, chain: &ChainConfiguration, path: &Path) -> GenesisResult<()>;
}
