//! Error types for the genesis compiler
//!
//! Every failure is terminal for the invocation: the first error aborts
//! compilation and nothing is written.

use std::fmt;
use std::path::PathBuf;

use shared_types::{Address, ParseError};

/// Reserved addresses an operator role may not take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservedAddress {
    /// The reserve account (0x0).
    Zero,
    /// The protocol's system caller.
    SystemCaller,
}

impl fmt::Display for ReservedAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReservedAddress::Zero => write!(f, "zero"),
            ReservedAddress::SystemCaller => write!(f, "system caller"),
        }
    }
}

/// Mintability-dependent policy messages.
pub mod policy {
    pub const NO_PREMINE_ALLOWED: &str =
        "native token is not mintable, so no premine is allowed except for the zero address";
    pub const NO_STAKE_ALLOWED: &str = "native token is not mintable, so staking is done \
         through the premine command on the root chain and can not be defined in genesis";
    pub const RESERVE_NOT_PREMINED: &str = "the reserve account (zero address) must be premined";
    pub const REWARD_WALLET_AMOUNT_ZERO: &str =
        "reward wallet amount must be greater than zero when epoch reward is enabled";
    pub const BURN_DESTINATION_MUST_BE_ZERO: &str =
        "only the zero address is allowed as burn destination for a mintable native token";
    pub const BURN_DESTINATION_MUST_NOT_BE_ZERO: &str =
        "burn destination must not be the zero address for a non-mintable native token";
    pub const BURN_CONTRACT_ZERO_ADDRESS: &str =
        "it is not allowed to deploy burn contract to the zero address";
}

/// Genesis compilation errors.
#[derive(Debug, thiserror::Error)]
pub enum GenesisError {
    #[error("{field} must be set")]
    MissingField { field: &'static str },

    #[error("invalid {field} '{value}': {reason}")]
    InvalidFormat {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("{field}: {reason}")]
    PolicyViolation {
        field: &'static str,
        reason: &'static str,
    },

    #[error("{field} must not be the {reserved} address")]
    ReservedAddressConflict {
        field: &'static str,
        reserved: ReservedAddress,
    },

    #[error("no {what} resolved")]
    EmptyResult { what: &'static str },

    #[error("address {address:?} assigned bytecode by both '{existing}' and '{incoming}'")]
    AllocationConflict {
        address: Address,
        existing: &'static str,
        incoming: &'static str,
    },

    #[error("contract artifact '{name}': {reason}")]
    Artifact { name: &'static str, reason: String },

    #[error("validator key store at {path}: {reason}")]
    KeyStore { path: PathBuf, reason: String },

    #[error("failed to write genesis to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize chain configuration: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl GenesisError {
    /// Build an `InvalidFormat` error from a primitive parse failure.
    pub fn invalid(field: &'static str, value: impl Into<String>, err: ParseError) -> Self {
        GenesisError::InvalidFormat {
            field,
            value: value.into(),
            reason: err.to_string(),
        }
    }

    /// Build an `InvalidFormat` error with a free-form reason.
    pub fn malformed(
        field: &'static str,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        GenesisError::InvalidFormat {
            field,
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Build a `PolicyViolation` error.
    pub fn policy(field: &'static str, reason: &'static str) -> Self {
        GenesisError::PolicyViolation { field, reason }
    }
}

/// Result type for genesis operations
pub type GenesisResult<T> = Result<T, GenesisError>;
