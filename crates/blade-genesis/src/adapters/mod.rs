//! # Adapters Layer (Outer Hexagon)
//!
//! Concrete implementations of the outbound ports.
//!
//! | Port | Adapter |
//! |------|---------|
//! | `ArtifactProvider` | `StaticArtifactProvider`, `DirectoryArtifactProvider` |
//! | `MultiaddrValidator` | `BasicMultiaddrValidator` |
//! | `ValidatorKeyStore` | `FileValidatorKeyStore` |
//! | `GenesisWriter` | `JsonGenesisWriter` |

pub mod artifacts;
pub mod keystore;
pub mod multiaddr;
pub mod writer;

pub use artifacts::{DirectoryArtifactProvider, StaticArtifactProvider, ARTIFACT_EXTENSION};
pub use keystore::{FileValidatorKeyStore, BOOTNODE_PORT_START, VALIDATOR_KEY_FILE};
pub use multiaddr::BasicMultiaddrValidator;
pub use writer::{to_genesis_json, JsonGenesisWriter};
