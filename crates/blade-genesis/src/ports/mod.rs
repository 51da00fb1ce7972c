//! # Ports Layer (Middle Hexagon)
//!
//! Trait definitions for the genesis compiler.
//!
//! - **Driving Ports (Inbound)**: `GenesisCompilerApi`
//! - **Driven Ports (Outbound)**: `ArtifactProvider`, `MultiaddrValidator`,
//!   `ValidatorKeyStore`, `GenesisWriter`
//! - No concrete implementations in this module

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
