//! # Domain Layer (Inner Hexagon)
//!
//! Pure genesis entities: raw parameters, validated inputs, the contract
//! registry and the chain configuration record.
//! NO I/O. Filesystem access lives behind the ports.

pub mod chain;
pub mod contracts;
pub mod error;
pub mod inputs;
pub mod params;
pub mod token;
pub mod validator;

pub use chain::*;
pub use contracts::*;
pub use error::*;
pub use inputs::*;
pub use params::*;
pub use token::*;
pub use validator::*;
