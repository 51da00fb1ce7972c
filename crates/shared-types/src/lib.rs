//! # Shared Types Crate
//!
//! Primitive types and parsers shared by the genesis compiler and the CLI.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: `Address`, `Hash`, `U256` and `Bytes` are
//!   defined once here; every crate re-uses them.
//! - **Strict Parsing**: operator strings are parsed exactly; malformed input
//!   is an error, never a default.

pub mod entities;
pub mod errors;
pub mod parsing;

pub use entities::*;
pub use errors::*;
pub use parsing::*;
