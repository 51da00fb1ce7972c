//! Subcommand handlers.

pub mod genesis;
pub mod version;
