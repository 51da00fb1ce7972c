//! # Blade CLI
//!
//! Root command tree of the `blade` binary.
//!
//! | Command | Handler |
//! |---------|---------|
//! | `blade genesis` | `commands::genesis` |
//! | `blade version` | `commands::version` |
//!
//! Every handler returns its rendered output as a string; `main` prints it
//! and maps errors to exit status 1.

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

use commands::genesis::GenesisArgs;
pub use output::OutputFormat;

/// Blade chain tool
#[derive(Parser, Debug)]
#[command(name = "blade")]
#[command(about = "Blade chain command-line tool")]
pub struct Cli {
    /// Print command output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate the genesis configuration file
    Genesis(Box<GenesisArgs>),
    /// Print the client version
    Version,
}

/// Dispatch `cli` and return the rendered command output.
pub fn run(cli: Cli) -> anyhow::Result<String> {
    let format = OutputFormat::from_json_flag(cli.json);
    match cli.command {
        Command::Genesis(args) => commands::genesis::run(*args, format),
        Command::Version => commands::version::run(format),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_flag_is_global() {
        let cli = Cli::try_parse_from(["blade", "version", "--json"]).unwrap();
        assert!(cli.json);
        assert!(matches!(cli.command, Command::Version));
    }

    #[test]
    fn test_unknown_subcommand_rejected() {
        assert!(Cli::try_parse_from(["blade", "bridge"]).is_err());
    }
}
