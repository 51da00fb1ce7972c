//! `blade version`

use serde::Serialize;

use crate::output::OutputFormat;

#[derive(Debug, Serialize)]
pub struct VersionInfo {
    pub name: &'static str,
    pub version: &'static str,
}

impl VersionInfo {
    pub fn current() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

pub fn run(format: OutputFormat) -> anyhow::Result<String> {
    format.render(&VersionInfo::current(), |info| {
        format!("{} {}\n", info.name, info.version)
    })
}
