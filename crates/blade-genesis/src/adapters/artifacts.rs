//! Contract artifact providers.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use shared_types::{parse_hex_bytes, Bytes};

use crate::domain::{Artifact, GenesisError, GenesisResult};
use crate::ports::ArtifactProvider;

/// File extension of on-disk artifacts.
pub const ARTIFACT_EXTENSION: &str = "hex";

/// In-memory artifact table.
#[derive(Debug, Clone, Default)]
pub struct StaticArtifactProvider {
    artifacts: BTreeMap<Artifact, Bytes>,
}

impl StaticArtifactProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, artifact: Artifact, code: Bytes) -> Self {
        self.insert(artifact, code);
        self
    }

    pub fn insert(&mut self, artifact: Artifact, code: Bytes) {
        self.artifacts.insert(artifact, code);
    }

    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }
}

impl ArtifactProvider for StaticArtifactProvider {
    fn deployed_bytecode(&self, artifact: Artifact) -> GenesisResult<Bytes> {
        self.artifacts
            .get(&artifact)
            .cloned()
            .ok_or_else(|| GenesisError::Artifact {
                name: artifact.name(),
                reason: "not registered".to_string(),
            })
    }
}

/// Reads `<dir>/<ArtifactName>.hex`, each holding hex-encoded deployed
/// bytecode (optional `0x`, surrounding whitespace ignored).
#[derive(Debug, Clone)]
pub struct DirectoryArtifactProvider {
    dir: PathBuf,
}

impl DirectoryArtifactProvider {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn artifact_path(&self, artifact: Artifact) -> PathBuf {
        self.dir
            .join(artifact.name())
            .with_extension(ARTIFACT_EXTENSION)
    }
}

impl ArtifactProvider for DirectoryArtifactProvider {
    fn deployed_bytecode(&self, artifact: Artifact) -> GenesisResult<Bytes> {
        let path = self.artifact_path(artifact);
        let raw = fs::read_to_string(&path).map_err(|e| GenesisError::Artifact {
            name: artifact.name(),
            reason: format!("{}: {e}", path.display()),
        })?;

        let code = parse_hex_bytes(&raw).map_err(|e| GenesisError::Artifact {
            name: artifact.name(),
            reason: e.to_string(),
        })?;

        if code.is_empty() {
            return Err(GenesisError::Artifact {
                name: artifact.name(),
                reason: "empty bytecode".to_string(),
            });
        }

        Ok(code)
    }
}
