//! JSON genesis writer.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::{ChainConfiguration, GenesisError, GenesisResult};
use crate::ports::GenesisWriter;

/// Serialize a chain configuration the way it is written to disk.
pub fn to_genesis_json(chain: &ChainConfiguration) -> GenesisResult<Vec<u8>> {
    let mut bytes = serde_json::to_vec_pretty(chain)?;
    bytes.push(b'\n');
    Ok(bytes)
}

/// Writes the record as pretty JSON, atomically.
///
/// The bytes go to a sibling temp file which is fsynced and then renamed
/// over the target, so a crash never leaves a half-written genesis file.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonGenesisWriter;

impl JsonGenesisWriter {
    pub fn new() -> Self {
        Self
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

fn write_synced(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(bytes)?;
    file.sync_all()
}

impl GenesisWriter for JsonGenesisWriter {
    fn write(&self, chain: &ChainConfiguration, path: &Path) -> GenesisResult<()> {
        let bytes = to_genesis_json(chain)?;
        let io_err = |source: std::io::Error| GenesisError::Write {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(io_err)?;
            }
        }

        let temp = temp_path(path);
        if let Err(source) = write_synced(&temp, &bytes).and_then(|()| fs::rename(&temp, path)) {
            let _ = fs::remove_file(&temp);
            return Err(io_err(source));
        }

        debug!(path = %path.display(), bytes = bytes.len(), "Genesis written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::sample_chain;

    #[test]
    fn test_write_creates_file_without_leftover_temp() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("genesis.json");

        JsonGenesisWriter::new().write(&sample_chain(), &path).unwrap();

        let written: ChainConfiguration =
            serde_json::from_slice(&fs::read(&path).unwrap()).unwrap();
        assert_eq!(written, sample_chain());
        assert!(!temp_path(&path).exists());
    }

    #[test]
    fn test_write_replaces_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("genesis.json");
        fs::write(&path, b"stale").unwrap();

        JsonGenesisWriter::new().write(&sample_chain(), &path).unwrap();
        assert_eq!(fs::read(&path).unwrap(), to_genesis_json(&sample_chain()).unwrap());
    }

    #[test]
    fn test_write_into_missing_parent_that_is_a_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, b"").unwrap();

        let err = JsonGenesisWriter::new()
            .write(&sample_chain(), &blocker.join("genesis.json"))
            .unwrap_err();
        assert!(matches!(err, GenesisError::Write { .. }));
    }

    #[test]
    fn test_temp_path_is_sibling() {
        assert_eq!(
            temp_path(Path::new("/chain/genesis.json")),
            PathBuf::from("/chain/genesis.json.tmp")
        );
    }
}
