//! Local validator key-store reader.
//!
//! Layout: one directory per validator, named `<prefix><n>`, each holding a
//! `validator.json` with the public key material:
//!
//! ```json
//! { "address": "0x…", "blsKey": "…", "nodeId": "16Uiu2…" }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use shared_types::{parse_address, strip_hex_prefix};
use tracing::debug;

use crate::domain::{GenesisError, GenesisResult, ValidatorKeys, BLS_KEY_LENGTH};
use crate::ports::ValidatorKeyStore;

/// Public key file inside each validator directory.
pub const VALIDATOR_KEY_FILE: &str = "validator.json";

/// First p2p port assigned to local validators.
pub const BOOTNODE_PORT_START: u16 = 30301;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ValidatorKeyFile {
    address: String,
    bls_key: String,
    node_id: String,
}

/// Sort key for a `<prefix><n>` directory: numeric suffixes first, by value,
/// then anything else by name.
fn suffix_order(name: &str, prefix: &str) -> (bool, u64, String) {
    match name[prefix.len()..].parse::<u64>() {
        Ok(n) => (false, n, name.to_owned()),
        Err(_) => (true, 0, name.to_owned()),
    }
}

/// Reads validators from prefixed directories, ordered by numeric suffix.
///
/// Validator `i` (0-based) gets the multiaddress
/// `/ip4/127.0.0.1/tcp/<30301 + i>/p2p/<nodeId>`.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileValidatorKeyStore;

impl FileValidatorKeyStore {
    pub fn new() -> Self {
        Self
    }

    fn validator_dirs(&self, dir: &Path, prefix: &str) -> GenesisResult<Vec<PathBuf>> {
        let store_err = |e: std::io::Error| GenesisError::KeyStore {
            path: dir.to_path_buf(),
            reason: e.to_string(),
        };

        let mut dirs = Vec::new();
        for entry in fs::read_dir(dir).map_err(store_err)? {
            let entry = entry.map_err(store_err)?;
            let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
                continue;
            };
            if name.starts_with(prefix) && entry.file_type().map_err(store_err)?.is_dir() {
                dirs.push((suffix_order(&name, prefix), entry.path()));
            }
        }

        dirs.sort();
        Ok(dirs.into_iter().map(|(_, path)| path).collect())
    }

    fn read_keys(&self, validator_dir: &Path, index: usize) -> GenesisResult<ValidatorKeys> {
        let path = validator_dir.join(VALIDATOR_KEY_FILE);
        let store_err = |reason: String| GenesisError::KeyStore {
            path: path.clone(),
            reason,
        };

        let raw = fs::read_to_string(&path).map_err(|e| store_err(e.to_string()))?;
        let file: ValidatorKeyFile =
            serde_json::from_str(&raw).map_err(|e| store_err(e.to_string()))?;

        let address = parse_address(&file.address)
            .map_err(|e| store_err(format!("invalid address: {e}")))?;

        let bls_key = strip_hex_prefix(file.bls_key.trim());
        if bls_key.len() != BLS_KEY_LENGTH || hex::decode(bls_key).is_err() {
            return Err(store_err(format!("invalid BLS key: {}", file.bls_key)));
        }

        if file.node_id.is_empty() {
            return Err(store_err("missing node id".to_string()));
        }

        let port = u16::try_from(index)
            .ok()
            .and_then(|i| BOOTNODE_PORT_START.checked_add(i))
            .ok_or_else(|| store_err("too many validators for the local port range".to_string()))?;

        Ok(ValidatorKeys {
            multi_addr: format!("/ip4/127.0.0.1/tcp/{port}/p2p/{}", file.node_id),
            address,
            bls_key: bls_key.to_lowercase(),
        })
    }
}

impl ValidatorKeyStore for FileValidatorKeyStore {
    fn read_validators(&self, dir: &Path, prefix: &str) -> GenesisResult<Vec<ValidatorKeys>> {
        let dirs = self.validator_dirs(dir, prefix)?;
        debug!(dir = %dir.display(), found = dirs.len(), "Validator directories found");

        dirs.iter()
            .enumerate()
            .map(|(i, d)| self.read_keys(d, i))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::SAMPLE_BLS_KEY;

    fn write_validator(root: &Path, name: &str, address_byte: u8, node_id: &str) {
        let dir = root.join(name);
        fs::create_dir_all(&dir).unwrap();
        let body = serde_json::json!({
            "address": format!("0x{}", hex::encode([address_byte; 20])),
            "blsKey": format!("0x{SAMPLE_BLS_KEY}"),
            "nodeId": node_id,
        });
        fs::write(dir.join(VALIDATOR_KEY_FILE), body.to_string()).unwrap();
    }

    #[test]
    fn test_reads_prefixed_dirs_in_sorted_order() {
        let root = tempfile::tempdir().unwrap();
        write_validator(root.path(), "test-chain-2", 0x22, "nodeB");
        write_validator(root.path(), "test-chain-1", 0x11, "nodeA");
        write_validator(root.path(), "other-1", 0x33, "nodeC");

        let keys = FileValidatorKeyStore::new()
            .read_validators(root.path(), "test-chain-")
            .unwrap();

        assert_eq!(keys.len(), 2);
        assert_eq!(keys[0].address.as_bytes()[0], 0x11);
        assert_eq!(keys[0].multi_addr, "/ip4/127.0.0.1/tcp/30301/p2p/nodeA");
        assert_eq!(keys[1].multi_addr, "/ip4/127.0.0.1/tcp/30302/p2p/nodeB");
    }

    #[test]
    fn test_numeric_suffix_order() {
        let root = tempfile::tempdir().unwrap();
        write_validator(root.path(), "test-chain-10", 0x10, "nodeJ");
        write_validator(root.path(), "test-chain-2", 0x02, "nodeB");
        write_validator(root.path(), "test-chain-1", 0x01, "nodeA");

        let keys = FileValidatorKeyStore::new()
            .read_validators(root.path(), "test-chain-")
            .unwrap();

        let order: Vec<u8> = keys.iter().map(|k| k.address.as_bytes()[0]).collect();
        assert_eq!(order, vec![0x01, 0x02, 0x10]);
        assert_eq!(keys[2].multi_addr, "/ip4/127.0.0.1/tcp/30303/p2p/nodeJ");
    }

    #[test]
    fn test_missing_key_file_is_reported() {
        let root = tempfile::tempdir().unwrap();
        fs::create_dir_all(root.path().join("test-chain-1")).unwrap();

        let err = FileValidatorKeyStore::new()
            .read_validators(root.path(), "test-chain-")
            .unwrap_err();
        assert!(matches!(err, GenesisError::KeyStore { .. }));
    }

    #[test]
    fn test_missing_directory_is_reported() {
        let root = tempfile::tempdir().unwrap();
        let err = FileValidatorKeyStore::new()
            .read_validators(&root.path().join("absent"), "test-chain-")
            .unwrap_err();
        assert!(matches!(err, GenesisError::KeyStore { .. }));
    }
}
