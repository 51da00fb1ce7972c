//! File-backed compilation: artifacts and validator keys read from disk,
//! record written atomically.

use std::fs;
use std::path::Path;

use blade_genesis::adapters::VALIDATOR_KEY_FILE;
use blade_genesis::domain::{Artifact, GenesisError, VALIDATOR_LISTING_HEADER};
use blade_genesis::{
    ChainConfiguration, DirectoryArtifactProvider, FileGenesisCompiler, GenesisCompilerApi,
    GenesisParams,
};

fn write_artifacts(dir: &Path) {
    fs::create_dir_all(dir).unwrap();
    for (i, artifact) in Artifact::ALL.into_iter().enumerate() {
        let code = format!("0x6080{:02x}{}", i, hex::encode(artifact.name()));
        fs::write(dir.join(format!("{}.hex", artifact.name())), code).unwrap();
    }
}

fn write_validator(root: &Path, name: &str, address_byte: u8) {
    let dir = root.join(name);
    fs::create_dir_all(&dir).unwrap();
    let body = serde_json::json!({
        "address": format!("0x{}", hex::encode([address_byte; 20])),
        "blsKey": "ab".repeat(128),
        "nodeId": format!("16Uiu2HAm{name}").replace('-', ""),
    });
    fs::write(dir.join(VALIDATOR_KEY_FILE), body.to_string()).unwrap();
}

fn params(root: &Path) -> GenesisParams {
    GenesisParams {
        genesis_path: root.join("out").join("genesis.json"),
        validators_path: Some(root.to_path_buf()),
        reward_wallet: "0x5555555555555555555555555555555555555555:1000".to_string(),
        proxy_contracts_admin: "0x0a0a0a0a0a0a0a0a0a0a0a0a0a0a0a0a0a0a0a0a".to_string(),
        blade_admin: "0x0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b".to_string(),
        premine: vec!["0x0000000000000000000000000000000000000000:1000".to_string()],
        ..Default::default()
    }
}

#[test]
fn test_compiles_from_disk_and_writes_record() {
    let root = tempfile::tempdir().unwrap();
    let artifacts = root.path().join("artifacts");
    write_artifacts(&artifacts);
    write_validator(root.path(), "test-chain-1", 0x11);
    write_validator(root.path(), "test-chain-2", 0x22);

    let params = params(root.path());
    let compiler = FileGenesisCompiler::with_file_adapters(DirectoryArtifactProvider::new(artifacts));
    let compiled = compiler.compile_and_write(&params).unwrap();

    assert_eq!(compiled.validators.len(), 2);
    assert_eq!(
        compiled.chain.bootnodes[0],
        "/ip4/127.0.0.1/tcp/30301/p2p/16Uiu2HAmtestchain1"
    );
    assert!(compiled.validator_listing().starts_with(VALIDATOR_LISTING_HEADER));

    let written = fs::read_to_string(&params.genesis_path).unwrap();
    let parsed: ChainConfiguration = serde_json::from_str(&written).unwrap();
    assert_eq!(parsed, compiled.chain);

    let leftovers: Vec<_> = fs::read_dir(params.genesis_path.parent().unwrap())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(leftovers, vec!["genesis.json"]);
}

#[test]
fn test_missing_artifact_aborts_before_write() {
    let root = tempfile::tempdir().unwrap();
    let artifacts = root.path().join("artifacts");
    write_artifacts(&artifacts);
    fs::remove_file(artifacts.join("GenesisProxy.hex")).unwrap();
    write_validator(root.path(), "test-chain-1", 0x11);

    let params = params(root.path());
    let compiler = FileGenesisCompiler::with_file_adapters(DirectoryArtifactProvider::new(artifacts));
    let err = compiler.compile_and_write(&params).unwrap_err();

    assert!(matches!(err, GenesisError::Artifact { name: "GenesisProxy", .. }));
    assert!(!params.genesis_path.exists());
}

#[test]
fn test_no_validators_found() {
    let root = tempfile::tempdir().unwrap();
    let artifacts = root.path().join("artifacts");
    write_artifacts(&artifacts);

    let params = params(root.path());
    let compiler = FileGenesisCompiler::with_file_adapters(DirectoryArtifactProvider::new(artifacts));
    let err = compiler.compile(&params).unwrap_err();

    assert!(matches!(err, GenesisError::EmptyResult { what: "validators" }));
}
