//! # Operator Scenarios
//!
//! End-to-end compilations covering the mintability policies, bridge access
//! lists, burn and reward-token overlays.

#[cfg(test)]
mod tests {
    use blade_genesis::domain::{addresses, policy, Artifact, Fork, PROXY_IMPLEMENTATIONS};
    use blade_genesis::test_utils::{
        placeholder_bytecode, sample_params, test_compiler, SAMPLE_BLS_KEY,
    };
    use blade_genesis::{GenesisCompilerApi, GenesisError, GenesisParams};
    use shared_types::{parse_address, Bytes, U256, ZERO_ADDRESS};

    use crate::integration::{
        account, funded_addresses, non_mintable_params, reserve_premine, validator_descriptor,
    };

    const ALICE: &str = "0x1111111111111111111111111111111111111111";
    const BURN_ADDRESS: &str = "0xabcdef0000000000000000000000000000000001";

    // =========================================================================
    // MINTABILITY POLICIES
    // =========================================================================

    #[test]
    fn test_non_mintable_burn_to_zero_destination_rejected() {
        let params = GenesisParams {
            burn_contract: format!("100:{BURN_ADDRESS}:0x0"),
            ..non_mintable_params()
        };

        let err = test_compiler(1).compile(&params).unwrap_err();
        assert!(matches!(
            err,
            GenesisError::PolicyViolation {
                field: "burn-contract",
                reason: policy::BURN_DESTINATION_MUST_NOT_BE_ZERO,
            }
        ));
    }

    #[test]
    fn test_non_mintable_burn_contract_at_zero_address_rejected() {
        let params = GenesisParams {
            burn_contract: format!("0:{ZERO_ADDRESS:?}:{ALICE}"),
            ..non_mintable_params()
        };

        let err = test_compiler(1).compile(&params).unwrap_err();
        assert!(matches!(
            err,
            GenesisError::PolicyViolation {
                field: "burn-contract",
                reason: policy::BURN_CONTRACT_ZERO_ADDRESS,
            }
        ));
    }

    #[test]
    fn test_reserve_balance_survives_every_accepted_burn_config() {
        let cases = [
            (non_mintable_params(), format!("0:{BURN_ADDRESS}:{ALICE}")),
            (sample_params(), format!("0:{BURN_ADDRESS}")),
            (sample_params(), format!("0:{ZERO_ADDRESS:?}")),
            (sample_params(), format!("5:{ZERO_ADDRESS:?}:0x0")),
        ];

        for (base, burn_contract) in cases {
            let params = GenesisParams {
                burn_contract: burn_contract.clone(),
                ..base
            };
            let compiled = test_compiler(1).compile(&params).unwrap();
            let reserve = account(&compiled.chain, &ZERO_ADDRESS);

            assert_eq!(reserve.balance, U256::from(1000u64), "{burn_contract}");
            assert!(reserve.code.is_none(), "{burn_contract}");
        }
    }

    #[test]
    fn test_non_mintable_explicit_validator_compiles_with_zero_stake() {
        let descriptor = format!(
            "/ip4/127.0.0.1/tcp/10001:0x{}:{SAMPLE_BLS_KEY}",
            "a1".repeat(20)
        );
        let params = GenesisParams {
            validators: vec![descriptor],
            ..non_mintable_params()
        };

        let compiled = test_compiler(0).compile(&params).unwrap();

        assert_eq!(compiled.validators.len(), 1);
        assert_eq!(compiled.validators[0].stake, U256::zero());
        assert_eq!(
            account(&compiled.chain, &ZERO_ADDRESS).balance,
            U256::from(1000u64)
        );
        assert_eq!(funded_addresses(&compiled.chain), vec![ZERO_ADDRESS]);
        assert_eq!(compiled.chain.bootnodes, vec!["/ip4/127.0.0.1/tcp/10001"]);
    }

    #[test]
    fn test_non_mintable_extra_premine_rejected() {
        let params = GenesisParams {
            validators: vec![validator_descriptor(0)],
            premine: vec![reserve_premine(1000), format!("{ALICE}:5")],
            ..non_mintable_params()
        };

        let err = test_compiler(0).compile(&params).unwrap_err();
        assert!(matches!(
            err,
            GenesisError::PolicyViolation {
                field: "premine",
                reason: policy::NO_PREMINE_ALLOWED,
            }
        ));
    }

    #[test]
    fn test_non_mintable_stake_flag_rejected() {
        let params = GenesisParams {
            stake: vec![format!("{ALICE}:5")],
            ..non_mintable_params()
        };

        let err = test_compiler(1).compile(&params).unwrap_err();
        assert!(matches!(err, GenesisError::PolicyViolation { field: "stake", .. }));
    }

    #[test]
    fn test_mintable_validators_get_default_stake_and_balance() {
        let compiled = test_compiler(3).compile(&sample_params()).unwrap();

        for validator in &compiled.validators {
            assert!(!validator.stake.is_zero());
            assert!(!account(&compiled.chain, &validator.address).balance.is_zero());
        }
    }

    // =========================================================================
    // BRIDGE ACCESS LISTS
    // =========================================================================

    #[test]
    fn test_bridge_allow_list_deploys_only_access_controlled_predicates() {
        let mut params = sample_params();
        params.bridge_allow_list.admin = vec![ALICE.to_string()];

        let compiled = test_compiler(1).compile(&params).unwrap();
        let codes: Vec<_> = compiled
            .chain
            .genesis
            .alloc
            .values()
            .filter_map(|a| a.code.clone())
            .collect();

        let plain = [
            Artifact::ChildErc20Predicate,
            Artifact::ChildErc721Predicate,
            Artifact::ChildErc1155Predicate,
            Artifact::RootMintableErc20Predicate,
            Artifact::RootMintableErc721Predicate,
            Artifact::RootMintableErc1155Predicate,
        ];
        for artifact in plain {
            assert!(
                !codes.contains(&placeholder_bytecode(artifact)),
                "{artifact} must not be deployed"
            );
        }

        let acl: Vec<_> = Artifact::ALL
            .into_iter()
            .filter(Artifact::is_access_controlled)
            .collect();
        assert_eq!(acl.len(), 6);
        for artifact in acl {
            assert!(codes.contains(&placeholder_bytecode(artifact)), "{artifact} missing");
        }

        assert!(compiled.chain.params.bridge_allow_list.is_some());
    }

    #[test]
    fn test_access_list_without_admin_is_omitted() {
        let mut params = sample_params();
        params.transactions_allow_list.enabled = vec![ALICE.to_string()];

        let compiled = test_compiler(1).compile(&params).unwrap();
        assert!(compiled.chain.params.transactions_allow_list.is_none());
        assert!(compiled.chain.params.bridge_allow_list.is_none());
    }

    // =========================================================================
    // PROXY OVERLAY
    // =========================================================================

    #[test]
    fn test_burn_and_reward_token_end_with_proxy_code() {
        let burn = parse_address(BURN_ADDRESS).unwrap();
        let destination = parse_address(ALICE).unwrap();
        let params = GenesisParams {
            burn_contract: format!("0:{BURN_ADDRESS}:{ALICE}"),
            reward_token_code: "0x6080604052".to_string(),
            ..non_mintable_params()
        };

        let compiled = test_compiler(1).compile(&params).unwrap();
        let proxy = Some(placeholder_bytecode(Artifact::GenesisProxy));

        assert_eq!(account(&compiled.chain, &burn).code, proxy);
        assert_eq!(account(&compiled.chain, &addresses::REWARD_TOKEN).code, proxy);
        assert_eq!(
            account(&compiled.chain, &addresses::REWARD_TOKEN_V1).code,
            Some(Bytes::new(vec![0x60, 0x80, 0x60, 0x40, 0x52]))
        );
        for (proxy_address, _) in PROXY_IMPLEMENTATIONS {
            assert_eq!(account(&compiled.chain, &proxy_address).code, proxy);
        }

        let rewards = &compiled.chain.params.engine.polybft.reward_config;
        assert_eq!(rewards.token_address, addresses::REWARD_TOKEN);
        assert_eq!(compiled.chain.params.burn_contract.get(&0), Some(&burn));
        assert_eq!(
            compiled.chain.params.burn_contract_destination_address,
            Some(destination)
        );
        assert!(compiled.chain.params.forks.is_enabled(Fork::London));
    }

    #[test]
    fn test_mintable_burn_goes_to_zero_address() {
        let burn = parse_address(BURN_ADDRESS).unwrap();
        let params = GenesisParams {
            burn_contract: format!("7:{BURN_ADDRESS}"),
            ..sample_params()
        };

        let compiled = test_compiler(1).compile(&params).unwrap();

        assert_eq!(compiled.chain.params.burn_contract.get(&7), Some(&ZERO_ADDRESS));
        assert!(!compiled.chain.genesis.alloc.contains_key(&burn));
        assert_ne!(compiled.chain.genesis.base_fee, 0);
    }

    #[test]
    fn test_no_burn_contract_disables_london() {
        let compiled = test_compiler(1).compile(&sample_params()).unwrap();

        assert!(!compiled.chain.params.forks.is_enabled(Fork::London));
        assert!(compiled.chain.params.burn_contract.is_empty());
        assert_eq!(compiled.chain.genesis.base_fee, 0);
    }
}
