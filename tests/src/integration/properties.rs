//! # Compilation Properties
//!
//! proptest checks over generated operator inputs:
//!
//! - identical inputs always produce byte-identical records
//! - a non-mintable token funds exactly the reserve account, or fails
//! - a mintable token funds every validator
//! - every proxied address ends with the proxy bytecode

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use blade_genesis::adapters::to_genesis_json;
    use blade_genesis::domain::{policy, Artifact, PROXY_IMPLEMENTATIONS};
    use blade_genesis::test_utils::{placeholder_bytecode, sample_params, test_compiler};
    use blade_genesis::{GenesisCompilerApi, GenesisError, GenesisParams};
    use proptest::prelude::*;
    use shared_types::{H160, ZERO_ADDRESS};

    use crate::integration::{account, funded_addresses, native_token, reserve_premine};

    fn premine_entry(bytes: [u8; 20], amount: u64) -> String {
        format!("{:?}:{amount}", H160(bytes))
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn prop_compilation_is_deterministic(
            chain_id in 1u64..1_000_000,
            epoch_reward in 0u64..10,
            block_time_ms in 100u64..10_000,
            validators in 1usize..5,
            mintable in any::<bool>(),
        ) {
            let params = GenesisParams {
                chain_id,
                epoch_reward,
                block_time: Duration::from_millis(block_time_ms),
                native_token_config: native_token(mintable),
                ..sample_params()
            };

            let first = test_compiler(validators).compile(&params).unwrap();
            let second = test_compiler(validators).compile(&params).unwrap();

            prop_assert_eq!(first.digest, second.digest);
            prop_assert_eq!(
                to_genesis_json(&first.chain).unwrap(),
                to_genesis_json(&second.chain).unwrap()
            );
        }

        #[test]
        fn prop_non_mintable_funds_only_reserve(
            reserve in 1u64..u64::MAX,
            extra in prop::collection::vec((any::<[u8; 20]>(), 1u64..1_000), 0..3),
            validators in 1usize..4,
        ) {
            prop_assume!(extra.iter().all(|(bytes, _)| *bytes != [0u8; 20]));

            let mut premine = vec![reserve_premine(reserve)];
            premine.extend(extra.iter().map(|(bytes, amount)| premine_entry(*bytes, *amount)));

            let params = GenesisParams {
                native_token_config: native_token(false),
                premine,
                ..sample_params()
            };

            match test_compiler(validators).compile(&params) {
                Ok(compiled) => {
                    prop_assert!(extra.is_empty());
                    prop_assert_eq!(funded_addresses(&compiled.chain), vec![ZERO_ADDRESS]);
                    for validator in &compiled.validators {
                        prop_assert!(validator.stake.is_zero());
                    }
                }
                Err(err) => {
                    prop_assert!(!extra.is_empty());
                    let is_premine_policy = matches!(
                        err,
                        GenesisError::PolicyViolation {
                            field: "premine",
                            reason: policy::NO_PREMINE_ALLOWED,
                        }
                    );
                    prop_assert!(is_premine_policy);
                }
            }
        }

        #[test]
        fn prop_mintable_funds_every_validator(
            validators in 1usize..6,
            epoch_reward in 0u64..5,
        ) {
            let params = GenesisParams {
                epoch_reward,
                ..sample_params()
            };

            let compiled = test_compiler(validators).compile(&params).unwrap();
            prop_assert_eq!(compiled.validators.len(), validators);
            for validator in &compiled.validators {
                prop_assert!(!account(&compiled.chain, &validator.address).balance.is_zero());
            }
        }

        #[test]
        fn prop_proxy_table_always_overlaid(
            mintable in any::<bool>(),
            bridge_acl in any::<bool>(),
        ) {
            let mut params = GenesisParams {
                native_token_config: native_token(mintable),
                ..sample_params()
            };
            if bridge_acl {
                params.bridge_block_list.admin =
                    vec!["0x2222222222222222222222222222222222222222".to_string()];
            }

            let compiled = test_compiler(1).compile(&params).unwrap();
            let proxy = Some(placeholder_bytecode(Artifact::GenesisProxy));
            for (proxy_address, _) in PROXY_IMPLEMENTATIONS {
                prop_assert_eq!(&account(&compiled.chain, &proxy_address).code, &proxy);
            }
        }
    }
}
