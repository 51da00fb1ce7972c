//! # Contract Allocation Planner
//!
//! Decides which (address, bytecode) pairs are predeployed at genesis.
//!
//! Built in two phases:
//!
//! 1. Every applicable rule places its implementation bytecode. An address
//!    receiving two different bytecodes is a planner bug and fails with
//!    `AllocationConflict` instead of silently overwriting.
//! 2. Every proxied address, every rule's fronting proxy, plus every proxy
//!    in the static proxy-implementation table, is overlaid with the generic
//!    proxy.
//!
//! All planned accounts have zero balance.

pub mod rules;

pub use rules::{AllocationRule, BytecodeSource, Condition, RuleSet, Target};

use std::collections::{BTreeMap, BTreeSet};

use shared_types::{Address, Bytes};
use tracing::debug;

use crate::domain::{
    proxy_implementation_table, Artifact, GenesisAccount, GenesisError, GenesisInputs,
    GenesisResult,
};
use crate::ports::ArtifactProvider;

const PROXY_RULE: &str = "genesis_proxy";

/// Output of the planner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractAllocation {
    /// Final contract accounts keyed by address.
    pub allocations: BTreeMap<Address, GenesisAccount>,
    /// Addresses whose final code is the generic proxy.
    pub proxied: BTreeSet<Address>,
}

impl ContractAllocation {
    pub fn len(&self) -> usize {
        self.allocations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.allocations.is_empty()
    }

    /// Final bytecode at `address`, if any.
    pub fn code_at(&self, address: &Address) -> Option<&Bytes> {
        self.allocations.get(address).and_then(|a| a.code.as_ref())
    }
}

struct Placement {
    rule: &'static str,
    code: Bytes,
}

/// ContractAllocationPlanner
pub struct ContractAllocationPlanner<'a, A> {
    artifacts: &'a A,
    rules: RuleSet,
}

impl<'a, A: ArtifactProvider> ContractAllocationPlanner<'a, A> {
    /// Planner over the default genesis contract table.
    pub fn new(artifacts: &'a A) -> Self {
        Self::with_rules(artifacts, RuleSet::with_defaults())
    }

    pub fn with_rules(artifacts: &'a A, rules: RuleSet) -> Self {
        Self { artifacts, rules }
    }

    /// Plan all contract allocations for `inputs`.
    pub fn plan(&self, inputs: &GenesisInputs) -> GenesisResult<ContractAllocation> {
        // Phase 1: implementation placeholders
        let mut placements: BTreeMap<Address, Placement> = BTreeMap::new();
        let mut proxied = BTreeSet::new();

        for rule in self.rules.applicable(inputs) {
            let Some(address) = rule.target_address(inputs) else {
                continue;
            };
            let code = self.bytecode(rule, inputs)?;

            if let Some(existing) = placements.get(&address) {
                if existing.code != code {
                    return Err(GenesisError::AllocationConflict {
                        address,
                        existing: existing.rule,
                        incoming: rule.name,
                    });
                }
            } else {
                placements.insert(
                    address,
                    Placement {
                        rule: rule.name,
                        code,
                    },
                );
            }

            if rule.proxied {
                proxied.insert(address);
            }
            if let Some(proxy) = rule.proxy {
                proxied.insert(proxy);
            }
        }

        debug!(
            placed = placements.len(),
            marked_proxied = proxied.len(),
            "Implementation placeholders placed"
        );

        // Phase 2: proxy overlay
        let proxy_code = self.artifacts.deployed_bytecode(Artifact::GenesisProxy)?;
        proxied.extend(proxy_implementation_table().into_keys());

        for address in &proxied {
            placements.insert(
                *address,
                Placement {
                    rule: PROXY_RULE,
                    code: proxy_code.clone(),
                },
            );
        }

        let allocations = placements
            .into_iter()
            .map(|(address, p)| (address, GenesisAccount::contract(p.code)))
            .collect();

        Ok(ContractAllocation {
            allocations,
            proxied,
        })
    }

    fn bytecode(&self, rule: &AllocationRule, inputs: &GenesisInputs) -> GenesisResult<Bytes> {
        match rule.bytecode {
            BytecodeSource::Artifact(artifact) => self.artifacts.deployed_bytecode(artifact),
            BytecodeSource::RewardToken => inputs
                .reward_token_code
                .clone()
                .ok_or(GenesisError::MissingField {
                    field: "reward-token-code",
                }),
        }
    }
}
