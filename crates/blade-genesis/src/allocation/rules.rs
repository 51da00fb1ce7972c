//! # Allocation Rules
//!
//! Declarative table of contract deployments. Each rule names the bytecode,
//! where it goes, the condition under which it applies and whether the
//! address is later overlaid with the generic proxy.

use shared_types::Address;

use crate::domain::{Artifact, GenesisInputs};

/// Where a rule deploys.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    /// A canonical system address.
    Fixed(Address),
    /// The operator-specified burn contract address.
    BurnContract,
}

/// Where a rule's bytecode comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BytecodeSource {
    Artifact(Artifact),
    /// Externally compiled reward token code supplied by the operator.
    RewardToken,
}

/// Predicate over the validated inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Condition {
    Always,
    Mintable,
    NotMintable,
    /// Non-mintable token with a burn contract configured.
    BurnOnBridgedToken,
    /// Any bridge allow- or block-list admin configured.
    BridgeAccessList,
    NoBridgeAccessList,
    RewardTokenCode,
}

impl Condition {
    pub fn holds(&self, inputs: &GenesisInputs) -> bool {
        match self {
            Condition::Always => true,
            Condition::Mintable => inputs.is_mintable(),
            Condition::NotMintable => !inputs.is_mintable(),
            Condition::BurnOnBridgedToken => {
                !inputs.is_mintable() && inputs.is_burn_contract_enabled()
            }
            Condition::BridgeAccessList => inputs.is_bridge_access_list_enabled(),
            Condition::NoBridgeAccessList => !inputs.is_bridge_access_list_enabled(),
            Condition::RewardTokenCode => inputs.has_reward_token_code(),
        }
    }
}

/// Single allocation rule.
#[derive(Clone, Debug)]
pub struct AllocationRule {
    /// Rule name, reported in conflicts
    pub name: &'static str,
    pub target: Target,
    pub bytecode: BytecodeSource,
    pub when: Condition,
    /// Overlay the target with the generic proxy after placement.
    pub proxied: bool,
    /// Separate address overlaid with the generic proxy, fronting the target.
    pub proxy: Option<Address>,
}

impl AllocationRule {
    /// Unconditional, non-proxied deployment of `artifact` at `address`.
    fn core(name: &'static str, artifact: Artifact, address: Address) -> Self {
        Self::fixed(name, artifact, address, Condition::Always)
    }

    fn fixed(name: &'static str, artifact: Artifact, address: Address, when: Condition) -> Self {
        Self {
            name,
            target: Target::Fixed(address),
            bytecode: BytecodeSource::Artifact(artifact),
            when,
            proxied: false,
            proxy: None,
        }
    }

    /// Resolve the target against `inputs`. `None` when the target is absent.
    pub fn target_address(&self, inputs: &GenesisInputs) -> Option<Address> {
        match self.target {
            Target::Fixed(address) => Some(address),
            Target::BurnContract => inputs.burn_contract.map(|b| b.address),
        }
    }
}

/// Ordered set of allocation rules.
#[derive(Clone, Debug, Default)]
pub struct RuleSet {
    rules: Vec<AllocationRule>,
}

impl RuleSet {
    /// Create empty rule set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The genesis contract table.
    #[must_use]
    pub fn with_defaults() -> Self {
        use crate::domain::addresses::*;

        let mut set = Self::new();

        // Core system contracts
        for rule in [
            AllocationRule::core("state_receiver", Artifact::StateReceiver, STATE_RECEIVER_V1),
            AllocationRule::core("child_erc20", Artifact::ChildErc20, CHILD_ERC20),
            AllocationRule::core("child_erc721", Artifact::ChildErc721, CHILD_ERC721),
            AllocationRule::core("child_erc1155", Artifact::ChildErc1155, CHILD_ERC1155),
            AllocationRule::core("bls", Artifact::Bls, BLS_V1),
            AllocationRule::core("merkle", Artifact::Merkle, MERKLE_V1),
            AllocationRule::core("l2_state_sender", Artifact::L2StateSender, L2_STATE_SENDER_V1),
            AllocationRule::core("epoch_manager", Artifact::EpochManager, EPOCH_MANAGER_V1),
            AllocationRule::core("stake_manager", Artifact::StakeManager, STAKE_MANAGER_V1),
            AllocationRule::core("network_params", Artifact::NetworkParams, NETWORK_PARAMS_V1),
            AllocationRule::core("fork_params", Artifact::ForkParams, FORK_PARAMS_V1),
            AllocationRule::core("child_governor", Artifact::ChildGovernor, CHILD_GOVERNOR_V1),
            AllocationRule::core("child_timelock", Artifact::ChildTimelock, CHILD_TIMELOCK_V1),
        ] {
            set.add(rule);
        }

        // Native token
        set.add(AllocationRule::fixed(
            "native_erc20_mintable",
            Artifact::NativeErc20Mintable,
            NATIVE_ERC20_TOKEN_V1,
            Condition::Mintable,
        ));
        set.add(AllocationRule::fixed(
            "native_erc20",
            Artifact::NativeErc20,
            NATIVE_ERC20_TOKEN_V1,
            Condition::NotMintable,
        ));
        set.add(AllocationRule {
            name: "eip1559_burn",
            target: Target::BurnContract,
            bytecode: BytecodeSource::Artifact(Artifact::Eip1559Burn),
            when: Condition::BurnOnBridgedToken,
            proxied: true,
            proxy: None,
        });

        // Bridge predicates: all six access-controlled or all six plain
        let predicates = [
            (
                "child_erc20_predicate",
                Artifact::ChildErc20PredicateAcl,
                Artifact::ChildErc20Predicate,
                CHILD_ERC20_PREDICATE_V1,
            ),
            (
                "child_erc721_predicate",
                Artifact::ChildErc721PredicateAcl,
                Artifact::ChildErc721Predicate,
                CHILD_ERC721_PREDICATE_V1,
            ),
            (
                "child_erc1155_predicate",
                Artifact::ChildErc1155PredicateAcl,
                Artifact::ChildErc1155Predicate,
                CHILD_ERC1155_PREDICATE_V1,
            ),
            (
                "root_mintable_erc20_predicate",
                Artifact::RootMintableErc20PredicateAcl,
                Artifact::RootMintableErc20Predicate,
                ROOT_MINTABLE_ERC20_PREDICATE_V1,
            ),
            (
                "root_mintable_erc721_predicate",
                Artifact::RootMintableErc721PredicateAcl,
                Artifact::RootMintableErc721Predicate,
                ROOT_MINTABLE_ERC721_PREDICATE_V1,
            ),
            (
                "root_mintable_erc1155_predicate",
                Artifact::RootMintableErc1155PredicateAcl,
                Artifact::RootMintableErc1155Predicate,
                ROOT_MINTABLE_ERC1155_PREDICATE_V1,
            ),
        ];
        for (name, acl, plain, address) in predicates {
            set.add(AllocationRule::fixed(name, acl, address, Condition::BridgeAccessList));
            set.add(AllocationRule::fixed(name, plain, address, Condition::NoBridgeAccessList));
        }

        // Externally supplied reward token, behind the proxy at REWARD_TOKEN
        set.add(AllocationRule {
            name: "reward_token",
            target: Target::Fixed(REWARD_TOKEN_V1),
            bytecode: BytecodeSource::RewardToken,
            when: Condition::RewardTokenCode,
            proxied: false,
            proxy: Some(REWARD_TOKEN),
        });

        set
    }

    /// Add a rule.
    pub fn add(&mut self, rule: AllocationRule) {
        self.rules.push(rule);
    }

    /// Get all rules.
    #[must_use]
    pub fn rules(&self) -> &[AllocationRule] {
        &self.rules
    }

    /// Rules whose condition holds for `inputs`, in table order.
    pub fn applicable<'a>(
        &'a self,
        inputs: &'a GenesisInputs,
    ) -> impl Iterator<Item = &'a AllocationRule> + 'a {
        self.rules.iter().filter(move |r| r.when.holds(inputs))
    }

    /// Count rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
